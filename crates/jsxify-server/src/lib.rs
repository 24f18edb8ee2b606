//! Playground server with live conversion for jsxify.
//!
//! Serves a page that converts HTML as it is typed, a JSON conversion API and
//! a WebSocket that also pushes reconverted files when they change on disk.

pub mod live;
pub mod server;
pub mod watcher;

pub use live::{LiveHub, LiveMessage};
pub use server::{PlaygroundServer, ServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
