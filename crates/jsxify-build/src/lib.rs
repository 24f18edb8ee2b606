//! Batch conversion of HTML files into JSX modules.
//!
//! Walks a source directory, converts every HTML file in parallel and writes
//! the results next to each other under an output directory.

pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildReport, Builder};
pub use templates::{component_name, TemplateEngine};
