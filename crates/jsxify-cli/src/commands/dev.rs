//! Playground server command.

use std::path::Path;

use anyhow::Result;
use jsxify_server::{PlaygroundServer, ServerConfig};

use crate::config::{load_config, resolve_path};

/// Run the playground server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = ServerConfig {
        src_dir: resolve_path(config_path, &file_config.build.src),
        port: port.unwrap_or(file_config.server.port),
        host: file_config.server.host,
        open: open && file_config.server.open,
    };

    tracing::info!("Watching {} for changes", config.src_dir.display());

    PlaygroundServer::new(config).start().await?;

    Ok(())
}
