//! Batch build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use jsxify_build::{BuildConfig, Builder};

use crate::config::{load_config, resolve_path};

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    component: Option<bool>,
) -> Result<()> {
    let file_config = load_config(config_path)?;
    let settings = file_config.build;

    let config = BuildConfig {
        src_dir: resolve_path(config_path, &settings.src),
        out_dir: output.unwrap_or_else(|| resolve_path(config_path, &settings.out)),
        extension: settings.extension,
        component: component.unwrap_or(settings.component),
        template: settings
            .template
            .map(|template| resolve_path(config_path, &template)),
    };

    tracing::info!("Converting {}...", config.src_dir.display());

    let report = Builder::new(config)?.build().await?;

    tracing::info!(
        "Converted {} files ({} skipped) in {}ms",
        report.converted,
        report.skipped,
        report.duration_ms
    );
    tracing::info!("Output: {}", report.out_dir.display());

    if !report.is_success() {
        for (path, message) in &report.failed {
            tracing::error!("{}: {}", path.display(), message);
        }
        anyhow::bail!("{} files failed to convert", report.failed.len());
    }

    Ok(())
}
