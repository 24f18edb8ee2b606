//! Initialize jsxify in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{load_config, resolve_path};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing jsxify...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let src_dir = resolve_path(config_path, &load_config(config_path)?.build.src);
    fs::create_dir_all(&src_dir).context("Failed to create source directory")?;

    let sample_path = src_dir.join("hello-card.html");
    if !sample_path.exists() || yes {
        fs::write(&sample_path, SAMPLE_PAGE).context("Failed to write sample page")?;
        tracing::info!("Created {}", sample_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'jsxify build' to convert, or 'jsxify dev' for the playground.");

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# jsxify configuration

[build]
# Directory scanned for .html and .htm files
src = "html"

# Output directory
out = "jsx"

# Extension of the generated files
extension = "jsx"

# Wrap each result in a component module
component = true

# Custom minijinja template receiving `name` and `jsx`
# template = "component.jsx.jinja"

[server]
host = "127.0.0.1"
port = 7777
open = true
"#;

const SAMPLE_PAGE: &str = r#"<div class="card" style="padding: 1rem; border-radius: 8px">
  <!-- Rendered by jsxify -->
  <label for="name" tabindex="0">Hello {name}</label>
  <pre>const answer = 42;</pre>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_config_and_sample() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("jsxify.toml");

        run(&config, false).await.unwrap();

        assert!(config.exists());
        let sample = temp.path().join("html/hello-card.html");
        assert!(sample.exists());

        let jsx = jsxify::convert(fs::read_to_string(sample).unwrap().as_str())
            .unwrap()
            .unwrap();
        assert!(jsx.contains("htmlFor=\"name\""));
        assert!(jsx.contains("dangerouslySetInnerHTML"));
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("jsxify.toml");
        fs::write(&config, "[build]\nsrc = \"pages\"\n").unwrap();

        run(&config, false).await.unwrap();

        assert_eq!(
            fs::read_to_string(&config).unwrap(),
            "[build]\nsrc = \"pages\"\n"
        );
        assert!(temp.path().join("pages/hello-card.html").exists());
    }
}
