//! Single file conversion command.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Run the convert command.
pub async fn run(file: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let html = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let Some(jsx) = jsxify::convert(html.as_str())? else {
        tracing::info!("Nothing to convert");
        return Ok(());
    };

    match output {
        Some(path) => {
            fs::write(&path, format!("{jsx}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{jsx}").context("Failed to write stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn converts_file_to_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.html");
        let output = temp.path().join("out.jsx");
        fs::write(&input, r#"<input class="field" readonly>"#).unwrap();

        run(Some(input), Some(output.clone())).await.unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "<input className=\"field\" readOnly=\"\" />\n"
        );
    }

    #[tokio::test]
    async fn blank_file_writes_nothing() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.html");
        let output = temp.path().join("out.jsx");
        fs::write(&input, "\n\n").unwrap();

        run(Some(input), Some(output.clone())).await.unwrap();

        assert!(!output.exists());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(run(Some(temp.path().join("nope.html")), None).await.is_err());
    }
}
