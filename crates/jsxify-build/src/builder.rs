//! Batch builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::templates::{component_name, Context, TemplateEngine};

/// Configuration for a batch conversion.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory scanned for HTML files
    pub src_dir: PathBuf,

    /// Output directory
    pub out_dir: PathBuf,

    /// Extension of the written files
    pub extension: String,

    /// Wrap each result in a component module
    pub component: bool,

    /// Custom component template replacing the built-in one
    pub template: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("html"),
            out_dir: PathBuf::from("jsx"),
            extension: "jsx".to_string(),
            component: true,
            template: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of files written
    pub converted: usize,

    /// Number of files with no content to convert
    pub skipped: usize,

    /// Files that could not be converted, with the reason
    pub failed: Vec<(PathBuf, String)>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub out_dir: PathBuf,
}

impl BuildReport {
    /// Whether every file was handled without error.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read source: {0}")]
    ReadError(String),

    #[error("Failed to convert {path}: {message}")]
    ConvertError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

enum Outcome {
    Converted,
    Skipped,
}

/// Converts a directory of HTML files into JSX files.
pub struct Builder {
    config: BuildConfig,
    templates: Option<TemplateEngine>,
}

impl Builder {
    /// Create a new builder.
    ///
    /// Fails only when a custom template is configured and cannot be loaded.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let templates = match (&config.template, config.component) {
            (_, false) => None,
            (Some(path), true) => Some(
                TemplateEngine::from_file(path)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?,
            ),
            (None, true) => Some(TemplateEngine::new()),
        };

        Ok(Self { config, templates })
    }

    /// Convert every HTML file under the source directory.
    pub async fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.out_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let sources = self.discover_sources()?;
        tracing::debug!("Found {} HTML files", sources.len());

        let results: Vec<(&PathBuf, Result<Outcome, BuildError>)> = sources
            .par_iter()
            .map(|source| (source, self.build_file(source)))
            .collect();

        let mut report = BuildReport {
            out_dir: self.config.out_dir.clone(),
            ..Default::default()
        };

        for (source, result) in results {
            match result {
                Ok(Outcome::Converted) => report.converted += 1,
                Ok(Outcome::Skipped) => {
                    tracing::debug!("Skipped empty file {}", source.display());
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.failed.push((source.clone(), e.to_string()));
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        Ok(report)
    }

    /// Find all HTML files in the source directory, in a stable order.
    fn discover_sources(&self) -> Result<Vec<PathBuf>, BuildError> {
        if !self.config.src_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Source directory not found: {}",
                self.config.src_dir.display()
            )));
        }

        let mut sources: Vec<PathBuf> = WalkDir::new(&self.config.src_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|path| path.is_file() && is_html(path))
            .collect();

        sources.sort();
        Ok(sources)
    }

    fn build_file(&self, source: &Path) -> Result<Outcome, BuildError> {
        let html = fs::read_to_string(source)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", source.display(), e)))?;

        let jsx = jsxify::convert(html.as_str()).map_err(|e| BuildError::ConvertError {
            path: source.display().to_string(),
            message: e.to_string(),
        })?;

        let Some(jsx) = jsx else {
            return Ok(Outcome::Skipped);
        };

        let mut output = match &self.templates {
            Some(templates) => {
                let stem = source
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default();
                templates
                    .render(&Context {
                        name: component_name(stem),
                        jsx,
                    })
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?
            }
            None => jsx,
        };
        if !output.ends_with('\n') {
            output.push('\n');
        }

        let output_path = self.output_path(source);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        fs::write(&output_path, output)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", output_path.display(), e)))?;

        tracing::debug!("{} -> {}", source.display(), output_path.display());
        Ok(Outcome::Converted)
    }

    /// Mirror the source path under the output directory.
    ///
    /// `html/pages/about.html` -> `jsx/pages/about.jsx`
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let relative = source.strip_prefix(&self.config.src_dir).unwrap_or(source);
        self.config
            .out_dir
            .join(relative)
            .with_extension(&self.config.extension)
    }
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html" | "htm")
    )
}
