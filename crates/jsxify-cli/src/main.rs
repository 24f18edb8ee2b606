//! jsxify CLI - convert HTML into JSX.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "jsxify")]
#[command(about = "Convert HTML into JSX")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to jsxify.toml config file
    #[arg(short, long, default_value = "jsxify.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single file, or stdin when no file is given
    Convert {
        /// HTML file to convert
        file: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a jsxify.toml and a sample source directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert every HTML file in the source directory
    Build {
        /// Output directory (defaults to config or "jsx")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write bare JSX instead of component modules
        #[arg(long)]
        no_component: bool,
    },

    /// Start the playground server and watch the source directory
    Dev {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Converted output goes to stdout
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert { file, output } => {
            commands::convert::run(file, output).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build {
            output,
            no_component,
        } => {
            let component = if no_component { Some(false) } else { None };
            commands::build::run(&cli.config, output, component).await?;
        }
        Commands::Dev { port, no_open } => {
            commands::dev::run(&cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
