use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "docportal")]
#[command(about = "Documentation portal: renders product markdown with anchored tables of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the portal locally
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Serve only this content directory instead of the configured one
        #[arg(value_name = "CONTENT_DIR")]
        content_dir: Option<PathBuf>,

        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,

        /// Directory holding the frontend application
        #[arg(long, value_name = "DIR")]
        frontend: Option<PathBuf>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,
    },

    /// Render one markdown file and print the JSON result
    #[command(alias = "r")]
    Render {
        /// Markdown file to render
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print only the table of contents
        #[arg(long, default_value_t = false, conflicts_with = "html")]
        toc: bool,

        /// Print only the sanitized HTML
        #[arg(long, default_value_t = false)]
        html: bool,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,
    },

    /// Print the product catalog as JSON
    #[command(alias = "c")]
    Catalog {
        /// Content directory to scan (defaults to the configured one)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Print only the product at this path (relative to the content directory)
        #[arg(short, long, value_name = "PATH")]
        product: Option<String>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,
    },
}
