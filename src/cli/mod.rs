pub mod commands;
pub mod logging;
pub mod types;

use std::process;

use clap::Parser;
use log::error;

use types::{Cli, Commands};

/// Run the command-line interface
pub async fn run() {
    let cli = Cli::parse();

    logging::init_logging(cli.debug);
    logging::configure_backtrace(cli.trace);

    let result = match cli.command {
        Commands::Serve {
            content_dir,
            host,
            port,
            frontend,
            config,
        } => {
            let overrides = commands::ServeOverrides {
                content_dir,
                host,
                port,
                frontend,
            };
            commands::handle_serve_command(overrides, config).await
        }
        Commands::Render {
            file,
            toc,
            html,
            config,
        } => {
            let output = if toc {
                commands::RenderOutput::Toc
            } else if html {
                commands::RenderOutput::Html
            } else {
                commands::RenderOutput::Full
            };
            commands::handle_render_command(&file, output, config)
        }
        Commands::Catalog {
            dir,
            product,
            config,
        } => commands::handle_catalog_command(dir, product.as_deref(), config),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
