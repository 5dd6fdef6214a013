use std::net::SocketAddr;

use log::{error, info};
use tokio::net::lookup_host;
use tokio::signal;

use crate::config::Config;
use crate::server::app::create_app;
use crate::server::types::AppState;
use crate::utils::error::{BoxResult, PortalError};

/// Start the portal server and run until it stops or Ctrl+C is received
pub async fn serve(config: &Config) -> BoxResult<()> {
    let addr = resolve_address(config).await?;

    info!("Starting server at {}", config.url());
    info!("Serving content from {}", config.content_dir.display());

    let app = create_app(AppState::from_config(config));
    let server = axum_server::bind(addr).serve(app.into_make_service());

    print_server_banner(config);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(PortalError::from(e).into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Resolve the configured host and port to a socket address
async fn resolve_address(config: &Config) -> BoxResult<SocketAddr> {
    let address = config.address_string();

    let mut addrs = lookup_host(address.as_str())
        .await
        .map_err(|e| PortalError::Server(format!("Cannot resolve {}: {}", address, e)))?;

    let addr = addrs
        .next()
        .ok_or_else(|| PortalError::Server(format!("No address found for {}", address)))?;
    Ok(addr)
}

/// Print a banner with server information
fn print_server_banner(config: &Config) {
    let frontend = if config.frontend_dir.is_dir() {
        config.frontend_dir.display().to_string()
    } else {
        "None (API only)".to_string()
    };

    println!("\n{}", "-".repeat(60));
    println!(" Docs Portal");
    println!(" - URL: {}", config.url());
    println!(" - Content: {}", config.content_dir.display());
    println!(" - Frontend: {}", frontend);
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
