mod catalog;
mod cli;
mod config;
mod markdown;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    cli::run().await;
}
