//! HTTP Server Binary for sdgraph
//!
//! Loads the configured graph (or connects to a SPARQL endpoint) and serves
//! the JSON API and the SPARQL protocol.
//!
//! Usage:
//!   cargo run --bin http_server -- --host 0.0.0.0 --port 8080 --data ./data/radio.ttl --backend embedded

use clap::Parser;
use sdgraph::{config::Settings, context::AppContext, http::start_server};

#[derive(Parser, Debug)]
#[command(name = "sdgraph HTTP Server")]
#[command(about = "HTTP API server for schema.org broadcast graphs", long_about = None)]
struct Args {
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    #[arg(short, long, default_value = "8080")]
    port: u16,

    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    println!("Initializing {:?} backend...", args.settings.backend);
    let context = AppContext::from_settings(&args.settings)?;
    println!();

    let addr = format!("{}:{}", args.host, args.port);
    println!("Starting HTTP server...");
    println!();

    // Set up graceful shutdown
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
        println!();
        println!("Shutdown signal received, stopping server...");
    };

    tokio::select! {
        result = start_server(&addr, context) => {
            if let Err(e) = result {
                eprintln!("Server error: {}", e);
            }
        }
        _ = shutdown_signal => {
            println!("Server shut down gracefully");
        }
    }

    Ok(())
}
