//! REST API server for card number validation and generation.
//!
//! # Usage
//!
//! ```bash
//! # Start server on 0.0.0.0:3000
//! ccnumbers-server
//!
//! # Custom address
//! ccnumbers-server --host 127.0.0.1 --port 8080
//! CC_NUMBERS_PORT=8080 ccnumbers-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccnumbers-server")]
#[command(author, version, about = "REST API for card number validation and generation")]
struct Args {
    /// Address to bind
    #[arg(long, env = "CC_NUMBERS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CC_NUMBERS_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.host, args.port);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(%addr, error = %e, "failed to bind");
        e
    })?;

    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", args.port);

    axum::serve(listener, cc_numbers::api::router()).await
}
