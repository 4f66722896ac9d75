//! HTTP server for the portfolio site.
//!
//! Wires the record store, its runtime task, and the REST API together
//! with command-line configuration and Ctrl+C shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use folio_api::{router::Router, server::Server};
use folio_core::{config::FolioConfig, RecordStore};
use tokio::signal;

/// How long shutdown waits for the runtime to finish its queue.
const RUNTIME_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Command-line arguments for the portfolio server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Start without the sample blog posts
    #[arg(long)]
    no_seed: bool,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,

    /// Store response timeout in milliseconds
    #[arg(long, default_value_t = 10000)]
    response_timeout_ms: u64,

    /// Maximum queued store requests
    #[arg(long, default_value_t = 1024)]
    channel_capacity: usize,

    /// Maximum contact request body size in bytes
    #[arg(long, default_value_t = 65536)]
    max_body_bytes: usize,
}

impl Args {
    fn config(&self) -> FolioConfig {
        FolioConfig {
            seed_blog_posts: !self.no_seed,
            channel_capacity: self.channel_capacity,
            request_timeout_ms: self.request_timeout_ms,
            response_timeout_ms: self.response_timeout_ms,
            max_body_bytes: self.max_body_bytes,
            ..FolioConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = args.config();
    let store = RecordStore::from_config(&config);
    let stats = store.stats();

    let (handle, runtime_task) = folio_runtime::spawn(store, &config);
    let router = Router::new(handle, Arc::new(config.clone()));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let server = Server::bind(addr, router)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Starting portfolio server...");
    tracing::info!("  Address: http://{}", server.local_addr()?);
    tracing::info!(
        "  Blog posts: {} ({})",
        stats.blog_posts,
        if config.seed_blog_posts { "seeded" } else { "empty" }
    );
    tracing::info!("  Request timeout: {} ms", config.request_timeout_ms);
    tracing::info!("  Response timeout: {} ms", config.response_timeout_ms);
    tracing::info!("  Max body: {} bytes", config.max_body_bytes);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c")?;
    tracing::info!("Shutting down server...");
    server_handle.abort();
    // The aborted task drops the router and with it the last idle handle
    let _ = server_handle.await;

    // Open keep-alive connections may still hold handles
    match tokio::time::timeout(RUNTIME_SHUTDOWN_GRACE, runtime_task).await {
        Ok(Ok(processed)) => tracing::info!("Runtime finished after {} requests", processed),
        Ok(Err(e)) => tracing::error!("Runtime task failed: {}", e),
        Err(_) => tracing::warn!("Runtime still busy after shutdown grace period"),
    }

    Ok(())
}
