//! Demo chat plugin built on the SDK.
//!
//! Serves the webhook surface with echo handlers and optionally registers
//! itself with a coordinator at startup.
//!
//! Usage:
//!   demo-plugin --port 3000 --api-url http://coordinator:8080/api/v1/plugins

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use chat_plugin_sdk::PluginRouter;

#[derive(Parser, Debug)]
#[command(name = "demo-plugin")]
#[command(about = "Demo chat plugin serving echo webhook handlers")]
struct Args {
    /// Port to serve the webhook endpoints on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Coordinator registration endpoint; skips registration when omitted
    #[arg(long)]
    api_url: Option<String>,

    /// Plugin name announced to the coordinator
    #[arg(short, long, default_value = "demo-plugin")]
    name: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut plugin = PluginRouter::new().with_plugin_name(args.name.clone());
    if let Some(api_url) = &args.api_url {
        plugin = plugin.with_api_url(api_url.clone());
    }

    plugin.on_create(|req| async move { json!({"created": req.0}) });
    plugin.on_update(|req| async move { json!({"updated": req.0}) });
    plugin.on_delete(|req| async move { json!({"deleted": req.0}) });
    plugin.on_execute(|cmd| async move { json!({"executed": cmd}) });

    if args.api_url.is_some() {
        let status = plugin.sync().await;
        if (200..300).contains(&status) {
            info!("registered with coordinator (status {status})");
        } else {
            warn!("coordinator registration returned status {status}");
        }
    }

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("Failed to bind webhook port")?;
    info!("plugin '{}' listening on port {}", args.name, args.port);
    axum::serve(listener, plugin.into_router())
        .await
        .context("HTTP server failed")?;
    Ok(())
}
