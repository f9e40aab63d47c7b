//! Webhook SDK for building chat platform plugins.
//!
//! A plugin is a small HTTP service that the chat coordinator calls into.
//! This crate provides [`PluginRouter`], which wires up the webhook surface
//! a plugin needs:
//! - `GET /health` availability probe (always registered)
//! - `POST`/`PUT`/`DELETE /sync` for entity create/update/delete
//! - `POST /execute` for command invocations
//!
//! Handlers are attached with the `on_*` methods, after which the router is
//! converted into a mountable [`axum::Router`]. [`PluginRouter::sync`]
//! announces the plugin to the coordinator with a single registration POST.
//!
//! # Example
//!
//! ```no_run
//! use chat_plugin_sdk::PluginRouter;
//! use serde_json::json;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut plugin = PluginRouter::new()
//!     .with_api_url("http://coordinator:8080/api/v1/plugins")
//!     .with_plugin_name("todo-plugin");
//!
//! plugin.on_create(|req| async move { json!({"created": req.0}) });
//! plugin.on_execute(|cmd| async move { json!({"ran": cmd}) });
//!
//! let status = plugin.sync().await;
//! tracing::info!("registered with coordinator: {status}");
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, plugin.into_router()).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod registration;
mod router;

pub use error::{SdkError, SdkResult};
pub use router::{PluginRouter, SyncRequest};
