//! Webhook router for chat plugins.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Payload for create/update/delete webhooks.
///
/// The shape is defined by the consuming plugin and the coordinator, not by
/// this crate; the body is decoded as arbitrary JSON and passed through to
/// the attached handler untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct SyncRequest(pub Value);

type SyncHandler = Arc<dyn Fn(SyncRequest) -> BoxFuture<'static, Value> + Send + Sync>;
type ExecuteHandler = Arc<dyn Fn(Value) -> BoxFuture<'static, Value> + Send + Sync>;

/// Handler slots shared with the dispatch functions.
///
/// Written only while the builder is being configured; read-only once
/// [`PluginRouter::into_router`] hands them to axum.
#[derive(Default)]
pub(crate) struct Handlers {
    pub(crate) create: Option<SyncHandler>,
    pub(crate) update: Option<SyncHandler>,
    pub(crate) delete: Option<SyncHandler>,
    pub(crate) execute: Option<ExecuteHandler>,
}

/// Builder for a plugin's webhook surface.
///
/// Attach handlers with the `on_*` methods, then call
/// [`into_router`](Self::into_router) to obtain the [`axum::Router`] to
/// mount. Endpoints whose handler was never attached answer 404 with a
/// `{"detail": "..."}` body naming the missing handler.
///
/// Attaching a handler twice overwrites the previous one; the last handler
/// wins. Routes themselves are registered exactly once, in `into_router`.
#[derive(Default)]
pub struct PluginRouter {
    plugin_name: Option<String>,
    api_url: Option<String>,
    pub(crate) handlers: Handlers,
}

impl PluginRouter {
    /// Create an unconfigured router.
    ///
    /// Neither the API URL nor the plugin name is validated here; a missing
    /// URL only surfaces when [`sync`](Self::sync) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinator endpoint that [`sync`](Self::sync) posts to.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set the plugin name announced to the coordinator.
    pub fn with_plugin_name(mut self, plugin_name: impl Into<String>) -> Self {
        self.plugin_name = Some(plugin_name.into());
        self
    }

    pub fn plugin_name(&self) -> Option<&str> {
        self.plugin_name.as_deref()
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Attach the handler for `POST /sync` (entity created).
    pub fn on_create<F, Fut>(&mut self, handler: F)
    where
        F: Fn(SyncRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        debug!("create handler attached");
        self.handlers.create = Some(Arc::new(move |req| Box::pin(handler(req))));
    }

    /// Attach the handler for `PUT /sync` (entity updated).
    pub fn on_update<F, Fut>(&mut self, handler: F)
    where
        F: Fn(SyncRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        debug!("update handler attached");
        self.handlers.update = Some(Arc::new(move |req| Box::pin(handler(req))));
    }

    /// Attach the handler for `DELETE /sync` (entity deleted).
    pub fn on_delete<F, Fut>(&mut self, handler: F)
    where
        F: Fn(SyncRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        debug!("delete handler attached");
        self.handlers.delete = Some(Arc::new(move |req| Box::pin(handler(req))));
    }

    /// Attach the handler for `POST /execute` (command invocation).
    ///
    /// Unlike the `/sync` handlers, the body has no fixed shape at all and
    /// is forwarded as raw JSON.
    pub fn on_execute<F, Fut>(&mut self, handler: F)
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        debug!("execute handler attached");
        self.handlers.execute = Some(Arc::new(move |req| Box::pin(handler(req))));
    }

    /// Consume the builder and produce the mountable router.
    pub fn into_router(self) -> Router {
        let handlers = Arc::new(self.handlers);
        Router::new()
            .route("/health", get(health))
            .route(
                "/sync",
                post(handle_create).put(handle_update).delete(handle_delete),
            )
            .route("/execute", post(handle_execute))
            .with_state(handlers)
    }
}

fn handler_not_found(kind: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": format!("{kind} handler not found")})),
    )
        .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({"status": "available"}))
}

async fn handle_create(
    State(handlers): State<Arc<Handlers>>,
    Json(body): Json<SyncRequest>,
) -> Response {
    match &handlers.create {
        Some(handler) => Json(handler(body).await).into_response(),
        None => handler_not_found("Create"),
    }
}

async fn handle_update(
    State(handlers): State<Arc<Handlers>>,
    Json(body): Json<SyncRequest>,
) -> Response {
    match &handlers.update {
        Some(handler) => Json(handler(body).await).into_response(),
        None => handler_not_found("Update"),
    }
}

async fn handle_delete(
    State(handlers): State<Arc<Handlers>>,
    Json(body): Json<SyncRequest>,
) -> Response {
    match &handlers.delete {
        Some(handler) => Json(handler(body).await).into_response(),
        None => handler_not_found("Delete"),
    }
}

async fn handle_execute(
    State(handlers): State<Arc<Handlers>>,
    Json(body): Json<Value>,
) -> Response {
    match &handlers.execute {
        Some(handler) => Json(handler(body).await).into_response(),
        None => handler_not_found("Execute"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_stores_configuration() {
        let router = PluginRouter::new()
            .with_api_url("http://localhost:9000/plugins")
            .with_plugin_name("notes");
        assert_eq!(router.api_url(), Some("http://localhost:9000/plugins"));
        assert_eq!(router.plugin_name(), Some("notes"));
    }

    #[test]
    fn unconfigured_builder_has_no_url_or_name() {
        let router = PluginRouter::new();
        assert_eq!(router.api_url(), None);
        assert_eq!(router.plugin_name(), None);
    }

    #[test]
    fn sync_request_is_transparent_json() {
        let req: SyncRequest = serde_json::from_str(r#"{"id": 7, "title": "x"}"#).unwrap();
        assert_eq!(req.0["id"], 7);
        assert_eq!(serde_json::to_value(&req).unwrap(), req.0);
    }

    #[tokio::test]
    async fn reattaching_a_handler_overwrites_the_previous_one() {
        let mut router = PluginRouter::new();
        router.on_create(|_| async { json!({"version": 1}) });
        router.on_create(|_| async { json!({"version": 2}) });

        let handler = router.handlers.create.as_ref().unwrap();
        let out = handler(SyncRequest(json!({}))).await;
        assert_eq!(out, json!({"version": 2}));
    }
}
