//! Outbound plugin registration with the coordinator.

use serde_json::json;
use tracing::{debug, warn};

use crate::error::{SdkError, SdkResult};
use crate::router::PluginRouter;

impl PluginRouter {
    /// Announce this plugin to the coordinator.
    ///
    /// Issues a single `POST {api_url}` with body `{"name": <plugin_name>}`
    /// (the name serializes to `null` when unset) and returns the
    /// coordinator's HTTP status code uninterpreted. Any transport failure,
    /// including a missing or malformed URL, is collapsed into the sentinel
    /// `404` after logging the underlying error. One attempt, no retry.
    ///
    /// Callers that need to tell "coordinator said 404" apart from "could
    /// not reach the coordinator" should use [`try_sync`](Self::try_sync).
    pub async fn sync(&self) -> u16 {
        match self.try_sync().await {
            Ok(status) => status,
            Err(err) => {
                warn!("plugin registration failed: {err}");
                404
            }
        }
    }

    /// Like [`sync`](Self::sync), but surfaces transport failures and a
    /// missing API URL as errors instead of collapsing them into 404.
    pub async fn try_sync(&self) -> SdkResult<u16> {
        let api_url = self.api_url().ok_or(SdkError::MissingApiUrl)?;
        let payload = json!({"name": self.plugin_name()});
        debug!("registering plugin with coordinator at {api_url}");

        // Short-lived client; registration happens once at startup.
        let client = reqwest::Client::new();
        let response = client.post(api_url).json(&payload).send().await?;
        Ok(response.status().as_u16())
    }
}
