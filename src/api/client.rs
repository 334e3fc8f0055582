//! # Backend Client
//!
//! The reachability probe and upload client for the Codex backend.
//!
//! Every failure is absorbed at this boundary: a failed probe flips the
//! shared `connected` flag, a failed upload returns `None`, and the error
//! goes to the log. Nothing here returns an `Err` or panics; callers decide
//! what a sentinel means. There is no retry and no timeout.

use std::path::Path;

use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::core::state::SharedState;

/// Multipart field the backend reads the uploaded file from.
const UPLOAD_FIELD: &str = "file";

/// Client for the Codex backend. One instance per process, constructed at
/// startup and handed to whoever needs it.
///
/// Cloning is cheap (the HTTP client and the state handle are both
/// reference-counted), which is how the probe runs as a spawned task.
#[derive(Clone)]
pub struct Codex {
    base_url: String,
    http: reqwest::Client,
    state: SharedState,
}

impl Codex {
    /// Creates a client for the given base address.
    ///
    /// The HTTP client carries no timeout; a hung request leaves the probe
    /// in flight indefinitely.
    pub fn new(base_url: impl Into<String>, state: SharedState) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            state,
        }
    }

    /// The backend base address this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes backend reachability with a GET to the base address and
    /// records the outcome in the shared `connected` flag.
    ///
    /// 2xx means connected. Any other status means not connected. A request
    /// that does not complete means not connected, plus one error log entry.
    /// Repeated calls retain only the most recent outcome.
    pub async fn connect(&self) {
        debug!("Probing backend at {}", self.base_url);
        match self.http.get(&self.base_url).send().await {
            Ok(response) => {
                let connected = response.status().is_success();
                info!(
                    "Reachability probe: {} ({})",
                    if connected { "connected" } else { "not connected" },
                    response.status()
                );
                self.state.set_connected(connected);
            }
            Err(e) => {
                self.state.set_connected(false);
                error!("Reachability probe failed: {}", e);
            }
        }
    }

    /// Fires the probe as a background task, for callers that construct the
    /// client and want the probe away immediately. The returned handle makes
    /// the completion observable; await it or drop it.
    pub fn spawn_connect(&self) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.connect().await })
    }

    /// POSTs a multipart form to `<base>/upload` and returns the response
    /// body parsed as JSON.
    ///
    /// The HTTP status is deliberately not consulted; whatever JSON the
    /// backend sends comes back as-is. A request that does not complete, or
    /// a body that is not JSON, yields `None` and one error log entry.
    pub async fn upload(&self, form: Form) -> Option<Value> {
        let address = format!("{}/upload", self.base_url);
        debug!("Uploading form to {}", address);

        let response = match self.http.post(&address).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Upload request failed: {}", e);
                return None;
            }
        };

        match response.json::<Value>().await {
            Ok(value) => {
                info!("Upload complete");
                Some(value)
            }
            Err(e) => {
                error!("Upload response was not JSON: {}", e);
                None
            }
        }
    }

    /// Reads a file and uploads it under the `file` field with its file name
    /// attached. A file that cannot be read is absorbed like any other
    /// upload failure: one error log entry, `None`.
    pub async fn upload_file(&self, path: &Path) -> Option<Value> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!("Uploading {} ({} bytes)", file_name, bytes.len());
        let part = Part::bytes(bytes).file_name(file_name);
        self.upload(Form::new().part(UPLOAD_FIELD, part)).await
    }
}
