//! HTTP focal point store.
//!
//! Posts [`FocalPointUpdate`]s as JSON to the inventory backend with
//! `gloo-net`. The backend answers `{"status": ..., "message": ...}`; on
//! failure its message is carried into the error.

use gloo_net::http::Request;
use serde::Deserialize;
use wino_core::{FocalPointStore, FocalPointUpdate, SaveError};

/// Response body of the inventory API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}

/// Saves focal points with `POST {url}`.
#[derive(Debug, Clone)]
pub struct HttpFocalPointStore {
    url: String,
}

impl HttpFocalPointStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FocalPointStore for HttpFocalPointStore {
    async fn save(&self, update: &FocalPointUpdate) -> Result<(), SaveError> {
        let response = Request::post(&self.url)
            .json(update)
            .map_err(|e| SaveError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let body = response.json::<ApiMessage>().await.ok();
        Err(rejection(response.status(), body, response.status_text()))
    }
}

/// Error for a non-success response, preferring the backend's own message.
fn rejection(status: u16, body: Option<ApiMessage>, status_text: String) -> SaveError {
    let message = body.and_then(|b| b.message).unwrap_or(status_text);
    SaveError::Rejected { status, message }
}
