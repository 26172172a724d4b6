//! Saving focal points to the inventory backend.
//!
//! The editor never talks to the network itself. It hands a
//! [`FocalPointUpdate`] to a [`FocalPointStore`], and [`commit`] logs the
//! outcome. A failed save leaves the on-screen focal point in place; the next
//! drag will try again.

use crate::focal::FocalPoint;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Error types for saving a focal point.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The request never got a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend rejected focal point ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The payload could not be encoded.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// Body of the focal point save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocalPointUpdate {
    /// Wine identifier (its Vivino URL)
    #[serde(rename = "vivino_url")]
    pub identifier: String,
    /// Focal point as `"X.XX% Y.YY%"`
    pub focal_point: String,
}

impl FocalPointUpdate {
    pub fn new(identifier: impl Into<String>, focal: FocalPoint) -> Self {
        Self {
            identifier: identifier.into(),
            focal_point: focal.to_string(),
        }
    }
}

/// Something that can persist a focal point.
pub trait FocalPointStore {
    /// Save one update.
    fn save(&self, update: &FocalPointUpdate) -> impl Future<Output = Result<(), SaveError>>;
}

/// Save `update` through `store`, logging the result.
///
/// Returns whether the save succeeded. Errors are not propagated: the drag has
/// already finished and nothing is rolled back.
pub async fn commit<S: FocalPointStore>(store: &S, update: &FocalPointUpdate) -> bool {
    match store.save(update).await {
        Ok(()) => {
            log::info!(
                "Saved focal point {} for {}",
                update.focal_point,
                update.identifier
            );
            true
        }
        Err(e) => {
            log::error!("Failed to save focal point: {e}");
            false
        }
    }
}
