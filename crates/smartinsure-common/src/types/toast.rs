//! Toast notifications raised by portal actions

use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// A transient notification for the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub tone: Tone,
    pub raised_at: i64,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            tone: Tone::Success,
            raised_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Toast reporting a rejected action
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tone: Tone::Danger,
            ..Self::new(title, description)
        }
    }
}
