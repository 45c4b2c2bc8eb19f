//! Display tone for badges, toasts and status chips

use serde::{Deserialize, Serialize};

/// Colour family a client should render a status with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}
