//! Shared progress and status types for notebridge transfers.
//!
//! Every transfer operation reports through a caller-supplied sink that
//! receives [`ProgressUpdate`] values: a percentage in `0..=100` plus a
//! coarse [`TransferStatus`] phase label.

use serde::{Deserialize, Serialize};

/// Coarse phase of a transfer, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "failure")]
    Failure,
}

/// A single progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Completion percentage, `0..=100`.
    pub percent: u8,
    pub status: TransferStatus,
    /// Human-readable detail; only populated for failures.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ProgressUpdate {
    /// The initial, nothing-happened-yet state.
    pub fn idle() -> Self {
        Self {
            percent: 0,
            status: TransferStatus::Idle,
            message: String::new(),
        }
    }

    /// An in-progress update at `percent` (clamped to 100).
    pub fn at(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            status: TransferStatus::InProgress,
            message: String::new(),
        }
    }

    /// The terminal success state (always 100%).
    pub fn success() -> Self {
        Self {
            percent: 100,
            status: TransferStatus::Success,
            message: String::new(),
        }
    }

    /// A terminal failure carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            percent: 0,
            status: TransferStatus::Failure,
            message: message.into(),
        }
    }

    /// Returns `true` for the terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            TransferStatus::Success | TransferStatus::Failure
        )
    }
}

/// Boxed progress callback for callers that need to store one.
///
/// Library operations themselves take `impl FnMut(ProgressUpdate)` so
/// plain closures work without boxing.
pub type ProgressCallback = Box<dyn FnMut(ProgressUpdate) + Send>;
