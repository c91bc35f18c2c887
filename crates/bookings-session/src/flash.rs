//! One-shot messages carried across a redirect.

use std::fmt;

use serde::{Deserialize, Serialize};

use bookings_core::result::AppResult;

use crate::store::SessionHandle;

/// Which channel a message is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    /// Informational confirmation.
    Flash,
    /// Something went wrong.
    Error,
    /// Something needs attention.
    Warning,
}

impl FlashKind {
    /// Session key the channel is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            FlashKind::Flash => "flash",
            FlashKind::Error => "error",
            FlashKind::Warning => "warning",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The pending messages of a session, emptied on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessages {
    /// Informational message.
    pub flash: Option<String>,
    /// Error message.
    pub error: Option<String>,
    /// Warning message.
    pub warning: Option<String>,
}

impl FlashMessages {
    /// True when no channel holds a message.
    pub fn is_empty(&self) -> bool {
        self.flash.is_none() && self.error.is_none() && self.warning.is_none()
    }
}

impl SessionHandle {
    /// Write a message to a channel; a later write replaces an unread one.
    pub async fn flash(&self, kind: FlashKind, message: impl Into<String>) -> AppResult<()> {
        self.put(kind.key(), &message.into()).await
    }

    /// Read and clear all three channels.
    pub async fn take_flashes(&self) -> AppResult<FlashMessages> {
        Ok(FlashMessages {
            flash: self.pop(FlashKind::Flash.key()).await?,
            error: self.pop(FlashKind::Error.key()).await?,
            warning: self.pop(FlashKind::Warning.key()).await?,
        })
    }
}
