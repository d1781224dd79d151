//! Wire messages.
//!
//! ## Request
//!
//! ```json
//! { "board": 1, "type": "move", "color": "white", "move": "e2e4" }
//! { "board": 2, "type": "drop", "color": "black", "piece": "n", "to": "f6" }
//! ```
//!
//! ## Replies
//!
//! Accepted requests are broadcast as a `BoardUpdate`; rejected ones go back
//! to the requester only as `{ "message": "<reason>" }`.

use serde::{Deserialize, Serialize};

use crate::core::team::Color;
use crate::session::BoardUpdate;

/// Errors at the message boundary, before a request reaches the session.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed-request: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// An inbound request. All fields are required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    Move {
        board: u8,
        color: Color,
        #[serde(rename = "move")]
        notation: String,
    },
    Drop {
        board: u8,
        color: Color,
        piece: String,
        to: String,
    },
}

impl Request {
    /// Parse one JSON request.
    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Rejection payload sent to the requester.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Outcome of handling one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Send to every participant.
    Broadcast(BoardUpdate),
    /// Send to the requester only.
    Reject(ErrorMessage),
}

impl Reply {
    /// Rejection with `message`.
    #[must_use]
    pub fn reject(message: impl Into<String>) -> Self {
        Reply::Reject(ErrorMessage {
            message: message.into(),
        })
    }

    /// Check if this reply goes to every participant.
    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Reply::Broadcast(_))
    }

    /// Serialize for the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
