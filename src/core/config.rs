//! Session configuration.
//!
//! Sessions are configured at startup by providing a `SessionConfig`, either
//! built in code with the `with_*` methods or loaded from JSON. Missing
//! fields take their defaults.
//!
//! ```
//! use bughouse_core::core::SessionConfig;
//!
//! let config = SessionConfig::from_json_str(r#"{ "enforce_drop_turn": false }"#).unwrap();
//! assert!(!config.enforce_drop_turn);
//! assert!(config.demote_promoted_captures);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Reject drops made out of turn, the same way moves are rejected.
    pub enforce_drop_turn: bool,

    /// A captured promoted piece enters the reserve as a pawn.
    pub demote_promoted_captures: bool,

    /// FEN both boards start from. `None` means the standard start position.
    pub starting_fen: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enforce_drop_turn: true,
            demote_promoted_captures: true,
            starting_fen: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether drops are turn-checked.
    #[must_use]
    pub fn with_drop_turn_check(mut self, enforce: bool) -> Self {
        self.enforce_drop_turn = enforce;
        self
    }

    /// Set whether captured promoted pieces are demoted to pawns.
    #[must_use]
    pub fn with_promoted_demotion(mut self, demote: bool) -> Self {
        self.demote_promoted_captures = demote;
        self
    }

    /// Start both boards from `fen`.
    #[must_use]
    pub fn with_starting_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = Some(fen.into());
        self
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
