//! Core session types: teams, boards, pieces, actions, errors, configuration.
//!
//! This module holds the vocabulary shared by every other module. Nothing
//! here depends on a particular chess engine.

pub mod team;
pub mod piece;
pub mod config;
pub mod action;
pub mod error;

pub use team::{team_for, BoardId, Color, Team, TeamMap, UnknownBoard};
pub use piece::{MoveSpec, NotationError, Piece, PieceKind, Square};
pub use config::{ConfigError, SessionConfig};
pub use action::{Action, ActionRecord};
pub use error::{Rejection, RulesError};
