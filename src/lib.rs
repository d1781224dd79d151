//! # bughouse-core
//!
//! Session core for two-board bughouse chess.
//!
//! ## Design Principles
//!
//! 1. **One Consistency Domain**: Both boards and both reserves are owned by
//!    a single `BughouseSession`. Captures on one board feed drops on the
//!    other, so every request is applied under one writer.
//!
//! 2. **Validate, Then Mutate**: Every precondition is checked before the
//!    first write. A rejected request changes nothing.
//!
//! 3. **Rules Engine As a Black Box**: Chess legality, check rules and
//!    position encoding sit behind the `RulesEngine` trait. The session only
//!    knows bughouse semantics.
//!
//! ## Seating
//!
//! Board 1: White is Team A, Black is Team B.
//! Board 2: White is Team B, Black is Team A.
//! A captured piece goes to the capturing team's partner's reserve.
//!
//! ## Modules
//!
//! - `core`: Teams, boards, pieces, actions, errors, configuration
//! - `reserves`: Per-team reserve pools
//! - `rules`: RulesEngine trait and the shakmaty-backed standard board
//! - `session`: The session, its board pair and the shared handle
//! - `protocol`: JSON request/reply boundary for transports

pub mod core;
pub mod reserves;
pub mod rules;
pub mod session;
pub mod protocol;

// Re-export commonly used types
pub use crate::core::{
    team_for, Action, ActionRecord, BoardId, Color, MoveSpec, Piece, PieceKind, Rejection,
    RulesError, SessionConfig, Square, Team,
};

pub use crate::reserves::{ReservePool, ReserveSnapshot};

pub use crate::rules::{MoveOutcome, RulesEngine, StandardBoard};

pub use crate::session::{BoardUpdate, BughouseSession, SharedSession};

pub use crate::protocol::{handle_message, Reply, Request};
