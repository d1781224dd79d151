//! Rules engine trait and the bundled standard-chess implementation.
//!
//! The session sees boards only through `RulesEngine`:
//! - Legal moves and move application
//! - Piece lookup and drop placement
//! - Position encoding and side to move
//!
//! `StandardBoard` implements it on top of shakmaty. Any other compliant
//! engine can be substituted.

pub mod engine;
pub mod standard;

pub use engine::{MoveOutcome, RulesEngine};
pub use standard::StandardBoard;
