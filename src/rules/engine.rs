//! Rules engine trait for a single chess board.
//!
//! Engines implement `RulesEngine` to provide standard chess rules:
//! - What moves are legal
//! - How moves and placements modify the board
//! - Position encoding for broadcast
//!
//! The session calls into `RulesEngine` but never interprets chess rules
//! directly. Bughouse semantics (teams, reserves, routing) stay outside.

use crate::core::error::RulesError;
use crate::core::piece::{MoveSpec, Piece, Square};
use crate::core::team::Color;

/// What applying a move did to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Piece the engine removed as a capture, if any.
    ///
    /// Covers captures whose victim is not on the destination square
    /// (en passant).
    pub captured: Option<Piece>,
}

/// Rules engine trait.
///
/// One value per board. The session owns it exclusively.
///
/// ## Implementation Notes
///
/// - `apply_move` and `drop_piece` must leave the board unchanged on error
/// - `drop_piece` places the piece and hands the move to the dropper's
///   opponent in one step, so no half-applied position is ever observable
/// - `is_promoted` defaults to `false` for engines that don't track promotion
pub trait RulesEngine {
    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<MoveSpec>;

    /// Check whether `mv` is legal for the side to move.
    fn is_legal(&self, mv: &MoveSpec) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Apply a move and advance the side to move.
    fn apply_move(&mut self, mv: &MoveSpec) -> Result<MoveOutcome, RulesError>;

    /// The piece on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Check whether the piece on `square` reached its rank by promotion.
    fn is_promoted(&self, _square: Square) -> bool {
        false
    }

    /// Place `piece` on the empty `square` and advance the side to move.
    fn drop_piece(&mut self, square: Square, piece: Piece) -> Result<(), RulesError>;

    /// Engine-native position string (FEN for standard chess).
    fn position_encoding(&self) -> String;

    /// Side whose turn it is.
    fn side_to_move(&self) -> Color;
}
