//! Rejection reasons and engine errors.
//!
//! Every rejected request maps to exactly one `Rejection`. Its `Display`
//! output is the stable reason string sent back to the requester.

use super::piece::{MoveSpec, NotationError, Square};
use super::team::UnknownBoard;

/// Why a move or drop request was refused.
///
/// A rejection never leaves partial state behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not-your-turn")]
    NotYourTurn,
    #[error("illegal-move")]
    IllegalMove,
    #[error("piece-not-in-reserve")]
    PieceNotInReserve,
    #[error("square-occupied")]
    SquareOccupied,
    #[error("invalid-piece-type")]
    InvalidPieceType,
    #[error("malformed-move")]
    MalformedMove,
    #[error("unknown-board")]
    UnknownBoard,
}

impl Rejection {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Rejection::NotYourTurn => "not-your-turn",
            Rejection::IllegalMove => "illegal-move",
            Rejection::PieceNotInReserve => "piece-not-in-reserve",
            Rejection::SquareOccupied => "square-occupied",
            Rejection::InvalidPieceType => "invalid-piece-type",
            Rejection::MalformedMove => "malformed-move",
            Rejection::UnknownBoard => "unknown-board",
        }
    }
}

impl From<NotationError> for Rejection {
    fn from(err: NotationError) -> Self {
        match err {
            NotationError::Piece(_) => Rejection::InvalidPieceType,
            NotationError::Square(_) | NotationError::Move(_) => Rejection::MalformedMove,
        }
    }
}

impl From<UnknownBoard> for Rejection {
    fn from(_: UnknownBoard) -> Self {
        Rejection::UnknownBoard
    }
}

/// Errors reported by a `RulesEngine`.
///
/// An engine returning one of these must not have changed its board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("move {0} is not legal in this position")]
    IllegalMove(MoveSpec),
    #[error("square {0} is occupied")]
    Occupied(Square),
    #[error("cannot place a piece on {square}: {reason}")]
    IllegalPlacement { square: Square, reason: String },
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

impl From<RulesError> for Rejection {
    fn from(err: RulesError) -> Self {
        match err {
            RulesError::Occupied(_) => Rejection::SquareOccupied,
            RulesError::IllegalMove(_)
            | RulesError::IllegalPlacement { .. }
            | RulesError::InvalidPosition(_) => Rejection::IllegalMove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_matches_display() {
        let all = [
            Rejection::NotYourTurn,
            Rejection::IllegalMove,
            Rejection::PieceNotInReserve,
            Rejection::SquareOccupied,
            Rejection::InvalidPieceType,
            Rejection::MalformedMove,
            Rejection::UnknownBoard,
        ];
        for rejection in all {
            assert_eq!(rejection.to_string(), rejection.reason());
        }
    }

    #[test]
    fn test_notation_error_mapping() {
        assert_eq!(
            Rejection::from(NotationError::Piece("x".into())),
            Rejection::InvalidPieceType
        );
        assert_eq!(
            Rejection::from(NotationError::Square("z9".into())),
            Rejection::MalformedMove
        );
    }

    #[test]
    fn test_rules_error_mapping() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(Rejection::from(RulesError::Occupied(e4)), Rejection::SquareOccupied);
        let placement = RulesError::IllegalPlacement {
            square: e4,
            reason: "king left in check".into(),
        };
        assert_eq!(Rejection::from(placement), Rejection::IllegalMove);
    }
}
