//! Accepted actions and their history records.
//!
//! An action is either a board move or a drop from a reserve. Only actions
//! that passed validation are recorded; rejections leave no trace in history.

use serde::{Deserialize, Serialize};

use super::piece::{MoveSpec, PieceKind, Square};
use super::team::{BoardId, Color, Team};

/// A validated bughouse action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// A normal board move.
    Move {
        #[serde(rename = "move")]
        spec: MoveSpec,
    },
    /// A reserve piece placed on an empty square.
    Drop { piece: PieceKind, to: Square },
}

impl Action {
    /// Check if this action is a drop.
    #[must_use]
    pub fn is_drop(&self) -> bool {
        matches!(self, Action::Drop { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { spec } => write!(f, "{spec}"),
            Action::Drop { piece, to } => {
                write!(f, "{}@{to}", piece.letter().to_ascii_uppercase())
            }
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Session-wide sequence number, starting at 0.
    pub sequence: usize,

    pub board: BoardId,

    pub color: Color,

    /// Team seated at (board, color).
    pub team: Team,

    pub action: Action,

    /// Token added to a reserve by this action, and the team that received it.
    pub routed: Option<(Team, PieceKind)>,
}

impl ActionRecord {
    /// Check if this action fed a reserve.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.routed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let mv = Action::Move {
            spec: "e7e8q".parse().unwrap(),
        };
        assert_eq!(mv.to_string(), "e7e8q");

        let drop = Action::Drop {
            piece: PieceKind::Knight,
            to: "f3".parse().unwrap(),
        };
        assert_eq!(drop.to_string(), "N@f3");
        assert!(drop.is_drop());
        assert!(!mv.is_drop());
    }

    #[test]
    fn test_action_serialization() {
        let drop = Action::Drop {
            piece: PieceKind::Rook,
            to: "d4".parse().unwrap(),
        };
        let json = serde_json::to_string(&drop).unwrap();
        assert_eq!(json, r#"{"type":"drop","piece":"r","to":"d4"}"#);

        let back: Action = serde_json::from_str(r#"{"type":"move","move":"g1f3"}"#).unwrap();
        assert_eq!(
            back,
            Action::Move {
                spec: "g1f3".parse().unwrap()
            }
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            sequence: 4,
            board: BoardId::Two,
            color: Color::White,
            team: Team::B,
            action: Action::Move {
                spec: "e4d5".parse().unwrap(),
            },
            routed: Some((Team::A, PieceKind::Pawn)),
        };
        assert!(record.is_capture());

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
