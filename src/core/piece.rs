//! Squares, pieces and move notation.
//!
//! These are the engine-neutral vocabulary the session speaks. Rules engines
//! translate them into their own representation at the trait boundary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::team::Color;

/// Errors from parsing squares, pieces and moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid square {0:?}")]
    Square(String),
    #[error("invalid piece letter {0:?}")]
    Piece(String),
    #[error("invalid move {0:?}")]
    Move(String),
}

/// A board square, `a1` = 0 through `h8` = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Create from file (0 = a) and rank (0 = first rank).
    ///
    /// Returns `None` if either coordinate is off the board.
    #[must_use]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create from a raw index (0..64).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw index, `a1` = 0.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// File, 0 = a.
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank, 0 = first rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// True on the first or eighth rank.
    #[must_use]
    pub const fn is_back_rank(self) -> bool {
        matches!(self.rank(), 0 | 7)
    }

    /// Iterate over all 64 squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    fn parse_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Self::from_coords(file - b'a', rank - b'1'),
            _ => None,
        }
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.as_bytes()).ok_or_else(|| NotationError::Square(s.to_string()))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Piece kind. Serialized as its lowercase letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "p")]
    Pawn,
    #[serde(rename = "n")]
    Knight,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "k")]
    King,
}

impl PieceKind {
    /// Kinds that can sit in a reserve.
    pub const DROPPABLE: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Lowercase letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a letter, either case.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kings are never captured into, or dropped from, a reserve.
    #[must_use]
    pub const fn is_droppable(self) -> bool {
        !matches!(self, PieceKind::King)
    }
}

impl FromStr for PieceKind {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c).ok_or_else(|| NotationError::Piece(s.to_string())),
            _ => Err(NotationError::Piece(s.to_string())),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A colored piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board move in `<from><to>[promotion]` notation, e.g. `e2e4` or `a7a8q`.
///
/// Drops use a separate request shape and never parse as a `MoveSpec`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveSpec {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveSpec {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

impl FromStr for MoveSpec {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NotationError::Move(s.to_string());
        let bytes = s.as_bytes();
        if !(4..=5).contains(&bytes.len()) {
            return Err(err());
        }

        let from = Square::parse_bytes(&bytes[0..2]).ok_or_else(err)?;
        let to = Square::parse_bytes(&bytes[2..4]).ok_or_else(err)?;
        if from == to {
            return Err(err());
        }

        let spec = Self::new(from, to);
        match bytes.get(4) {
            None => Ok(spec),
            Some(&b) => match PieceKind::from_letter(b as char) {
                Some(kind) if kind.is_droppable() && kind != PieceKind::Pawn => {
                    Ok(spec.with_promotion(kind))
                }
                _ => Err(err()),
            },
        }
    }
}

impl std::fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl Serialize for MoveSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MoveSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
