//! The two boards of a bughouse game.

use std::ops::{Index, IndexMut};

use crate::core::team::BoardId;

/// Two rules-engine boards, addressed by `BoardId`.
///
/// The pair never lets one board see the other; cross-board effects go
/// through the session.
#[derive(Clone, Debug, Default)]
pub struct BoardPair<E> {
    one: E,
    two: E,
}

impl<E> BoardPair<E> {
    /// Pair `one` (board 1) with `two` (board 2).
    pub fn new(one: E, two: E) -> Self {
        Self { one, two }
    }

    /// Get a reference to a board.
    #[must_use]
    pub fn get(&self, board: BoardId) -> &E {
        match board {
            BoardId::One => &self.one,
            BoardId::Two => &self.two,
        }
    }

    /// Get a mutable reference to a board.
    pub fn get_mut(&mut self, board: BoardId) -> &mut E {
        match board {
            BoardId::One => &mut self.one,
            BoardId::Two => &mut self.two,
        }
    }

    /// Iterate over (BoardId, &E) pairs, board 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (BoardId, &E)> {
        [(BoardId::One, &self.one), (BoardId::Two, &self.two)].into_iter()
    }
}

impl<E> Index<BoardId> for BoardPair<E> {
    type Output = E;

    fn index(&self, board: BoardId) -> &Self::Output {
        self.get(board)
    }
}

impl<E> IndexMut<BoardId> for BoardPair<E> {
    fn index_mut(&mut self, board: BoardId) -> &mut Self::Output {
        self.get_mut(board)
    }
}
