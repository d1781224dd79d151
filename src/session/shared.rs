//! Thread-safe session handle.
//!
//! Captures on one board feed drops on the other, so the whole session is
//! one consistency domain: every request takes the same lock, and the
//! read-modify-write of boards and reserves is never interleaved.

use std::sync::Arc;

use im::Vector;
use parking_lot::Mutex;

use crate::core::action::{Action, ActionRecord};
use crate::core::error::Rejection;
use crate::core::piece::{PieceKind, Square};
use crate::core::team::{BoardId, Color};
use crate::reserves::ReservePool;
use crate::rules::{RulesEngine, StandardBoard};

use super::bughouse::{BoardUpdate, BughouseSession};

/// Cloneable handle to one `BughouseSession`, serializing all access.
pub struct SharedSession<E = StandardBoard> {
    inner: Arc<Mutex<BughouseSession<E>>>,
}

impl<E> Clone for SharedSession<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: RulesEngine> SharedSession<E> {
    /// Wrap `session`.
    pub fn new(session: BughouseSession<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// See [`BughouseSession::submit_move`].
    pub fn submit_move(
        &self,
        board: BoardId,
        color: Color,
        notation: &str,
    ) -> Result<BoardUpdate, Rejection> {
        self.inner.lock().submit_move(board, color, notation)
    }

    /// See [`BughouseSession::submit_drop`].
    pub fn submit_drop(
        &self,
        board: BoardId,
        color: Color,
        piece: PieceKind,
        target: Square,
    ) -> Result<BoardUpdate, Rejection> {
        self.inner.lock().submit_drop(board, color, piece, target)
    }

    /// See [`BughouseSession::submit`].
    pub fn submit(
        &self,
        board: BoardId,
        color: Color,
        action: Action,
    ) -> Result<BoardUpdate, Rejection> {
        self.inner.lock().submit(board, color, action)
    }

    /// Current broadcast state of `board`.
    #[must_use]
    pub fn snapshot(&self, board: BoardId) -> BoardUpdate {
        self.inner.lock().snapshot(board)
    }

    /// Copy of both reserve pools.
    #[must_use]
    pub fn reserves(&self) -> ReservePool {
        self.inner.lock().reserves().clone()
    }

    /// Copy of the action history. O(1) thanks to structural sharing.
    #[must_use]
    pub fn history(&self) -> Vector<ActionRecord> {
        self.inner.lock().history().clone()
    }

    /// Run `f` against the session under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&BughouseSession<E>) -> R) -> R {
        f(&self.inner.lock())
    }
}
