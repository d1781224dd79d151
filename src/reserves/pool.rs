//! Reserve pools: captured-piece tokens per team.
//!
//! The `ReservePool` tracks which drops each team may make. It supports:
//! - Appending a token when a capture is routed to a team
//! - Consuming one token when that team drops a piece
//! - Per-kind counts and whole-pool snapshots for broadcast
//!
//! Tokens are kept in insertion order so snapshots read naturally, but only
//! per-kind counts carry meaning.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::Rejection;
use crate::core::piece::PieceKind;
use crate::core::team::{Team, TeamMap};

/// Token list for one team. Bughouse reserves rarely exceed a dozen pieces.
pub type Tokens = SmallVec<[PieceKind; 16]>;

/// Both teams' reserve contents at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    pub team_a: Vec<PieceKind>,
    pub team_b: Vec<PieceKind>,
}

impl ReserveSnapshot {
    /// Tokens held by `team`.
    #[must_use]
    pub fn tokens(&self, team: Team) -> &[PieceKind] {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    /// Token count across both teams.
    #[must_use]
    pub fn total(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }
}

/// Per-team multisets of droppable pieces.
///
/// ## Usage
///
/// ```
/// use bughouse_core::core::{PieceKind, Team};
/// use bughouse_core::reserves::ReservePool;
///
/// let mut pool = ReservePool::new();
/// pool.capture(Team::B, PieceKind::Pawn);
/// assert_eq!(pool.count(Team::B, PieceKind::Pawn), 1);
///
/// pool.consume(Team::B, PieceKind::Pawn).unwrap();
/// assert!(pool.consume(Team::B, PieceKind::Pawn).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservePool {
    pools: TeamMap<Tokens>,
}

impl ReservePool {
    /// Create two empty pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build pools from explicit token lists.
    ///
    /// Kings are filtered out.
    #[must_use]
    pub fn from_tokens(
        team_a: impl IntoIterator<Item = PieceKind>,
        team_b: impl IntoIterator<Item = PieceKind>,
    ) -> Self {
        let mut pool = Self::new();
        for kind in team_a {
            pool.capture(Team::A, kind);
        }
        for kind in team_b {
            pool.capture(Team::B, kind);
        }
        pool
    }

    /// Add one token of `kind` to `team`'s pool.
    ///
    /// Kings never enter a reserve; the call is ignored for them.
    pub fn capture(&mut self, team: Team, kind: PieceKind) {
        if kind.is_droppable() {
            self.pools[team].push(kind);
        }
    }

    /// Remove one token of `kind` from `team`'s pool.
    ///
    /// Leaves the pool untouched and returns `PieceNotInReserve` if the
    /// team holds no such token.
    pub fn consume(&mut self, team: Team, kind: PieceKind) -> Result<(), Rejection> {
        let tokens = &mut self.pools[team];
        let pos = tokens
            .iter()
            .position(|&k| k == kind)
            .ok_or(Rejection::PieceNotInReserve)?;
        tokens.remove(pos);
        Ok(())
    }

    /// Number of `kind` tokens `team` holds.
    #[must_use]
    pub fn count(&self, team: Team, kind: PieceKind) -> usize {
        self.pools[team].iter().filter(|&&k| k == kind).count()
    }

    /// Check if `team` holds at least one `kind` token.
    #[must_use]
    pub fn contains(&self, team: Team, kind: PieceKind) -> bool {
        self.pools[team].contains(&kind)
    }

    /// Tokens held by `team`, in insertion order.
    #[must_use]
    pub fn tokens(&self, team: Team) -> &[PieceKind] {
        &self.pools[team]
    }

    /// Total tokens across both teams.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pools.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    /// Copy both pools for broadcast.
    #[must_use]
    pub fn snapshot(&self) -> ReserveSnapshot {
        ReserveSnapshot {
            team_a: self.pools[Team::A].to_vec(),
            team_b: self.pools[Team::B].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = ReservePool::new();
        assert_eq!(pool.total(), 0);
        assert!(pool.tokens(Team::A).is_empty());
        assert!(pool.tokens(Team::B).is_empty());
    }

    #[test]
    fn test_capture_and_count() {
        let mut pool = ReservePool::new();
        pool.capture(Team::A, PieceKind::Knight);
        pool.capture(Team::A, PieceKind::Knight);
        pool.capture(Team::A, PieceKind::Pawn);

        assert_eq!(pool.count(Team::A, PieceKind::Knight), 2);
        assert_eq!(pool.count(Team::A, PieceKind::Pawn), 1);
        assert_eq!(pool.count(Team::B, PieceKind::Knight), 0);
        assert_eq!(pool.total(), 3);
    }

    #[test]
    fn test_king_never_enters() {
        let mut pool = ReservePool::new();
        pool.capture(Team::B, PieceKind::King);
        assert_eq!(pool.total(), 0);
    }

    #[test]
    fn test_consume_removes_exactly_one() {
        let mut pool = ReservePool::from_tokens(
            [PieceKind::Pawn, PieceKind::Rook, PieceKind::Pawn],
            [] as [PieceKind; 0],
        );

        pool.consume(Team::A, PieceKind::Pawn).unwrap();
        assert_eq!(pool.count(Team::A, PieceKind::Pawn), 1);
        assert_eq!(pool.tokens(Team::A), &[PieceKind::Rook, PieceKind::Pawn]);
    }

    #[test]
    fn test_consume_missing_fails_without_change() {
        let mut pool = ReservePool::from_tokens([PieceKind::Queen], [PieceKind::Bishop]);
        let before = pool.clone();

        assert_eq!(
            pool.consume(Team::A, PieceKind::Bishop),
            Err(Rejection::PieceNotInReserve)
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn test_pools_are_independent() {
        let mut pool = ReservePool::new();
        pool.capture(Team::B, PieceKind::Queen);

        assert!(pool.contains(Team::B, PieceKind::Queen));
        assert!(!pool.contains(Team::A, PieceKind::Queen));
        assert!(pool.consume(Team::A, PieceKind::Queen).is_err());
    }

    #[test]
    fn test_snapshot() {
        let pool = ReservePool::from_tokens([PieceKind::Pawn], [PieceKind::Knight, PieceKind::Pawn]);
        let snapshot = pool.snapshot();

        assert_eq!(snapshot.team_a, vec![PieceKind::Pawn]);
        assert_eq!(snapshot.tokens(Team::B), &[PieceKind::Knight, PieceKind::Pawn]);
        assert_eq!(snapshot.total(), 3);
    }

    #[test]
    fn test_serialization() {
        let pool = ReservePool::from_tokens([PieceKind::Bishop], [] as [PieceKind; 0]);
        let json = serde_json::to_string(&pool).unwrap();
        let deserialized: ReservePool = serde_json::from_str(&json).unwrap();
        assert_eq!(pool, deserialized);
    }
}
