//! Teams, boards, colors and the fixed seating table.
//!
//! ## Seating
//!
//! Every (board, color) seat belongs to exactly one team, and the table
//! never changes for the lifetime of a session:
//!
//! | Board | White  | Black  |
//! |-------|--------|--------|
//! | 1     | Team A | Team B |
//! | 2     | Team B | Team A |
//!
//! ## TeamMap
//!
//! Per-team storage with O(1) access, indexable by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Both teams, A first.
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The other team.
    ///
    /// Captured pieces are routed to the capturer's partner.
    #[must_use]
    pub const fn partner(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

/// Side color on a single board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Lowercase name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board identifier. Serialized as the number `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BoardId {
    One,
    Two,
}

impl BoardId {
    /// Both boards, board 1 first.
    pub const ALL: [BoardId; 2] = [BoardId::One, BoardId::Two];

    /// The board number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            BoardId::One => 1,
            BoardId::Two => 2,
        }
    }
}

impl From<BoardId> for u8 {
    fn from(board: BoardId) -> Self {
        board.number()
    }
}

/// Raised when a board number is neither 1 nor 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown board {0}")]
pub struct UnknownBoard(pub u8);

impl TryFrom<u8> for BoardId {
    type Error = UnknownBoard;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BoardId::One),
            2 => Ok(BoardId::Two),
            other => Err(UnknownBoard(other)),
        }
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board {}", self.number())
    }
}

/// The team seated at `color` on `board`.
///
/// ```
/// use bughouse_core::core::{team_for, BoardId, Color, Team};
///
/// assert_eq!(team_for(BoardId::One, Color::White), Team::A);
/// assert_eq!(team_for(BoardId::Two, Color::White), Team::B);
/// ```
#[must_use]
pub const fn team_for(board: BoardId, color: Color) -> Team {
    match (board, color) {
        (BoardId::One, Color::White) | (BoardId::Two, Color::Black) => Team::A,
        (BoardId::One, Color::Black) | (BoardId::Two, Color::White) => Team::B,
    }
}

/// Per-team data storage.
///
/// ## Example
///
/// ```
/// use bughouse_core::core::{Team, TeamMap};
///
/// let mut score: TeamMap<u32> = TeamMap::with_default();
/// score[Team::B] += 3;
/// assert_eq!(score[Team::A], 0);
/// assert_eq!(score[Team::B], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    a: T,
    b: T,
}

impl<T> TeamMap<T> {
    /// Create a TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            a: factory(Team::A),
            b: factory(Team::B),
        }
    }

    /// Create a TeamMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }

    /// Iterate over (Team, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::A, &self.a), (Team::B, &self.b)].into_iter()
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seating_table() {
        assert_eq!(team_for(BoardId::One, Color::White), Team::A);
        assert_eq!(team_for(BoardId::One, Color::Black), Team::B);
        assert_eq!(team_for(BoardId::Two, Color::White), Team::B);
        assert_eq!(team_for(BoardId::Two, Color::Black), Team::A);
    }

    #[test]
    fn test_each_team_sits_once_per_board() {
        for board in BoardId::ALL {
            let white = team_for(board, Color::White);
            let black = team_for(board, Color::Black);
            assert_eq!(white.partner(), black);
        }
    }

    #[test]
    fn test_partner_is_involution() {
        for team in Team::ALL {
            assert_ne!(team.partner(), team);
            assert_eq!(team.partner().partner(), team);
        }
    }

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(format!("{}", Color::Black), "black");
    }

    #[test]
    fn test_board_id_conversions() {
        assert_eq!(BoardId::try_from(1), Ok(BoardId::One));
        assert_eq!(BoardId::try_from(2), Ok(BoardId::Two));
        assert_eq!(BoardId::try_from(3), Err(UnknownBoard(3)));
        assert_eq!(u8::from(BoardId::Two), 2);
        assert_eq!(format!("{}", BoardId::One), "Board 1");
    }

    #[test]
    fn test_board_id_serialization() {
        let json = serde_json::to_string(&BoardId::Two).unwrap();
        assert_eq!(json, "2");
        let board: BoardId = serde_json::from_str("1").unwrap();
        assert_eq!(board, BoardId::One);
        assert!(serde_json::from_str::<BoardId>("0").is_err());
    }

    #[test]
    fn test_color_serialization() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"white\"");
        let color: Color = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(color, Color::Black);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<Vec<u8>> = TeamMap::with_default();
        map[Team::A].push(1);
        map[Team::B].push(2);
        map[Team::B].push(3);

        assert_eq!(map[Team::A], vec![1]);
        assert_eq!(map[Team::B], vec![2, 3]);

        let pairs: Vec<_> = map.iter().map(|(t, v)| (t, v.len())).collect();
        assert_eq!(pairs, vec![(Team::A, 1), (Team::B, 2)]);
    }

    #[test]
    fn test_team_map_new() {
        let map = TeamMap::new(|t| t == Team::B);
        assert!(!map[Team::A]);
        assert!(map[Team::B]);
    }
}
