//! The bughouse session: both boards, both reserves, one writer.
//!
//! Every request is validated completely before anything is mutated, so a
//! rejected request leaves boards, reserves and history exactly as they
//! were. Accepted requests update the board and the reserves together and
//! return a `BoardUpdate` for broadcast.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::action::{Action, ActionRecord};
use crate::core::config::SessionConfig;
use crate::core::error::{Rejection, RulesError};
use crate::core::piece::{MoveSpec, Piece, PieceKind, Square};
use crate::core::team::{team_for, BoardId, Color, Team};
use crate::reserves::ReservePool;
use crate::rules::{RulesEngine, StandardBoard};

use super::board::BoardPair;

/// State broadcast after every accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    /// Board the action was played on.
    pub board: BoardId,

    /// Engine-native position of that board (FEN for standard boards).
    pub position: String,

    #[serde(rename = "reserveA")]
    pub reserve_a: Vec<PieceKind>,

    #[serde(rename = "reserveB")]
    pub reserve_b: Vec<PieceKind>,
}

/// A two-board bughouse game.
///
/// ## Example
///
/// ```
/// use bughouse_core::core::{BoardId, Color, PieceKind};
/// use bughouse_core::session::BughouseSession;
///
/// let mut session = BughouseSession::standard();
/// session.submit_move(BoardId::One, Color::White, "e2e4").unwrap();
/// session.submit_move(BoardId::One, Color::Black, "d7d5").unwrap();
/// let update = session.submit_move(BoardId::One, Color::White, "e4d5").unwrap();
///
/// // White on board 1 is Team A; the captured pawn goes to Team B.
/// assert_eq!(update.reserve_b, vec![PieceKind::Pawn]);
/// assert!(update.reserve_a.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct BughouseSession<E = StandardBoard> {
    config: SessionConfig,
    boards: BoardPair<E>,
    reserves: ReservePool,
    history: Vector<ActionRecord>,
}

impl BughouseSession<StandardBoard> {
    /// Create a session with standard boards.
    ///
    /// Both boards start from `config.starting_fen` when it is set.
    pub fn new(config: SessionConfig) -> Result<Self, RulesError> {
        let (one, two) = match config.starting_fen.as_deref() {
            Some(fen) => (StandardBoard::from_fen(fen)?, StandardBoard::from_fen(fen)?),
            None => (StandardBoard::new(), StandardBoard::new()),
        };
        Ok(Self::with_state(config, one, two, ReservePool::new()))
    }

    /// Session with default configuration and the standard start position.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_state(
            SessionConfig::default(),
            StandardBoard::new(),
            StandardBoard::new(),
            ReservePool::new(),
        )
    }
}

impl<E: RulesEngine> BughouseSession<E> {
    /// Create a session from explicit parts.
    pub fn with_state(config: SessionConfig, one: E, two: E, reserves: ReservePool) -> Self {
        Self {
            config,
            boards: BoardPair::new(one, two),
            reserves,
            history: Vector::new(),
        }
    }

    // === Requests ===

    /// Validate and play a move.
    ///
    /// Checks, in order: turn, notation, legality. A capture puts one
    /// token of the captured kind into the capturer's partner's reserve.
    pub fn submit_move(
        &mut self,
        board: BoardId,
        color: Color,
        notation: &str,
    ) -> Result<BoardUpdate, Rejection> {
        let result = self.play_move(board, color, notation);
        if let Err(rejection) = &result {
            debug!(%board, %color, notation, reason = rejection.reason(), "move rejected");
        }
        result
    }

    /// Validate and play a drop from the dropping player's own reserve.
    ///
    /// Checks, in order: turn (unless disabled), piece kind, reserve
    /// contents, target square, back-rank pawns, resulting position.
    pub fn submit_drop(
        &mut self,
        board: BoardId,
        color: Color,
        piece: PieceKind,
        target: Square,
    ) -> Result<BoardUpdate, Rejection> {
        let result = self.play_drop(board, color, piece, target);
        if let Err(rejection) = &result {
            debug!(%board, %color, %piece, %target, reason = rejection.reason(), "drop rejected");
        }
        result
    }

    /// Submit an already-parsed action.
    pub fn submit(
        &mut self,
        board: BoardId,
        color: Color,
        action: Action,
    ) -> Result<BoardUpdate, Rejection> {
        match action {
            Action::Move { spec } => self.submit_move(board, color, &spec.to_string()),
            Action::Drop { piece, to } => self.submit_drop(board, color, piece, to),
        }
    }

    fn play_move(
        &mut self,
        board: BoardId,
        color: Color,
        notation: &str,
    ) -> Result<BoardUpdate, Rejection> {
        let engine = &self.boards[board];
        if engine.side_to_move() != color {
            return Err(Rejection::NotYourTurn);
        }

        let spec: MoveSpec = notation.parse()?;
        if !engine.is_legal(&spec) {
            return Err(Rejection::IllegalMove);
        }

        let victim = engine
            .piece_at(spec.to)
            .filter(|piece| piece.color != color)
            .map(|piece| self.reserve_kind(engine, spec.to, piece.kind));

        let outcome = self.boards[board].apply_move(&spec)?;
        let captured = victim.or_else(|| outcome.captured.map(|piece| piece.kind));

        let team = team_for(board, color);
        let routed = captured
            .filter(|kind| kind.is_droppable())
            .map(|kind| self.route_capture(team, kind));

        debug!(%board, %color, %spec, "move accepted");
        self.record(board, color, Action::Move { spec }, routed);
        Ok(self.snapshot(board))
    }

    fn play_drop(
        &mut self,
        board: BoardId,
        color: Color,
        piece: PieceKind,
        target: Square,
    ) -> Result<BoardUpdate, Rejection> {
        let engine = &self.boards[board];
        if self.config.enforce_drop_turn && engine.side_to_move() != color {
            return Err(Rejection::NotYourTurn);
        }
        if !piece.is_droppable() {
            return Err(Rejection::InvalidPieceType);
        }

        let team = team_for(board, color);
        if !self.reserves.contains(team, piece) {
            return Err(Rejection::PieceNotInReserve);
        }
        if engine.piece_at(target).is_some() {
            return Err(Rejection::SquareOccupied);
        }
        if piece == PieceKind::Pawn && target.is_back_rank() {
            return Err(Rejection::IllegalMove);
        }

        self.boards[board].drop_piece(target, Piece::new(piece, color))?;
        // Presence was checked above under the same borrow.
        self.reserves.consume(team, piece)?;

        debug!(%board, %color, %piece, %target, %team, "drop accepted");
        self.record(board, color, Action::Drop { piece, to: target }, None);
        Ok(self.snapshot(board))
    }

    /// Kind a captured piece enters the reserve as.
    fn reserve_kind(&self, engine: &E, square: Square, kind: PieceKind) -> PieceKind {
        if self.config.demote_promoted_captures && engine.is_promoted(square) {
            PieceKind::Pawn
        } else {
            kind
        }
    }

    fn route_capture(&mut self, capturer: Team, kind: PieceKind) -> (Team, PieceKind) {
        let receiver = capturer.partner();
        self.reserves.capture(receiver, kind);
        info!(%capturer, %receiver, %kind, "capture routed to reserve");
        (receiver, kind)
    }

    fn record(
        &mut self,
        board: BoardId,
        color: Color,
        action: Action,
        routed: Option<(Team, PieceKind)>,
    ) {
        let record = ActionRecord {
            sequence: self.history.len(),
            board,
            color,
            team: team_for(board, color),
            action,
            routed,
        };
        self.history.push_back(record);
    }

    // === Queries ===

    /// Current state of `board` in broadcast shape.
    #[must_use]
    pub fn snapshot(&self, board: BoardId) -> BoardUpdate {
        let reserves = self.reserves.snapshot();
        BoardUpdate {
            board,
            position: self.boards[board].position_encoding(),
            reserve_a: reserves.team_a,
            reserve_b: reserves.team_b,
        }
    }

    /// Side to move on `board`.
    #[must_use]
    pub fn side_to_move(&self, board: BoardId) -> Color {
        self.boards[board].side_to_move()
    }

    /// Legal board moves on `board` for its side to move. Drops are not listed.
    #[must_use]
    pub fn legal_moves(&self, board: BoardId) -> Vec<MoveSpec> {
        self.boards[board].legal_moves()
    }

    /// Engine-native position of `board`.
    #[must_use]
    pub fn position(&self, board: BoardId) -> String {
        self.boards[board].position_encoding()
    }

    /// Read-only access to a board.
    #[must_use]
    pub fn board(&self, board: BoardId) -> &E {
        &self.boards[board]
    }

    /// Both reserve pools.
    #[must_use]
    pub fn reserves(&self) -> &ReservePool {
        &self.reserves
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
