//! Standard chess board backed by `shakmaty`.
//!
//! Legality, check rules and FEN all come from shakmaty. On top of that the
//! board remembers which squares hold promoted pieces, so a captured
//! promoted queen can go back to the reserve as a pawn.

use rustc_hash::FxHashSet;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, FromSetup, Move, Position, PositionError, Role};

use crate::core::error::RulesError;
use crate::core::piece::{MoveSpec, Piece, PieceKind, Square};
use crate::core::team::Color;

use super::engine::{MoveOutcome, RulesEngine};

/// A single standard chess board.
#[derive(Clone, Debug, Default)]
pub struct StandardBoard {
    position: Chess,
    promoted: FxHashSet<Square>,
}

impl StandardBoard {
    /// Board at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board at the position described by `fen`.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fen = fen
            .parse::<Fen>()
            .map_err(|err| RulesError::InvalidPosition(err.to_string()))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .or_else(PositionError::ignore_too_much_material)
            .map_err(|err| RulesError::InvalidPosition(err.to_string()))?;
        Ok(Self {
            position,
            promoted: FxHashSet::default(),
        })
    }

    /// Resolve `mv` against the current position.
    fn resolve(&self, mv: &MoveSpec) -> Result<Move, RulesError> {
        let uci: UciMove = mv
            .to_string()
            .parse()
            .map_err(|_| RulesError::IllegalMove(*mv))?;
        uci.to_move(&self.position)
            .map_err(|_| RulesError::IllegalMove(*mv))
    }

    fn track_promotion(&mut self, mv: &MoveSpec, m: &Move) {
        let carried = self.promoted.remove(&mv.from);
        self.promoted.remove(&mv.to);
        if carried || m.is_promotion() {
            self.promoted.insert(mv.to);
        }
    }
}

impl RulesEngine for StandardBoard {
    fn legal_moves(&self) -> Vec<MoveSpec> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| m.to_uci(CastlingMode::Standard).to_string().parse().ok())
            .collect()
    }

    fn is_legal(&self, mv: &MoveSpec) -> bool {
        self.resolve(mv).is_ok()
    }

    fn apply_move(&mut self, mv: &MoveSpec) -> Result<MoveOutcome, RulesError> {
        let m = self.resolve(mv)?;
        let victim_color = self.side_to_move().opponent();
        let captured = m
            .capture()
            .map(|role| Piece::new(kind_from_role(role), victim_color));

        self.track_promotion(mv, &m);
        self.position.play_unchecked(&m);
        Ok(MoveOutcome { captured })
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(to_shakmaty_square(square))
            .map(|p| Piece::new(kind_from_role(p.role), color_from_shakmaty(p.color)))
    }

    fn is_promoted(&self, square: Square) -> bool {
        self.promoted.contains(&square)
    }

    fn drop_piece(&mut self, square: Square, piece: Piece) -> Result<(), RulesError> {
        let target = to_shakmaty_square(square);
        if self.position.board().piece_at(target).is_some() {
            return Err(RulesError::Occupied(square));
        }

        let mut setup = self.position.clone().into_setup(EnPassantMode::Legal);
        let mover = to_shakmaty_color(piece.color);
        setup.board.set_piece_at(
            target,
            shakmaty::Piece {
                color: mover,
                role: role_from_kind(piece.kind),
            },
        );
        setup.turn = !mover;
        setup.ep_square = None;
        setup.halfmoves = if piece.kind == PieceKind::Pawn {
            0
        } else {
            setup.halfmoves.saturating_add(1)
        };
        if mover == shakmaty::Color::Black {
            setup.fullmoves = setup.fullmoves.saturating_add(1);
        }

        // Bughouse piece counts routinely exceed the standard material limits.
        let position = Chess::from_setup(setup, CastlingMode::Standard)
            .or_else(PositionError::ignore_too_much_material)
            .or_else(PositionError::ignore_impossible_check)
            .map_err(|err| RulesError::IllegalPlacement {
                square,
                reason: err.to_string(),
            })?;

        self.position = position;
        self.promoted.remove(&square);
        Ok(())
    }

    fn position_encoding(&self) -> String {
        Fen::from_setup(self.position.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    fn side_to_move(&self) -> Color {
        color_from_shakmaty(self.position.turn())
    }
}

fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square.index()))
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn role_from_kind(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn color_from_shakmaty(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn to_shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}
