//! Concurrent access through `SharedSession`.
//!
//! Requests from many threads are serialized by the session lock. The
//! checks here are on the end state: reserve contents must match the
//! captures and drops recorded in history.

use std::thread;

use bughouse_core::core::{BoardId, Color, PieceKind, Rejection, Team};
use bughouse_core::reserves::ReservePool;
use bughouse_core::rules::RulesEngine;
use bughouse_core::{BughouseSession, SessionConfig, SharedSession, StandardBoard};

/// Replay history against an empty pool and compare with the live pool.
fn assert_reserves_match_history(session: &SharedSession, initial: &ReservePool) {
    let mut expected = initial.clone();
    for record in session.history() {
        if let Some((team, kind)) = record.routed {
            expected.capture(team, kind);
        }
        if let bughouse_core::Action::Drop { piece, .. } = record.action {
            expected.consume(record.team, piece).unwrap();
        }
    }

    let live = session.reserves();
    for team in Team::ALL {
        for kind in PieceKind::DROPPABLE {
            assert_eq!(live.count(team, kind), expected.count(team, kind), "{team} {kind:?}");
        }
    }
}

// =============================================================================
// Racing Requests
// =============================================================================

/// Both players on a board race to move; exactly one wins each turn.
#[test]
fn test_racing_players_on_one_board() {
    let session = SharedSession::new(BughouseSession::standard());

    let handles: Vec<_> = [Color::White, Color::Black]
        .into_iter()
        .map(|color| {
            let session = session.clone();
            thread::spawn(move || {
                let mut accepted = 0;
                for _ in 0..50 {
                    let notation = session.with(|s| {
                        s.legal_moves(BoardId::One).first().map(ToString::to_string)
                    });
                    let Some(notation) = notation else { break };
                    match session.submit_move(BoardId::One, color, &notation) {
                        Ok(_) => accepted += 1,
                        Err(Rejection::NotYourTurn | Rejection::IllegalMove) => {}
                        Err(other) => panic!("unexpected rejection: {other}"),
                    }
                }
                accepted
            })
        })
        .collect();

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    let history = session.history();
    assert_eq!(history.len(), accepted);
    // Colors alternate on the board regardless of thread scheduling.
    for (i, record) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(record.color, expected);
    }
    assert_reserves_match_history(&session, &ReservePool::new());
}

/// Captures on one board and drops on the other from separate threads.
#[test]
fn test_cross_board_captures_and_drops() {
    let initial = ReservePool::from_tokens([PieceKind::Pawn; 4], [PieceKind::Pawn; 4]);
    let session = SharedSession::new(BughouseSession::with_state(
        SessionConfig::new().with_drop_turn_check(false),
        StandardBoard::new(),
        StandardBoard::new(),
        initial.clone(),
    ));

    let players: Vec<_> = BoardId::ALL
        .into_iter()
        .flat_map(|board| [(board, Color::White), (board, Color::Black)])
        .collect();

    let handles: Vec<_> = players
        .into_iter()
        .map(|(board, color)| {
            let session = session.clone();
            thread::spawn(move || {
                for round in 0..40u8 {
                    if round % 3 == 0 {
                        let target = session.with(|s| {
                            bughouse_core::Square::all()
                                .filter(|sq| !sq.is_back_rank())
                                .find(|sq| s.board(board).piece_at(*sq).is_none())
                        });
                        if let Some(target) = target {
                            let _ = session.submit_drop(board, color, PieceKind::Pawn, target);
                        }
                        continue;
                    }

                    let notation = session.with(|s| {
                        let moves = s.legal_moves(board);
                        if moves.is_empty() {
                            None
                        } else {
                            Some(moves[usize::from(round) % moves.len()].to_string())
                        }
                    });
                    if let Some(notation) = notation {
                        let _ = session.submit_move(board, color, &notation);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_reserves_match_history(&session, &initial);
}
