//! Turns raw requests into session calls and replies.

use tracing::warn;

use crate::core::error::Rejection;
use crate::core::piece::{PieceKind, Square};
use crate::core::team::BoardId;
use crate::rules::RulesEngine;
use crate::session::{BoardUpdate, SharedSession};

use super::message::{Reply, Request};

/// Handle one raw JSON request.
///
/// Unparseable input is answered with a `malformed-request` message and
/// never reaches the session.
pub fn handle_message<E: RulesEngine>(session: &SharedSession<E>, raw: &str) -> Reply {
    match Request::from_json(raw) {
        Ok(request) => handle_request(session, request),
        Err(err) => {
            warn!(error = %err, "dropping malformed request");
            Reply::reject(err.to_string())
        }
    }
}

/// Handle one parsed request.
pub fn handle_request<E: RulesEngine>(session: &SharedSession<E>, request: Request) -> Reply {
    match dispatch(session, request) {
        Ok(update) => Reply::Broadcast(update),
        Err(rejection) => Reply::reject(rejection.reason()),
    }
}

fn dispatch<E: RulesEngine>(
    session: &SharedSession<E>,
    request: Request,
) -> Result<BoardUpdate, Rejection> {
    match request {
        Request::Move {
            board,
            color,
            notation,
        } => {
            let board = BoardId::try_from(board)?;
            session.submit_move(board, color, &notation)
        }
        Request::Drop {
            board,
            color,
            piece,
            to,
        } => {
            let board = BoardId::try_from(board)?;
            let piece: PieceKind = piece.parse()?;
            let target: Square = to.parse()?;
            session.submit_drop(board, color, piece, target)
        }
    }
}
