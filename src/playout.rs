// =============================================================================
// Random playouts
//
// Picks uniformly among the moves the resolver would accept. There is no
// evaluation and no lookahead: playouts exist to exercise the engine from
// the binaries and the tests, and to give a front-end a "random move" button.
// =============================================================================

use crate::board::Board;
use crate::error::Result;
use crate::moves::Move;
use crate::piece::Color;
use crate::session::GameSession;

/// Platform-appropriate random number in [0, 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_f64() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// A uniformly chosen move for `color`, or None if every piece is blocked.
pub fn random_move(board: &Board, color: Color) -> Option<Move> {
    let moves = board.generate_moves(color);
    if moves.is_empty() {
        return None;
    }
    let index = (random_f64() * moves.len() as f64) as usize;
    Some(moves[index.min(moves.len() - 1)])
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    Won(Color),
    /// The player to move had no available move.
    Blocked(Color),
    MoveLimit,
}

#[derive(Clone, Debug)]
pub struct PlayoutResult {
    pub end: PlayoutEnd,
    pub moves: u32,
    pub bumps: u32,
    pub session: GameSession,
}

/// Play random moves for both sides until someone wins, the side to move is
/// stuck, or `max_moves` moves have been made.
pub fn play_random_game(mut session: GameSession, max_moves: u32) -> Result<PlayoutResult> {
    let mut moves = 0;
    let mut bumps = 0;
    let end = loop {
        if let Some(winner) = session.winner() {
            break PlayoutEnd::Won(winner);
        }
        if moves >= max_moves {
            break PlayoutEnd::MoveLimit;
        }
        let Some(mv) = random_move(session.board(), session.active()) else {
            break PlayoutEnd::Blocked(session.active());
        };
        let outcome = session.play(mv.from.0, mv.from.1)?;
        moves += 1;
        bumps += outcome.bumps.len() as u32;
    };
    Ok(PlayoutResult {
        end,
        moves,
        bumps,
        session,
    })
}
