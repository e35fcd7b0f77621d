// =============================================================================
// Move resolution
//
// A move is resolved against a snapshot of the board taken before anything
// changes: opposing pieces strictly between source and destination are bumped
// first, then the mover lands, bumping whatever opposing piece held the
// destination. A bumped piece goes back to the edge of its own lane: the
// near edge while it is still outbound, the far edge once it has turned
// around. Bumps never cascade.
//
// After landing the mover may turn around (white at column 6, black at row 0)
// or exit (white back at column 0, black back at row 6). Exits are counted
// here and nowhere else; reaching the target count ends the game for good.
// =============================================================================

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, LAST};
use crate::config::RulesConfig;
use crate::error::{Result, RulesError};
use crate::moves::{Bump, Move, MoveOutcome};
use crate::piece::{Color, Piece};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResolver {
    config: RulesConfig,
    white_exits: u32,
    black_exits: u32,
    terminal: bool,
    /// Every resolved move, oldest first.
    history: Vec<Move>,
}

/// Cells strictly between `from` and `to`, which share a row or a column.
fn path_between(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    if from.0 == to.0 {
        let (lo, hi) = (from.1.min(to.1), from.1.max(to.1));
        (lo + 1..hi).map(|c| (from.0, c)).collect()
    } else {
        let (lo, hi) = (from.0.min(to.0), from.0.max(to.0));
        (lo + 1..hi).map(|r| (r, from.1)).collect()
    }
}

/// Send `piece`, found at `cell`, back to the edge of its lane.
fn bump_back(board: &mut Board, cell: (usize, usize), piece: Piece) -> Bump {
    let (row, col) = cell;
    let edge = match (piece.color(), piece.is_returning()) {
        (Color::White, true) => (row, LAST),
        (Color::White, false) => (row, 0),
        (Color::Black, true) => (LAST, col),
        _ => (0, col),
    };
    board.put(cell, Piece::empty());
    board.put(edge, piece);
    debug!("bumped {piece} from {cell:?} to {edge:?}");
    Bump { from: cell, to: edge }
}

fn reaches_turnaround(color: Color, (row, col): (usize, usize)) -> bool {
    (color == Color::White && col == LAST) || (color == Color::Black && row == 0)
}

fn reaches_home(color: Color, (row, col): (usize, usize)) -> bool {
    (color == Color::Black && row == LAST) || (color == Color::White && col == 0)
}

impl MoveResolver {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::new())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        MoveResolver {
            config,
            white_exits: 0,
            black_exits: 0,
            terminal: false,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Can `active` play the piece at (row, col) right now?
    pub fn is_playable(&self, board: &Board, row: usize, col: usize, active: Color) -> bool {
        !self.terminal
            && active.is_player()
            && board
                .get_piece(row, col)
                .map(|p| p.color() == active)
                .unwrap_or(false)
    }

    /// Resolve one move of the piece at (row, col) for `active`.
    ///
    /// Errors leave `board` and the resolver untouched. A destination holding a
    /// same-color or neutral piece is not an error: nothing happens and the
    /// outcome reports `moved: false`.
    pub fn play_piece(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
        active: Color,
    ) -> Result<MoveOutcome> {
        if self.terminal {
            return Ok(MoveOutcome::unmoved(true));
        }

        let piece = board.get_piece(row, col)?;
        if !active.is_player() || piece.color() != active {
            return Err(RulesError::NotOwner { row, col, active });
        }

        let from = (row, col);
        let to = match board.destination(row, col) {
            Ok(to) => to,
            Err(RulesError::OutOfRange { row: r, col: c }) => {
                return Err(RulesError::IllegalMove { from, to: (r, c) })
            }
            Err(e) => return Err(e),
        };

        let before = *board;
        let occupant = before.at(to);
        if occupant.color() == active || occupant.color() == Color::Neutral {
            debug!("{active} move {from:?} -> {to:?} rejected: destination holds {occupant}");
            return Ok(MoveOutcome::unmoved(false));
        }

        let opponent = active.opposite();
        let mut bumps: Vec<Bump> = path_between(from, to)
            .into_iter()
            .filter(|&cell| before.at(cell).color() == opponent)
            .map(|cell| bump_back(board, cell, before.at(cell)))
            .collect();

        board.put(to, piece);
        board.put(from, Piece::empty());

        if occupant.color() == opponent {
            bumps.push(bump_back(board, to, occupant));
        }

        let mut mover = piece;
        let turned_around = reaches_turnaround(active, to);
        if turned_around {
            mover.reverse()?;
            debug!("{active} piece turned around at {to:?}");
        }
        board.put(to, mover);

        let mv = Move { from, to };
        if self.config.record_history {
            self.history.push(mv);
        }
        debug!("{active} played {mv} with {} bump(s)", bumps.len());

        let exited = reaches_home(active, to);
        if exited {
            board.put(to, Piece::empty());
            let count = self.count_exit(active);
            info!("{active} piece exited at {to:?} ({count} out)");
        }

        if let Some(winner) = self.winner() {
            self.terminal = true;
            info!("{winner} wins");
        }

        Ok(MoveOutcome {
            moved: true,
            terminal: self.terminal,
            mv: Some(mv),
            bumps,
            turned_around,
            exited,
        })
    }

    fn count_exit(&mut self, color: Color) -> u32 {
        let counter = match color {
            Color::White => &mut self.white_exits,
            _ => &mut self.black_exits,
        };
        *counter += 1;
        *counter
    }

    /// Pieces of `color` that have completed their round trip.
    pub fn exit_count(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_exits,
            Color::Black => self.black_exits,
            _ => 0,
        }
    }

    pub fn has_won(&self, color: Color) -> bool {
        color.is_player() && self.exit_count(color) >= self.config.exits_to_win
    }

    pub fn winner(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&c| self.has_won(c))
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Sources of every earlier move that landed on (row, col), oldest first.
    pub fn arrivals_at(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        self.history
            .iter()
            .filter(|m| m.to == (row, col))
            .map(|m| m.from)
            .collect()
    }

    /// Clear counters, terminal flag and history. The config is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }
}
