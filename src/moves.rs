use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

fn square_name((row, col): (usize, usize)) -> String {
    let file = (b'a' + col as u8) as char;
    let rank = (b'1' + row as u8) as char;
    format!("{file}{rank}")
}

impl Move {
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        Move { from, to }
    }

    /// Coordinate notation, e.g. "a4c4". Files a-g are columns 0-6, ranks 1-7
    /// are rows 0-6.
    pub fn to_notation(&self) -> String {
        format!("{}{}", square_name(self.from), square_name(self.to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

/// An opposing piece pushed back to the edge of its lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bump {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// What a call to `MoveResolver::play_piece` did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// False when the game was already over or the destination was taken.
    pub moved: bool,
    /// True once either side has won.
    pub terminal: bool,
    pub mv: Option<Move>,
    pub bumps: Vec<Bump>,
    pub turned_around: bool,
    pub exited: bool,
}

impl MoveOutcome {
    pub(crate) fn unmoved(terminal: bool) -> Self {
        MoveOutcome {
            terminal,
            ..MoveOutcome::default()
        }
    }
}
