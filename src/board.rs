use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};
use crate::moves::Move;
use crate::piece::{Color, Direction, Piece};

pub const SIZE: usize = 7;
pub const LAST: usize = SIZE - 1;

/// Lanes that hold mobile pieces. Index 0 and 6 are the board edges.
pub const LANES: std::ops::RangeInclusive<usize> = 1..=5;

// Speed tables, indexed by lane (row for white, column for black).
// Entries 0 and 6 are never read.
pub const WHITE_OUTBOUND: [usize; SIZE] = [0, 1, 3, 2, 3, 1, 0];
pub const WHITE_RETURN: [usize; SIZE] = [0, 3, 1, 2, 1, 3, 0];
pub const BLACK_OUTBOUND: [usize; SIZE] = [0, 3, 1, 2, 1, 3, 0];
pub const BLACK_RETURN: [usize; SIZE] = [0, 1, 3, 2, 3, 1, 0];

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, LAST), (LAST, 0), (LAST, LAST)];

fn is_corner(row: usize, col: usize) -> bool {
    CORNERS.contains(&(row, col))
}

/// The 7x7 grid. Corners always hold a neutral piece and no other cell does.
/// Serializes as a 7x7 array of `{color, direction}` objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Piece>>", into = "Vec<Vec<Piece>>")]
pub struct Board {
    cells: [[Piece; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Neutral corners and nothing else. Useful for setting up test positions.
    pub fn empty() -> Self {
        let mut cells = [[Piece::empty(); SIZE]; SIZE];
        for (r, c) in CORNERS {
            cells[r][c] = Piece::neutral();
        }
        Board { cells }
    }

    /// Starting layout: white down column 0 facing east, black along row 6
    /// facing north.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for lane in LANES {
            board.cells[lane][0] = Piece::white_east();
            board.cells[LAST][lane] = Piece::black_north();
        }
        board
    }

    fn check_range(row: usize, col: usize) -> Result<()> {
        if row >= SIZE || col >= SIZE {
            return Err(RulesError::out_of_range(row, col));
        }
        Ok(())
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Result<Piece> {
        Self::check_range(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrites the cell unconditionally. Callers clear the target first.
    pub fn set_piece(&mut self, row: usize, col: usize, piece: Piece) -> Result<()> {
        Self::check_range(row, col)?;
        self.cells[row][col] = piece;
        Ok(())
    }

    /// Infallible accessors for coordinates already known to be on the board.
    pub(crate) fn at(&self, (row, col): (usize, usize)) -> Piece {
        self.cells[row][col]
    }

    pub(crate) fn put(&mut self, (row, col): (usize, usize), piece: Piece) {
        self.cells[row][col] = piece;
    }

    /// How far the piece at (row, col) travels on its next move.
    pub fn speed(&self, row: usize, col: usize) -> Result<usize> {
        let piece = self.get_piece(row, col)?;
        match (piece.color(), piece.direction()) {
            (Color::White, Direction::East) => Ok(WHITE_OUTBOUND[row]),
            (Color::White, _) => Ok(WHITE_RETURN[row]),
            (Color::Black, Direction::North) => Ok(BLACK_OUTBOUND[col]),
            (Color::Black, _) => Ok(BLACK_RETURN[col]),
            _ => Err(RulesError::NotMobile { row, col }),
        }
    }

    /// Where the piece at (row, col) lands. A destination past the edge is an
    /// `OutOfRange` error carrying the computed coordinates; it is never clamped.
    pub fn destination(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        let piece = self.get_piece(row, col)?;
        let speed = self.speed(row, col)? as isize;
        let (r, c) = (row as isize, col as isize);
        let (new_row, new_col) = match piece.direction() {
            Direction::East => (r, c + speed),
            Direction::West => (r, c - speed),
            Direction::North => (r - speed, c),
            Direction::South => (r + speed, c),
            _ => return Err(RulesError::NotMobile { row, col }),
        };

        let on_board = |v: isize| (0..SIZE as isize).contains(&v);
        if !on_board(new_row) || !on_board(new_col) {
            return Err(RulesError::OutOfRange {
                row: new_row,
                col: new_col,
            });
        }
        Ok((new_row as usize, new_col as usize))
    }

    /// Coordinates of every piece of `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c].color() == color)
    }

    /// Lanes still holding a piece of `color`: rows for white, columns for black.
    pub fn active_lanes(&self, color: Color) -> Vec<usize> {
        let mut lanes: Vec<usize> = match color {
            Color::White => self.pieces(color).map(|(r, _)| r).collect(),
            Color::Black => self.pieces(color).map(|(_, c)| c).collect(),
            _ => Vec::new(),
        };
        lanes.sort_unstable();
        lanes.dedup();
        lanes
    }

    /// Moves of `color` that stay on the board and do not land on a same-color
    /// or neutral square.
    pub fn generate_moves(&self, color: Color) -> Vec<Move> {
        if !color.is_player() {
            return Vec::new();
        }
        self.pieces(color)
            .filter_map(|from| {
                let to = self.destination(from.0, from.1).ok()?;
                let target = self.at(to).color();
                (target != color && target != Color::Neutral).then_some(Move { from, to })
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Board> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Board> for Vec<Vec<Piece>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<Piece>>> for Board {
    type Error = RulesError;

    fn try_from(rows: Vec<Vec<Piece>>) -> Result<Board> {
        if rows.len() != SIZE {
            return Err(RulesError::Format(format!(
                "expected {SIZE} rows, found {}",
                rows.len()
            )));
        }
        let mut cells = [[Piece::empty(); SIZE]; SIZE];
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != SIZE {
                return Err(RulesError::Format(format!(
                    "row {r}: expected {SIZE} cells, found {}",
                    row.len()
                )));
            }
            for (c, piece) in row.into_iter().enumerate() {
                let neutral = piece.color() == Color::Neutral;
                if neutral != is_corner(r, c) {
                    return Err(RulesError::Format(format!(
                        "cell ({r}, {c}) holds {piece}, corners must be neutral and only corners"
                    )));
                }
                cells[r][c] = piece;
            }
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|p| match p.color() {
                    Color::White => format!("W{}", p.glyph()),
                    Color::Black => format!("B{}", p.glyph()),
                    _ => format!("{} ", p.glyph()),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
