use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Empty,
    Neutral,
}

impl Color {
    /// The other player. Empty and neutral have no opponent and map to themselves.
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            other => other,
        }
    }

    /// True for the two colors that belong to a player.
    pub fn is_player(self) -> bool {
        matches!(self, Color::White | Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Empty => "empty",
            Color::Neutral => "neutral",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Empty,
    Neutral,
}

impl Direction {
    /// The opposite mobility direction. Only defined for N/E/S/W.
    pub fn reversed(self) -> Result<Direction> {
        match self {
            Direction::North => Ok(Direction::South),
            Direction::South => Ok(Direction::North),
            Direction::East => Ok(Direction::West),
            Direction::West => Ok(Direction::East),
            other => Err(RulesError::InvalidReversal(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Empty => "empty",
            Direction::Neutral => "neutral",
        };
        f.pad(name)
    }
}

/// A cell's content. The color/direction pairing is always valid: white pieces
/// face east or west, black pieces face north or south, and empty or neutral
/// cells carry the matching sentinel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPiece")]
pub struct Piece {
    color: Color,
    direction: Direction,
}

/// Unchecked wire form of a [`Piece`].
#[derive(Deserialize)]
struct RawPiece {
    color: Color,
    direction: Direction,
}

impl TryFrom<RawPiece> for Piece {
    type Error = RulesError;

    fn try_from(raw: RawPiece) -> Result<Piece> {
        Piece::try_new(raw.color, raw.direction)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::empty()
    }
}

impl Piece {
    pub const fn empty() -> Piece {
        Piece {
            color: Color::Empty,
            direction: Direction::Empty,
        }
    }

    pub const fn neutral() -> Piece {
        Piece {
            color: Color::Neutral,
            direction: Direction::Neutral,
        }
    }

    pub const fn black_north() -> Piece {
        Piece {
            color: Color::Black,
            direction: Direction::North,
        }
    }

    pub const fn black_south() -> Piece {
        Piece {
            color: Color::Black,
            direction: Direction::South,
        }
    }

    pub const fn white_east() -> Piece {
        Piece {
            color: Color::White,
            direction: Direction::East,
        }
    }

    pub const fn white_west() -> Piece {
        Piece {
            color: Color::White,
            direction: Direction::West,
        }
    }

    /// Build a piece from raw parts, rejecting any pairing the named
    /// constructors could not produce.
    pub fn try_new(color: Color, direction: Direction) -> Result<Piece> {
        match (color, direction) {
            (Color::Empty, Direction::Empty) => Ok(Piece::empty()),
            (Color::Neutral, Direction::Neutral) => Ok(Piece::neutral()),
            (Color::Black, Direction::North) => Ok(Piece::black_north()),
            (Color::Black, Direction::South) => Ok(Piece::black_south()),
            (Color::White, Direction::East) => Ok(Piece::white_east()),
            (Color::White, Direction::West) => Ok(Piece::white_west()),
            _ => Err(RulesError::InvalidPiece { color, direction }),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.color == Color::Empty
    }

    /// True for white and black pieces, the only ones that ever move.
    pub fn is_mobile(&self) -> bool {
        self.color.is_player()
    }

    /// True once the piece has turned around and is heading home.
    pub fn is_returning(&self) -> bool {
        matches!(
            (self.color, self.direction),
            (Color::White, Direction::West) | (Color::Black, Direction::South)
        )
    }

    /// Flip the direction in place. Fails, leaving the piece untouched, for
    /// empty and neutral cells.
    pub fn reverse(&mut self) -> Result<()> {
        self.direction = self.direction.reversed()?;
        Ok(())
    }

    pub fn reversed(mut self) -> Result<Piece> {
        self.reverse()?;
        Ok(self)
    }

    /// One-character board glyph.
    pub fn glyph(&self) -> char {
        match (self.color, self.direction) {
            (Color::White, Direction::East) => '>',
            (Color::White, _) => '<',
            (Color::Black, Direction::North) => '^',
            (Color::Black, _) => 'v',
            (Color::Neutral, _) => 'X',
            (Color::Empty, _) => '.',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White | Color::Black => write!(f, "{} facing {}", self.color, self.direction),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_pairs() {
        assert_eq!(Direction::North.reversed().unwrap(), Direction::South);
        assert_eq!(Direction::South.reversed().unwrap(), Direction::North);
        assert_eq!(Direction::East.reversed().unwrap(), Direction::West);
        assert_eq!(Direction::West.reversed().unwrap(), Direction::East);
    }

    #[test]
    fn reversing_sentinels_fails() {
        assert!(matches!(
            Direction::Empty.reversed(),
            Err(RulesError::InvalidReversal(Direction::Empty))
        ));
        let mut corner = Piece::neutral();
        assert!(corner.reverse().is_err());
        assert_eq!(corner, Piece::neutral(), "failed reversal must not mutate");
    }

    #[test]
    fn reverse_keeps_color() {
        let mut piece = Piece::black_north();
        piece.reverse().unwrap();
        assert_eq!(piece, Piece::black_south());
        assert_eq!(Piece::white_west().reversed().unwrap(), Piece::white_east());
    }

    #[test]
    fn try_new_rejects_mismatched_pairs() {
        assert!(Piece::try_new(Color::White, Direction::North).is_err());
        assert!(Piece::try_new(Color::Black, Direction::East).is_err());
        assert!(Piece::try_new(Color::Empty, Direction::Neutral).is_err());
        assert!(Piece::try_new(Color::Neutral, Direction::West).is_err());
        assert_eq!(
            Piece::try_new(Color::White, Direction::West).unwrap(),
            Piece::white_west()
        );
    }

    #[test]
    fn returning_leg_detection() {
        assert!(Piece::white_west().is_returning());
        assert!(Piece::black_south().is_returning());
        assert!(!Piece::white_east().is_returning());
        assert!(!Piece::black_north().is_returning());
        assert!(!Piece::empty().is_returning());
    }

    #[test]
    fn json_uses_lowercase_names() {
        let json = serde_json::to_string(&Piece::black_south()).unwrap();
        assert_eq!(json, r#"{"color":"black","direction":"south"}"#);
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Piece::black_south());
    }

    #[test]
    fn json_rejects_invalid_pairing() {
        let result = serde_json::from_str::<Piece>(r#"{"color":"white","direction":"south"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::Neutral.opposite(), Color::Neutral);
    }
}
