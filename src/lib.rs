pub mod board;
pub mod config;
pub mod error;
pub mod moves;
pub mod piece;
pub mod playout;
pub mod resolver;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use board::Board;
pub use error::{Result, RulesError};
pub use moves::{Move, MoveOutcome};
pub use piece::{Color, Direction, Piece};
pub use resolver::MoveResolver;
pub use session::{GameSession, Phase};
