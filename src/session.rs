// =============================================================================
// Game session
//
// One game in progress: the board, whose turn it is, and the select / confirm
// / cancel cycle a front-end drives. Hosts running several games keep one
// session per game and persist it between requests as JSON.
// =============================================================================

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, LANES};
use crate::config::RulesConfig;
use crate::error::{Result, RulesError};
use crate::moves::MoveOutcome;
use crate::piece::Color;
use crate::resolver::MoveResolver;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    ChoosingPiece,
    ConfirmingMove { row: usize, col: usize },
    Terminal,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::ChoosingPiece => "choosing a piece",
            Phase::ConfirmingMove { .. } => "confirming a move",
            Phase::Terminal => "the game is over",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    active: Color,
    phase: Phase,
    resolver: MoveResolver,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::new())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        GameSession {
            board: Board::new(),
            active: Color::White,
            phase: Phase::ChoosingPiece,
            resolver: MoveResolver::with_config(config),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    pub fn active(&self) -> Color {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn resolver(&self) -> &MoveResolver {
        &self.resolver
    }

    pub fn exit_count(&self, color: Color) -> u32 {
        self.resolver.exit_count(color)
    }

    pub fn winner(&self) -> Option<Color> {
        self.resolver.winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    fn unexpected(&self, action: &'static str) -> RulesError {
        RulesError::UnexpectedAction {
            action,
            phase: self.phase.name(),
        }
    }

    /// Pick the piece to move. Only the active player's pieces can be picked.
    pub fn select(&mut self, row: usize, col: usize) -> Result<()> {
        if self.phase != Phase::ChoosingPiece {
            return Err(self.unexpected("select"));
        }
        if !self.resolver.is_playable(&self.board, row, col, self.active) {
            // Report out-of-range coordinates as such.
            self.board.get_piece(row, col)?;
            return Err(RulesError::NotOwner {
                row,
                col,
                active: self.active,
            });
        }
        self.phase = Phase::ConfirmingMove { row, col };
        Ok(())
    }

    /// Where the selected piece would land, for a confirmation preview.
    pub fn pending_destination(&self) -> Result<(usize, usize)> {
        match self.phase {
            Phase::ConfirmingMove { row, col } => self.board.destination(row, col),
            _ => Err(self.unexpected("preview")),
        }
    }

    /// Drop the current selection without touching the board.
    pub fn cancel(&mut self) -> Result<()> {
        match self.phase {
            Phase::ConfirmingMove { .. } => {
                self.phase = Phase::ChoosingPiece;
                Ok(())
            }
            _ => Err(self.unexpected("cancel")),
        }
    }

    /// Play the selected piece. The turn passes only when the piece moved;
    /// a winning move makes the session terminal.
    pub fn confirm(&mut self) -> Result<MoveOutcome> {
        let (row, col) = match self.phase {
            Phase::ConfirmingMove { row, col } => (row, col),
            _ => return Err(self.unexpected("confirm")),
        };
        self.phase = Phase::ChoosingPiece;

        let outcome = self
            .resolver
            .play_piece(&mut self.board, row, col, self.active)
            .map_err(|e| {
                warn!("move from ({row}, {col}) failed: {e}");
                e
            })?;

        if outcome.terminal {
            self.phase = Phase::Terminal;
        } else if outcome.moved {
            self.active = self.active.opposite();
        } else {
            debug!("move from ({row}, {col}) unavailable, {} to play again", self.active);
        }
        Ok(outcome)
    }

    /// Select and confirm in one step.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        self.select(row, col)?;
        self.confirm()
    }

    /// Start over with a fresh board, white to move. The config is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.resolver.config().clone());
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<GameSession> {
        let session: GameSession = serde_json::from_str(json)?;
        if !session.active.is_player() {
            return Err(RulesError::Format(format!(
                "active player must be white or black, found {}",
                session.active
            )));
        }
        session
            .resolver
            .config()
            .validate()
            .map_err(|e| RulesError::Format(e.to_string()))?;
        if (session.phase == Phase::Terminal) != session.resolver.is_terminal() {
            return Err(RulesError::Format(
                "phase and resolver disagree on whether the game is over".into(),
            ));
        }
        if session.winner().is_some() != session.resolver.is_terminal() {
            return Err(RulesError::Format(
                "exit counts and the game-over flag disagree".into(),
            ));
        }
        for color in [Color::White, Color::Black] {
            let on_board = session.board.pieces(color).count();
            let exited = session.exit_count(color) as usize;
            if on_board + exited != LANES.count() {
                return Err(RulesError::Format(format!(
                    "{color} has {on_board} piece(s) on the board and {exited} exited"
                )));
            }
        }
        Ok(session)
    }
}
