use crate::board::SIZE;
use crate::error::RulesError;
use crate::moves::MoveOutcome;
use crate::piece::Color;
use crate::playout::random_move;
use crate::session::{GameSession, Phase};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    color: String,
    direction: String,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    current_turn: String,
    phase: Phase,
    selected_destination: Option<[usize; 2]>,
    white_exits: u32,
    black_exits: u32,
    game_over: bool,
    winner: Option<String>,
    movable_pieces: Vec<[usize; 2]>,
}

#[derive(Serialize)]
struct ActionResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    outcome: Option<MoveOutcome>,
    error: Option<String>,
}

fn build_board_state(session: &GameSession) -> BoardState {
    let board = session.board();
    let squares: Vec<Vec<Option<SquarePiece>>> = (0..SIZE)
        .map(|r| {
            (0..SIZE)
                .map(|c| {
                    board
                        .get_piece(r, c)
                        .ok()
                        .filter(|p| p.is_mobile())
                        .map(|p| SquarePiece {
                            color: p.color().to_string(),
                            direction: p.direction().to_string(),
                        })
                })
                .collect()
        })
        .collect();

    let movable_pieces = if session.is_terminal() {
        Vec::new()
    } else {
        board
            .generate_moves(session.active())
            .iter()
            .map(|m| [m.from.0, m.from.1])
            .collect()
    };

    BoardState {
        squares,
        current_turn: session.active().to_string(),
        phase: session.phase(),
        selected_destination: session.pending_destination().ok().map(|(r, c)| [r, c]),
        white_exits: session.exit_count(Color::White),
        black_exits: session.exit_count(Color::Black),
        game_over: session.is_terminal(),
        winner: session.winner().map(|c| c.to_string()),
        movable_pieces,
    }
}

fn respond(session: &GameSession, result: Result<Option<MoveOutcome>, RulesError>) -> JsValue {
    let response = match result {
        Ok(outcome) => ActionResult {
            board_state: Some(build_board_state(session)),
            outcome,
            error: None,
        },
        Err(e) => ActionResult {
            board_state: None,
            outcome: None,
            error: Some(e.to_string()),
        },
    };
    serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub struct Game {
    session: GameSession,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            session: GameSession::new(),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        let state = build_board_state(&self.session);
        serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
    }

    pub fn select_piece(&mut self, row: usize, col: usize) -> JsValue {
        let result = self.session.select(row, col).map(|_| None);
        respond(&self.session, result)
    }

    pub fn cancel(&mut self) -> JsValue {
        let result = self.session.cancel().map(|_| None);
        respond(&self.session, result)
    }

    pub fn confirm(&mut self) -> JsValue {
        let result = self.session.confirm().map(Some);
        respond(&self.session, result)
    }

    pub fn make_random_move(&mut self) -> JsValue {
        if self.session.is_terminal() {
            return respond(&self.session, Ok(None));
        }
        match random_move(self.session.board(), self.session.active()) {
            Some(mv) => {
                let result = self.session.play(mv.from.0, mv.from.1).map(Some);
                respond(&self.session, result)
            }
            None => respond(&self.session, Ok(None)),
        }
    }

    pub fn reset(&mut self) -> JsValue {
        self.session.reset();
        self.get_board_state()
    }

    pub fn save(&self) -> Option<String> {
        self.session.to_json().ok()
    }

    pub fn load(&mut self, json: &str) -> JsValue {
        let result = GameSession::from_json(json).map(|session| {
            self.session = session;
            None
        });
        respond(&self.session, result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
