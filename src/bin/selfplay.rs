use squadro::playout::{random_move, PlayoutEnd};
use squadro::{Color, GameSession};

const MAX_MOVES: u32 = 300;

fn main() {
    env_logger::init();

    let mut session = GameSession::new();
    let mut move_count = 0;
    let mut end = PlayoutEnd::MoveLimit;

    while move_count < MAX_MOVES {
        if let Some(winner) = session.winner() {
            end = PlayoutEnd::Won(winner);
            break;
        }
        let Some(mv) = random_move(session.board(), session.active()) else {
            end = PlayoutEnd::Blocked(session.active());
            break;
        };
        let player = session.active();
        match session.play(mv.from.0, mv.from.1) {
            Ok(outcome) => {
                move_count += 1;
                let mut notes = Vec::new();
                if !outcome.bumps.is_empty() {
                    notes.push(format!("{} bump(s)", outcome.bumps.len()));
                }
                if outcome.turned_around {
                    notes.push("turns around".to_string());
                }
                if outcome.exited {
                    notes.push("exits".to_string());
                }
                println!("{move_count:>3}. {player:<5} {mv} {}", notes.join(", "));
            }
            Err(e) => {
                eprintln!("engine rejected {mv}: {e}");
                break;
            }
        }
    }

    println!("\n{}", session.board());
    println!(
        "exits: white {}, black {}",
        session.exit_count(Color::White),
        session.exit_count(Color::Black)
    );
    let result = match end {
        PlayoutEnd::Won(color) => format!("{color} wins"),
        PlayoutEnd::Blocked(color) => format!("{color} has no move"),
        PlayoutEnd::MoveLimit => "move limit reached".to_string(),
    };
    eprintln!("Game over after {move_count} moves: {result}");
}
