use std::io::Write;

use squadro::playout::{play_random_game, PlayoutEnd};
use squadro::{Color, GameSession};

const DEFAULT_GAMES: usize = 1000;
const DEFAULT_MAX_MOVES: u32 = 400;

#[derive(Debug, Default)]
struct Tally {
    white_wins: u32,
    black_wins: u32,
    blocked: u32,
    move_limit: u32,
    total_moves: u64,
    total_bumps: u64,
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let games = parse_arg(&args, 1, DEFAULT_GAMES);
    let max_moves = parse_arg(&args, 2, DEFAULT_MAX_MOVES);

    println!("=== Squadro random playouts (built {}) ===", env!("BUILD_TIMESTAMP"));
    println!("Games: {games}, max moves per game: {max_moves}\n");

    let mut tally = Tally::default();
    for i in 0..games {
        let result = match play_random_game(GameSession::new(), max_moves) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("game {i}: engine error: {e}");
                std::process::exit(1);
            }
        };
        match result.end {
            PlayoutEnd::Won(Color::White) => tally.white_wins += 1,
            PlayoutEnd::Won(_) => tally.black_wins += 1,
            PlayoutEnd::Blocked(_) => tally.blocked += 1,
            PlayoutEnd::MoveLimit => tally.move_limit += 1,
        }
        tally.total_moves += result.moves as u64;
        tally.total_bumps += result.bumps as u64;

        if (i + 1) % 100 == 0 {
            print!(".");
            std::io::stdout().flush().ok();
        }
    }

    let n = games.max(1) as f64;
    println!("\n");
    println!("  white wins:   {}", tally.white_wins);
    println!("  black wins:   {}", tally.black_wins);
    println!("  blocked:      {}", tally.blocked);
    println!("  move limit:   {}", tally.move_limit);
    println!("  avg moves:    {:.1}", tally.total_moves as f64 / n);
    println!("  avg bumps:    {:.1}", tally.total_bumps as f64 / n);
}
