use boardstate::game::GameState;
use boardstate::logger::init_logging;
use boardstate::moves::Move;
use boardstate::square::Square;
use std::io::{self, BufRead};
use tracing::{info, warn};

const DEFAULT_LOG: &str = "logs/boardstate.log";

fn main() {
    let log_path = std::env::var("BOARDSTATE_LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());
    if let Err(e) = init_logging(&log_path, "boardstate=info") {
        eprintln!("warning: logging disabled ({log_path}: {e})");
    }

    // Optional starting position as the command-line arguments.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut game = if args.is_empty() {
        GameState::new()
    } else {
        match GameState::from_position_string(&args.join(" ")) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        }
    };
    info!(position = %game, "session started");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "position" => {
                if let Some(new_game) = handle_position(&parts) {
                    game = new_game;
                }
            }
            "move" => match parts.get(1).map(|s| s.parse::<Move>()) {
                Some(Ok(mv)) => match game.play(mv) {
                    Ok(()) => println!("{game}"),
                    Err(e) => println!("error: {e}"),
                },
                Some(Err(e)) => println!("error: {e}"),
                None => println!("error: move needs an argument"),
            },
            "undo" => match game.undo_move() {
                Some(mv) => println!("undone {mv}"),
                None => println!("error: nothing to undo"),
            },
            "legal" => match parts.get(1).map(|s| s.parse::<Move>()) {
                Some(Ok(mv)) => println!("{}", game.is_move_pseudo_legal(mv.from, mv.to)),
                Some(Err(e)) => println!("error: {e}"),
                None => println!("error: legal needs an argument"),
            },
            "piece" => match parts.get(1).map(|s| s.parse::<Square>()) {
                Some(Ok(sq)) => match game.get_piece_at(sq) {
                    Some(p) => println!("{} {p}", p.to_char()),
                    None => println!("empty"),
                },
                Some(Err(e)) => println!("error: {e}"),
                None => println!("error: piece needs a square"),
            },
            "fen" => println!("{game}"),
            "board" => println!("{}", game.board()),
            "d" | "display" => {
                println!("{}", game.board().diagram());
                println!("{game}");
            }
            "quit" => break,
            _ => {
                warn!(command, "unknown command");
                println!("error: unknown command `{command}`");
            }
        }
    }
    info!(position = %game, "session ended");
}

/// `position startpos|fen <six fields> [moves m1 m2 ...]`
fn handle_position(parts: &[&str]) -> Option<GameState> {
    let moves_idx = parts.iter().position(|&p| p == "moves");
    let fields_end = moves_idx.unwrap_or(parts.len());

    let mut game = match parts.get(1) {
        Some(&"startpos") => GameState::new(),
        Some(&"fen") => {
            let text = parts[2..fields_end].join(" ");
            match GameState::from_position_string(&text) {
                Ok(g) => g,
                Err(e) => {
                    println!("error: {e}");
                    return None;
                }
            }
        }
        _ => {
            println!("error: expected `startpos` or `fen`");
            return None;
        }
    };

    if let Some(idx) = moves_idx {
        for text in &parts[idx + 1..] {
            let applied = text
                .parse::<Move>()
                .map_err(|e| e.to_string())
                .and_then(|mv| game.play(mv).map_err(|e| e.to_string()));
            if let Err(e) = applied {
                println!("error: {text}: {e}");
                return None;
            }
        }
    }

    Some(game)
}
