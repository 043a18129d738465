use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{
    BOARD_CELLS, BotInput, Difficulty, GameState, Mark, SessionRng, calculate_move, log,
};

use crate::render::{render_board, score_line, status_line};
use crate::score::Score;

pub struct GameOptions {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub bot_delay_ms: u64,
}

/// Parses a human move: 1-9, mapped to board indices 0-8.
pub fn parse_cell(input: &str) -> Result<usize, String> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if !(1..=BOARD_CELLS).contains(&number) {
        return Err(format!("{} is out of range, enter 1-9", number));
    }
    Ok(number - 1)
}

/// Interactive human-vs-bot rounds until the player declines to continue.
pub fn run(options: &GameOptions, rng: &mut SessionRng) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = GameState::new();
    let mut score = Score::new();

    println!("Tic-Tac-Toe ({} bot)", options.difficulty);
    println!("You play {}. Enter a cell number 1-9.", options.human_mark);

    loop {
        println!("\n{}", render_board(&state));
        println!("{}", status_line(&state));

        if state.is_over() {
            score.record(state.status);
            println!("{}", score_line(&score));

            print!("Play again? [y/n] ");
            let _ = io::stdout().flush();
            match lines.next() {
                Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => {
                    state.reset();
                    continue;
                }
                _ => break,
            }
        }

        if state.current_mark == options.human_mark {
            print!("Your move: ");
            let _ = io::stdout().flush();
            let Some(Ok(input)) = lines.next() else { break };

            let cell = match parse_cell(&input) {
                Ok(cell) => cell,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };
            if let Err(message) = state.place_mark(cell) {
                println!("{}", message);
            }
        } else {
            // Purely cosmetic "thinking" pause; the engine itself returns
            // immediately.
            thread::sleep(Duration::from_millis(options.bot_delay_ms));

            let input = BotInput::from_game_state(&state);
            match calculate_move(options.difficulty, &input, rng) {
                Some(cell) => {
                    println!("Bot plays {}", cell + 1);
                    if let Err(message) = state.place_mark(cell) {
                        log!("Bot produced an invalid move {}: {}", cell, message);
                        break;
                    }
                }
                None => {
                    log!("Bot had no move on a finished board");
                    break;
                }
            }
        }
    }

    println!("\nFinal {}", score_line(&score));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_maps_to_zero_based_index() {
        assert_eq!(parse_cell("1"), Ok(0));
        assert_eq!(parse_cell(" 5 "), Ok(4));
        assert_eq!(parse_cell("9"), Ok(8));
    }

    #[test]
    fn test_parse_cell_rejects_out_of_range() {
        assert!(parse_cell("0").is_err());
        assert!(parse_cell("10").is_err());
    }

    #[test]
    fn test_parse_cell_rejects_garbage() {
        assert!(parse_cell("abc").is_err());
        assert!(parse_cell("").is_err());
    }
}
