use rand::Rng;
use tictactoe_engine::bot_controller::{BotKind, calculate_move};
use tictactoe_engine::game_state::GameState;
use tictactoe_engine::log;
use tictactoe_engine::types::{GameStatus, Mark};
use tictactoe_engine::win_detector::check_win_with_line;

use crate::config::{Config, FirstPlayer, OpponentKind, validate_dimension};
use crate::input;

const WELCOME_MSG: &str = "Welcome to TicTacToe";
const OPPONENT_PROMPT: &str = "Please select opponent (CPU,P2P): ";
const DIMENSION_PROMPT: &str = "Please select board size: ";

/// Runs games until the player declines a rematch. Anything the config left
/// unset is prompted for once at startup.
pub fn run(config: &Config) -> Result<(), String> {
    println!("{WELCOME_MSG}");
    println!();

    let opponent = match config.opponent {
        Some(kind) => kind,
        None => prompt_opponent()?,
    };
    let dimension = match config.dimension {
        Some(dimension) => dimension,
        None => prompt_dimension(config.win_count)?,
    };

    let bot_kind = config.bot.to_bot_kind();
    log!("Starting {dimension}x{dimension} games, {} in a row to win", config.win_count);
    if opponent == OpponentKind::Cpu && bot_kind == BotKind::Minimax && dimension > 3 {
        log!("Full-depth search on a {dimension}x{dimension} board can take a very long time");
    }

    loop {
        let first_mark = first_mark_for(opponent, config.first_player);
        let mut state = GameState::new(dimension, config.win_count, first_mark);

        play_game(&mut state, opponent, bot_kind)?;
        announce(&state);

        if !prompt_play_again()? {
            break;
        }
    }

    Ok(())
}

/// O opens by default and the computer always plays X, so a computer
/// opening means X starts.
fn first_mark_for(opponent: OpponentKind, first_player: FirstPlayer) -> Mark {
    match opponent {
        OpponentKind::P2p => Mark::O,
        OpponentKind::Cpu => match first_player {
            FirstPlayer::Human => Mark::O,
            FirstPlayer::Computer => Mark::X,
            FirstPlayer::Random => {
                if rand::rng().random() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        },
    }
}

fn play_game(state: &mut GameState, opponent: OpponentKind, bot_kind: BotKind) -> Result<(), String> {
    while state.status == GameStatus::InProgress {
        println!("{}", state.board);

        let cpu_to_move = opponent == OpponentKind::Cpu && state.current_mark == Mark::X;
        if cpu_to_move {
            run_cpu_turn(state, bot_kind)?;
        } else {
            run_human_turn(state)?;
        }
    }

    println!("{}", state.board);
    Ok(())
}

fn run_cpu_turn(state: &mut GameState, bot_kind: BotKind) -> Result<(), String> {
    let mut scratch = state.board.clone();
    let Some(pos) = calculate_move(bot_kind, &mut scratch, state.win_count) else {
        // No square left; the board state already reflects the finished game.
        return Ok(());
    };

    log!("Computer plays ({}, {})", pos.row, pos.col);
    state
        .place_mark(pos.row, pos.col)
        .map_err(|e| format!("Computer move rejected: {e}"))
}

fn run_human_turn(state: &mut GameState) -> Result<(), String> {
    let dimension = state.board.dimension();

    loop {
        let prompt = format!(
            "Player {}, enter your move (row col): ",
            state.current_mark.symbol()
        );
        let line = input::prompt_line(&prompt)?;

        let (row, col) = match input::parse_coordinates(&line) {
            Ok(coordinates) => coordinates,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if row >= dimension || col >= dimension {
            println!("Coordinates must be between 0 and {}", dimension - 1);
            continue;
        }
        if state.board.is_occupied(row, col) {
            println!("Square ({row}, {col}) is already taken");
            continue;
        }

        match state.place_mark(row, col) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{e}"),
        }
    }
}

fn announce(state: &GameState) {
    match state.status {
        GameStatus::XWon | GameStatus::OWon => {
            let Some(winner) = state.winner() else {
                return;
            };
            if let Some(line) = check_win_with_line(&state.board, state.win_count) {
                println!(
                    "Player {} wins with ({}, {}) to ({}, {})!",
                    winner.symbol(),
                    line.start.row,
                    line.start.col,
                    line.end.row,
                    line.end.col
                );
            } else {
                println!("Player {} wins!", winner.symbol());
            }
            log!("Game over: {} won after {} moves", winner.symbol(), state.board.taken_count());
        }
        GameStatus::Draw => {
            println!("It's a draw!");
            log!("Game over: draw after {} moves", state.board.taken_count());
        }
        GameStatus::InProgress => {}
    }
}

fn prompt_opponent() -> Result<OpponentKind, String> {
    loop {
        let line = input::prompt_line(OPPONENT_PROMPT)?;
        match input::parse_opponent(&line) {
            Ok(kind) => return Ok(kind),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_dimension(win_count: usize) -> Result<usize, String> {
    loop {
        let line = input::prompt_line(DIMENSION_PROMPT)?;
        let dimension = match input::parse_dimension(&line) {
            Ok(dimension) => dimension,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match validate_dimension(dimension, win_count) {
            Ok(()) => return Ok(dimension),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_play_again() -> Result<bool, String> {
    loop {
        let line = input::prompt_line("Play again? (y/n): ")?;
        match input::parse_yes_no(&line) {
            Ok(answer) => return Ok(answer),
            Err(e) => println!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_always_opens_p2p_games() {
        assert_eq!(first_mark_for(OpponentKind::P2p, FirstPlayer::Computer), Mark::O);
    }

    #[test]
    fn test_first_mark_follows_first_player_in_cpu_games() {
        assert_eq!(first_mark_for(OpponentKind::Cpu, FirstPlayer::Human), Mark::O);
        assert_eq!(first_mark_for(OpponentKind::Cpu, FirstPlayer::Computer), Mark::X);
    }

    #[test]
    fn test_random_first_mark_is_a_real_mark() {
        let mark = first_mark_for(OpponentKind::Cpu, FirstPlayer::Random);
        assert!(mark == Mark::X || mark == Mark::O);
    }
}
