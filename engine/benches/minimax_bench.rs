use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::board::Board;
use tictactoe_engine::bot_controller::{BotKind, calculate_move, find_best_move};
use tictactoe_engine::game_state::GameState;
use tictactoe_engine::types::{GameStatus, Mark};

fn bench_best_move_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_empty", |b| {
        b.iter(|| {
            let mut board = Board::new(3);
            find_best_move(&mut board, 3)
        });
    });
}

fn bench_best_move_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_midgame", |b| {
        let mut board = Board::new(3);
        let moves = [
            (1, 1, Mark::X),
            (0, 0, Mark::O),
            (2, 0, Mark::X),
            (0, 2, Mark::O),
        ];
        for (row, col, mark) in moves {
            board.set(row, col, mark);
        }

        b.iter(|| {
            let mut board = board.clone();
            find_best_move(&mut board, 3)
        });
    });
}

fn bench_full_game_minimax_vs_random(c: &mut Criterion) {
    c.bench_function("minimax_3x3_full_game_vs_random", |b| {
        b.iter(|| {
            let mut state = GameState::new(3, 3, Mark::O);

            while state.status == GameStatus::InProgress {
                let kind = match state.current_mark {
                    Mark::X => BotKind::Minimax,
                    _ => BotKind::Random,
                };
                let mut scratch = state.board.clone();
                let Some(pos) = calculate_move(kind, &mut scratch, state.win_count) else {
                    break;
                };
                state.place_mark(pos.row, pos.col).unwrap();
            }

            state.status
        });
    });
}

criterion_group!(
    benches,
    bench_best_move_empty_board,
    bench_best_move_mid_game,
    bench_full_game_minimax_vs_random
);
criterion_main!(benches);
