use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{
    BotInput, Mark, Outcome, calculate_minimax_move, empty_board, evaluate,
};

fn bench_minimax_empty_board() {
    let input = BotInput {
        board: empty_board(),
        bot_mark: Mark::X,
    };
    calculate_minimax_move(&input);
}

fn bench_minimax_mid_game() {
    let mut board = empty_board();
    for (cell, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board[cell] = mark;
    }
    let input = BotInput {
        board,
        bot_mark: Mark::X,
    };
    calculate_minimax_move(&input);
}

fn bench_minimax_full_game() {
    let mut board = empty_board();
    let mut current = Mark::X;

    while evaluate(&board) == Outcome::Ongoing {
        let input = BotInput {
            board,
            bot_mark: current,
        };
        let Some(cell) = calculate_minimax_move(&input) else {
            break;
        };
        board[cell] = current;
        current = current.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("empty_board", |b| b.iter(bench_minimax_empty_board));

    group.bench_function("mid_game", |b| b.iter(bench_minimax_mid_game));

    group.bench_function("full_game", |b| b.iter(bench_minimax_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
