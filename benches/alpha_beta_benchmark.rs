use draughts::alpha_beta_searcher::AlphaBetaSearcher;
use draughts::board::Board;
use draughts::draughts_position;
use draughts::evaluate::Difficulty;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta opening depth 5", |b| {
        b.iter(search_opening)
    });
    c.bench_function("alpha beta midgame depth 4", |b| {
        b.iter(search_midgame)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_opening() {
    let board = Board::starting_position();
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Hard);
    searcher.best_successor(&board, 5, true).unwrap();
}

fn search_midgame() {
    let board = draughts_position! {
        .o.o....
        ....o.o.
        .o...x..
        ..o.....
        .x.x....
        ..O...x.
        .x...x..
        x.....X.
    };
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Medium);
    searcher.best_successor(&board, 4, false).unwrap();
}
