use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::rngs::mock::StepRng;
use sparring::{select_move_report, Difficulty, Position};

fn bench_select(c: &mut Criterion) {
    // Never rolls random, so every iteration runs the full search.
    let mut rng = StepRng::new(u64::MAX, 0);
    for tier in [Difficulty::Beginner, Difficulty::Amateur, Difficulty::Intermediate, Difficulty::Expert] {
        let mut p = Position::startpos();
        c.bench_function(&format!("select_move_{tier}_startpos"), |ben| {
            ben.iter(|| {
                let r = select_move_report(black_box(&mut p), tier, &mut rng);
                black_box(r.map(|s| s.nodes))
            })
        });
    }
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
