use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyword_match::core::{
    check_answers, select_round, Board, DragController, SimpleRng, SlotAssignment, UsageMap,
    CELL_BIOLOGY,
};
use keyword_match::types::{DropTarget, SlotId, TileId};

fn bench_select_round(c: &mut Criterion) {
    let mut usage = UsageMap::new();
    let mut rng = SimpleRng::new(12345);
    let mut now = 0u64;

    c.bench_function("select_round", |b| {
        b.iter(|| {
            now += 1;
            select_round(black_box(CELL_BIOLOGY), &mut usage, now, &mut rng)
        })
    });
}

fn bench_drop_handling(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let round = select_round(CELL_BIOLOGY, &mut UsageMap::new(), 1, &mut rng);
    let board = Board::deal(&round, &mut rng);
    let mut assignment = SlotAssignment::new(board.len());
    let mut drag = DragController::new();

    c.bench_function("pick_up_and_drop", |b| {
        let mut i = 0u8;
        b.iter(|| {
            let tile = TileId(i % 5);
            let slot = SlotId((i / 5) % 5);
            drag.pick_up(tile, &board, false);
            drag.drop_on(black_box(DropTarget::Slot(slot)), &mut assignment, false);
            i = i.wrapping_add(1);
        })
    });
}

fn bench_check_answers(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let round = select_round(CELL_BIOLOGY, &mut UsageMap::new(), 1, &mut rng);
    let board = Board::deal(&round, &mut rng);
    let mut assignment = SlotAssignment::new(board.len());
    for i in 0..5 {
        assignment.place(TileId(i), SlotId(i));
    }

    c.bench_function("check_answers", |b| {
        b.iter(|| check_answers(black_box(&board), black_box(&assignment), 30_000))
    });
}

criterion_group!(
    benches,
    bench_select_round,
    bench_drop_handling,
    bench_check_answers
);
criterion_main!(benches);
