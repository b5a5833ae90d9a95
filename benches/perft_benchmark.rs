use criterion::{criterion_group, criterion_main, Criterion};

use mailbox_chess::board::Board;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("perft depth 4 from the starting position", |b| {
        b.iter(|| Board::starting_position().perft(4))
    });

    c.bench_function("perft depth 3 from the kiwipete position", |b| {
        b.iter(|| {
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap()
                .perft(3)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
