use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use restless::board::{Board, START_FEN};
use restless::perft::perft;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: u32,
    expected_nodes: u64,
}

const CASES: &[BenchCase] = &[
    BenchCase { name: "startpos_d4", fen: START_FEN, depth: 4, expected_nodes: 197_281 },
    BenchCase {
        name: "kiwipete_d3",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 3,
        expected_nodes: 97_862,
    },
    BenchCase {
        name: "endgame_d5",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 5,
        expected_nodes: 674_624,
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let mut board = Board::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        assert_eq!(perft(&mut board, case.depth).nodes, case.expected_nodes);

        group.throughput(Throughput::Elements(case.expected_nodes));
        group.bench_function(case.name, |b| {
            b.iter(|| {
                let nodes = perft(black_box(&mut board), black_box(case.depth)).nodes;
                assert_eq!(nodes, case.expected_nodes);
                black_box(nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
