use std::io::Cursor;

use bsm_decoder::Records;
use bsm_tests::build;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_decode_trail(c: &mut Criterion) {
    let trail = build::trail(1_000);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(trail.len() as u64));
    group.bench_function("trail_1000_records", |b| {
        b.iter(|| {
            let records = Records::new(Cursor::new(black_box(&trail)));
            let mut tokens = 0usize;
            for record in records {
                tokens += record.unwrap().tokens.len();
            }
            black_box(tokens)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode_trail);
criterion_main!(benches);
