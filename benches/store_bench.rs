//! Benchmarks for TextDB store operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;
use textdb::format;
use textdb::RecordStore;

const RECORDS: usize = 1_000;

fn filled_store(dir: &TempDir) -> RecordStore {
    let mut store = RecordStore::create(dir.path().join("bench.txt"));
    for i in 0..RECORDS {
        store
            .append(format!("record {}\nwith a second line", i))
            .unwrap();
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();

    c.bench_function("append_1000", |b| {
        b.iter(|| filled_store(black_box(&dir)))
    });

    c.bench_function("insert_at_front", |b| {
        b.iter_batched(
            || filled_store(&dir),
            |mut store| store.insert_at(1, "front").unwrap(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("move_last_to_first", |b| {
        b.iter_batched(
            || filled_store(&dir),
            |mut store| store.move_record(RECORDS, 1).unwrap(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("save_1000", |b| {
        let mut store = filled_store(&dir);
        b.iter(|| store.save().unwrap())
    });

    let encoded = format::encode(filled_store(&dir).iter());
    c.bench_function("decode_1000", |b| {
        b.iter(|| format::decode(black_box(&encoded)))
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
