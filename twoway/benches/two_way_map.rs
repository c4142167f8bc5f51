use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use twoway::TwoWayMap;

const N: u64 = 10_000;

fn filled() -> TwoWayMap<u64, String> {
    (0..N).map(|i| (i, format!("v{i}"))).collect()
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("TwoWayMap::insert", |b| {
        b.iter(|| {
            let mut map = TwoWayMap::with_capacity(N as usize);
            for i in 0..N {
                map.insert(i, i.wrapping_mul(31)).unwrap();
            }
            black_box(map)
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let map = filled();
    let rights = (0..N).map(|i| format!("v{i}")).collect::<Vec<_>>();

    c.bench_function("TwoWayMap::get_right", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(map.get_right(&i));
            }
        })
    });

    c.bench_function("TwoWayMap::get_left", |b| {
        b.iter(|| {
            for right in &rights {
                black_box(map.get_left(right.as_str()));
            }
        })
    });
}

fn bench_set_right(c: &mut Criterion) {
    c.bench_function("TwoWayMap::set_right", |b| {
        b.iter_batched(
            filled,
            |mut map| {
                for i in (0..N).step_by(97) {
                    map.set_right(i, format!("w{i}"));
                }
                map
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_set_right);
criterion_main!(benches);
