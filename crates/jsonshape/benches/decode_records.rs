//! Benchmark – decoding arrays of records from a parsed value tree
#![allow(missing_docs)]
#![allow(dead_code)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsonshape::{DecodeOptions, OnElementError, Value, record};

record! {
    struct Dog {
        name: String,
        age: i64,
        nickname: Option<String>,
        tags: Vec<String>,
    }
}

/// Build a deterministic array of `count` dog objects. Every `bad_every`-th
/// entry lacks its `name` so the skip policy has something to drop.
fn make_payload(count: usize, bad_every: usize) -> Value {
    let mut s = String::from("[");
    for i in 0..count {
        if i > 0 {
            s.push(',');
        }
        if bad_every > 0 && i % bad_every == bad_every - 1 {
            write!(s, r#"{{"age":{i},"tags":[]}}"#).unwrap();
        } else {
            write!(
                s,
                r#"{{"name":"dog-{i}","age":{i},"nickname":null,"tags":["a","b","c"]}}"#
            )
            .unwrap();
        }
    }
    s.push(']');
    jsonshape::parse(&s).expect("payload is valid JSON")
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");

    for &count in &[100usize, 1_000, 10_000] {
        let clean = make_payload(count, 0);
        group.bench_with_input(BenchmarkId::new("abort", count), &clean, |b, value| {
            b.iter(|| {
                let dogs: Vec<Dog> = jsonshape::decode(black_box(value)).unwrap();
                black_box(dogs.len());
            });
        });

        let dirty = make_payload(count, 10);
        let options = DecodeOptions {
            on_element_error: OnElementError::Skip,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("skip", count), &dirty, |b, value| {
            b.iter(|| {
                let dogs: Vec<Dog> = jsonshape::decode_with(black_box(value), options).unwrap();
                black_box(dogs.len());
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_decode }
criterion_main!(benches);
