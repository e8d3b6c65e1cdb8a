//! Text buffer benchmarks.
//!
//! Appending, formatted creation, hashing, and tokenization sit on the
//! file-reading and report-rendering paths, so they are measured here.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use gledger::{text_fmt, Record, TextBuf};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_append");

    group.bench_function("append_str_1k_growing", |b| {
        b.iter(|| {
            let mut buf = TextBuf::new();
            for _ in 0..64 {
                buf.append_str(black_box("0123456789abcdef"));
            }
            black_box(buf)
        });
    });

    group.bench_function("append_str_1k_preallocated", |b| {
        b.iter(|| {
            let mut buf = TextBuf::with_capacity(1024);
            for _ in 0..64 {
                buf.append_str(black_box("0123456789abcdef"));
            }
            black_box(buf)
        });
    });

    group.bench_function("format_exact_fit", |b| {
        b.iter(|| {
            black_box(text_fmt!(
                "INSERT INTO {} VALUES ({})",
                black_box("users"),
                black_box(42)
            ))
        });
    });

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_hash");

    for size in [16usize, 256, 4096] {
        let content = TextBuf::from_bytes(&vec![b'x'; size]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(content.hash()));
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_tokenize");

    let line = TextBuf::from("1:jdoe:John:Doe:true:2014-05-01");
    group.bench_function("six_fields", |b| {
        b.iter(|| black_box(Record::tokenize(black_box(&line), b':')));
    });

    let padded = TextBuf::from("   padded value   ");
    group.bench_function("trim", |b| {
        b.iter(|| {
            let mut buf = padded.clone();
            buf.trim();
            black_box(buf)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_hash, bench_tokenize);
criterion_main!(benches);
