//! Report rendering and insert-query generation benchmarks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use gledger::{read_delim, text_fmt, Record, RecordSet, TextBuf};

fn sample_set(rows: usize) -> RecordSet {
    let mut set = RecordSet::new(4);
    let mut headers = Record::new(4);
    for (index, name) in ["ID", "Username", "First Name", "Last Name"]
        .iter()
        .enumerate()
    {
        headers.set_field(index, TextBuf::from(*name));
    }
    set.set_headers(headers).unwrap();

    for row in 0..rows {
        let line = text_fmt!("{}:user{}:First{}:Last{}", row, row, row, row);
        set.add_record(Record::tokenize(&line, b':')).unwrap();
    }
    set
}

fn sample_text(rows: usize) -> String {
    let mut text = String::from("ID:Username:Enabled\ninteger:string:boolean\n");
    for row in 0..rows {
        text.push_str(&format!("{}:user{}:true\n", row, row));
    }
    text
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_render");

    for rows in [10usize, 100, 1000] {
        let set = sample_set(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &set, |b, set| {
            b.iter(|| black_box(set.text_report()));
        });
    }

    group.finish();
}

fn bench_insert_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_queries");

    for rows in [10usize, 100] {
        let mut set = sample_set(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| {
                set.seek_start();
                while let Some(query) = set.next_insert_query("users").unwrap() {
                    black_box(query);
                }
            });
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("delim_parse");

    let text = sample_text(100);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("rows_100", |b| {
        b.iter(|| black_box(read_delim(&mut black_box(text.as_bytes()), b':').unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_insert_queries, bench_parse);
criterion_main!(benches);
