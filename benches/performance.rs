use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strbuf::{Direction, GrowthPolicy, Slice, StrBuf, StrBufConfig};

fn text(size: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        for (name, growth) in [("exact", GrowthPolicy::Exact), ("doubling", GrowthPolicy::Doubling)] {
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, &size| {
                let config = StrBufConfig::default().with_growth(growth);
                b.iter(|| {
                    let mut s = StrBuf::with_config(config).unwrap();
                    for i in 0..size {
                        s.insert_char(b'a' + (i % 26) as u8, s.len()).unwrap();
                    }
                    black_box(s.len())
                });
            });
        }
    }
    group.finish();
}

fn bench_front_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert");

    for size in [1000, 10_000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_chars", size), size, |b, &size| {
            let content = text(size);
            b.iter(|| {
                let mut s = StrBuf::new().unwrap();
                s.set(&content).unwrap();
                for _ in 0..100 {
                    s.insert_chars(b"xyz", 0, Direction::Forward).unwrap();
                }
                black_box(s.len())
            });
        });
    }
    group.finish();
}

fn bench_find_substring(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_substring");

    for size in [1000, 10_000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("the", size), size, |b, &size| {
            let mut s = StrBuf::new().unwrap();
            s.set(&text(size)).unwrap();
            let mut matches = vec![Slice::single(0); size];

            b.iter(|| black_box(s.find_substring(black_box(b"the"), &mut matches).unwrap()));
        });
    }
    group.finish();
}

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");

    for size in [1000, 10_000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let content = text(*size);

        group.bench_with_input(BenchmarkId::new("remove_all", size), &content, |b, content| {
            b.iter(|| {
                let mut s = StrBuf::new().unwrap();
                s.set(content).unwrap();
                black_box(s.remove_all(b"the ").unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("replace_all", size), &content, |b, content| {
            b.iter(|| {
                let mut s = StrBuf::new().unwrap();
                s.set(content).unwrap();
                black_box(s.replace_all(b"fox", b"badger").unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_front_insert,
    bench_find_substring,
    bench_rewrite
);
criterion_main!(benches);
