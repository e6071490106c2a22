//! Criterion benchmarks for address parsing, rendering and comparison.

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use xmpp_address::Address;

/// Benchmark: Address::parse with varying shapes and lengths
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let long_resource = format!("alice@wonderland.lit/{}", "r".repeat(1023));
    let test_cases = [
        ("empty", ""),
        ("domain_only", "wonderland.lit"),
        ("bare", "alice@wonderland.lit"),
        ("full", "alice@wonderland.lit/tea"),
        ("separators_in_resource", "alice@wonderland.lit/foo/bar@blarg test"),
        ("mixed_case", "Alice@Wonderland.LIT/Tea"),
        ("max_resource", long_resource.as_str()),
    ];

    for (name, raw) in test_cases {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("address", name), &raw, |b, raw| {
            b.iter(|| Address::parse(black_box(raw)));
        });
    }

    group.finish();
}

/// Benchmark: rejection paths, one per failure reason
fn bench_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject");

    let test_cases = [
        ("empty_node", "@wonderland.lit"),
        ("node_chars", "alice's@wonderland.lit"),
        ("empty_resource", "wonderland.lit/"),
        ("empty_domain", "/res"),
        ("domain_chars", "alice@w onderland.lit"),
        ("double_at", "alice@bob@wonderland.lit"),
    ];

    for (name, raw) in test_cases {
        group.bench_with_input(BenchmarkId::new("is_valid_str", name), &raw, |b, raw| {
            b.iter(|| Address::is_valid_str(black_box(raw)));
        });
    }

    group.finish();
}

/// Benchmark: from_parts vs parse for the same address
fn bench_from_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_parts");

    group.bench_function("explicit", |b| {
        b.iter(|| {
            Address::from_parts(
                black_box(Some("alice")),
                black_box(Some("wonderland.lit")),
                black_box(Some("tea")),
            )
        });
    });

    group.bench_function("raw", |b| {
        b.iter(|| Address::from_parts(black_box(Some("alice@wonderland.lit/tea")), None, None));
    });

    group.finish();
}

/// Benchmark: derived values on a parsed address
fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");
    let addr = Address::parse("alice@wonderland.lit/tea").expect("valid test address");

    group.bench_function("bare", |b| b.iter(|| black_box(&addr).bare()));
    group.bench_function("to_string", |b| b.iter(|| black_box(&addr).to_string()));
    group.bench_function("with_resource", |b| {
        b.iter(|| black_box(addr.clone()).with_resource("cake"));
    });

    group.finish();
}

/// Benchmark: case-insensitive equality and hashing
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let a = Address::parse("Foo@Bar.com/Baz").expect("valid test address");
    let b = Address::parse("foo@bar.com/baz").expect("valid test address");
    group.bench_function("eq", |bench| bench.iter(|| black_box(&a) == black_box(&b)));
    group.bench_function("cmp", |bench| bench.iter(|| black_box(&a).cmp(black_box(&b))));

    for count in [100usize, 1_000, 10_000] {
        let addresses: Vec<Address> = (0..count)
            .map(|i| Address::parse(&format!("user{i}@example.com/res")).expect("valid test address"))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("hash_set_insert", count), &addresses, |bench, addrs| {
            bench.iter(|| {
                let set: HashSet<&Address> = addrs.iter().collect();
                black_box(set.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_reject,
    bench_from_parts,
    bench_derived,
    bench_compare,
);
criterion_main!(benches);
