use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rlinq::{from, QueryConfig, QueryContext};

fn make_data(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7919) % 1009).collect()
}

fn bench_lazy_chain(c: &mut Criterion) {
    let data = make_data(10_000);
    c.bench_function("lazy_where_select_take", |b| {
        b.iter(|| {
            let total = from(black_box(&data))
                .where_(|x| x % 2 == 0)
                .select(|x| x * 3)
                .take(5_000)
                .sum()
                .unwrap();
            black_box(total)
        })
    });
}

fn bench_std_iterator_baseline(c: &mut Criterion) {
    let data = make_data(10_000);
    c.bench_function("std_filter_map_take", |b| {
        b.iter(|| {
            let total: i64 = black_box(&data)
                .iter()
                .filter(|x| *x % 2 == 0)
                .map(|x| x * 3)
                .take(5_000)
                .sum();
            black_box(total)
        })
    });
}

fn bench_materializing_ops(c: &mut Criterion) {
    let data = make_data(10_000);
    let ctx = QueryContext::new(QueryConfig::default().with_cap(64 * 1024 * 1024)).unwrap();
    c.bench_function("distinct", |b| {
        b.iter(|| black_box(ctx.from(&data).distinct().unwrap().count()))
    });
    c.bench_function("order_by", |b| {
        b.iter(|| black_box(ctx.from(&data).order_by(|x| *x).unwrap().count()))
    });
    c.bench_function("group_by", |b| {
        b.iter(|| black_box(ctx.from(&data).group_by(|x| x % 16).len()))
    });
}

criterion_group!(
    benches,
    bench_lazy_chain,
    bench_std_iterator_baseline,
    bench_materializing_ops
);
criterion_main!(benches);
