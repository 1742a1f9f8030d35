#[macro_use]
extern crate criterion;
extern crate deadline_btree;

use criterion::{BenchmarkId, Criterion};
use deadline_btree::key_generator::{RandomKeys, SequentialKeys, SequentialOrder};
use deadline_btree::{BTree, MinDegree};

fn build<I: Iterator<Item = i64>>(t: usize, keys: I) -> BTree<i64, i64> {
    let mut tree = BTree::with_min_degree(MinDegree::new(t).unwrap());
    for key in keys {
        tree.insert(key, key);
    }
    tree
}

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let num = 100_000;
    for t in vec![2, 3, 6, 16, 64] {
        group.bench_with_input(BenchmarkId::new("Random", t), &t, |b, &t| {
            b.iter(|| build(t, RandomKeys::new(num, num as i64, 17)))
        });
        group.bench_with_input(BenchmarkId::new("Ascending", t), &t, |b, &t| {
            b.iter(|| build(t, SequentialKeys::new(num, SequentialOrder::Ascending)))
        });
        group.bench_with_input(BenchmarkId::new("Descending", t), &t, |b, &t| {
            b.iter(|| build(t, SequentialKeys::new(num, SequentialOrder::Descending)))
        });
    }
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let num = 100_000;
    for t in vec![2, 3, 6, 16, 64] {
        // Only even keys are stored, so odd probes always miss
        let tree = build(t, SequentialKeys::new(num, SequentialOrder::Ascending).map(|k| 2 * k));
        group.bench_with_input(BenchmarkId::new("Hit", t), &tree, |b, tree| {
            b.iter(|| {
                for key in RandomKeys::new(1_000, num as i64, 17) {
                    assert!(tree.search(&(2 * key)).is_some());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("Miss", t), &tree, |b, tree| {
            b.iter(|| {
                for key in RandomKeys::new(1_000, num as i64, 17) {
                    assert!(tree.search(&(2 * key + 1)).is_none());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("Iterate", t), &tree, |b, tree| {
            b.iter(|| tree.values().sum::<i64>())
        });
    }
}

criterion_group!(benches, insert_benchmark, search_benchmark);
criterion_main!(benches);
