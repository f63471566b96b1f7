use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_slist::linked_list::owned::{list::LinkedList, traits::List};
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled(len: usize) -> LinkedList {
    let mut rng = rand::rng();
    let values: Vec<i32> = (0..len).map(|_| rng.random()).collect();
    LinkedList::try_from_slice(&values).unwrap()
}

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("push_front", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size as i32 {
                    list.push_front(black_box(i)).unwrap();
                }
                list
            });
        });

        // push_back walks the whole list, keep it to the smaller sizes.
        if size <= 1_000 {
            group.bench_with_input(BenchmarkId::new("push_back", size), &size, |b, &size| {
                b.iter(|| {
                    let mut list = LinkedList::new();
                    for i in 0..size as i32 {
                        list.push_back(black_box(i)).unwrap();
                    }
                    list
                });
            });
        }
    }

    group.finish();
}

fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reverse", size), &size, |b, &size| {
            b.iter_with_setup(|| filled(size), |mut list| {
                list.reverse();
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("len", size), &size, |b, &size| {
            let list = filled(size);
            b.iter(|| black_box(&list).len());
        });

        group.bench_with_input(BenchmarkId::new("pop_back", size), &size, |b, &size| {
            b.iter_with_setup(|| filled(size), |mut list| black_box(list.pop_back()));
        });

        group.bench_with_input(BenchmarkId::new("remove_missing", size), &size, |b, &size| {
            b.iter_with_setup(
                || {
                    let values: Vec<i32> = (0..size as i32).collect();
                    LinkedList::try_from_slice(&values).unwrap()
                },
                |mut list| black_box(list.remove(-1)),
            );
        });
    }

    group.finish();
}

criterion_group!(benches, push_benchmark, traversal_benchmark);
criterion_main!(benches);
