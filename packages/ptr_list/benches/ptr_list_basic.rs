//! Basic benchmarks for the `ptr_list` crate, compared against `Vec<Box<T>>`.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use ptr_list::PtrList;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const LIST_LEN: usize = 1_000;

fn filled_list() -> PtrList<TestItem> {
    (0..LIST_LEN).collect()
}

fn filled_vec() -> Vec<Box<TestItem>> {
    (0..LIST_LEN).map(Box::new).collect()
}

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("ptr_list_basic");

    let allocs_op = allocs.operation("push_back_1k");
    group.bench_function("push_back_1k", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(PtrList::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                for _ in 0..LIST_LEN {
                    list.push_back(black_box(TEST_VALUE));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("vec_box_push_1k");
    group.bench_function("vec_box_push_1k", |b| {
        b.iter_custom(|iters| {
            let mut vecs = iter::repeat_with(Vec::<Box<TestItem>>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vec in &mut vecs {
                for _ in 0..LIST_LEN {
                    vec.push(Box::new(black_box(TEST_VALUE)));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front");
    group.bench_function("insert_front", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(filled_list)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                list.insert(0, black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("remove_middle");
    group.bench_function("remove_middle", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(filled_list)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                _ = black_box(list.remove_at(LIST_LEN / 2));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("vec_box_remove_middle");
    group.bench_function("vec_box_remove_middle", |b| {
        b.iter_custom(|iters| {
            let mut vecs = iter::repeat_with(filled_vec)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vec in &mut vecs {
                _ = black_box(vec.remove(LIST_LEN / 2));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("contains_missing");
    group.bench_function("contains_missing", |b| {
        b.iter_custom(|iters| {
            let list = filled_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.contains(black_box(&TEST_VALUE.wrapping_mul(10))));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("iterate_sum");
    group.bench_function("iterate_sum", |b| {
        b.iter_custom(|iters| {
            let list = filled_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.iter().sum::<TestItem>());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("vec_box_iterate_sum");
    group.bench_function("vec_box_iterate_sum", |b| {
        b.iter_custom(|iters| {
            let vec = filled_vec();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(vec.iter().map(|item| **item).sum::<TestItem>());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("clone_1k");
    group.bench_function("clone_1k", |b| {
        b.iter_custom(|iters| {
            let list = filled_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(list.clone()));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
