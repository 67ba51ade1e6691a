use carousel::{Descending, NaturalOrder, PriorityQueue, RingDeque};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const QUEUE_SIZES: [usize; 3] = [64, 512, 4096];

/// Deterministic pseudo-shuffled priorities so every run sorts the same
/// adversarial-ish sequence.
fn scrambled_priorities(count: usize) -> Vec<u32> {
    let mut state = 0x9e37_79b9u32;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state >> 16
        })
        .collect()
}

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");

    for size in QUEUE_SIZES {
        let priorities = scrambled_priorities(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("enqueue_drain", size),
            &priorities,
            |b, priorities| {
                b.iter(|| {
                    let mut queue = PriorityQueue::with_capacity(priorities.len());
                    for &priority in priorities {
                        queue.enqueue(priority, priority);
                    }
                    while let Some(item) = queue.try_dequeue() {
                        black_box(item);
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("enqueue_drain_descending", size),
            &priorities,
            |b, priorities| {
                b.iter(|| {
                    let mut queue = PriorityQueue::with_capacity_and_comparer(
                        priorities.len(),
                        Descending::<NaturalOrder>::default(),
                    );
                    for &priority in priorities {
                        queue.enqueue(priority, priority);
                    }
                    while let Some(item) = queue.try_dequeue() {
                        black_box(item);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_ring_deque(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_deque");

    for size in QUEUE_SIZES {
        group.throughput(Throughput::Elements(size as u64));

        // Steady-state rotation: the window wraps the physical array many
        // times without ever growing.
        group.bench_with_input(BenchmarkId::new("rotate", size), &size, |b, &size| {
            let mut deque = RingDeque::with_capacity(size);
            for i in 0..size {
                deque.push_back(i);
            }
            b.iter(|| {
                for _ in 0..size {
                    if let Some(item) = deque.try_pop_front() {
                        deque.push_back(black_box(item));
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("grow_from_empty", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = RingDeque::new();
                for i in 0..size {
                    deque.push_back(black_box(i));
                }
                deque
            });
        });

        // Worst case for the shorter-side shift: inserting at the middle.
        group.bench_with_input(BenchmarkId::new("insert_middle", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = RingDeque::with_capacity(size);
                for i in 0..size {
                    let _ = deque.insert(deque.len() / 2, black_box(i));
                }
                deque
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_priority_queue, bench_ring_deque);
criterion_main!(benches);
