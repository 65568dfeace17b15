use bucketcrab::{CoarseStore, ShardedStore, TokenBucketLimiter};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn benchmark_core_limiter(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_limiter");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    // Hot key, admit path: the refill outpaces the bench loop
    group.bench_function("single_key_admitted", |b| {
        let limiter = TokenBucketLimiter::new(1000, 1_000_000.0).unwrap();

        b.iter(|| black_box(limiter.accept(black_box("test_key"))));
    });

    // Hot key, reject path (worst case: refill never crosses the threshold)
    group.bench_function("single_key_rejected", |b| {
        let limiter = TokenBucketLimiter::new(5, 0.0).unwrap();

        // Exhaust the bucket first
        let key = "exhausted_key";
        for _ in 0..5 {
            limiter.accept(key);
        }

        b.iter(|| black_box(limiter.accept(black_box(key))));
    });

    // Rotating keys to simulate real-world usage
    group.bench_function("rotating_keys_100", |b| {
        let limiter = TokenBucketLimiter::new(100, 1000.0).unwrap();
        let mut counter = 0u64;

        b.iter(|| {
            let key = format!("key_{}", counter % 100);
            counter += 1;

            black_box(limiter.accept(black_box(&key)))
        });
    });

    group.finish();
}

fn benchmark_store_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_growth");
    group.throughput(Throughput::Elements(1));

    // Test with growing number of unique keys
    for num_keys in [10u64, 100, 1000, 10000] {
        group.bench_with_input(
            format!("unique_keys_{num_keys}"),
            &num_keys,
            |b, &num_keys| {
                let limiter = TokenBucketLimiter::with_store(
                    100,
                    1000.0,
                    ShardedStore::builder().capacity(num_keys as usize).build(),
                )
                .unwrap();
                let mut counter = 0u64;

                b.iter(|| {
                    let key = format!("key_{}", counter % num_keys);
                    counter += 1;

                    black_box(limiter.accept(black_box(&key)))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_store_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_contention");

    // Fixed batch of requests spread over 100 keys by 4 threads; the sharded
    // store should pull ahead of the single lock here.
    let threads = 4usize;
    let ops_per_thread = 1000u64;
    group.throughput(Throughput::Elements(threads as u64 * ops_per_thread));

    group.bench_function("sharded_store", |b| {
        let limiter =
            TokenBucketLimiter::with_store(100, 1000.0, ShardedStore::new()).unwrap();

        b.iter(|| {
            std::thread::scope(|s| {
                for t in 0..threads {
                    let limiter = &limiter;
                    s.spawn(move || {
                        for i in 0..ops_per_thread {
                            let key = format!("key_{}", (t as u64 * ops_per_thread + i) % 100);
                            black_box(limiter.accept(&key));
                        }
                    });
                }
            });
        });
    });

    group.bench_function("coarse_store", |b| {
        let limiter =
            TokenBucketLimiter::with_store(100, 1000.0, CoarseStore::new()).unwrap();

        b.iter(|| {
            std::thread::scope(|s| {
                for t in 0..threads {
                    let limiter = &limiter;
                    s.spawn(move || {
                        for i in 0..ops_per_thread {
                            let key = format!("key_{}", (t as u64 * ops_per_thread + i) % 100);
                            black_box(limiter.accept(&key));
                        }
                    });
                }
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_core_limiter,
    benchmark_store_growth,
    benchmark_store_contention
);
criterion_main!(benches);
