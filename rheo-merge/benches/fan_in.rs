use criterion::{BenchmarkId, Criterion, Throughput};
use futures::stream::{self, StreamExt};
use rheo_merge::FanInExt;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn make_source(size: usize, payload_size: usize) -> impl futures::Stream<Item = Vec<u8>> + Send {
    let items: Vec<Vec<u8>> = (0..size).map(|_| vec![0u8; payload_size]).collect();
    stream::iter(items)
}

pub fn bench_fan_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_in");
    let sizes = [1000usize, 10_000usize];
    let source_counts = [3usize, 8usize];

    for &size in &sizes {
        for &source_count in &source_counts {
            group.throughput(Throughput::Elements((size * source_count) as u64));

            let id = BenchmarkId::from_parameter(format!("spawned_n{}_m{}", source_count, size));
            group.bench_with_input(id, &(size, source_count), |bencher, &(size, source_count)| {
                bencher.iter(|| {
                    let sources: Vec<_> =
                        (0..source_count).map(|_| make_source(size, 16)).collect();

                    let rt = Runtime::new().unwrap();
                    rt.block_on(async move {
                        let mut merged = sources.fan_in();
                        while let Some(delivery) = merged.next().await {
                            black_box(delivery);
                        }
                    });
                })
            });

            let id = BenchmarkId::from_parameter(format!("polling_n{}_m{}", source_count, size));
            group.bench_with_input(id, &(size, source_count), |bencher, &(size, source_count)| {
                bencher.iter(|| {
                    let sources: Vec<_> =
                        (0..source_count).map(|_| make_source(size, 16)).collect();

                    let rt = Runtime::new().unwrap();
                    rt.block_on(async move {
                        let mut merged = sources.fan_in_polling();
                        while let Some(delivery) = merged.next().await {
                            black_box(delivery);
                        }
                    });
                })
            });
        }
    }

    group.finish();
}
