use alnum::{GeneratorConfig, SamplingPolicy, generate, generate_async};
use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tokio::runtime::Builder;

const WORKER_COUNTS: [usize; 3] = [10, 100, 1000];

fn config(workers: usize) -> GeneratorConfig {
    GeneratorConfig::builder()
        .workers(workers)
        .seed(42)
        .policy(SamplingPolicy::Full)
        .build()
        .expect("valid bench config")
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("threads");
    for workers in WORKER_COUNTS {
        let config = config(workers);
        group.throughput(Throughput::Elements(workers as u64));
        group.bench_function(format!("workers/{workers}"), |b| {
            b.iter(|| black_box(generate(&config).expect("generate")));
        });
    }
    group.finish();
}

fn bench_tokio(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let mut group = c.benchmark_group("tokio");
    for workers in WORKER_COUNTS {
        let config = config(workers);
        group.throughput(Throughput::Elements(workers as u64));
        group.bench_function(format!("workers/{workers}"), |b| {
            b.iter(|| black_box(rt.block_on(generate_async(&config)).expect("generate")));
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let set = generate(&config(1000)).expect("generate");
    let mut group = c.benchmark_group("json");
    group.throughput(Throughput::Elements(set.len() as u64));
    group.bench_function("compact/1000", |b| {
        b.iter(|| black_box(set.to_json(false).expect("encode")));
    });
    group.finish();
}

criterion_group!(benches, bench_threads, bench_tokio, bench_serialize);
criterion_main!(benches);
