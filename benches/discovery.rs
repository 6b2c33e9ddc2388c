// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_slides::config::Config;
use iced_slides::discovery::ordering::infer_slide_number;
use iced_slides::discovery::{candidates, reduce, ProbeOutcome};
use iced_slides::domain::slides::MaxSlides;
use std::hint::black_box;

fn discovery_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    let plan = Config::default()
        .discovery_plan()
        .expect("default templates are valid");

    group.bench_function("generate_default_candidates", |b| {
        b.iter(|| {
            black_box(candidates::generate(
                black_box(&plan.templates),
                MaxSlides::new(99),
                &[],
            ))
        });
    });

    group.bench_function("infer_slide_number", |b| {
        b.iter(|| {
            black_box(infer_slide_number(black_box(
                "/about-conditions/adhd/adhd-slide-27.png.PNG",
            )))
        });
    });

    // One hit in three, in candidate order, the way a real run settles.
    let settled: Vec<_> = plan
        .candidates()
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| {
            let outcome = if i % 3 == 0 {
                ProbeOutcome::Found
            } else {
                ProbeOutcome::Missing
            };
            (candidate, outcome)
        })
        .collect();

    group.bench_function("reduce_default_run", |b| {
        b.iter(|| black_box(reduce(black_box(settled.clone()))));
    });

    group.finish();
}

criterion_group!(benches, discovery_benchmark);
criterion_main!(benches);
