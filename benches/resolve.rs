//! Resolution engine benchmarks

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkrouter::routing::{Predicate, RequestContext};
use linkrouter::storage::{Destination, Link};

/// Link with `n` country-gated destinations, none matching "ZZ"
fn wide_link(n: usize) -> Link {
    let mut link = Link::new("bench", "bench")
        .with_default(Destination::fallback("default", "https://fallback.example/"));
    for i in 0..n {
        link = link.with_destination(Destination::new(
            format!("d{}", i),
            format!("https://d{}.example/", i),
            Some(Predicate::and(vec![
                Predicate::country_equals(format!("C{}", i % 100)),
                Predicate::not(Predicate::browser_in(["safari", "edge"])),
            ])),
            (i % 7) as i64,
        ));
    }
    link
}

fn deep_predicate(depth: usize) -> Predicate {
    (0..depth).fold(Predicate::country_equals("US"), |inner, _| {
        Predicate::not(Predicate::not(Predicate::or(vec![
            Predicate::browser_in(["firefox"]),
            inner,
        ])))
    })
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/resolve");
    let miss = RequestContext::new("8.8.8.8", "ZZ").with_browser("chrome");

    for n in [1usize, 8, 64] {
        let link = wide_link(n);
        group.bench_with_input(BenchmarkId::new("fallback", n), &link, |b, link| {
            b.iter(|| {
                let dest = link.resolve(black_box(&miss)).unwrap();
                black_box(dest);
            });
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/evaluate");
    let ctx = RequestContext::new("8.8.8.8", "US").with_browser("chrome");

    for depth in [4usize, 32] {
        let predicate = deep_predicate(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &predicate, |b, p| {
            b.iter(|| assert!(p.evaluate(black_box(&ctx))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_evaluate);
criterion_main!(benches);
