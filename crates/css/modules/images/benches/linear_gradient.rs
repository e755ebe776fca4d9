use criterion::{Criterion, criterion_group, criterion_main};
use css_images::{CssColorResolver, LengthContext, parse_linear_gradient, resolve_linear_gradient};
use std::hint::black_box;

/// A gradient with a long run of pending stops between two anchors.
const MIXED_STOPS: &str = "linear-gradient(to bottom right, red, blue 10px, orange, yellow, \
     green, teal, navy, black 100px, purple, white, #123456 75%, rgb(1, 2, 3))";

fn bench_tokenize(criterion: &mut Criterion) {
    criterion.bench_function("linear_gradient_tokenize", |bencher| {
        bencher.iter(|| {
            let params = parse_linear_gradient(black_box(MIXED_STOPS));
            black_box(params.map(|list| list.len()))
        });
    });
}

fn bench_resolve(criterion: &mut Criterion) {
    let Ok(params) = parse_linear_gradient(MIXED_STOPS) else {
        return;
    };
    let context = LengthContext::default();
    criterion.bench_function("linear_gradient_resolve", |bencher| {
        bencher.iter(|| {
            let spec =
                resolve_linear_gradient(black_box(&params), 640.0, &CssColorResolver, &context);
            black_box(spec.map(|resolved| resolved.stops.len()))
        });
    });
}

criterion_group!(gradient_benches, bench_tokenize, bench_resolve);
criterion_main!(gradient_benches);
