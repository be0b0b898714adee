use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tween_animation::{ease, interpolate, Curve, Quat, Vec3};

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    for curve in [
        Curve::EaseInOutQuad,
        Curve::EaseInOutExpo,
        Curve::EaseInOutElastic,
        Curve::EaseInOutBounce,
    ] {
        group.bench_function(curve.name(), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..=100 {
                    acc += interpolate(black_box(curve), black_box(i as f32 / 100.0));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_all_curves(c: &mut Criterion) {
    c.bench_function("interpolate_all_curves", |b| {
        b.iter(|| {
            Curve::ALL
                .iter()
                .map(|&curve| interpolate(curve, black_box(0.37)))
                .sum::<f32>()
        })
    });
}

fn bench_ease_values(c: &mut Criterion) {
    let a = Vec3::new(0.0, -40.0, 0.0);
    let b = Vec3::ZERO;
    c.bench_function("ease_vec3", |bench| {
        bench.iter(|| ease(black_box(a), black_box(b), Curve::EaseOutBack, black_box(0.6)))
    });

    let qa = Quat::IDENTITY;
    let qb = Quat::from_axis_angle(Vec3::UP, 1.2);
    c.bench_function("ease_quat", |bench| {
        bench.iter(|| ease(black_box(qa), black_box(qb), Curve::EaseOutElastic, black_box(0.6)))
    });
}

criterion_group!(benches, bench_interpolate, bench_all_curves, bench_ease_values);
criterion_main!(benches);
