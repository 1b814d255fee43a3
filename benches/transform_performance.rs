//! Performance benchmarks for the hot transform operations: composition,
//! inversion and decomposition.

use cardan::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_matrix() -> Matrix4<f32> {
    let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 1.0, 0.0), 0.7);
    Matrix4::from_rotation_translation_scale(
        &q,
        &Vector3::new(1.0, -2.0, 3.0),
        &Vector3::new(2.0, 3.0, 0.5),
    )
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let a4 = sample_matrix();
    let b4 = Matrix4::<f32>::from_x_rotation(0.3);
    group.bench_function("mat4_multiply", |b| {
        b.iter(|| {
            let mut m = black_box(a4);
            m.multiply(black_box(&b4));
            black_box(m)
        })
    });

    let a3 = Matrix3::<f32>::from_rotation(0.4);
    let b3 = Matrix3::<f32>::from_translation(&Vector2::new(1.0, 2.0));
    group.bench_function("mat3_multiply", |b| {
        b.iter(|| {
            let mut m = black_box(a3);
            m.multiply(black_box(&b3));
            black_box(m)
        })
    });

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    let m4 = sample_matrix();
    group.bench_function("mat4_invert", |b| {
        b.iter(|| {
            let mut m = black_box(m4);
            m.invert();
            black_box(m)
        })
    });

    let m3 = Matrix3::<f32>::from_rotation(1.0);
    group.bench_function("mat3_invert", |b| {
        b.iter(|| {
            let mut m = black_box(m3);
            m.invert();
            black_box(m)
        })
    });

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    let m = sample_matrix();
    group.bench_function("get_translation_scaling_rotation", |b| {
        b.iter(|| {
            let t = black_box(&m).translation();
            let s = black_box(&m).scaling();
            let q = black_box(&m).rotation();
            black_box((t, s, q))
        })
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 1.0, 0.0), 0.7);
    let v = Vector3::new(1.0f32, 2.0, 3.0);
    let s = Vector3::new(2.0f32, 2.0, 2.0);

    group.bench_function("from_rotation_translation_scale", |b| {
        b.iter(|| black_box(Matrix4::from_rotation_translation_scale(black_box(&q), &v, &s)))
    });

    for aspect in [1.0f32, 16.0 / 9.0] {
        group.bench_with_input(
            BenchmarkId::new("perspective", aspect),
            &aspect,
            |b, &aspect| {
                b.iter(|| black_box(Matrix4::perspective(1.0f32, aspect, 0.1, Some(100.0))))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiply,
    bench_invert,
    bench_decompose,
    bench_construction
);
criterion_main!(benches);
