//! brainpoolP256r1 field and point arithmetic benchmarks

use bp256_pace::{
    FieldElement, ProjectivePoint, Scalar,
    elliptic_curve::{
        group::{Curve, Group},
        ops::MulByGenerator,
    },
};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};

const FE_X: FieldElement =
    FieldElement::from_hex("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262");
const FE_Y: FieldElement =
    FieldElement::from_hex("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997");

const SCALAR_X: Scalar =
    Scalar::from_hex("9bb0d8b72602b70dd5cfed99607a2e2c021dd0fe3b3af842df02c06f8c1a0f4e");
const SCALAR_Y: Scalar =
    Scalar::from_hex("6494152e2b6c34768296d2ea0e984f89a77f0d7399b70f2e29789128423a9bea");

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("mul", |b| b.iter(|| FE_X * FE_Y));
}

fn bench_field_element_square<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("square", |b| b.iter(|| FE_X.square()));
}

fn bench_field_element_sqrt<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("sqrt", |b| b.iter(|| FE_X.sqrt()));
}

fn bench_field_element_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("invert", |b| b.iter(|| FE_X.invert()));
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR * SCALAR_X;
    let q = ProjectivePoint::GENERATOR * SCALAR_Y;
    group.bench_function("add", |b| b.iter(|| p + q));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR * SCALAR_X;
    group.bench_function("double", |b| b.iter(|| p.double()));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR * SCALAR_Y;
    group.bench_function("point-scalar mul", |b| b.iter(|| p * SCALAR_X));
}

fn bench_point_mul_by_generator<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("mul_by_generator", |b| {
        b.iter(|| ProjectivePoint::mul_by_generator(&SCALAR_X))
    });
}

fn bench_point_to_affine<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR * SCALAR_X;
    group.bench_function("to_affine", |b| b.iter(|| p.to_affine()));
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_mul(&mut group);
    bench_field_element_square(&mut group);
    bench_field_element_sqrt(&mut group);
    bench_field_element_invert(&mut group);
    group.finish();
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    bench_point_mul_by_generator(&mut group);
    bench_point_to_affine(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field_element, bench_point);
criterion_main!(benches);
