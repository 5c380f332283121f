use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plucker::{motor, plane, point};

fn bench_gp(c: &mut Criterion) {
    let p1 = plane(1.0, 2.0, 3.0, 4.0);
    let p2 = plane(2.0, 3.0, -1.0, -2.0);
    c.bench_function("gp/plane_plane", |b| {
        b.iter(|| black_box(p1) * black_box(p2))
    });

    let m1 = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let m2 = motor(-1.0, 1.0, -2.0, 2.0, -3.0, 3.0, -4.0, 4.0);
    c.bench_function("gp/motor_motor", |b| {
        b.iter(|| black_box(m1) * black_box(m2))
    });

    let m = (p1.normalized() * p2.normalized()).entity();
    let p = point(-2.0, 1.0, 4.0).entity();
    c.bench_function("gp/motor_point_sandwich", |b| {
        b.iter(|| black_box(m) * black_box(p) * black_box(m).reversed())
    });

    let full = (p1.entity() + m1.entity()) + p;
    c.bench_function("gp/multivector_multivector", |b| {
        b.iter(|| black_box(full) * black_box(full))
    });
}

criterion_group!(benches, bench_gp);
criterion_main!(benches);
