#![recursion_limit = "256"]
use approx::assert_abs_diff_eq;
use plucker::{ideal_line, line, motor, plane, point, Multivector};

fn multivector(coords: [f32; 16]) -> Multivector {
    let [d, a, b, c, s, e12, e31, e23, ps, e01, e02, e03, w, x, y, z] = coords;
    let even = motor(s, e12, e31, e23, ps, e01, e02, e03);
    let mut pt = point(x, y, z);
    pt.load([w, z, y, x]);
    (plane(a, b, c, d).entity() + even.entity()) + pt.entity()
}

fn assert_all_close(lhs: Multivector, rhs: Multivector, epsilon: f32) {
    assert!(
        lhs.approx_eq(&rhs, epsilon),
        "{:?} != {:?}",
        lhs,
        rhs,
    );
}

const M1: [f32; 16] = [
    1.0, -2.0, 3.0, 0.5, -1.5, 2.0, 0.25, -3.0, 1.25, -0.75, 2.5, 0.125, 1.0, -1.0, 2.0, -2.5,
];
const M2: [f32; 16] = [
    -1.0, 0.5, 2.0, -3.0, 1.0, -0.25, 1.5, 2.25, -2.0, 3.0, -1.25, 0.75, -0.5, 1.0, -3.0, 2.0,
];
const M3: [f32; 16] = [
    2.0, 1.0, -1.5, 0.25, -2.25, 0.5, 3.0, -0.125, 1.75, -1.0, 0.5, 2.0, 1.5, -2.0, 0.25, 1.0,
];

#[test]
fn product_is_associative() {
    let (x, y, z) = (multivector(M1), multivector(M2), multivector(M3));
    assert_all_close((x * y) * z, x * (y * z), 1e-3);
}

#[test]
fn product_is_bilinear() {
    let (x, y, z) = (multivector(M1), multivector(M2), multivector(M3));
    assert_all_close((x + y) * z, x * z + y * z, 1e-3);
    assert_all_close(z * (x + y), z * x + z * y, 1e-3);
}

#[test]
fn reverse_is_an_antihomomorphism() {
    let (x, y) = (multivector(M1), multivector(M2));
    assert_all_close((x * y).reversed(), y.reversed() * x.reversed(), 1e-3);
}

#[test]
fn identity_motor_fixes_every_point() {
    let m = motor(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).entity();
    for &(x, y, z) in &[(1.0, 2.0, 3.0), (-2.5, 4.0, 1.25), (0.0, 0.0, 0.0)] {
        let p = point(x, y, z).entity();
        let moved = m * p * m.reversed();
        assert_eq!(moved.e032(), x);
        assert_eq!(moved.e013(), y);
        assert_eq!(moved.e021(), z);
        assert_eq!(moved.e123(), 1.0);
        assert_eq!(moved.e0(), 0.0);
        assert_eq!(moved.e1(), 0.0);
        assert_eq!(moved.e2(), 0.0);
        assert_eq!(moved.e3(), 0.0);
    }
}

#[test]
fn unit_motor_sandwich_preserves_the_weight() {
    // the product of two unit planes is a unit motor
    let p1 = plane(1.0, 2.0, 3.0, 4.0).normalized();
    let p2 = plane(2.0, 3.0, -1.0, -2.0).normalized();
    let m = (p1 * p2).entity();

    let mm = m * m.reversed();
    assert_abs_diff_eq!(mm.scalar(), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e0123(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e12(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e01(), 0.0, epsilon = 1e-5);

    let p = point(-2.0, 1.0, 4.0).entity();
    let moved = m * p * m.reversed();
    // conjugation by a unit motor maps points to points: the grade-1 part
    // cancels and the weight is untouched
    assert_abs_diff_eq!(moved.e123(), 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(moved.e0(), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(moved.e1(), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(moved.e2(), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(moved.e3(), 0.0, epsilon = 1e-4);
}

#[test]
fn quarter_turn_about_the_z_axis() {
    let half = core::f32::consts::FRAC_PI_4;
    let m = motor(half.cos(), half.sin(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).entity();
    let p = point(1.0, 0.0, 0.0).entity();
    let moved = m * p * m.reversed();
    assert_abs_diff_eq!(moved.e032(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(moved.e013(), -1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(moved.e021(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(moved.e123(), 1.0, epsilon = 1e-6);
}

#[test]
fn motor_normalization() {
    let mut m = motor(1.0, 4.0, 3.0, 2.0, 5.0, -2.0, -3.0, -4.0);
    m.normalize();
    let mm = (m * m.reversed()).entity();
    assert_abs_diff_eq!(mm.scalar(), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e12(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e31(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e23(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e0123(), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(mm.e01(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e02(), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(mm.e03(), 0.0, epsilon = 1e-5);
}

#[test]
fn bivector_normalization() {
    let mut l = plucker::bivector(1.0, 2.0, 3.0, 3.0, 2.0, 1.0);
    l.normalize();
    let ll = (l * l.reversed()).entity();
    assert_abs_diff_eq!(ll.scalar(), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(ll.e0123(), 0.0, epsilon = 1e-5);
    // normalization preserves the bivector kind
    assert_eq!(l.entity().scalar(), 0.0);
    assert_eq!(l.entity().e0123(), 0.0);
}

#[test]
fn line_normalization() {
    let mut l = line(1.0, 2.0, 3.0);
    l.normalize();
    assert_abs_diff_eq!(l.squared_norm(), 1.0, epsilon = 1e-5);
    assert_eq!(l.entity().scalar(), 0.0);
}

#[test]
fn point_normalization() {
    let mut p = point(2.0, 4.0, 6.0);
    p.load([2.0, 6.0, 4.0, 2.0]);
    p.normalize();
    assert_abs_diff_eq!(p.x(), 1.0, epsilon = 4e-4);
    assert_abs_diff_eq!(p.y(), 2.0, epsilon = 4e-4);
    assert_abs_diff_eq!(p.z(), 3.0, epsilon = 4e-4);
    assert_abs_diff_eq!(p.e123(), 1.0, epsilon = 4e-4);
}

#[test]
fn ideal_factors_produce_empty_products() {
    let a = ideal_line(1.0, -2.0, 3.0).entity();
    let b = ideal_line(0.5, 0.25, -1.0).entity();
    let r = a * b;
    assert_eq!(r.mask(), 0);
    // an empty entity still participates in sums
    let s = r + point(1.0, 2.0, 3.0).entity();
    assert_eq!(s.e032(), 1.0);
    assert_eq!(s.e123(), 1.0);
}

#[test]
fn generators_compose() {
    use plucker::generator::*;

    // e1 * e2 = e12
    let r = e1() * e2();
    assert_eq!(r.e12(), 1.0);
    assert_eq!(r.scalar(), 0.0);

    // e1 * e1 = 1
    let r = e1() * e1();
    assert_eq!(r.scalar(), 1.0);
    assert_eq!(r.e12(), 0.0);

    // e0 squares to zero
    let r = e0() * e0();
    assert_eq!(r.scalar(), 0.0);

    // e1 e2 e3 = e123
    let r = (e1() * e2()) * e3();
    assert_eq!(r.e123(), 1.0);
    assert_eq!(r.e0(), 0.0);

    // the pseudoscalar annihilates itself
    let r = I() * I();
    assert_eq!(r.mask(), 0);

    // scaled generators build entities blade by blade
    let l = 3.0 * e12() + e31() * 2.0;
    assert_eq!(l.e12(), 3.0);
    assert_eq!(l.e31(), 2.0);
    assert_eq!(l.e23(), 0.0);
}
