#![recursion_limit = "256"]
use plucker::{bivector, ideal_line, line, motor, plane, point};

#[test]
fn accessor_placement() {
    // a*e_1 + b*e_2 + c*e_3 + d*e_0
    let p = plane(1.0, 0.0, 0.0, 0.0);
    assert_eq!(p.e1(), 1.0);
    assert_eq!(p.e2(), 0.0);
    assert_eq!(p.e3(), 0.0);
    assert_eq!(p.e0(), 0.0);

    let p = plane(1.0, 2.0, 3.0, 4.0);
    assert_eq!(p.x(), 1.0);
    assert_eq!(p.y(), 2.0);
    assert_eq!(p.z(), 3.0);
    assert_eq!(p.d(), 4.0);

    let p = point(1.0, 2.0, 3.0);
    assert_eq!(p.x(), 1.0);
    assert_eq!(p.y(), 2.0);
    assert_eq!(p.z(), 3.0);
    assert_eq!(p.e123(), 1.0);

    let m = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    assert_eq!(m.scalar(), 1.0);
    assert_eq!(m.e12(), 2.0);
    assert_eq!(m.e31(), 3.0);
    assert_eq!(m.e23(), 4.0);
    assert_eq!(m.e0123(), 5.0);
    assert_eq!(m.e01(), 6.0);
    assert_eq!(m.e02(), 7.0);
    assert_eq!(m.e03(), 8.0);
}

#[test]
fn flipped_accessors() {
    let m = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    assert_eq!(m.e21(), -2.0);
    assert_eq!(m.e13(), -3.0);
    assert_eq!(m.e32(), -4.0);

    let il = ideal_line(1.0, 2.0, 3.0);
    assert_eq!(il.e10(), -1.0);
    assert_eq!(il.e20(), -2.0);
    assert_eq!(il.e30(), -3.0);
}

#[test]
fn absent_partition_reads_positive_zero() {
    // A line stores only partition p1; everything else must read +0.0
    let l = line(1.0, 2.0, 3.0).entity();
    assert_eq!(l.e0().to_bits(), 0);
    assert_eq!(l.e123().to_bits(), 0);
    assert_eq!(l.e01().to_bits(), 0);
    // including the sign-flipped names
    assert_eq!(l.e10().to_bits(), 0);
    assert_eq!(l.e30().to_bits(), 0);
}

#[test]
fn constructors_zero_the_odd_slots() {
    let l = line(1.0, 2.0, 3.0);
    assert_eq!(l.entity().scalar(), 0.0);

    let il = ideal_line(1.0, 2.0, 3.0);
    assert_eq!(il.entity().e0123(), 0.0);

    let b = bivector(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(b.entity().scalar(), 0.0);
    assert_eq!(b.entity().e0123(), 0.0);
}

#[test]
fn reverse_is_an_involution() {
    let m = motor(1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0);
    let twice = !!m;
    assert_eq!(twice.store1(), m.store1());
    assert_eq!(twice.store2(), m.store2());

    // grades 2 and 3 flip, grades 0, 1, 4 are fixed
    let r = m.reversed();
    assert_eq!(r.scalar(), 1.0);
    assert_eq!(r.e12(), 2.0);
    assert_eq!(r.e31(), -3.0);
    assert_eq!(r.e23(), 4.0);
    assert_eq!(r.e0123(), 5.0);
    assert_eq!(r.e01(), 6.0);
    assert_eq!(r.e02(), -7.0);
    assert_eq!(r.e03(), 8.0);

    let p = plane(1.0, 2.0, 3.0, 4.0);
    assert_eq!(p.reversed(), p);

    let pt = point(1.0, 2.0, 3.0);
    let r = pt.reversed();
    assert_eq!(r.x(), -1.0);
    assert_eq!(r.y(), -2.0);
    assert_eq!(r.z(), -3.0);
    assert_eq!(r.e123(), -1.0);
}

#[test]
fn additive_inverse() {
    let m = motor(1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0);
    let zero = m + -m;
    assert_eq!(zero.store1(), [0.0; 4]);
    assert_eq!(zero.store2(), [0.0; 4]);
}

#[test]
fn sum_masks_union() {
    let p = plane(1.0, 2.0, 3.0, 4.0);
    let l = line(5.0, 6.0, 7.0);
    let pt = point(8.0, 9.0, 10.0);

    let s = p.entity() + l.entity();
    assert_eq!(s.e1(), 1.0);
    assert_eq!(s.e12(), 5.0);

    let s = s + pt.entity();
    assert_eq!(s.e1(), 1.0);
    assert_eq!(s.e12(), 5.0);
    assert_eq!(s.e032(), 8.0);
    assert_eq!(s.e0123(), 0.0);

    // blade-wise additivity when both sides store the partition
    let a = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let b = motor(8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0);
    let s = a + b;
    assert_eq!(s.scalar(), 9.0);
    assert_eq!(s.e12(), 9.0);
    assert_eq!(s.e0123(), 9.0);
    assert_eq!(s.e03(), 9.0);
}

#[test]
fn difference_flips_right_only_partitions() {
    let p = plane(1.0, 2.0, 3.0, 4.0);
    let l = line(5.0, 6.0, 7.0);

    let d = p.entity() - l.entity();
    assert_eq!(d.e1(), 1.0);
    assert_eq!(d.e12(), -5.0);
    assert_eq!(d.e31(), -6.0);
    assert_eq!(d.e23(), -7.0);
}

#[test]
fn in_place_sum_on_a_subset_mask() {
    let mut m = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0).entity();
    m += line(1.0, 1.0, 1.0).entity();
    assert_eq!(m.e12(), 3.0);
    assert_eq!(m.e31(), 4.0);
    assert_eq!(m.e23(), 5.0);
    assert_eq!(m.scalar(), 1.0);
    assert_eq!(m.e01(), 6.0);

    m -= ideal_line(1.0, 2.0, 3.0).entity();
    assert_eq!(m.e01(), 5.0);
    assert_eq!(m.e02(), 5.0);
    assert_eq!(m.e03(), 5.0);
    assert_eq!(m.e0123(), 5.0);
}

#[test]
fn reverse_distributes_over_sums_of_planes() {
    let a = plane(1.0, 2.0, 3.0, 4.0);
    let b = plane(5.0, 6.0, 7.0, 8.0);
    // planes are grade 1, so reversion fixes them
    assert_eq!((a + b).reversed(), a + b);
    assert_eq!((a + b).reversed(), a.reversed() + b.reversed());
}

#[test]
fn uniform_scaling() {
    let pt = point(1.0, -2.0, 4.0);
    let doubled = pt * 2.0;
    assert_eq!(doubled.x(), 2.0);
    assert_eq!(doubled.y(), -4.0);
    assert_eq!(doubled.z(), 8.0);
    assert_eq!(doubled.e123(), 2.0);

    let halved = pt / 2.0;
    assert!((halved.x() - 0.5).abs() < 1e-6);
    assert!((halved.e123() - 0.5).abs() < 1e-6);
}

#[test]
fn raw_partition_access() {
    let m = motor(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0).entity();
    assert_eq!(m.part::<1>().into_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.part::<2>().into_array(), [5.0, 6.0, 7.0, 8.0]);
}
