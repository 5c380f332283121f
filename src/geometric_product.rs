//! Geometric Product (gp)
//!
//! The geometric product extends the exterior product with a notion of a
//! metric. When the subspace intersection of the operands of two basis
//! elements is non-zero, instead of the product extinguishing, the grade
//! collapses and a scalar weight is included in the final result according
//! to the metric. The geometric product can be used to build rotations, and
//! by extension, rotations and translations in projective space.
//!
//! # example "Motor composition"
//!
//! ```ignore
//!     let m1: Motor = p1 * p2;
//!     let m2: Motor = p3 * p4;
//!
//!     // Compose motors with the geometric product
//!     let m3 = m2 * m1; // m3 applies m1, then m2
//! ```
//!
//! # example "Two reflections"
//!
//! ```ignore
//!     let p1 = Plane::new(x1, y1, z1, d1);
//!     let p2 = Plane::new(x2, y2, z2, d2);
//!
//!     // The geometric product of two planes combines their reflections
//!     let m: Motor = p1 * p2; // m combines p2 and p1 in that order
//!     // If p1 and p2 were parallel, m would be a translation. Otherwise,
//!     // m would be a rotation.
//! ```

use crate::{
    arch::{
        f32x4, gp00, gp01, gp02, gp03, gp10, gp11, gp12, gp13, gp20, gp21, gp23, gp30, gp31,
        gp32, gp33,
    },
    entity::{part_count, part_present, product_mask, Entity},
    mask, Bivector, Line, Motor, Plane, Point,
};

/// The general product dispatcher. Every partition pair present in the
/// operand masks feeds its kernel's contributions into the four output
/// accumulators; pairs with a cleared bit on either side constant-fold
/// away, so each monomorphization touches only the kernels it needs.
impl<const LHS: u8, const RHS: u8> std::ops::Mul<Entity<RHS>> for Entity<LHS>
where
    [(); part_count(LHS)]: ,
    [(); part_count(RHS)]: ,
    [(); part_count(product_mask(LHS, RHS))]: ,
{
    type Output = Entity<{ product_mask(LHS, RHS) }>;

    #[inline]
    #[allow(clippy::cognitive_complexity)]
    fn mul(self, rhs: Entity<RHS>) -> Self::Output {
        let mut acc = [f32x4::zero(); 4];
        unsafe {
            if part_present(LHS, 0) {
                let a = self.part_at(0).0;
                if part_present(RHS, 0) {
                    let (p1, p2) = gp00(a, rhs.part_at(0).0);
                    acc[1] = acc[1] + p1.into();
                    acc[2] = acc[2] + p2.into();
                }
                if part_present(RHS, 1) {
                    let (p0, p3) = gp01(a, rhs.part_at(1).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 2) {
                    let (p0, p3) = gp02(a, rhs.part_at(2).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 3) {
                    let (p1, p2) = gp03(a, rhs.part_at(3).0);
                    acc[1] = acc[1] + p1.into();
                    acc[2] = acc[2] + p2.into();
                }
            }
            if part_present(LHS, 1) {
                let a = self.part_at(1).0;
                if part_present(RHS, 0) {
                    let (p0, p3) = gp10(a, rhs.part_at(0).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 1) {
                    let p1 = gp11(a, rhs.part_at(1).0);
                    acc[1] = acc[1] + p1.into();
                }
                if part_present(RHS, 2) {
                    let p2 = gp12(a, rhs.part_at(2).0);
                    acc[2] = acc[2] + p2.into();
                }
                if part_present(RHS, 3) {
                    let (p0, p3) = gp13(a, rhs.part_at(3).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
            }
            if part_present(LHS, 2) {
                let a = self.part_at(2).0;
                if part_present(RHS, 0) {
                    let (p0, p3) = gp20(a, rhs.part_at(0).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 1) {
                    let p2 = gp21(a, rhs.part_at(1).0);
                    acc[2] = acc[2] + p2.into();
                }
                // The (2,2) pair is identically zero and has no kernel.
                if part_present(RHS, 3) {
                    let (p0, p3) = gp23(a, rhs.part_at(3).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
            }
            if part_present(LHS, 3) {
                let a = self.part_at(3).0;
                if part_present(RHS, 0) {
                    let (p1, p2) = gp30(a, rhs.part_at(0).0);
                    acc[1] = acc[1] + p1.into();
                    acc[2] = acc[2] + p2.into();
                }
                if part_present(RHS, 1) {
                    let (p0, p3) = gp31(a, rhs.part_at(1).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 2) {
                    let (p0, p3) = gp32(a, rhs.part_at(2).0);
                    acc[0] = acc[0] + p0.into();
                    acc[3] = acc[3] + p3.into();
                }
                if part_present(RHS, 3) {
                    let (p1, p2) = gp33(a, rhs.part_at(3).0);
                    acc[1] = acc[1] + p1.into();
                    acc[2] = acc[2] + p2.into();
                }
            }
        }
        Entity::<{ product_mask(LHS, RHS) }>::gather(acc)
    }
}

macro_rules! impl_gp {
    ($(#[$doc:meta])* |$a:ident: $a_ty:ty, $b:ident: $b_ty:ty| -> $output:ty $body:block) => {
        $(#[$doc])*
        impl std::ops::Mul<$b_ty> for $a_ty {
            type Output = $output;

            #[inline]
            fn mul(self, other: $b_ty) -> Self::Output {
                let $a = self;
                let $b = other;
                $body
            }
        }
    };
}

impl_gp!(
    /// The product of two planes composes their reflections into a motor;
    /// for intersecting planes the motor is a rotation about their common
    /// line, for parallel planes a translation.
    |a: Plane, b: Plane| -> Motor { Motor(a.0 * b.0) }
);

impl_gp!(|a: Plane, b: Point| -> Motor { Motor(a.0 * b.0) });
impl_gp!(|a: Point, b: Plane| -> Motor { Motor(a.0 * b.0) });

impl_gp!(
    /// The product of two points is a motor whose translation moves `b`
    /// to `a` when applied twice.
    |a: Point, b: Point| -> Motor { Motor(a.0 * b.0) }
);

impl_gp!(
    /// The product of two lines through the origin is a rotation payload:
    /// scalar plus Euclidean bivector.
    |a: Line, b: Line| -> Entity<{ mask::LINE }> { a.0 * b.0 }
);

impl_gp!(
    /// The product of two bivectors is a motor producing a screw motion
    /// about their common normal.
    |a: Bivector, b: Bivector| -> Motor { Motor(a.0 * b.0) }
);

impl_gp!(
    /// Motor composition: `a * b` applies `b`, then `a`.
    |a: Motor, b: Motor| -> Motor { Motor(a.0 * b.0) }
);
