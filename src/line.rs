//! # Lines
//!
//! Three line classes are provided: `Line`, `IdealLine`, and `Bivector`.
//! `Line` holds the three non-degenerate coordinates of a line through the
//! origin. `IdealLine` represents a line at infinity. `Bivector` is the full
//! six-coordinate entity with a direct correspondence to Plücker
//! coordinates; when created as the meet of two planes it is a Euclidean
//! line (factorizable as the meet of two planes).

use crate::arch::f32x4;
use crate::entity::{mask, Entity};
use core::arch::x86_64::*;

/// A line through the origin,
/// $d\mathbf{e}_{12} + e\mathbf{e}_{31} + f\mathbf{e}_{23}$.
/// The scalar slot of partition p1 is pinned to zero.
#[derive(Clone, Copy)]
pub struct Line(pub(crate) Entity<{ mask::LINE }>);

impl Line {
    #[inline]
    pub fn new(d: f32, e: f32, f: f32) -> Self {
        Self(Entity::from_parts([f32x4::from_array([0.0, d, e, f])]))
    }

    /// Returns the square root of the quantity produced by `squared_norm`.
    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    /// Returns $d^2 + e^2 + f^2$.
    pub fn squared_norm(self) -> f32 {
        unsafe {
            let p1 = self.0.part::<1>().0;
            f32x4(crate::arch::hi_dp(p1, p1)).first()
        }
    }

    pub fn normalize(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rsqrt_nr1};
            let p1 = self.0.part::<1>().0;
            let inv_norm = rsqrt_nr1(hi_dp_bc(p1, p1));
            *self.0.part_mut::<1>() = f32x4(_mm_mul_ps(p1, inv_norm));
        }
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn invert(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rsqrt_nr1};
            let p1 = self.0.part::<1>().0;
            let inv_norm = rsqrt_nr1(hi_dp_bc(p1, p1));
            let p1 = _mm_mul_ps(_mm_mul_ps(p1, inv_norm), inv_norm);
            let p1 = _mm_xor_ps(p1, _mm_set_ps(-0.0, -0.0, -0.0, 0.0));
            *self.0.part_mut::<1>() = f32x4(p1);
        }
    }

    #[inline]
    pub fn inverse(mut self) -> Self {
        self.invert();
        self
    }
}

/// A line at infinity,
/// $a\mathbf{e}_{01} + b\mathbf{e}_{02} + c\mathbf{e}_{03}$.
/// The pseudoscalar slot of partition p2 is pinned to zero.
#[derive(Clone, Copy)]
pub struct IdealLine(pub(crate) Entity<{ mask::IDEAL_LINE }>);

impl IdealLine {
    #[inline]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self(Entity::from_parts([f32x4::from_array([0.0, a, b, c])]))
    }

    #[inline]
    pub fn ideal_norm(self) -> f32 {
        self.squared_ideal_norm().sqrt()
    }

    pub fn squared_ideal_norm(self) -> f32 {
        unsafe {
            let p2 = self.0.part::<2>().0;
            f32x4(crate::arch::hi_dp(p2, p2)).first()
        }
    }
}

/// The full six-coordinate bivector
/// $a\mathbf{e}_{01} + b\mathbf{e}_{02} + c\mathbf{e}_{03} +
/// d\mathbf{e}_{12} + e\mathbf{e}_{31} + f\mathbf{e}_{23}$.
/// Both odd slots (scalar and pseudoscalar) are pinned to zero.
#[derive(Clone, Copy)]
pub struct Bivector(pub(crate) Entity<{ mask::MOTOR }>);

impl Bivector {
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self(Entity::from_parts([
            f32x4::from_array([0.0, d, e, f]),
            f32x4::from_array([0.0, a, b, c]),
        ]))
    }

    #[inline]
    pub fn from_line(line: Line) -> Self {
        Self(Entity::from_parts([line.0.part::<1>(), f32x4::zero()]))
    }

    #[inline]
    pub fn from_ideal_line(ideal_line: IdealLine) -> Self {
        Self(Entity::from_parts([
            f32x4::zero(),
            ideal_line.0.part::<2>(),
        ]))
    }

    /// Returns the square root of the quantity produced by `squared_norm`.
    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    /// If the bivector is constructed as the join of two normalized
    /// points, the squared norm is the squared distance between them.
    /// Returns $d^2 + e^2 + f^2$.
    pub fn squared_norm(self) -> f32 {
        unsafe {
            let p1 = self.0.part::<1>().0;
            f32x4(crate::arch::hi_dp(p1, p1)).first()
        }
    }

    /// Normalize the bivector $\ell$ such that $\ell^2 = -1$.
    pub fn normalize(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rcp_nr1, rsqrt_nr1};
            // l = b + c where b is p1 and c is p2
            //
            // l * ~l = |b|^2 - 2(b1 c3 + b2 c2 + b3 c1) e0123
            //
            // 1/sqrt(l*~l) = 1/|b| + (b1 c3 + b2 c2 + b3 c1)/|b|^3 e0123
            //              = s + t e0123
            let p1 = self.0.part::<1>().0;
            let p2 = self.0.part::<2>().0;
            let b2 = hi_dp_bc(p1, p1);
            let s = rsqrt_nr1(b2);
            let bc = hi_dp_bc(p1, swizzle!(p2, 1, 2, 3, 0));
            let t = _mm_mul_ps(_mm_mul_ps(bc, rcp_nr1(b2)), s);

            // p1 * (s + t e0123) = s * p1 - t p1_perp
            let tmp = _mm_mul_ps(p2, s);
            let p1_perp = swizzle!(p1, 1, 2, 3, 0);
            *self.0.part_mut::<2>() = f32x4(_mm_sub_ps(tmp, _mm_mul_ps(p1_perp, t)));
            *self.0.part_mut::<1>() = f32x4(_mm_mul_ps(p1, s));
        }
    }

    /// Return a normalized copy of this bivector.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl From<Line> for Bivector {
    #[inline]
    fn from(line: Line) -> Self {
        Self::from_line(line)
    }
}

impl From<IdealLine> for Bivector {
    #[inline]
    fn from(ideal_line: IdealLine) -> Self {
        Self::from_ideal_line(ideal_line)
    }
}
