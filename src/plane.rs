//! # Planes
//!
//! In projective geometry, planes are the fundamental element through which
//! all other entities are constructed. Lines are the meet of two planes, and
//! points are the meet of three planes (equivalently, a line and a plane).
//!
//! The plane multivector in PGA looks like
//! $d\mathbf{e}_0 + a\mathbf{e}_1 + b\mathbf{e}_2 + c\mathbf{e}_3$. Points
//! that reside on the plane satisfy the familiar equation
//! $d + ax + by + cz = 0$.

use crate::arch::f32x4;
use crate::entity::{mask, Entity};
use core::arch::x86_64::*;

/// A grade-1 entity storing partition p0 as `(c, b, a, d)`, so the slots
/// read $(\mathbf{e}_3, \mathbf{e}_2, \mathbf{e}_1, \mathbf{e}_0)$.
#[derive(Clone, Copy)]
pub struct Plane(pub(crate) Entity<{ mask::PLANE }>);

impl Plane {
    /// The multivector $a\mathbf{e}_1 + b\mathbf{e}_2 + c\mathbf{e}_3 +
    /// d\mathbf{e}_0$.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self(Entity::from_parts([f32x4::from_array([c, b, a, d])]))
    }

    /// Raw load of partition data. The four floats are consumed in slot
    /// order, `(c, b, a, d)` with `c` at the lowest address.
    ///
    /// # tip
    ///
    /// This is a faster mechanism for setting data compared to setting
    /// components one at a time.
    #[inline]
    pub fn load(&mut self, data: [f32; 4]) {
        *self.0.part_mut::<0>() = f32x4::from_array(data);
    }

    /// Normalize this plane $p$ such that $p \cdot p = 1$.
    ///
    /// In order to compute the cosine of the angle between planes via the
    /// geometric product `*`, the planes must be normalized. Producing a
    /// normalized motor between two planes with `*` also requires that the
    /// planes are normalized.
    pub fn normalize(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rsqrt_nr1};
            let p0 = self.0.part::<0>().0;
            // (e0, e3, e2, e1): the three highest slots carry the Euclidean
            // normal
            let n = swizzle!(p0, 2, 1, 0, 3);
            let inv_norm = rsqrt_nr1(hi_dp_bc(n, n));
            *self.0.part_mut::<0>() = f32x4(_mm_mul_ps(p0, inv_norm));
        }
    }

    /// Return a normalized copy of this plane.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Length of the Euclidean normal $(a, b, c)$.
    ///
    /// Given a normalized point $P$ and normalized line $\ell$, the plane
    /// $P \vee \ell$ containing both $\ell$ and $P$ will have a norm
    /// equivalent to the distance between $P$ and $\ell$.
    pub fn norm(self) -> f32 {
        unsafe {
            use crate::arch::{hi_dp, sqrt_nr1};
            let p0 = self.0.part::<0>().0;
            let n = swizzle!(p0, 2, 1, 0, 3);
            f32x4(sqrt_nr1(hi_dp(n, n))).first()
        }
    }

    pub fn invert(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rsqrt_nr1};
            let p0 = self.0.part::<0>().0;
            let n = swizzle!(p0, 2, 1, 0, 3);
            let inv_norm = rsqrt_nr1(hi_dp_bc(n, n));
            let p0 = _mm_mul_ps(_mm_mul_ps(p0, inv_norm), inv_norm);
            *self.0.part_mut::<0>() = f32x4(p0);
        }
    }

    #[inline]
    pub fn inverse(mut self) -> Self {
        self.invert();
        self
    }
}
