//! # Motors
//!
//! A `Motor` represents a kinematic motion in our algebra. From [Chasles'
//! theorem](https://en.wikipedia.org/wiki/Chasles%27_theorem_(kinematics)),
//! we know that any rigid body displacement can be produced by a translation
//! along a line, followed or preceded by a rotation about an axis parallel
//! to that line. The motor algebra is isomorphic to the dual quaternions but
//! exists here in the same algebra as all the other geometric entities and
//! actions at our disposal. The primary benefit to using a motor over its
//! corresponding matrix operation is twofold. First, you get the benefit of
//! numerical stability when composing multiple actions via the geometric
//! product (`*`). Second, because the motors constitute a continuous group,
//! they are amenable to smooth interpolation and differentiation.
//!
//! Motors are multiplied to one another with the `*` operator to create a
//! new motor equivalent to the application of each factor:
//!
//! ```ignore
//!     // Suppose we have 3 motors m1, m2, and m3
//!
//!     // The motor m created here represents the combined action of m1,
//!     // m2, and m3.
//!     let m: Motor = m3 * m2 * m1;
//! ```

use crate::arch::f32x4;
use crate::entity::{mask, Entity};
use core::arch::x86_64::*;

/// An element of the even subalgebra: partitions p1 and p2.
#[derive(Clone, Copy)]
pub struct Motor(pub(crate) Entity<{ mask::MOTOR }>);

impl Motor {
    /// Direct initialization from components. A more common way of creating
    /// a motor is to take a product of two planes or of two normalized
    /// bivectors. The arguments fill the two partitions in slot order and
    /// correspond to the multivector
    /// $a + b\mathbf{e}_{12} + c\mathbf{e}_{31} + d\mathbf{e}_{23} +
    /// e\mathbf{e}_{0123} + f\mathbf{e}_{01} + g\mathbf{e}_{02} +
    /// h\mathbf{e}_{03}$.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32) -> Self {
        Self(Entity::from_parts([
            f32x4::from_array([a, b, c, d]),
            f32x4::from_array([e, f, g, h]),
        ]))
    }

    /// Partition p1 in slot order `(scalar, e12, e31, e23)`.
    #[inline]
    pub fn store1(self) -> [f32; 4] {
        self.0.part::<1>().into_array()
    }

    /// Partition p2 in slot order `(e0123, e01, e02, e03)`.
    #[inline]
    pub fn store2(self) -> [f32; 4] {
        self.0.part::<2>().into_array()
    }

    /// Normalize this motor $m$ such that $m\widetilde{m} = 1$.
    ///
    /// Only normalized motors preserve the weight of the entities they
    /// conjugate.
    pub fn normalize(&mut self) {
        unsafe {
            use crate::arch::{dp_bc, rcp_nr1, rsqrt_nr1};
            // m = b + c where b is p1 and c is p2
            //
            // m * ~m = |b|^2 + 2(b0 c0 - b1 c3 - b2 c2 - b3 c1) e0123
            //
            // The square root of the norm is |b| plus half the e0123
            // coefficient over |b|, so
            //
            // 1/sqrt(m*~m) = s + t e0123 with
            //   s = 1/|b|
            //   t = (b1 c3 + b2 c2 + b3 c1 - b0 c0)/|b|^3
            let p1 = self.0.part::<1>().0;
            let p2 = self.0.part::<2>().0;
            let b2 = dp_bc(p1, p1);
            let s = rsqrt_nr1(b2);
            let bc = dp_bc(_mm_xor_ps(p1, _mm_set_ss(-0.0)), swizzle!(p2, 1, 2, 3, 0));
            let t = _mm_mul_ps(_mm_mul_ps(bc, rcp_nr1(b2)), s);

            // (b + c)(s + t e0123) = b s + c s + b t e0123
            let tmp = _mm_mul_ps(p2, s);
            let b_perp = _mm_xor_ps(swizzle!(p1, 1, 2, 3, 0), _mm_set_ss(-0.0));
            *self.0.part_mut::<2>() = f32x4(_mm_sub_ps(tmp, _mm_mul_ps(b_perp, t)));
            *self.0.part_mut::<1>() = f32x4(_mm_mul_ps(p1, s));
        }
    }

    /// Return a normalized copy of this motor.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}
