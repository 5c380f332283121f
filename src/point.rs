//! # Points
//!
//! A point is represented as the multivector
//! $x\mathbf{e}_{032} + y\mathbf{e}_{013} + z\mathbf{e}_{021} +
//! \mathbf{e}_{123}$. The point has a trivector representation because it is
//! the fixed point of three planar reflections (each of which is a grade-1
//! multivector).

use crate::arch::f32x4;
use crate::entity::{mask, Entity};

/// A grade-3 entity storing partition p3 as `(w, z, y, x)`, so the slots
/// read $(\mathbf{e}_{123}, \mathbf{e}_{021}, \mathbf{e}_{013},
/// \mathbf{e}_{032})$.
#[derive(Clone, Copy)]
pub struct Point(pub(crate) Entity<{ mask::POINT }>);

impl Point {
    /// Component-wise constructor (homogeneous coordinate is automatically
    /// initialized to 1).
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Entity::from_parts([f32x4::from_array([1.0, z, y, x])]))
    }

    /// Raw load of partition data. The four floats are consumed in slot
    /// order, `(w, z, y, x)` with `w` at the lowest address.
    ///
    /// # danger
    ///
    /// Unlike the component-wise constructor, the load here requires the
    /// homogeneous coordinate `w` to be supplied as well.
    #[inline]
    pub fn load(&mut self, data: [f32; 4]) {
        *self.0.part_mut::<3>() = f32x4::from_array(data);
    }

    /// Normalize this point: divide every slot by the homogeneous weight
    /// (division is done via `rcpps` with an additional Newton-Raphson
    /// refinement).
    ///
    /// A weight of zero leaves no finite representative; the result is
    /// unspecified in that case.
    #[inline]
    pub fn normalize(&mut self) {
        unsafe {
            let p3 = self.0.part::<3>().0;
            let w = swizzle!(p3, 0, 0, 0, 0);
            *self.0.part_mut::<3>() = f32x4(p3) * f32x4(w).rcp_nr1();
        }
    }

    /// Return a normalized copy of this point.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn invert(&mut self) {
        unsafe {
            let p3 = self.0.part::<3>().0;
            let inv_norm = f32x4(swizzle!(p3, 0, 0, 0, 0)).rcp_nr1();
            let p3 = inv_norm * (inv_norm * f32x4(p3));
            *self.0.part_mut::<3>() = p3;
        }
    }

    #[inline]
    pub fn inverse(mut self) -> Self {
        self.invert();
        self
    }
}
