//! Directions in $\mathbf{P}(\mathbb{R}^*_{3,0,1})$ are represented using
//! points at infinity (homogeneous coordinate 0). Having a homogeneous
//! coordinate of zero ensures that directions are translation-invariant.

use crate::arch::f32x4;
use crate::entity::{mask, Entity};

#[derive(Clone, Copy)]
pub struct Direction(pub(crate) Entity<{ mask::POINT }>);

impl Direction {
    /// Create a direction. Components are placed verbatim; use
    /// [`normalize`](Self::normalize) for a unit direction.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Entity::from_parts([f32x4::from_array([0.0, z, y, x])]))
    }

    /// Normalize this direction by dividing all components by the
    /// magnitude (`rsqrtps` with a single Newton-Raphson refinement
    /// iteration).
    pub fn normalize(&mut self) {
        unsafe {
            use crate::arch::{hi_dp_bc, rsqrt_nr1};
            let p3 = self.0.part::<3>().0;
            let inv_norm = rsqrt_nr1(hi_dp_bc(p3, p3));
            *self.0.part_mut::<3>() = f32x4(p3) * f32x4(inv_norm);
        }
    }

    /// Return a normalized copy of this direction.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

/// A trivector entity is a valid direction only when its weight vanishes.
impl From<Entity<{ mask::POINT }>> for Direction {
    #[inline]
    fn from(e: Entity<{ mask::POINT }>) -> Self {
        debug_assert!(
            e.e123().abs() < 1e-7,
            "the homogeneous weight of a direction must be zero",
        );
        Self(e)
    }
}

impl From<Direction> for Entity<{ mask::POINT }> {
    #[inline]
    fn from(d: Direction) -> Self {
        d.0
    }
}
