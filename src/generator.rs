//! Unit-valued basis generators for expression building.
//!
//! Each function returns an entity of the smallest mask containing that
//! basis element, with the corresponding slot set to one. Expressions are
//! assembled with the ordinary operators:
//!
//! ```ignore
//!     use plucker::generator::*;
//!
//!     // The plane x = 0 rotated into a motor with the z-axis line
//!     let p = e1() + 2.0 * e2();
//!     let m = p * e3();
//! ```

use crate::arch::f32x4;
use crate::entity::{mask, Entity};

macro_rules! generators {
    ($( $(#[$doc:meta])* $name:ident : $m:expr => $slot:expr ),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name() -> Entity<{ $m }> {
                let mut slots = [0.0; 4];
                slots[$slot] = 1.0;
                Entity::from_parts([f32x4::from_array(slots)])
            }
        )+
    };
}

generators! {
    /// The degenerate generator.
    e0 : mask::PLANE => 3,
    e1 : mask::PLANE => 2,
    e2 : mask::PLANE => 1,
    e3 : mask::PLANE => 0,
    e12 : mask::LINE => 1,
    e31 : mask::LINE => 2,
    e23 : mask::LINE => 3,
    e01 : mask::IDEAL_LINE => 1,
    e02 : mask::IDEAL_LINE => 2,
    e03 : mask::IDEAL_LINE => 3,
    /// The pseudoscalar.
    e0123 : mask::IDEAL_LINE => 0,
    e123 : mask::POINT => 0,
    e021 : mask::POINT => 1,
    e013 : mask::POINT => 2,
    e032 : mask::POINT => 3,
}

/// The pseudoscalar, by its customary name.
#[inline]
pub fn I() -> Entity<{ mask::IDEAL_LINE }> {
    e0123()
}
