//! # plucker
//!
//! A SIMD implementation of the projective geometric algebra
//! $\mathbf{P}(\mathbb{R}^*_{3,0,1})$: planes, lines, points, and the
//! motors that move them, all expressed as partitioned multivectors whose
//! presence mask is part of the type. The geometric product between two
//! entities monomorphizes to exactly the partition-pair kernels their
//! masks require.

#![feature(generic_const_exprs)]
#![feature(stdarch_x86_mm_shuffle)]
#![allow(incomplete_features, non_snake_case, unused_unsafe)]
#![warn(clippy::all)]

#[macro_use]
pub mod arch;

mod entity;
mod geometric_product;

mod direction;
mod line;
mod motor;
mod plane;
mod point;

mod macros;

pub mod generator;

pub use self::{
    direction::Direction,
    entity::{
        mask, part_count, part_offset, part_present, product_mask, Assert, Entity, IsTrue,
        Multivector,
    },
    line::{Bivector, IdealLine, Line},
    motor::Motor,
    plane::Plane,
    point::Point,
};

/// The plane $a\mathbf{e}_1 + b\mathbf{e}_2 + c\mathbf{e}_3 +
/// d\mathbf{e}_0$.
pub fn plane(a: f32, b: f32, c: f32, d: f32) -> Plane {
    Plane::new(a, b, c, d)
}

/// The line through the origin $d\mathbf{e}_{12} + e\mathbf{e}_{31} +
/// f\mathbf{e}_{23}$.
pub fn line(d: f32, e: f32, f: f32) -> Line {
    Line::new(d, e, f)
}

/// The line at infinity $a\mathbf{e}_{01} + b\mathbf{e}_{02} +
/// c\mathbf{e}_{03}$.
pub fn ideal_line(a: f32, b: f32, c: f32) -> IdealLine {
    IdealLine::new(a, b, c)
}

/// The six-coordinate bivector $a\mathbf{e}_{01} + b\mathbf{e}_{02} +
/// c\mathbf{e}_{03} + d\mathbf{e}_{12} + e\mathbf{e}_{31} +
/// f\mathbf{e}_{23}$.
pub fn bivector(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Bivector {
    Bivector::new(a, b, c, d, e, f)
}

/// The motor $a + b\mathbf{e}_{12} + c\mathbf{e}_{31} + d\mathbf{e}_{23} +
/// e\mathbf{e}_{0123} + f\mathbf{e}_{01} + g\mathbf{e}_{02} +
/// h\mathbf{e}_{03}$.
#[allow(clippy::too_many_arguments)]
pub fn motor(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32) -> Motor {
    Motor::new(a, b, c, d, e, f, g, h)
}

/// The point $(x, y, z)$ with homogeneous weight 1.
pub fn point(x: f32, y: f32, z: f32) -> Point {
    Point::new(x, y, z)
}

/// The ideal point (direction) $(x, y, z)$.
pub fn direction(x: f32, y: f32, z: f32) -> Direction {
    Direction::new(x, y, z)
}
