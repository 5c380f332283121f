// Shared plumbing for the named entity wrappers. Each wrapper is a newtype
// over an `Entity` with a fixed presence mask; everything an entity already
// knows how to do is forwarded here.

macro_rules! derive_conv {
    ($ty:ident : $mask:expr) => {
        derive_conv!(@entity $ty : $mask);

        impl From<Entity<{ $mask }>> for $ty {
            #[inline(always)]
            fn from(e: Entity<{ $mask }>) -> Self {
                Self(e)
            }
        }

        impl From<$ty> for Entity<{ $mask }> {
            #[inline(always)]
            fn from(v: $ty) -> Self {
                v.0
            }
        }
    };

    (@entity $ty:ident : $mask:expr) => {
        impl $ty {
            /// The underlying partitioned entity.
            #[inline(always)]
            pub fn entity(self) -> Entity<{ $mask }> {
                self.0
            }
        }
    };
}

macro_rules! derive_ops {
    ($ty:ident) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.0).finish()
            }
        }

        impl std::cmp::PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl $ty {
            /// Component-wise comparison with tolerance `epsilon`.
            #[inline]
            pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
                self.0.approx_eq(&other.0, epsilon)
            }

            /// Reversion; see [`Entity::reversed`].
            #[inline]
            pub fn reversed(self) -> Self {
                Self(self.0.reversed())
            }
        }

        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        /// Unary minus.
        impl std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        /// Reversion.
        impl std::ops::Not for $ty {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        /// Uniform scaling.
        impl std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, s: f32) -> Self {
                Self(self.0 * s)
            }
        }

        /// Uniform inverse scaling.
        impl std::ops::Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, s: f32) -> Self {
                Self(self.0 / s)
            }
        }
    };
}

macro_rules! derive_attrs {
    ($ty:ident { $( $attr:ident ),+ $(,)? }) => {
        impl $ty {
            $(
                #[inline]
                pub fn $attr(self) -> f32 {
                    (self.0).$attr()
                }
            )+
        }
    };

    ($ty:ident { $( $alias:ident -> $attr:ident ),+ $(,)? }) => {
        impl $ty {
            $(
                #[inline]
                pub fn $alias(self) -> f32 {
                    (self.0).$attr()
                }
            )+
        }
    };
}

use crate::entity::{mask, Entity};
use crate::{Bivector, Direction, IdealLine, Line, Motor, Plane, Point};

derive_conv!(Plane : mask::PLANE);
derive_conv!(Line : mask::LINE);
derive_conv!(IdealLine : mask::IDEAL_LINE);
derive_conv!(Bivector : mask::MOTOR);
derive_conv!(Motor : mask::MOTOR);
derive_conv!(Point : mask::POINT);
// Direction converts through hand-written impls that check the weight.
derive_conv!(@entity Direction : mask::POINT);

derive_ops!(Plane);
derive_ops!(Line);
derive_ops!(IdealLine);
derive_ops!(Bivector);
derive_ops!(Motor);
derive_ops!(Point);
derive_ops!(Direction);

derive_attrs!(Plane { e0, e1, e2, e3 });
derive_attrs!(Plane { d -> e0, x -> e1, y -> e2, z -> e3 });
derive_attrs!(Line { e12, e21, e31, e13, e23, e32 });
derive_attrs!(IdealLine { e01, e10, e02, e20, e03, e30 });
derive_attrs!(Bivector { e01, e02, e03, e12, e31, e23 });
derive_attrs!(Motor { scalar, e12, e21, e31, e13, e23, e32, e01, e02, e03, e0123 });
derive_attrs!(Point { e123, e021, e013, e032 });
derive_attrs!(Point { w -> e123, x -> e032, y -> e013, z -> e021 });
derive_attrs!(Direction { x -> e032, y -> e013, z -> e021 });
