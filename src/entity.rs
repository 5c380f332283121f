//! # Partitioned multivectors
//!
//! A multivector of $\mathbf{P}(\mathbb{R}^*_{3,0,1})$ has 16 coordinates,
//! but the entities of interest (planes, lines, points, motors) each touch
//! only a few of them. Coordinates are grouped into four SIMD partitions of
//! four basis elements each, and an entity stores only the partitions its
//! 4-bit presence mask selects. The mask is a const generic, so absence is
//! visible to the compiler: storage is exactly `popcount(mask)` registers,
//! asking for a missing partition is a type error, and the geometric
//! product monomorphizes down to the partition-pair kernels the operand
//! masks actually require.
//!
//! Partition memory layouts
//!     LSB --> MSB
//! p0: (e3, e2, e1, e0)
//! p1: (1, e12, e31, e23)
//! p2: (e0123, e01, e02, e03)
//! p3: (e123, e021, e013, e032)

use crate::arch::f32x4;

/// Presence masks of the named entities.
pub mod mask {
    /// Grade-1 vectors (planes).
    pub const PLANE: u8 = 0b0001;
    /// Scalar and Euclidean bivectors (lines through the origin, rotors).
    pub const LINE: u8 = 0b0010;
    /// Pseudoscalar and ideal bivectors (lines at infinity, translators).
    pub const IDEAL_LINE: u8 = 0b0100;
    /// The even subalgebra (general bivectors, motors).
    pub const MOTOR: u8 = 0b0110;
    /// Grade-3 trivectors (points and directions).
    pub const POINT: u8 = 0b1000;
    /// Every partition.
    pub const FULL: u8 = 0b1111;
}

/// Number of stored partitions for a presence mask.
pub const fn part_count(mask: u8) -> usize {
    mask.count_ones() as usize
}

/// Storage index of partition `part` within the packed partition array.
pub const fn part_offset(mask: u8, part: u32) -> usize {
    (mask & ((1u8 << part) - 1)).count_ones() as usize
}

/// Whether bit `part` is set in `mask`.
pub const fn part_present(mask: u8, part: u32) -> bool {
    mask >> part & 1 == 1
}

/// Presence mask of the geometric product of two entities.
///
/// An output partition is present exactly when some pair of present input
/// partitions contributes to it; the pairs are fixed by the grades each
/// partition holds, so the rule is a closed form over the input masks.
pub const fn product_mask(lhs: u8, rhs: u8) -> u8 {
    let (a0, a1) = (part_present(lhs, 0), part_present(lhs, 1));
    let (a2, a3) = (part_present(lhs, 2), part_present(lhs, 3));
    let (b0, b1) = (part_present(rhs, 0), part_present(rhs, 1));
    let (b2, b3) = (part_present(rhs, 2), part_present(rhs, 3));

    let odd = (a0 && (b1 || b2))
        || ((a1 || a2) && b0)
        || (a1 && b3)
        || (a3 && b1)
        || (a2 && b3)
        || (a3 && b2);
    let p1 = (a0 && b0) || (a1 && b1) || (a3 && b3) || (a0 && b3) || (a3 && b0);
    let p2 = (a0 && b0)
        || (a3 && b3)
        || (a1 && b2)
        || (a2 && b1)
        || (a0 && b3)
        || (a3 && b0);

    (odd as u8) | (p1 as u8) << 1 | (p2 as u8) << 2 | (odd as u8) << 3
}

/// Compile-time predicate carrier for mask bounds; see [`IsTrue`].
pub enum Assert<const CHECK: bool> {}

/// Implemented only for `Assert<true>`, turning a mask predicate into a
/// trait bound that rejects ill-formed partition accesses at type-check
/// time.
pub trait IsTrue {}

impl IsTrue for Assert<true> {}

/// A multivector restricted to the partitions selected by `PM`.
#[repr(C)]
pub struct Entity<const PM: u8>
where
    [(); part_count(PM)]: ,
{
    parts: [f32x4; part_count(PM)],
}

/// A general element of the algebra with every partition stored.
pub type Multivector = Entity<{ mask::FULL }>;

impl<const PM: u8> Clone for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const PM: u8> Copy for Entity<PM> where [(); part_count(PM)]: {}

impl<const PM: u8> Entity<PM>
where
    [(); part_count(PM)]: ,
{
    /// The presence mask.
    pub const MASK: u8 = PM;

    /// The presence mask as a value.
    #[inline]
    pub fn mask(&self) -> u8 {
        PM
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            parts: [f32x4::zero(); part_count(PM)],
        }
    }

    #[inline(always)]
    pub(crate) fn from_parts(parts: [f32x4; part_count(PM)]) -> Self {
        Self { parts }
    }

    /// The stored partition `PART`. Rejected at compile time when bit
    /// `PART` is clear in the mask.
    #[inline(always)]
    pub fn part<const PART: u32>(&self) -> f32x4
    where
        Assert<{ part_present(PM, PART) }>: IsTrue,
    {
        self.parts[part_offset(PM, PART)]
    }

    #[inline(always)]
    pub(crate) fn part_mut<const PART: u32>(&mut self) -> &mut f32x4
    where
        Assert<{ part_present(PM, PART) }>: IsTrue,
    {
        &mut self.parts[part_offset(PM, PART)]
    }

    // Unchecked variant for mask-generic code whose branches are guarded by
    // `part_present`; the guards constant-fold per monomorphization.
    #[inline(always)]
    pub(crate) fn part_at(&self, part: u32) -> f32x4 {
        debug_assert!(part_present(PM, part));
        self.parts[part_offset(PM, part)]
    }

    /// Build an entity from four per-partition accumulators, keeping the
    /// partitions the mask selects.
    #[inline(always)]
    pub(crate) fn gather(acc: [f32x4; 4]) -> Self {
        let mut parts = [f32x4::zero(); part_count(PM)];
        let mut part = 0;
        while part < 4 {
            if part_present(PM, part) {
                parts[part_offset(PM, part)] = acc[part as usize];
            }
            part += 1;
        }
        Self { parts }
    }

    /// Reversion: the sign of every grade-2 and grade-3 basis element
    /// flips, while grades 0, 1, and 4 are untouched. In partition form
    /// that negates all of p3 and slots `[1..3]` of p1 and p2.
    #[inline]
    pub fn reversed(self) -> Self {
        let mut parts = self.parts;
        if part_present(PM, 1) {
            let i = part_offset(PM, 1);
            parts[i] = parts[i] ^ f32x4::flip_hi();
        }
        if part_present(PM, 2) {
            let i = part_offset(PM, 2);
            parts[i] = parts[i] ^ f32x4::flip_hi();
        }
        if part_present(PM, 3) {
            let i = part_offset(PM, 3);
            parts[i] = parts[i] ^ f32x4::flip_all();
        }
        Self { parts }
    }

    /// Component-wise comparison with tolerance `epsilon` across the stored
    /// partitions.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let mut part = 0;
        let mut eq = true;
        while part < 4 {
            if part_present(PM, part) {
                eq &= self.part_at(part).approx_eq(other.part_at(part), epsilon);
            }
            part += 1;
        }
        eq
    }
}

impl<const PM: u8> core::fmt::Debug for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut tuple = f.debug_tuple("Entity");
        let mut part = 0;
        while part < 4 {
            if part_present(PM, part) {
                tuple.field(&self.part_at(part));
            }
            part += 1;
        }
        tuple.finish()
    }
}

impl<const PM: u8> PartialEq for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    fn eq(&self, other: &Self) -> bool {
        let mut part = 0;
        let mut eq = true;
        while part < 4 {
            if part_present(PM, part) {
                eq &= self.part_at(part).eq(other.part_at(part));
            }
            part += 1;
        }
        eq
    }
}

impl<const LHS: u8, const RHS: u8> std::ops::Add<Entity<RHS>> for Entity<LHS>
where
    [(); part_count(LHS)]: ,
    [(); part_count(RHS)]: ,
    [(); part_count(LHS | RHS)]: ,
{
    type Output = Entity<{ LHS | RHS }>;

    /// Partition-wise sum; the result mask is the union of the operand
    /// masks and partitions present on one side only are copied through.
    #[inline]
    fn add(self, rhs: Entity<RHS>) -> Self::Output {
        let mut acc = [f32x4::zero(); 4];
        let mut part = 0;
        while part < 4 {
            if part_present(LHS, part) && part_present(RHS, part) {
                acc[part as usize] = self.part_at(part) + rhs.part_at(part);
            } else if part_present(LHS, part) {
                acc[part as usize] = self.part_at(part);
            } else if part_present(RHS, part) {
                acc[part as usize] = rhs.part_at(part);
            }
            part += 1;
        }
        Entity::<{ LHS | RHS }>::gather(acc)
    }
}

impl<const LHS: u8, const RHS: u8> std::ops::Sub<Entity<RHS>> for Entity<LHS>
where
    [(); part_count(LHS)]: ,
    [(); part_count(RHS)]: ,
    [(); part_count(LHS | RHS)]: ,
{
    type Output = Entity<{ LHS | RHS }>;

    #[inline]
    fn sub(self, rhs: Entity<RHS>) -> Self::Output {
        let mut acc = [f32x4::zero(); 4];
        let mut part = 0;
        while part < 4 {
            if part_present(LHS, part) && part_present(RHS, part) {
                acc[part as usize] = self.part_at(part) - rhs.part_at(part);
            } else if part_present(LHS, part) {
                acc[part as usize] = self.part_at(part);
            } else if part_present(RHS, part) {
                acc[part as usize] = rhs.part_at(part) ^ f32x4::flip_all();
            }
            part += 1;
        }
        Entity::<{ LHS | RHS }>::gather(acc)
    }
}

/// In-place sum, available only when the right mask is a subset of the
/// left so no new partition can appear.
impl<const LHS: u8, const RHS: u8> std::ops::AddAssign<Entity<RHS>> for Entity<LHS>
where
    [(); part_count(LHS)]: ,
    [(); part_count(RHS)]: ,
    Assert<{ LHS | RHS == LHS }>: IsTrue,
{
    #[inline]
    fn add_assign(&mut self, rhs: Entity<RHS>) {
        let mut part = 0;
        while part < 4 {
            if part_present(RHS, part) {
                let i = part_offset(LHS, part);
                self.parts[i] = self.parts[i] + rhs.part_at(part);
            }
            part += 1;
        }
    }
}

impl<const LHS: u8, const RHS: u8> std::ops::SubAssign<Entity<RHS>> for Entity<LHS>
where
    [(); part_count(LHS)]: ,
    [(); part_count(RHS)]: ,
    Assert<{ LHS | RHS == LHS }>: IsTrue,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Entity<RHS>) {
        let mut part = 0;
        while part < 4 {
            if part_present(RHS, part) {
                let i = part_offset(LHS, part);
                self.parts[i] = self.parts[i] - rhs.part_at(part);
            }
            part += 1;
        }
    }
}

impl<const PM: u8> std::ops::Neg for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        let mut parts = self.parts;
        for part in parts.iter_mut() {
            *part = *part ^ f32x4::flip_all();
        }
        Self { parts }
    }
}

/// Reversion as an operator, standing in for the customary `~`.
impl<const PM: u8> std::ops::Not for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.reversed()
    }
}

impl<const PM: u8> std::ops::Mul<f32> for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        let mut parts = self.parts;
        for part in parts.iter_mut() {
            *part = *part * s;
        }
        Self { parts }
    }
}

impl<const PM: u8> std::ops::Mul<Entity<PM>> for f32
where
    [(); part_count(PM)]: ,
{
    type Output = Entity<PM>;

    #[inline]
    fn mul(self, e: Entity<PM>) -> Entity<PM> {
        e * self
    }
}

impl<const PM: u8> std::ops::Div<f32> for Entity<PM>
where
    [(); part_count(PM)]: ,
{
    type Output = Self;

    #[inline]
    fn div(self, s: f32) -> Self {
        let mut parts = self.parts;
        let rcp = f32x4::all(s).rcp_nr1();
        for part in parts.iter_mut() {
            *part = *part * rcp;
        }
        Self { parts }
    }
}

// Scalar accessors for every basis element. A partition the mask omits
// reads as 0; elements stored under the reversed orientation of their
// name read negated.
macro_rules! stored_attrs {
    ($( $attr:ident => $part:literal / $slot:literal ),+ $(,)?) => {
        $(
            #[inline]
            pub fn $attr(&self) -> f32 {
                if part_present(PM, $part) {
                    self.part_at($part).extract($slot)
                } else {
                    0.0
                }
            }
        )+
    };
}

macro_rules! flipped_attrs {
    ($( $attr:ident => $part:literal / $slot:literal ),+ $(,)?) => {
        $(
            #[inline]
            pub fn $attr(&self) -> f32 {
                if part_present(PM, $part) {
                    -self.part_at($part).extract($slot)
                } else {
                    0.0
                }
            }
        )+
    };
}

impl<const PM: u8> Entity<PM>
where
    [(); part_count(PM)]: ,
{
    stored_attrs! {
        e3 => 0 / 0,
        e2 => 0 / 1,
        e1 => 0 / 2,
        e0 => 0 / 3,
        scalar => 1 / 0,
        e12 => 1 / 1,
        e31 => 1 / 2,
        e23 => 1 / 3,
        e0123 => 2 / 0,
        e01 => 2 / 1,
        e02 => 2 / 2,
        e03 => 2 / 3,
        e123 => 3 / 0,
        e021 => 3 / 1,
        e013 => 3 / 2,
        e032 => 3 / 3,
    }

    flipped_attrs! {
        e21 => 1 / 1,
        e13 => 1 / 2,
        e32 => 1 / 3,
        e10 => 2 / 1,
        e20 => 2 / 2,
        e30 => 2 / 3,
    }
}
