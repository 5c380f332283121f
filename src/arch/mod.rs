#[macro_use]
mod sse;

mod geometric_product;

pub use self::{geometric_product::*, sse::*};

use core::arch::x86_64::*;

/// A single 16-byte-aligned partition of four `f32` slots. Slot `[0]` is the
/// lowest-address component.
#[repr(C, align(16))]
#[derive(Clone, Copy)]
#[allow(non_camel_case_types)]
pub struct f32x4(pub(crate) __m128);

impl core::fmt::Debug for f32x4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.into_array().iter()).finish()
    }
}

impl std::ops::Deref for f32x4 {
    type Target = __m128;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[f32; 4]> for f32x4 {
    #[inline(always)]
    fn from(array: [f32; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<__m128> for f32x4 {
    #[inline(always)]
    fn from(xmm: __m128) -> Self {
        Self(xmm)
    }
}

impl std::ops::Add for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, other.0) })
    }
}

impl std::ops::Sub for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(unsafe { _mm_sub_ps(self.0, other.0) })
    }
}

impl std::ops::Mul for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, other.0) })
    }
}

impl std::ops::Mul<f32> for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, _mm_set1_ps(s)) })
    }
}

impl std::ops::Div<f32> for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, s: f32) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, rcp_nr1(_mm_set1_ps(s))) })
    }
}

impl std::ops::BitXor for f32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, other: Self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, other.0) })
    }
}

impl f32x4 {
    /// Slots in `_mm_set_ps` order: slot `[3]` first.
    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(unsafe { _mm_set_ps(x, y, z, w) })
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    pub fn all(s: f32) -> Self {
        Self(unsafe { _mm_set1_ps(s) })
    }

    /// Sign mask negating every slot.
    #[inline(always)]
    pub fn flip_all() -> Self {
        Self(unsafe { _mm_set1_ps(-0.0) })
    }

    /// Sign mask negating slots `[1..3]`, leaving slot `[0]` untouched.
    #[inline(always)]
    pub fn flip_hi() -> Self {
        Self(unsafe { _mm_set_ps(-0.0, -0.0, -0.0, 0.0) })
    }

    /// Slots in memory order: slot `[0]` is `data[0]`.
    #[inline(always)]
    pub fn from_array(data: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(data.as_ptr()) })
    }

    #[inline(always)]
    pub fn into_array(self) -> [f32; 4] {
        unsafe {
            let mut out = [0.0; 4];
            _mm_store_ps(out.as_mut_ptr(), self.0);
            out
        }
    }

    #[inline(always)]
    pub fn extract(self, slot: usize) -> f32 {
        self.into_array()[slot]
    }

    #[inline(always)]
    pub fn first(self) -> f32 {
        unsafe {
            let mut out = 0.0;
            _mm_store_ss(&mut out, self.0);
            out
        }
    }

    #[inline(always)]
    pub fn eq(self, other: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpeq_ps(self.0, other.0)) == 0b1111 }
    }

    /// Component-wise |self - other| < epsilon.
    #[inline(always)]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        unsafe {
            let eps = _mm_set1_ps(epsilon);
            let diff = _mm_sub_ps(self.0, other.0);
            let abs = _mm_andnot_ps(_mm_set1_ps(-0.0), diff);
            _mm_movemask_ps(_mm_cmplt_ps(abs, eps)) == 0b1111
        }
    }

    #[inline(always)]
    pub fn rcp_nr1(self) -> Self {
        Self(unsafe { rcp_nr1(self.0) })
    }
}
