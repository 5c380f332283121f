use super::sse::*;
use core::arch::x86_64::*;

// Define functions of the form gpAB where A and B are partition indices.
// Each function computes one partition-to-partition slice of the geometric
// product using vector intrinsics. The partition index determines which
// basis elements are present in each XMM component of the operand.
//
// Partition memory layouts
//     LSB --> MSB
// p0: (e3, e2, e1, e0)
// p1: (1, e12, e31, e23)
// p2: (e0123, e01, e02, e03)
// p3: (e123, e021, e013, e032)
//
// The (2,2) slice is identically zero (every product of two p2 blades
// carries e0 twice) and has no kernel.

// p0 * p0 -> (p1, p2)
pub unsafe fn gp00(a: __m128, b: __m128) -> (__m128, __m128) {
    // (a0 b0 + a1 b1 + a2 b2) +
    //
    // (a2 b1 - a1 b2) e12 +
    // (a0 b2 - a2 b0) e31 +
    // (a1 b0 - a0 b1) e23 +
    //
    // (a3 b2 - a2 b3) e01 +
    // (a3 b1 - a1 b3) e02 +
    // (a3 b0 - a0 b3) e03

    let p1 = _mm_mul_ps(swizzle!(a, 1, 0, 2, 0), swizzle!(b, 0, 2, 1, 0));

    let p1 = _mm_sub_ps(
        p1,
        _mm_xor_ps(
            _mm_set_ss(-0.0),
            _mm_mul_ps(swizzle!(a, 0, 2, 1, 1), swizzle!(b, 1, 0, 2, 1)),
        ),
    );

    // Add a2 b2 to the lowest component
    let p1 = _mm_add_ss(
        p1,
        _mm_mul_ps(swizzle!(a, 2, 2, 2, 2), swizzle!(b, 2, 2, 2, 2)),
    );

    // (a3 b3, a3 b2, a3 b1, a3 b0)
    let p2 = _mm_mul_ps(swizzle!(a, 3, 3, 3, 3), swizzle!(b, 0, 1, 2, 3));

    // Sub (a3 b3, a2 b3, a1 b3, a0 b3)
    // Note that the lowest component cancels
    let p2 = _mm_sub_ps(p2, _mm_mul_ps(swizzle!(a, 0, 1, 2, 3), swizzle!(b, 3, 3, 3, 3)));

    (p1, p2)
}

// p0 * p1 -> (p0, p3)
pub unsafe fn gp01(a: __m128, b: __m128) -> (__m128, __m128) {
    // (a0 b0 + a1 b3 - a2 b2) e3 +
    // (a1 b0 + a2 b1 - a0 b3) e2 +
    // (a2 b0 + a0 b2 - a1 b1) e1 +
    // a3 b0 e0 +
    //
    // (a0 b1 + a1 b2 + a2 b3) e123 +
    // - a3 b1 e021 +
    // - a3 b2 e013 +
    // - a3 b3 e032

    let p0 = _mm_mul_ps(a, swizzle!(b, 0, 0, 0, 0));
    let t1 = _mm_mul_ps(swizzle!(a, 2, 0, 2, 1), swizzle!(b, 2, 2, 1, 3));
    let t2 = _mm_mul_ps(swizzle!(a, 2, 1, 0, 2), swizzle!(b, 2, 1, 3, 2));
    // The highest components of t1 and t2 cancel
    let p0 = _mm_add_ps(p0, _mm_sub_ps(t1, t2));

    let p3 = _mm_mul_ps(swizzle!(a, 3, 3, 3, 0), swizzle!(b, 3, 2, 1, 1));
    let p3 = _mm_xor_ps(p3, _mm_set_ps(-0.0, -0.0, -0.0, 0.0));
    let p3 = _mm_add_ss(
        p3,
        _mm_mul_ps(swizzle!(a, 1, 1, 1, 1), swizzle!(b, 2, 2, 2, 2)),
    );
    let p3 = _mm_add_ss(
        p3,
        _mm_mul_ps(swizzle!(a, 2, 2, 2, 2), swizzle!(b, 3, 3, 3, 3)),
    );

    (p0, p3)
}

// p0 * p2 -> (p0, p3)
pub unsafe fn gp02(a: __m128, b: __m128) -> (__m128, __m128) {
    // -(a0 b3 + a1 b2 + a2 b1) e0 +
    //
    // (a0 b0 - a1 b1 + a2 b2) e021 +
    // (a0 b1 + a1 b0 - a2 b3) e013 +
    // (a1 b3 + a2 b0 - a0 b2) e032

    let hd = hi_dp(swizzle!(a, 2, 1, 0, 3), swizzle!(b, 1, 2, 3, 3));
    let p0 = _mm_xor_ps(
        swizzle!(hd, 0, 1, 1, 1),
        _mm_set_ps(-0.0, 0.0, 0.0, 0.0),
    );

    let t0 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 2, 1, 0, 0)),
        _mm_set_ps(-0.0, 0.0, 0.0, 0.0),
    );
    let t1 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 1, 1, 1, 1), swizzle!(b, 3, 0, 1, 0)),
        _mm_set_ps(0.0, 0.0, -0.0, 0.0),
    );
    let t2 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 2, 2, 2, 2), swizzle!(b, 0, 3, 2, 0)),
        _mm_set_ps(0.0, -0.0, 0.0, 0.0),
    );
    let p3 = _mm_and_ps(
        _mm_add_ps(_mm_add_ps(t0, t1), t2),
        _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)),
    );

    (p0, p3)
}

// p0 * p3 -> (p1, p2)
pub unsafe fn gp03(a: __m128, b: __m128) -> (__m128, __m128) {
    // a0 b0 e12 +
    // a1 b0 e31 +
    // a2 b0 e23 +
    //
    // (a0 b1 + a1 b2 + a2 b3 + a3 b0) e0123 +
    // (a0 b2 - a1 b1) e01 +
    // (a2 b1 - a0 b3) e02 +
    // (a1 b3 - a2 b2) e03

    let p1 = _mm_and_ps(
        _mm_mul_ps(swizzle!(a, 2, 1, 0, 0), swizzle!(b, 0, 0, 0, 0)),
        _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)),
    );

    let p2 = dp(a, swizzle!(b, 0, 3, 2, 1));
    let flip = _mm_set_ps(0.0, -0.0, 0.0, 0.0);
    let t1 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 1, 0, 0, 0), swizzle!(b, 3, 3, 2, 0)),
        flip,
    );
    let t2 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 2, 2, 1, 0), swizzle!(b, 2, 1, 1, 0)),
        flip,
    );
    // The lowest components of t1 and t2 cancel
    let p2 = _mm_add_ps(p2, _mm_sub_ps(t1, t2));

    (p1, p2)
}

// p1 * p0 -> (p0, p3)
pub unsafe fn gp10(a: __m128, b: __m128) -> (__m128, __m128) {
    // (a0 b0 + a2 b2 - a3 b1) e3 +
    // (a0 b1 + a3 b0 - a1 b2) e2 +
    // (a0 b2 + a1 b1 - a2 b0) e1 +
    // a0 b3 e0 +
    //
    // (a1 b0 + a2 b1 + a3 b2) e123 +
    // - a1 b3 e021 +
    // - a2 b3 e013 +
    // - a3 b3 e032

    let p0 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), b);
    let t1 = _mm_mul_ps(swizzle!(a, 1, 1, 3, 2), swizzle!(b, 1, 1, 0, 2));
    let t2 = _mm_mul_ps(swizzle!(a, 1, 2, 1, 3), swizzle!(b, 1, 0, 2, 1));
    // The highest components of t1 and t2 cancel
    let p0 = _mm_add_ps(p0, _mm_sub_ps(t1, t2));

    let p3 = _mm_mul_ps(swizzle!(a, 3, 2, 1, 1), swizzle!(b, 3, 3, 3, 0));
    let p3 = _mm_xor_ps(p3, _mm_set_ps(-0.0, -0.0, -0.0, 0.0));
    let p3 = _mm_add_ss(
        p3,
        _mm_mul_ps(swizzle!(a, 2, 2, 2, 2), swizzle!(b, 1, 1, 1, 1)),
    );
    let p3 = _mm_add_ss(
        p3,
        _mm_mul_ps(swizzle!(a, 3, 3, 3, 3), swizzle!(b, 2, 2, 2, 2)),
    );

    (p0, p3)
}

// p1 * p1 -> p1
pub unsafe fn gp11(a: __m128, b: __m128) -> __m128 {
    // (a0 b0 - a1 b1 - a2 b2 - a3 b3) +
    // (a0 b1 + a1 b0 + a2 b3 - a3 b2) e12 +
    // (a0 b2 + a2 b0 + a3 b1 - a1 b3) e31 +
    // (a0 b3 + a3 b0 + a1 b2 - a2 b1) e23

    // In general, we can get rid of at most one swizzle
    let p1 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), b);

    // Accumulate the remaining components in separate registers so the
    // lowest slot can be negated with a single instruction
    let t1 = _mm_mul_ps(swizzle!(a, 3, 2, 1, 1), swizzle!(b, 0, 0, 0, 1));
    let p1 = _mm_add_ps(p1, _mm_xor_ps(t1, _mm_set_ss(-0.0)));

    let t2 = _mm_mul_ps(swizzle!(a, 1, 3, 2, 2), swizzle!(b, 2, 1, 3, 2));
    let t3 = _mm_mul_ps(swizzle!(a, 2, 1, 3, 3), swizzle!(b, 1, 3, 2, 3));
    let p1 = _mm_add_ps(p1, _mm_xor_ps(t2, _mm_set_ss(-0.0)));

    _mm_sub_ps(p1, t3)
}

// p1 * p2 -> p2
pub unsafe fn gp12(a: __m128, b: __m128) -> __m128 {
    // (a0 b0 + a1 b3 + a2 b2 + a3 b1) e0123 +
    // (a0 b1 + a1 b2 - a2 b3 - a3 b0) e01 +
    // (a0 b2 + a3 b3 - a1 b1 - a2 b0) e02 +
    // (a0 b3 + a2 b1 - a1 b0 - a3 b2) e03

    let p2 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), b);
    let t1 = _mm_mul_ps(swizzle!(a, 1, 1, 1, 1), swizzle!(b, 0, 1, 2, 3));
    let t2 = _mm_mul_ps(swizzle!(a, 2, 2, 2, 2), swizzle!(b, 1, 0, 3, 2));
    let t3 = _mm_mul_ps(swizzle!(a, 3, 3, 3, 3), swizzle!(b, 2, 3, 0, 1));
    let p2 = _mm_add_ps(p2, _mm_xor_ps(t1, _mm_set_ps(-0.0, -0.0, 0.0, 0.0)));
    let p2 = _mm_add_ps(p2, _mm_xor_ps(t2, _mm_set_ps(0.0, -0.0, -0.0, 0.0)));
    _mm_add_ps(p2, _mm_xor_ps(t3, _mm_set_ps(-0.0, 0.0, -0.0, 0.0)))
}

// p1 * p3 -> (p0, p3)
pub unsafe fn gp13(a: __m128, b: __m128) -> (__m128, __m128) {
    // - a1 b0 e3 +
    // - a2 b0 e2 +
    // - a3 b0 e1 +
    // (a1 b1 + a2 b2 + a3 b3) e0 +
    //
    // a0 b0 e123 +
    // (a0 b1 + a2 b3 - a3 b2) e021 +
    // (a0 b2 + a3 b1 - a1 b3) e013 +
    // (a0 b3 + a1 b2 - a2 b1) e032

    let t = _mm_mul_ps(swizzle!(a, 0, 3, 2, 1), swizzle!(b, 0, 0, 0, 0));
    let p0 = _mm_and_ps(
        _mm_xor_ps(t, _mm_set1_ps(-0.0)),
        _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1)),
    );
    let hd = hi_dp(a, b);
    let p0 = _mm_add_ps(p0, swizzle!(hd, 0, 1, 1, 1));

    let p3 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), b);
    let t1 = _mm_mul_ps(swizzle!(a, 1, 3, 2, 1), swizzle!(b, 2, 1, 3, 1));
    let t2 = _mm_mul_ps(swizzle!(a, 2, 1, 3, 1), swizzle!(b, 1, 3, 2, 1));
    // The lowest components of t1 and t2 cancel
    let p3 = _mm_add_ps(p3, _mm_sub_ps(t1, t2));

    (p0, p3)
}

// p2 * p0 -> (p0, p3)
pub unsafe fn gp20(a: __m128, b: __m128) -> (__m128, __m128) {
    // (a1 b2 + a2 b1 + a3 b0) e0 +
    //
    // (a2 b2 - a0 b0 - a1 b1) e021 +
    // (a1 b0 - a0 b1 - a3 b2) e013 +
    // (a3 b1 - a0 b2 - a2 b0) e032

    let hd = hi_dp(a, swizzle!(b, 0, 1, 2, 3));
    let p0 = swizzle!(hd, 0, 1, 1, 1);

    let t0 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 2, 1, 0, 0));
    let t1 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 2, 1, 1, 1), swizzle!(b, 0, 0, 1, 1)),
        _mm_set_ps(-0.0, 0.0, -0.0, 0.0),
    );
    let t2 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 3, 3, 2, 2), swizzle!(b, 1, 2, 2, 2)),
        _mm_set_ps(0.0, -0.0, 0.0, 0.0),
    );
    let p3 = _mm_and_ps(
        _mm_add_ps(_mm_sub_ps(t1, t0), t2),
        _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)),
    );

    (p0, p3)
}

// p2 * p1 -> p2
pub unsafe fn gp21(a: __m128, b: __m128) -> __m128 {
    // (a0 b0 + a1 b3 + a2 b2 + a3 b1) e0123 +
    // (a1 b0 + a3 b2 - a0 b3 - a2 b1) e01 +
    // (a1 b1 + a2 b0 - a0 b2 - a3 b3) e02 +
    // (a2 b3 + a3 b0 - a0 b1 - a1 b2) e03

    let p2 = _mm_mul_ps(a, swizzle!(b, 0, 0, 0, 0));
    let t1 = _mm_mul_ps(swizzle!(a, 0, 1, 2, 3), swizzle!(b, 1, 1, 1, 1));
    let t2 = _mm_mul_ps(swizzle!(a, 1, 0, 3, 2), swizzle!(b, 2, 2, 2, 2));
    let t3 = _mm_mul_ps(swizzle!(a, 2, 3, 0, 1), swizzle!(b, 3, 3, 3, 3));
    let p2 = _mm_add_ps(p2, _mm_xor_ps(t1, _mm_set_ps(-0.0, 0.0, -0.0, 0.0)));
    let p2 = _mm_add_ps(p2, _mm_xor_ps(t2, _mm_set_ps(-0.0, -0.0, 0.0, 0.0)));
    _mm_add_ps(p2, _mm_xor_ps(t3, _mm_set_ps(0.0, -0.0, -0.0, 0.0)))
}

// p2 * p3 -> (p0, p3)
pub unsafe fn gp23(a: __m128, b: __m128) -> (__m128, __m128) {
    // - a0 b0 e0 +
    //
    // - a3 b0 e021 +
    // - a2 b0 e013 +
    // - a1 b0 e032

    let t = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 1, 2, 3, 0), swizzle!(b, 0, 0, 0, 0)),
        _mm_set1_ps(-0.0),
    );
    let p0 = _mm_and_ps(
        swizzle!(t, 0, 1, 1, 1),
        _mm_castsi128_ps(_mm_set_epi32(-1, 0, 0, 0)),
    );
    let p3 = _mm_and_ps(t, _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)));

    (p0, p3)
}

// p3 * p0 -> (p1, p2)
pub unsafe fn gp30(a: __m128, b: __m128) -> (__m128, __m128) {
    // a0 b0 e12 +
    // a0 b1 e31 +
    // a0 b2 e23 +
    //
    // -(a0 b3 + a1 b0 + a2 b1 + a3 b2) e0123 +
    // (a2 b0 - a1 b1) e01 +
    // (a1 b2 - a3 b0) e02 +
    // (a3 b1 - a2 b2) e03

    let p1 = _mm_and_ps(
        _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 2, 1, 0, 0)),
        _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)),
    );

    let p2 = _mm_xor_ps(dp(a, swizzle!(b, 2, 1, 0, 3)), _mm_set_ss(-0.0));
    let flip = _mm_set_ps(-0.0, 0.0, -0.0, 0.0);
    let t1 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 2, 1, 1, 0), swizzle!(b, 2, 2, 1, 0)),
        flip,
    );
    let t2 = _mm_xor_ps(
        _mm_mul_ps(swizzle!(a, 3, 3, 2, 0), swizzle!(b, 1, 0, 0, 0)),
        flip,
    );
    // The lowest components of t1 and t2 cancel
    let p2 = _mm_add_ps(p2, _mm_sub_ps(t1, t2));

    (p1, p2)
}

// p3 * p1 -> (p0, p3)
pub unsafe fn gp31(a: __m128, b: __m128) -> (__m128, __m128) {
    // - a0 b1 e3 +
    // - a0 b2 e2 +
    // - a0 b3 e1 +
    // (a1 b1 + a2 b2 + a3 b3) e0 +
    //
    // a0 b0 e123 +
    // (a1 b0 + a2 b3 - a3 b2) e021 +
    // (a2 b0 + a3 b1 - a1 b3) e013 +
    // (a3 b0 + a1 b2 - a2 b1) e032

    let t = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 0, 3, 2, 1));
    let p0 = _mm_and_ps(
        _mm_xor_ps(t, _mm_set1_ps(-0.0)),
        _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1)),
    );
    let hd = hi_dp(a, b);
    let p0 = _mm_add_ps(p0, swizzle!(hd, 0, 1, 1, 1));

    let p3 = _mm_mul_ps(a, swizzle!(b, 0, 0, 0, 0));
    let t1 = _mm_mul_ps(swizzle!(a, 1, 3, 2, 1), swizzle!(b, 2, 1, 3, 1));
    let t2 = _mm_mul_ps(swizzle!(a, 2, 1, 3, 1), swizzle!(b, 1, 3, 2, 1));
    // The lowest components of t1 and t2 cancel
    let p3 = _mm_add_ps(p3, _mm_sub_ps(t1, t2));

    (p0, p3)
}

// p3 * p2 -> (p0, p3)
pub unsafe fn gp32(a: __m128, b: __m128) -> (__m128, __m128) {
    // a0 b0 e0 +
    //
    // a0 b3 e021 +
    // a0 b2 e013 +
    // a0 b1 e032

    let t = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 1, 2, 3, 0));
    let p0 = _mm_and_ps(
        swizzle!(t, 0, 1, 1, 1),
        _mm_castsi128_ps(_mm_set_epi32(-1, 0, 0, 0)),
    );
    let p3 = _mm_and_ps(t, _mm_castsi128_ps(_mm_set_epi32(-1, -1, -1, 0)));

    (p0, p3)
}

// p3 * p3 -> (p1, p2)
pub unsafe fn gp33(a: __m128, b: __m128) -> (__m128, __m128) {
    // - a0 b0 +
    //
    // (a3 b0 - a0 b3) e01 +
    // (a2 b0 - a0 b2) e02 +
    // (a1 b0 - a0 b1) e03

    let t = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 0, 0, 0, 0));
    let p1 = _mm_and_ps(
        _mm_xor_ps(t, _mm_set_ss(-0.0)),
        _mm_castsi128_ps(_mm_set_epi32(0, 0, 0, -1)),
    );

    let t1 = _mm_mul_ps(swizzle!(a, 0, 0, 0, 0), swizzle!(b, 1, 2, 3, 0));
    let t2 = _mm_mul_ps(swizzle!(a, 1, 2, 3, 0), swizzle!(b, 0, 0, 0, 0));
    // The lowest component cancels
    let p2 = _mm_sub_ps(t2, t1);

    (p1, p2)
}
