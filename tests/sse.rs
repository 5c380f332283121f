use approx::assert_abs_diff_eq;
use plucker::arch::f32x4;

#[test]
fn rcp_nr1() {
    let buf = f32x4::new(4.0, 3.0, 2.0, 1.0).rcp_nr1().into_array();
    assert_abs_diff_eq!(buf[0], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(buf[1], 0.5, epsilon = 1e-5);
    assert_abs_diff_eq!(buf[2], 1.0 / 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(buf[3], 0.25, epsilon = 1e-5);
}

#[test]
fn dot_helpers() {
    unsafe {
        use plucker::arch::{dp, dp_bc, hi_dp, hi_dp_bc};

        let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = f32x4::from_array([5.0, -6.0, 7.0, -8.0]);

        // full dot in the low slot, rest zeroed
        let d = f32x4::from(dp(*a, *b)).into_array();
        assert_eq!(d, [-18.0, 0.0, 0.0, 0.0]);

        // high three slots only
        let d = f32x4::from(hi_dp(*a, *b)).into_array();
        assert_eq!(d, [-23.0, 0.0, 0.0, 0.0]);

        // broadcast variants
        let d = f32x4::from(dp_bc(*a, *b)).into_array();
        assert_eq!(d, [-18.0; 4]);
        let d = f32x4::from(hi_dp_bc(*a, *b)).into_array();
        assert_eq!(d, [-23.0; 4]);
    }
}
