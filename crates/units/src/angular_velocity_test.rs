use approx::assert_relative_eq;

use crate::AngularVelocity;

#[test]
fn angle_after_scales_with_ticks() {
    let omega = AngularVelocity::from_rad_per_tick(0.02);

    assert_eq!(omega.angle_after(0), 0.0);
    assert_relative_eq!(omega.angle_after(50), 1.0);
}

#[test]
fn zero_is_default() {
    assert_eq!(AngularVelocity::default(), AngularVelocity::zero());
    assert_eq!(AngularVelocity::zero().to_rad_per_tick(), 0.0);
}
