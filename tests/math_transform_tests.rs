//! Tests for axis value transforms.

use approx::assert_relative_eq;

use scatterfit::math::transform::AxisTransform;

/// Identity passes values through unchanged in both directions.
#[test]
fn test_identity_roundtrip() {
    let t = AxisTransform::Identity;
    assert_relative_eq!(t.apply(3.5_f64), 3.5);
    assert_relative_eq!(t.invert(-2.0_f64), -2.0);
}

/// Log10 applies the base-10 logarithm.
#[test]
fn test_log10_apply() {
    let t = AxisTransform::Log10;
    assert_relative_eq!(t.apply(1000.0_f64), 3.0);
    assert_relative_eq!(t.apply(0.01_f64), -2.0, epsilon = 1e-12);
}

/// Log10 inverts through exponentiation.
#[test]
fn test_log10_invert_roundtrip() {
    let t = AxisTransform::Log10;
    for v in [0.1_f64, 1.0, 7.0, 250.0] {
        assert_relative_eq!(t.invert(t.apply(v)), v, max_relative = 1e-12);
    }
}

/// The log flag selects the transform.
#[test]
fn test_from_log_flag() {
    assert_eq!(AxisTransform::from_log_flag(false), AxisTransform::Identity);
    assert_eq!(AxisTransform::from_log_flag(true), AxisTransform::Log10);
}
