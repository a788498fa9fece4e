//! Tests for configuration records.

use approx::assert_relative_eq;

use scatterfit::primitives::config::{ChartConfig, Margin};

/// The conventional margin leaves room for ticks and labels.
#[test]
fn test_conventional_margin() {
    let m: Margin<f64> = Margin::default();
    assert_relative_eq!(m.top, 20.0);
    assert_relative_eq!(m.right, 20.0);
    assert_relative_eq!(m.bottom, 30.0);
    assert_relative_eq!(m.left, 40.0);
}

/// Margin::new orders its sides top, right, bottom, left.
#[test]
fn test_margin_new() {
    let m = Margin::new(1.0_f64, 2.0, 3.0, 4.0);
    assert_relative_eq!(m.top, 1.0);
    assert_relative_eq!(m.right, 2.0);
    assert_relative_eq!(m.bottom, 3.0);
    assert_relative_eq!(m.left, 4.0);
}

/// The surface is the plot area plus margins on each side.
#[test]
fn test_outer_dimensions() {
    let config = ChartConfig {
        width: 100.0_f64,
        height: 80.0,
        margin: Margin::new(10.0, 20.0, 30.0, 40.0),
        x_label: String::new(),
        y_label: String::new(),
        x_log: false,
        y_log: false,
        radius: 5.0,
        palette: Vec::new(),
        duration: 1500.0,
    };

    assert_relative_eq!(config.outer_width(), 160.0);
    assert_relative_eq!(config.outer_height(), 120.0);
}
