//! Tests for the high-level chart API.
//!
//! These tests verify the builder pattern, configuration options, and the
//! complete render/redraw lifecycle:
//! - Builder construction and validation
//! - Configuration defaults, getters, and setters
//! - Initial render (scene scaffold, statistics, mark placement)
//! - Incremental redraw (keyed diff, transitions, label swap)
//! - Read accessors for derived statistics

use approx::assert_relative_eq;

use scatterfit::api::ScatterplotBuilder;
use scatterfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Clone)]
struct Obs {
    name: &'static str,
    group: &'static str,
    x: f64,
    y: f64,
}

fn obs(name: &'static str, x: f64, y: f64) -> Obs {
    Obs {
        name,
        group: "g0",
        x,
        y,
    }
}

fn linear_data() -> Vec<Obs> {
    vec![obs("a", 1.0, 2.0), obs("b", 2.0, 4.0), obs("c", 3.0, 6.0)]
}

fn builder(data: Vec<Obs>) -> ScatterplotBuilder<Obs, f64> {
    Scatterplot::new()
        .width(100.0)
        .height(100.0)
        .margin(Margin::new(0.0, 0.0, 0.0, 0.0))
        .data(data)
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
}

// ============================================================================
// Builder Validation
// ============================================================================

/// Accessors for x, y, and key are mandatory.
#[test]
fn test_missing_accessors_rejected() {
    let err = Scatterplot::<Obs, f64>::new().build().unwrap_err();
    assert_eq!(err, ChartError::MissingAccessor { accessor: "x" });

    let err = Scatterplot::<Obs, f64>::new()
        .x_accessor(|o: &Obs| o.x)
        .build()
        .unwrap_err();
    assert_eq!(err, ChartError::MissingAccessor { accessor: "y" });

    let err = Scatterplot::<Obs, f64>::new()
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .build()
        .unwrap_err();
    assert_eq!(err, ChartError::MissingAccessor { accessor: "key" });
}

/// Setting the same builder parameter twice is a deferred error.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = builder(linear_data()).width(200.0).build().unwrap_err();
    assert_eq!(
        err,
        ChartError::DuplicateParameter { parameter: "width" }
    );
}

/// Non-positive and non-finite dimensions are rejected.
#[test]
fn test_invalid_dimensions_rejected() {
    let err = Scatterplot::new()
        .width(-5.0)
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidDimension { dimension: "width", .. }
    ));

    let err = Scatterplot::new()
        .radius(f64::NAN)
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidDimension { dimension: "radius", .. }
    ));
}

/// Unset parameters fall back to their defaults.
#[test]
fn test_builder_defaults() {
    let chart: Chart<Obs, f64> = Scatterplot::new()
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
        .build()
        .unwrap();

    assert_relative_eq!(chart.width(), 640.0);
    assert_relative_eq!(chart.height(), 480.0);
    assert_relative_eq!(chart.radius(), 5.0);
    assert_relative_eq!(chart.duration(), 1500.0);
    assert_eq!(chart.palette().len(), 10);
    assert_eq!(chart.x_label(), "");
    assert!(!chart.x_log());
    assert!(!chart.y_log());
    assert!(chart.data().is_none());
}

// ============================================================================
// Lifecycle Errors
// ============================================================================

/// Rendering without a dataset fails.
#[test]
fn test_render_without_data() {
    let mut chart: Chart<Obs, f64> = Scatterplot::new()
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
        .build()
        .unwrap();

    assert_eq!(chart.render().unwrap_err(), ChartError::MissingData);
}

/// Redrawing before the first render fails.
#[test]
fn test_redraw_before_render() {
    let mut chart = builder(linear_data()).build().unwrap();
    assert_eq!(chart.redraw().unwrap_err(), ChartError::NotRendered);
}

/// Fewer than two clean points cannot render.
#[test]
fn test_render_insufficient_data() {
    let mut chart = builder(vec![obs("a", 1.0, 2.0)]).build().unwrap();
    assert_eq!(
        chart.render().unwrap_err(),
        ChartError::InsufficientData { got: 1, min: 2 }
    );
}

/// Statistics read as None until the first successful pass.
#[test]
fn test_statistics_none_before_render() {
    let chart = builder(linear_data()).build().unwrap();
    assert_eq!(chart.r_squared(), None);
    assert_eq!(chart.correlation(), None);
    assert_eq!(chart.covariance(), None);
    assert_eq!(chart.slope(), None);
    assert_eq!(chart.intercept(), None);
}

// ============================================================================
// Initial Render
// ============================================================================

/// The end-to-end scenario: y = 2x over [1, 3] renders exact domains,
/// statistics, and pixel placements.
#[test]
fn test_render_end_to_end() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();

    let scene = chart.scene().unwrap();
    assert_eq!(scene.x_axis.domain, (1.0, 3.0));
    assert_eq!(scene.y_axis.domain, (2.0, 6.0));

    assert_relative_eq!(chart.slope().unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(chart.intercept().unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(chart.r_squared().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(chart.correlation().unwrap(), 1.0, epsilon = 1e-12);

    // Three mark groups at the linear pixel mapping.
    assert_eq!(scene.marks.len(), 3);
    let a = &scene.marks["a"];
    let b = &scene.marks["b"];
    let c = &scene.marks["c"];
    assert_relative_eq!(a.cx, 0.0);
    assert_relative_eq!(a.cy, 100.0);
    assert_relative_eq!(b.cx, 50.0);
    assert_relative_eq!(b.cy, 50.0);
    assert_relative_eq!(c.cx, 100.0);
    assert_relative_eq!(c.cy, 0.0);

    // The regression line spans the x-domain edge to edge.
    assert_relative_eq!(scene.regression.x1, 0.0);
    assert_relative_eq!(scene.regression.y1, 100.0);
    assert_relative_eq!(scene.regression.x2, 100.0);
    assert_relative_eq!(scene.regression.y2, 0.0);
}

/// The initial render issues no transitions.
#[test]
fn test_render_records_no_transitions() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();
    assert!(chart.take_transitions().is_empty());
}

/// The default color accessor assigns every mark the first palette color;
/// a custom accessor differentiates categories.
#[test]
fn test_mark_colors() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();
    let scene = chart.scene().unwrap();
    assert!(scene.marks.values().all(|m| m.fill == CATEGORY10[0]));

    let mut data = linear_data();
    data[1].group = "g1";
    let mut chart = builder(data)
        .color_accessor(|o: &Obs| o.group.to_string())
        .build()
        .unwrap();
    chart.render().unwrap();
    let scene = chart.scene().unwrap();
    assert_eq!(scene.marks["a"].fill, CATEGORY10[0]);
    assert_eq!(scene.marks["b"].fill, CATEGORY10[1]);
    assert_eq!(scene.marks["c"].fill, CATEGORY10[0]);
}

/// Regression statistics hold under log toggles after the appropriate
/// transform.
#[test]
fn test_render_with_log_toggles() {
    // log10(y) = 2 * log10(x) + 3.
    let data = vec![
        obs("a", 1.0, 1e3),
        obs("b", 10.0, 1e5),
        obs("c", 100.0, 1e7),
    ];

    let mut chart = Scatterplot::new()
        .width(100.0)
        .height(100.0)
        .data(data)
        .x_accessor(|o: &Obs| o.x)
        .y_accessor(|o: &Obs| o.y)
        .key_accessor(|o: &Obs| o.name.to_string())
        .x_log(true)
        .y_log(true)
        .build()
        .unwrap();
    chart.render().unwrap();

    assert_relative_eq!(chart.slope().unwrap(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(chart.intercept().unwrap(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(chart.r_squared().unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(chart.correlation().unwrap(), 1.0, epsilon = 1e-9);
}

// ============================================================================
// Incremental Redraw
// ============================================================================

/// Redrawing twice with unchanged configuration and data reaches the same
/// final state as a single redraw.
#[test]
fn test_redraw_idempotent() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();

    chart.redraw().unwrap();
    let after_first = chart.scene().unwrap().clone();
    let summary_first = (chart.slope(), chart.r_squared(), chart.covariance());

    chart.redraw().unwrap();
    let after_second = chart.scene().unwrap().clone();
    let summary_second = (chart.slope(), chart.r_squared(), chart.covariance());

    assert_eq!(after_first, after_second);
    assert_eq!(summary_first, summary_second);
}

/// The keyed diff: one removed, one added, one mutated. Exactly one mark
/// group leaves, one enters, and the mutated one moves to its recomputed
/// position.
#[test]
fn test_redraw_keyed_diff() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();
    chart.take_transitions();

    // Remove "c", add "d", mutate "b".
    chart.set_data(vec![obs("a", 1.0, 2.0), obs("b", 2.5, 5.0), obs("d", 4.0, 8.0)]);
    chart.redraw().unwrap();

    let scene = chart.scene().unwrap();
    let keys: Vec<&str> = scene.marks.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "d"]);

    // New x-domain [1, 4], y-domain [2, 8]: b maps to the plot center.
    let b = &scene.marks["b"];
    assert_relative_eq!(b.cx, 50.0);
    assert_relative_eq!(b.cy, 50.0);

    // Updates transition; enters and exits do not.
    let transitions = chart.take_transitions();
    let targets_mark = |key: &str| {
        transitions
            .iter()
            .filter(|t| t.target == TransitionTarget::Mark(key.to_string()))
            .count()
    };
    assert!(targets_mark("a") > 0);
    assert!(targets_mark("b") > 0);
    assert_eq!(targets_mark("c"), 0);
    assert_eq!(targets_mark("d"), 0);
}

/// Redraw transitions describe the axis rescale and the regression line
/// endpoint moves at the configured duration.
#[test]
fn test_redraw_transition_records() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();

    chart.set_data(vec![obs("a", 1.0, 2.0), obs("b", 2.0, 4.0), obs("d", 4.0, 8.0)]);
    chart.redraw().unwrap();

    let transitions = chart.take_transitions();
    let x_max = transitions
        .iter()
        .find(|t| t.target == TransitionTarget::XAxis && t.attribute == "domain-max")
        .expect("x-axis domain transition");
    assert_eq!(x_max.from, AttributeValue::Scalar(3.0));
    assert_eq!(x_max.to, AttributeValue::Scalar(4.0));
    assert_relative_eq!(x_max.duration, 1500.0);

    assert!(transitions
        .iter()
        .any(|t| t.target == TransitionTarget::RegressionLine && t.attribute == "x2"));

    // The log drains once.
    assert!(chart.take_transitions().is_empty());
}

/// Label text swaps immediately on redraw and produces no transition.
#[test]
fn test_redraw_label_swap() {
    let mut chart = builder(linear_data()).x_label("before").build().unwrap();
    chart.render().unwrap();
    assert_eq!(chart.scene().unwrap().x_label, "before");

    chart.set_x_label("after");
    chart.redraw().unwrap();
    assert_eq!(chart.scene().unwrap().x_label, "after");
}

/// A radius reconfiguration transitions existing marks to the new radius.
#[test]
fn test_redraw_radius_change() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();
    chart.take_transitions();

    chart.set_radius(9.0);
    chart.redraw().unwrap();

    let scene = chart.scene().unwrap();
    assert!(scene.marks.values().all(|m| m.radius == 9.0));

    let transitions = chart.take_transitions();
    let r = transitions
        .iter()
        .find(|t| t.target == TransitionTarget::Mark("a".to_string()) && t.attribute == "r")
        .expect("radius transition");
    assert_eq!(r.from, AttributeValue::Scalar(5.0));
    assert_eq!(r.to, AttributeValue::Scalar(9.0));
}

/// Toggling a log axis between passes refits in the transformed space.
#[test]
fn test_redraw_log_toggle() {
    // y = 10^x, linear fit first, then exact under a log y-axis.
    let data = vec![obs("a", 0.0, 1.0), obs("b", 1.0, 10.0), obs("c", 2.0, 100.0)];
    let mut chart = builder(data).build().unwrap();
    chart.render().unwrap();

    chart.set_y_log(true);
    chart.redraw().unwrap();

    assert_relative_eq!(chart.slope().unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(chart.intercept().unwrap(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(chart.r_squared().unwrap(), 1.0, epsilon = 1e-9);
}

/// Statistics always reflect the latest pass.
#[test]
fn test_statistics_track_latest_pass() {
    let mut chart = builder(linear_data()).build().unwrap();
    chart.render().unwrap();
    assert_relative_eq!(chart.slope().unwrap(), 2.0, epsilon = 1e-12);

    chart.set_data(vec![obs("a", 1.0, 3.0), obs("b", 2.0, 6.0), obs("c", 3.0, 9.0)]);
    chart.redraw().unwrap();
    assert_relative_eq!(chart.slope().unwrap(), 3.0, epsilon = 1e-12);
}

// ============================================================================
// Configuration Surface
// ============================================================================

/// Chart setters chain and getters read the current values.
#[test]
fn test_setter_getter_pairs() {
    let mut chart = builder(linear_data()).build().unwrap();

    chart
        .set_width(320.0)
        .set_height(240.0)
        .set_x_label("x")
        .set_y_label("y")
        .set_x_log(true)
        .set_radius(7.5)
        .set_duration(300.0);

    assert_relative_eq!(chart.width(), 320.0);
    assert_relative_eq!(chart.height(), 240.0);
    assert_eq!(chart.x_label(), "x");
    assert_eq!(chart.y_label(), "y");
    assert!(chart.x_log());
    assert_relative_eq!(chart.radius(), 7.5);
    assert_relative_eq!(chart.duration(), 300.0);

    assert_eq!(chart.x_transform(), AxisTransform::Log10);
    assert_eq!(chart.y_transform(), AxisTransform::Identity);
}

/// Replacing the palette resets color assignments.
#[test]
fn test_set_palette_resets_assignments() {
    let mut data = linear_data();
    data[0].group = "g1";
    let mut chart = builder(data)
        .color_accessor(|o: &Obs| o.group.to_string())
        .build()
        .unwrap();
    chart.render().unwrap();

    chart.set_palette(vec!["#111".to_string(), "#222".to_string()]);
    chart.redraw().unwrap();

    let scene = chart.scene().unwrap();
    assert_eq!(scene.marks["a"].fill, "#111");
    assert_eq!(scene.marks["b"].fill, "#222");
}

/// Duplicate keys in the dataset are a visible error, not a silent merge.
#[test]
fn test_duplicate_keys_rejected() {
    let mut chart = builder(vec![obs("a", 1.0, 2.0), obs("a", 2.0, 4.0)])
        .build()
        .unwrap();
    assert_eq!(
        chart.render().unwrap_err(),
        ChartError::DuplicateKey { key: "a".to_string() }
    );
}
