//! High-level API for the scatterplot chart.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the chart (dimensions, accessors, labels, log
//! toggles, styling) and the `Chart` instance it produces, with the two
//! lifecycle operations `render` (initial draw) and `redraw` (incremental,
//! transitioned update).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all styling
//!   parameters; only the data accessors are mandatory.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   setting the same builder parameter twice is a deferred error.
//! * **Snapshot configuration**: The builder produces a configuration
//!   record the render pipeline treats as read-only; the chart re-exposes
//!   setters for reconfiguration between passes, and nothing auto-redraws.
//! * **Type-Safe**: Generic over the caller's record type and `Float`
//!   values.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Scatterplot::new()` → chained setters →
//!   `.build()` → `Chart`.
//! * **Lifecycle**: `render()` once after configuration; `redraw()` after
//!   any reconfiguration or data change.
//! * **Read accessors**: `r_squared()`, `correlation()`, `covariance()`,
//!   `slope()`, `intercept()` expose the last-computed statistics; `None`
//!   until the first successful pass.

// External dependencies
use num_traits::Float;
use std::fmt::Display;

// Internal dependencies
use crate::algorithms::reconcile;
use crate::engine::frame::{Frame, MarkPlacement};
use crate::engine::validator::Validator;
use crate::math::transform::AxisTransform;
use crate::render::axis::{Axis, Orientation};
use crate::render::palette::CategoryScale;
use crate::render::scene::{LineNode, MarkNode, Scene};
use crate::render::svg;
use crate::render::transition::{AttributeValue, Transition, TransitionLog, TransitionTarget};

// Publicly re-exported types
pub use crate::algorithms::regression::LinearFit;
pub use crate::engine::cleaner::CleanPoint;
pub use crate::evaluation::statistics::FitSummary;
pub use crate::math::scale::Scale;
pub use crate::primitives::config::{Accessors, ChartConfig, Margin};
pub use crate::primitives::errors::ChartError;

use crate::primitives::config::{KeyAccessor, ValueAccessor};
use indexmap::{IndexMap, IndexSet};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a scatterplot chart.
pub struct ScatterplotBuilder<D, T> {
    width: Option<T>,
    height: Option<T>,
    margin: Option<Margin<T>>,
    data: Option<Vec<D>>,
    x_accessor: Option<ValueAccessor<D, T>>,
    y_accessor: Option<ValueAccessor<D, T>>,
    color_accessor: Option<KeyAccessor<D>>,
    key_accessor: Option<KeyAccessor<D>>,
    x_label: Option<String>,
    y_label: Option<String>,
    x_log: Option<bool>,
    y_log: Option<bool>,
    palette: Option<Vec<String>>,
    radius: Option<T>,
    duration: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<D, T: Float> Default for ScatterplotBuilder<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, T: Float> ScatterplotBuilder<D, T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            margin: None,
            data: None,
            x_accessor: None,
            y_accessor: None,
            color_accessor: None,
            key_accessor: None,
            x_label: None,
            y_label: None,
            x_log: None,
            y_log: None,
            palette: None,
            radius: None,
            duration: None,
            duplicate_param: None,
        }
    }

    /// Set the plot area width in pixels (excluding margins).
    pub fn width(mut self, width: T) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Set the plot area height in pixels (excluding margins).
    pub fn height(mut self, height: T) -> Self {
        if self.height.is_some() {
            self.duplicate_param = Some("height");
        }
        self.height = Some(height);
        self
    }

    /// Set the margins around the plot area.
    pub fn margin(mut self, margin: Margin<T>) -> Self {
        if self.margin.is_some() {
            self.duplicate_param = Some("margin");
        }
        self.margin = Some(margin);
        self
    }

    /// Set the dataset.
    pub fn data(mut self, data: Vec<D>) -> Self {
        if self.data.is_some() {
            self.duplicate_param = Some("data");
        }
        self.data = Some(data);
        self
    }

    /// Set the accessor mapping a record to its x value.
    pub fn x_accessor(mut self, accessor: impl Fn(&D) -> T + 'static) -> Self {
        if self.x_accessor.is_some() {
            self.duplicate_param = Some("x_accessor");
        }
        self.x_accessor = Some(Box::new(accessor));
        self
    }

    /// Set the accessor mapping a record to its y value.
    pub fn y_accessor(mut self, accessor: impl Fn(&D) -> T + 'static) -> Self {
        if self.y_accessor.is_some() {
            self.duplicate_param = Some("y_accessor");
        }
        self.y_accessor = Some(Box::new(accessor));
        self
    }

    /// Set the accessor mapping a record to its categorical color key.
    pub fn color_accessor(mut self, accessor: impl Fn(&D) -> String + 'static) -> Self {
        if self.color_accessor.is_some() {
            self.duplicate_param = Some("color_accessor");
        }
        self.color_accessor = Some(Box::new(accessor));
        self
    }

    /// Set the accessor mapping a record to its stable unique identity.
    pub fn key_accessor(mut self, accessor: impl Fn(&D) -> String + 'static) -> Self {
        if self.key_accessor.is_some() {
            self.duplicate_param = Some("key_accessor");
        }
        self.key_accessor = Some(Box::new(accessor));
        self
    }

    /// Set the x-axis label text.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        if self.x_label.is_some() {
            self.duplicate_param = Some("x_label");
        }
        self.x_label = Some(label.into());
        self
    }

    /// Set the y-axis label text.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        if self.y_label.is_some() {
            self.duplicate_param = Some("y_label");
        }
        self.y_label = Some(label.into());
        self
    }

    /// Toggle a base-10 logarithmic x-axis.
    pub fn x_log(mut self, log: bool) -> Self {
        if self.x_log.is_some() {
            self.duplicate_param = Some("x_log");
        }
        self.x_log = Some(log);
        self
    }

    /// Toggle a base-10 logarithmic y-axis.
    pub fn y_log(mut self, log: bool) -> Self {
        if self.y_log.is_some() {
            self.duplicate_param = Some("y_log");
        }
        self.y_log = Some(log);
        self
    }

    /// Set the categorical color palette.
    pub fn palette(mut self, palette: Vec<String>) -> Self {
        if self.palette.is_some() {
            self.duplicate_param = Some("palette");
        }
        self.palette = Some(palette);
        self
    }

    /// Set the mark circle radius in pixels.
    pub fn radius(mut self, radius: T) -> Self {
        if self.radius.is_some() {
            self.duplicate_param = Some("radius");
        }
        self.radius = Some(radius);
        self
    }

    /// Set the transition duration for redraws, in host time-units.
    pub fn duration(mut self, duration: T) -> Self {
        if self.duration.is_some() {
            self.duplicate_param = Some("duration");
        }
        self.duration = Some(duration);
        self
    }

    /// Validate the configuration and produce a chart instance.
    pub fn build(self) -> Result<Chart<D, T>, ChartError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let x = self
            .x_accessor
            .ok_or(ChartError::MissingAccessor { accessor: "x" })?;
        let y = self
            .y_accessor
            .ok_or(ChartError::MissingAccessor { accessor: "y" })?;
        let key = self
            .key_accessor
            .ok_or(ChartError::MissingAccessor { accessor: "key" })?;
        let color: KeyAccessor<D> = self
            .color_accessor
            .unwrap_or_else(|| Box::new(|_: &D| "0".to_string()));

        let config = ChartConfig {
            width: self.width.unwrap_or_else(|| T::from(640).unwrap()),
            height: self.height.unwrap_or_else(|| T::from(480).unwrap()),
            margin: self.margin.unwrap_or_default(),
            x_label: self.x_label.unwrap_or_default(),
            y_label: self.y_label.unwrap_or_default(),
            x_log: self.x_log.unwrap_or(false),
            y_log: self.y_log.unwrap_or(false),
            radius: self.radius.unwrap_or_else(|| T::from(5).unwrap()),
            palette: self
                .palette
                .unwrap_or_else(|| CategoryScale::category10().palette().to_vec()),
            duration: self.duration.unwrap_or_else(|| T::from(1500).unwrap()),
        };

        Validator::validate_dimension(config.width, "width")?;
        Validator::validate_dimension(config.height, "height")?;
        Validator::validate_dimension(config.radius, "radius")?;
        Validator::validate_non_negative(config.duration, "duration")?;
        Validator::validate_margin(&config.margin)?;

        let colors = CategoryScale::new(config.palette.clone());

        Ok(Chart {
            config,
            accessors: Accessors { x, y, color, key },
            data: self.data,
            colors,
            scene: None,
            summary: None,
            transitions: TransitionLog::new(),
        })
    }
}

// ============================================================================
// Chart
// ============================================================================

/// A scatterplot chart instance with a retained scene.
pub struct Chart<D, T> {
    config: ChartConfig<T>,
    accessors: Accessors<D, T>,
    data: Option<Vec<D>>,
    colors: CategoryScale,
    scene: Option<Scene<T>>,
    summary: Option<FitSummary<T>>,
    transitions: TransitionLog<T>,
}

impl<D, T: Float + std::fmt::Debug> std::fmt::Debug for Chart<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("config", &self.config)
            .field("accessors", &"<accessors>")
            .field("data_len", &self.data.as_ref().map(|d| d.len()))
            .field("colors", &self.colors)
            .field("scene", &self.scene)
            .field("summary", &self.summary)
            .field("transitions", &self.transitions)
            .finish()
    }
}

impl<D, T: Float> Chart<D, T> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// First draw: build the scene scaffold, compute statistics, and place
    /// the regression line and marks.
    ///
    /// Rendering again rebuilds the scene from scratch without transitions.
    pub fn render(&mut self) -> Result<(), ChartError> {
        let data = self.data.as_ref().ok_or(ChartError::MissingData)?;
        let frame = Frame::compute(&self.config, &self.accessors, data)?;

        self.scene = Some(Scene::build(&self.config, &frame, &mut self.colors));
        self.summary = Some(frame.summary);
        Ok(())
    }

    /// Incremental update: recompute domains and statistics, then apply
    /// every visual change as a recorded transition of the configured
    /// duration.
    ///
    /// Marks are diffed against the new dataset by key: updates transition
    /// to their new position, radius, and fill; enters appear at their final
    /// position with no transition; exits are removed immediately. Label
    /// text swaps immediately.
    pub fn redraw(&mut self) -> Result<(), ChartError> {
        if self.scene.is_none() {
            return Err(ChartError::NotRendered);
        }

        let data = self.data.as_ref().ok_or(ChartError::MissingData)?;
        let frame = Frame::compute(&self.config, &self.accessors, data)?;
        let duration = self.config.duration;

        let scene = match self.scene.as_mut() {
            Some(scene) => scene,
            None => return Err(ChartError::NotRendered),
        };

        // Axes transition to the new scales.
        let new_x_axis = Axis::generate(Orientation::Bottom, &frame.x_scale, -self.config.height);
        let new_y_axis = Axis::generate(Orientation::Left, &frame.y_scale, -self.config.width);

        for (target, old, new) in [
            (TransitionTarget::XAxis, &scene.x_axis, &new_x_axis),
            (TransitionTarget::YAxis, &scene.y_axis, &new_y_axis),
        ] {
            self.transitions.begin(
                target.clone(),
                "domain-min",
                AttributeValue::Scalar(old.domain.0),
                AttributeValue::Scalar(new.domain.0),
                duration,
            );
            self.transitions.begin(
                target,
                "domain-max",
                AttributeValue::Scalar(old.domain.1),
                AttributeValue::Scalar(new.domain.1),
                duration,
            );
        }
        scene.x_axis = new_x_axis;
        scene.y_axis = new_y_axis;

        // Label text swaps are not animated.
        scene.x_label = self.config.x_label.clone();
        scene.y_label = self.config.y_label.clone();
        scene.width = self.config.width;
        scene.height = self.config.height;
        scene.margin = self.config.margin;

        // Regression line transitions its endpoint coordinates.
        let new_line = LineNode {
            x1: frame.line_start.0,
            y1: frame.line_start.1,
            x2: frame.line_end.0,
            y2: frame.line_end.1,
        };
        for (attribute, old, new) in [
            ("x1", scene.regression.x1, new_line.x1),
            ("y1", scene.regression.y1, new_line.y1),
            ("x2", scene.regression.x2, new_line.x2),
            ("y2", scene.regression.y2, new_line.y2),
        ] {
            self.transitions.begin(
                TransitionTarget::RegressionLine,
                attribute,
                AttributeValue::Scalar(old),
                AttributeValue::Scalar(new),
                duration,
            );
        }
        scene.regression = new_line;

        // Keyed three-way diff of marks.
        let previous: IndexSet<String> = scene.marks.keys().cloned().collect();
        let diff = reconcile::diff(&previous, frame.marks.iter().map(|p| &p.key));
        let placements: IndexMap<&str, &MarkPlacement<T>> = frame
            .marks
            .iter()
            .map(|p| (p.key.as_str(), p))
            .collect();

        // Exit: removed immediately, no transition.
        for key in &diff.exit {
            scene.marks.shift_remove(key);
        }

        // Update: transition position, radius, and fill.
        for key in &diff.update {
            let (Some(placement), Some(old)) =
                (placements.get(key.as_str()), scene.marks.get_mut(key))
            else {
                continue;
            };

            let fill = self.colors.color_for(&placement.color_key);
            let target = TransitionTarget::Mark(key.clone());
            for (attribute, from, to) in [
                ("cx", old.cx, placement.cx),
                ("cy", old.cy, placement.cy),
                ("r", old.radius, self.config.radius),
            ] {
                self.transitions.begin(
                    target.clone(),
                    attribute,
                    AttributeValue::Scalar(from),
                    AttributeValue::Scalar(to),
                    duration,
                );
            }
            self.transitions.begin(
                target,
                "fill",
                AttributeValue::Paint(old.fill.clone()),
                AttributeValue::Paint(fill.clone()),
                duration,
            );

            *old = MarkNode {
                key: key.clone(),
                cx: placement.cx,
                cy: placement.cy,
                radius: self.config.radius,
                fill,
            };
        }

        // Enter: appended at final position, no transition.
        for key in &diff.enter {
            let Some(placement) = placements.get(key.as_str()) else {
                continue;
            };
            let fill = self.colors.color_for(&placement.color_key);
            scene.marks.insert(
                key.clone(),
                MarkNode {
                    key: key.clone(),
                    cx: placement.cx,
                    cy: placement.cy,
                    radius: self.config.radius,
                    fill,
                },
            );
        }

        self.summary = Some(frame.summary);
        Ok(())
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// Coefficient of determination from the latest pass.
    pub fn r_squared(&self) -> Option<T> {
        self.summary.map(|s| s.r_squared)
    }

    /// Sample correlation from the latest pass.
    pub fn correlation(&self) -> Option<T> {
        self.summary.map(|s| s.correlation)
    }

    /// Sample covariance from the latest pass.
    pub fn covariance(&self) -> Option<T> {
        self.summary.map(|s| s.covariance)
    }

    /// Fitted slope (in transformed space) from the latest pass.
    pub fn slope(&self) -> Option<T> {
        self.summary.map(|s| s.slope)
    }

    /// Fitted intercept (in transformed space) from the latest pass.
    pub fn intercept(&self) -> Option<T> {
        self.summary.map(|s| s.intercept)
    }

    /// The retained scene, if the chart has rendered.
    pub fn scene(&self) -> Option<&Scene<T>> {
        self.scene.as_ref()
    }

    /// Drain the transition records issued by redraws so far.
    pub fn take_transitions(&mut self) -> Vec<Transition<T>> {
        self.transitions.take()
    }

    // ========================================================================
    // Configuration Getters
    // ========================================================================

    /// Plot area width in pixels.
    pub fn width(&self) -> T {
        self.config.width
    }

    /// Plot area height in pixels.
    pub fn height(&self) -> T {
        self.config.height
    }

    /// Margins around the plot area.
    pub fn margin(&self) -> Margin<T> {
        self.config.margin
    }

    /// x-axis label text.
    pub fn x_label(&self) -> &str {
        &self.config.x_label
    }

    /// y-axis label text.
    pub fn y_label(&self) -> &str {
        &self.config.y_label
    }

    /// Whether the x-axis is logarithmic.
    pub fn x_log(&self) -> bool {
        self.config.x_log
    }

    /// Whether the y-axis is logarithmic.
    pub fn y_log(&self) -> bool {
        self.config.y_log
    }

    /// Mark circle radius in pixels.
    pub fn radius(&self) -> T {
        self.config.radius
    }

    /// Categorical color palette.
    pub fn palette(&self) -> &[String] {
        &self.config.palette
    }

    /// Transition duration in host time-units.
    pub fn duration(&self) -> T {
        self.config.duration
    }

    /// The configured dataset, if any.
    pub fn data(&self) -> Option<&[D]> {
        self.data.as_deref()
    }

    /// The transform currently applied to x values before fitting.
    pub fn x_transform(&self) -> AxisTransform {
        AxisTransform::from_log_flag(self.config.x_log)
    }

    /// The transform currently applied to y values before fitting.
    pub fn y_transform(&self) -> AxisTransform {
        AxisTransform::from_log_flag(self.config.y_log)
    }

    // ========================================================================
    // Configuration Setters
    // ========================================================================
    //
    // Reconfiguration never auto-redraws; call `redraw()` to apply.

    /// Replace the plot area width.
    pub fn set_width(&mut self, width: T) -> &mut Self {
        self.config.width = width;
        self
    }

    /// Replace the plot area height.
    pub fn set_height(&mut self, height: T) -> &mut Self {
        self.config.height = height;
        self
    }

    /// Replace the margins.
    pub fn set_margin(&mut self, margin: Margin<T>) -> &mut Self {
        self.config.margin = margin;
        self
    }

    /// Replace the dataset.
    pub fn set_data(&mut self, data: Vec<D>) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// Replace the x accessor.
    pub fn set_x_accessor(&mut self, accessor: impl Fn(&D) -> T + 'static) -> &mut Self {
        self.accessors.x = Box::new(accessor);
        self
    }

    /// Replace the y accessor.
    pub fn set_y_accessor(&mut self, accessor: impl Fn(&D) -> T + 'static) -> &mut Self {
        self.accessors.y = Box::new(accessor);
        self
    }

    /// Replace the color accessor.
    pub fn set_color_accessor(&mut self, accessor: impl Fn(&D) -> String + 'static) -> &mut Self {
        self.accessors.color = Box::new(accessor);
        self
    }

    /// Replace the key accessor.
    pub fn set_key_accessor(&mut self, accessor: impl Fn(&D) -> String + 'static) -> &mut Self {
        self.accessors.key = Box::new(accessor);
        self
    }

    /// Replace the x-axis label.
    pub fn set_x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.x_label = label.into();
        self
    }

    /// Replace the y-axis label.
    pub fn set_y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.y_label = label.into();
        self
    }

    /// Toggle the x-axis between linear and logarithmic.
    pub fn set_x_log(&mut self, log: bool) -> &mut Self {
        self.config.x_log = log;
        self
    }

    /// Toggle the y-axis between linear and logarithmic.
    pub fn set_y_log(&mut self, log: bool) -> &mut Self {
        self.config.y_log = log;
        self
    }

    /// Replace the palette, discarding existing color assignments.
    pub fn set_palette(&mut self, palette: Vec<String>) -> &mut Self {
        self.config.palette = palette.clone();
        self.colors = CategoryScale::new(palette);
        self
    }

    /// Replace the mark radius.
    pub fn set_radius(&mut self, radius: T) -> &mut Self {
        self.config.radius = radius;
        self
    }

    /// Replace the transition duration.
    pub fn set_duration(&mut self, duration: T) -> &mut Self {
        self.config.duration = duration;
        self
    }
}

impl<D, T: Float + Display> Chart<D, T> {
    /// Serialize the retained scene as an SVG document.
    pub fn to_svg(&self) -> Result<String, ChartError> {
        match &self.scene {
            Some(scene) => Ok(svg::to_svg(scene)),
            None => Err(ChartError::NotRendered),
        }
    }
}
