//! Retained scene tree.
//!
//! ## Purpose
//!
//! This module defines the in-memory drawing surface: the element tree a
//! render pass builds and a redraw pass mutates in place. It is the non-DOM
//! counterpart of the SVG scaffold — axes, axis labels, bounding frame, clip
//! region, regression line, and one keyed mark group (circle plus text
//! label) per data point.
//!
//! ## Design notes
//!
//! * **Single shared surface**: There is exactly one scene per chart,
//!   mutated in place by both lifecycle operations (last-writer-wins).
//! * **Keyed marks**: Marks live in an insertion-ordered map keyed by the
//!   key accessor's output; reconciliation operates on these keys.
//! * **Results, not computation**: The scene stores final pixel values; all
//!   layout math happens in the engine layer.
//!
//! ## Invariants
//!
//! * Mark keys are unique within the scene.
//! * The frame rectangle and clip region always match the configured plot
//!   area.
//!
//! ## Non-goals
//!
//! * This module does not compute placements (see `engine::frame`).
//! * This module does not diff datasets (see `algorithms::reconcile`).
//! * This module does not serialize (see `render::svg`).

// External dependencies
use indexmap::IndexMap;
use num_traits::Float;

// Internal dependencies
use crate::engine::frame::Frame;
use crate::primitives::config::{ChartConfig, Margin};
use crate::render::axis::{Axis, Orientation};
use crate::render::palette::CategoryScale;

// ============================================================================
// Scene Nodes
// ============================================================================

/// The regression overlay line, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineNode<T> {
    /// Start x.
    pub x1: T,
    /// Start y.
    pub y1: T,
    /// End x.
    pub x2: T,
    /// End y.
    pub y2: T,
}

/// One mark group: a colored circle plus a text label carrying the key.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkNode<T> {
    /// Stable unique identity; also the label text.
    pub key: String,

    /// Circle center x, in pixels.
    pub cx: T,

    /// Circle center y, in pixels.
    pub cy: T,

    /// Circle radius, in pixels.
    pub radius: T,

    /// Circle fill color.
    pub fill: String,
}

// ============================================================================
// Scene
// ============================================================================

/// The retained element tree for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T> {
    /// Plot area width, in pixels.
    pub width: T,

    /// Plot area height, in pixels.
    pub height: T,

    /// Margins around the plot area.
    pub margin: Margin<T>,

    /// Bottom axis with gridlines spanning the plot height.
    pub x_axis: Axis<T>,

    /// Left axis with gridlines spanning the plot width.
    pub y_axis: Axis<T>,

    /// x-axis label text.
    pub x_label: String,

    /// y-axis label text.
    pub y_label: String,

    /// Regression overlay, clipped to the plot area.
    pub regression: LineNode<T>,

    /// Keyed mark groups in draw order.
    pub marks: IndexMap<String, MarkNode<T>>,
}

impl<T: Float> Scene<T> {
    /// Build the initial scene from a computed frame.
    pub fn build(config: &ChartConfig<T>, frame: &Frame<T>, colors: &mut CategoryScale) -> Self {
        let x_axis = Axis::generate(Orientation::Bottom, &frame.x_scale, -config.height);
        let y_axis = Axis::generate(Orientation::Left, &frame.y_scale, -config.width);

        let mut marks = IndexMap::with_capacity(frame.marks.len());
        for placement in &frame.marks {
            marks.insert(
                placement.key.clone(),
                MarkNode {
                    key: placement.key.clone(),
                    cx: placement.cx,
                    cy: placement.cy,
                    radius: config.radius,
                    fill: colors.color_for(&placement.color_key),
                },
            );
        }

        Self {
            width: config.width,
            height: config.height,
            margin: config.margin,
            x_axis,
            y_axis,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            regression: LineNode {
                x1: frame.line_start.0,
                y1: frame.line_start.1,
                x2: frame.line_end.0,
                y2: frame.line_end.1,
            },
            marks,
        }
    }
}
