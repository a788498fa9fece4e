//! Scene-to-SVG serialization.
//!
//! ## Purpose
//!
//! This module writes a retained scene out as a standalone SVG document:
//! the sized surface, the margin-translated plot group, axes with gridline
//! ticks, axis labels, the bounding frame, the clip region, the dashed
//! regression line, and one group per mark (circle plus key label).
//!
//! ## Design notes
//!
//! * **Element vocabulary**: Class names (`x axis`, `y label`, `frame`,
//!   `regression`, `mark`) and the `chartClip` clip region follow the
//!   conventional scatterplot scaffold so external stylesheets can target
//!   the output.
//! * **Plain writer**: Serialization is straight `fmt::Write` into a
//!   string; there is no retained printer state.
//! * **Escaping**: Label and key text is XML-escaped; numeric attributes
//!   are written with a fixed precision and trimmed.
//!
//! ## Invariants
//!
//! * The output is a single well-formed `<svg>` element.
//! * Serialization never mutates the scene.
//!
//! ## Non-goals
//!
//! * This module does not style beyond the reference scaffold; hosts attach
//!   CSS to the emitted classes.
//! * This module does not animate; transitions live in their own log.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Write};

// Internal dependencies
use crate::render::axis::{Axis, Orientation};
use crate::render::scene::Scene;

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Offset of a mark label left of its point, in pixels.
const LABEL_DX: f64 = -2.0;

/// Offset of a mark label above its point, in pixels.
const LABEL_DY: f64 = -5.0;

/// Format a numeric attribute with fixed precision, trimming trailing zeros.
fn num<T: Display>(v: T) -> String {
    let s = format!("{v:.3}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Axis Serialization
// ============================================================================

fn write_axis<T: Float + Display>(out: &mut String, axis: &Axis<T>, height: T) {
    match axis.orientation {
        Orientation::Bottom => {
            let _ = writeln!(
                out,
                r#"  <g class="x axis" transform="translate(0, {})">"#,
                num(height)
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate({}, 0)"><line y2="{}"/><text y="9" dy="0.71em" text-anchor="middle">{}</text></g>"#,
                    num(tick.position),
                    num(axis.tick_size),
                    num(tick.value),
                );
            }
        }
        Orientation::Left => {
            let _ = writeln!(out, r#"  <g class="y axis">"#);
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate(0, {})"><line x2="{}"/><text x="-9" dy="0.32em" text-anchor="end">{}</text></g>"#,
                    num(tick.position),
                    num(axis.tick_size),
                    num(tick.value),
                );
            }
        }
    }
    let _ = writeln!(out, "  </g>");
}

// ============================================================================
// Document Serialization
// ============================================================================

/// Serialize a scene as a standalone SVG document.
pub fn to_svg<T: Float + Display>(scene: &Scene<T>) -> String {
    let outer_w = scene.width + scene.margin.left + scene.margin.right;
    let outer_h = scene.height + scene.margin.top + scene.margin.bottom;

    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        num(outer_w),
        num(outer_h)
    );
    let _ = writeln!(
        out,
        r#" <g transform="translate({}, {})">"#,
        num(scene.margin.left),
        num(scene.margin.top)
    );

    // Axes with gridline ticks spanning the opposite dimension.
    write_axis(&mut out, &scene.x_axis, scene.height);
    write_axis(&mut out, &scene.y_axis, scene.height);

    // Axis labels.
    let _ = writeln!(
        out,
        r#"  <text class="x label" text-anchor="end" x="{}" y="{}">{}</text>"#,
        num(scene.width - T::from(10).unwrap()),
        num(scene.height - T::from(5).unwrap()),
        escape(&scene.x_label),
    );
    let _ = writeln!(
        out,
        r#"  <text class="y label" transform="rotate(-90)" text-anchor="end" x="-5" y="10">{}</text>"#,
        escape(&scene.y_label),
    );

    // Bounding frame and clip region.
    let _ = writeln!(
        out,
        r#"  <rect class="frame" width="{}" height="{}" fill="none" stroke="currentColor"/>"#,
        num(scene.width),
        num(scene.height)
    );
    let _ = writeln!(
        out,
        r#"  <defs><clipPath id="chartClip"><rect width="{}" height="{}"/></clipPath></defs>"#,
        num(scene.width),
        num(scene.height)
    );

    // Regression overlay, clipped to the plot area.
    let _ = writeln!(
        out,
        r#"  <g class="regression" clip-path="url(#chartClip)"><line x1="{}" y1="{}" x2="{}" y2="{}" style="stroke: black; stroke-width: 1; stroke-dasharray: 5,5,10,5"/></g>"#,
        num(scene.regression.x1),
        num(scene.regression.y1),
        num(scene.regression.x2),
        num(scene.regression.y2),
    );

    // Mark groups: circle plus key label anchored above-left of the point.
    for mark in scene.marks.values() {
        let _ = writeln!(out, r#"  <g class="mark">"#);
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(mark.cx),
            num(mark.cy),
            num(mark.radius),
            escape(&mark.fill),
        );
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" dx="{}" dy="{}" text-anchor="end">{}</text>"#,
            num(mark.cx),
            num(mark.cy),
            num(LABEL_DX),
            num(LABEL_DY),
            escape(&mark.key),
        );
        let _ = writeln!(out, "  </g>");
    }

    let _ = writeln!(out, " </g>");
    let _ = writeln!(out, "</svg>");

    out
}
