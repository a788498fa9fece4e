//! Per-pass frame computation.
//!
//! ## Purpose
//!
//! This module computes everything a render or redraw pass needs to apply to
//! the scene: the cleaned dataset's domains, the axis scales, the fit
//! summary statistics, the regression line's pixel endpoints, and the pixel
//! placement of every mark.
//!
//! ## Design notes
//!
//! * **Shared by render and redraw**: Both lifecycle operations compute a
//!   frame identically; only the way the frame is applied to the scene
//!   differs (initial build vs. transitioned update).
//! * **Cleaned-set consistency**: Domains, statistics, and marks all derive
//!   from the one cleaned dataset produced at the start of the pass.
//! * **Pixel convention**: x maps to `[0, width]`; y maps to `[height, 0]`
//!   (domain minimum at the bottom of the plot).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `marks` preserves cleaned-data order.
//! * The regression line endpoints are the images of the x-domain bounds —
//!   the two-point construction, never interior re-sampling.
//! * A frame is only produced for at least 2 clean points.
//!
//! ## Non-goals
//!
//! * This module does not mutate the scene (see the API layer).
//! * This module does not record transitions (see `render::transition`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{endpoints, LinearFit};
use crate::engine::cleaner::{clean, CleanPoint};
use crate::evaluation::statistics::FitSummary;
use crate::math::scale::{extent, Scale};
use crate::math::transform::AxisTransform;
use crate::primitives::config::{Accessors, ChartConfig};
use crate::primitives::errors::ChartError;

// ============================================================================
// Frame Types
// ============================================================================

/// Pixel placement of one mark.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkPlacement<T> {
    /// Stable unique identity of the mark.
    pub key: String,

    /// Categorical color key of the mark.
    pub color_key: String,

    /// Circle center x, in pixels.
    pub cx: T,

    /// Circle center y, in pixels.
    pub cy: T,
}

/// Everything one pass applies to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    /// x-axis scale fitted to the cleaned extent.
    pub x_scale: Scale<T>,

    /// y-axis scale fitted to the cleaned extent.
    pub y_scale: Scale<T>,

    /// Statistics of the fit over transformed pairs.
    pub summary: FitSummary<T>,

    /// Regression line start, in pixels.
    pub line_start: (T, T),

    /// Regression line end, in pixels.
    pub line_end: (T, T),

    /// Mark placements in cleaned-data order.
    pub marks: Vec<MarkPlacement<T>>,
}

// ============================================================================
// Frame Computation
// ============================================================================

impl<T: Float> Frame<T> {
    /// Clean the dataset and compute the frame for one pass.
    pub fn compute<D>(
        config: &ChartConfig<T>,
        accessors: &Accessors<D, T>,
        data: &[D],
    ) -> Result<Self, ChartError> {
        let points = clean(data, accessors, config.x_log, config.y_log)?;
        Self::from_clean_points(config, &points)
    }

    /// Compute the frame from an already-cleaned dataset.
    pub fn from_clean_points(
        config: &ChartConfig<T>,
        points: &[CleanPoint<T>],
    ) -> Result<Self, ChartError> {
        if points.len() < 2 {
            return Err(ChartError::InsufficientData {
                got: points.len(),
                min: 2,
            });
        }

        // Domains from the cleaned set, never the raw set.
        let x_domain = extent(points.iter().map(|p| p.x)).ok_or(ChartError::InsufficientData {
            got: 0,
            min: 2,
        })?;
        let y_domain = extent(points.iter().map(|p| p.y)).ok_or(ChartError::InsufficientData {
            got: 0,
            min: 2,
        })?;

        let x_scale = Scale::from_log_flag(
            config.x_log,
            x_domain,
            (T::zero(), config.width),
        );
        let y_scale = Scale::from_log_flag(
            config.y_log,
            y_domain,
            (config.height, T::zero()),
        );

        // Fit and statistics over the transformed pairs.
        let x_transform = AxisTransform::from_log_flag(config.x_log);
        let y_transform = AxisTransform::from_log_flag(config.y_log);

        let tx: Vec<T> = points.iter().map(|p| x_transform.apply(p.x)).collect();
        let ty: Vec<T> = points.iter().map(|p| y_transform.apply(p.y)).collect();

        let fit = LinearFit::fit_ols(&tx, &ty);
        let summary = FitSummary::compute(&tx, &ty, &fit);

        // Two-point line construction over the x-domain, mapped to pixels.
        let ((x_lo, y_lo), (x_hi, y_hi)) = endpoints(&fit, x_domain, x_transform, y_transform);
        let line_start = (x_scale.map(x_lo), y_scale.map(y_lo));
        let line_end = (x_scale.map(x_hi), y_scale.map(y_hi));

        let marks = points
            .iter()
            .map(|p| MarkPlacement {
                key: p.key.clone(),
                color_key: p.color_key.clone(),
                cx: x_scale.map(p.x),
                cy: y_scale.map(p.y),
            })
            .collect();

        Ok(Self {
            x_scale,
            y_scale,
            summary,
            line_start,
            line_end,
            marks,
        })
    }
}
