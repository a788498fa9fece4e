//! # scatterfit — an interactive scatterplot with a regression overlay
//!
//! A scatterplot component driven by a declarative configuration: axes with
//! gridlines, a least-squares regression overlay (optionally in log space),
//! and derived statistics (R², sample correlation, sample covariance),
//! rendered into a retained scene that serializes to SVG.
//!
//! The chart consumes an in-memory collection of caller records, observed
//! only through accessor functions. The first `render()` builds the scene
//! scaffold; subsequent `redraw()` calls recompute domains and statistics
//! and describe every visual change as an explicit transition record,
//! reconciling marks against the new dataset by key (enter/update/exit).
//!
//! ## Quick Start
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! struct Obs {
//!     name: &'static str,
//!     x: f64,
//!     y: f64,
//! }
//!
//! let data = vec![
//!     Obs { name: "a", x: 1.0, y: 2.0 },
//!     Obs { name: "b", x: 2.0, y: 4.0 },
//!     Obs { name: "c", x: 3.0, y: 6.0 },
//! ];
//!
//! let mut chart = Scatterplot::new()
//!     .width(640.0)
//!     .height(480.0)
//!     .data(data)
//!     .x_accessor(|o: &Obs| o.x)
//!     .y_accessor(|o: &Obs| o.y)
//!     .key_accessor(|o: &Obs| o.name.to_string())
//!     .x_label("mass")
//!     .y_label("velocity")
//!     .build()?;
//!
//! chart.render()?;
//!
//! assert!((chart.slope().unwrap() - 2.0).abs() < 1e-12);
//! assert!((chart.r_squared().unwrap() - 1.0).abs() < 1e-12);
//!
//! let svg = chart.to_svg()?;
//! assert!(svg.starts_with("<svg"));
//! # Result::<(), ChartError>::Ok(())
//! ```
//!
//! ## Incremental Redraws
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! # struct Obs { name: &'static str, x: f64, y: f64 }
//! # let data = vec![
//! #     Obs { name: "a", x: 1.0, y: 2.0 },
//! #     Obs { name: "b", x: 2.0, y: 4.0 },
//! #     Obs { name: "c", x: 3.0, y: 6.0 },
//! # ];
//! let mut chart = Scatterplot::new()
//!     .data(data)
//!     .x_accessor(|o: &Obs| o.x)
//!     .y_accessor(|o: &Obs| o.y)
//!     .key_accessor(|o: &Obs| o.name.to_string())
//!     .build()?;
//!
//! chart.render()?;
//!
//! // Reconfigure, then redraw; nothing auto-redraws.
//! chart
//!     .set_data(vec![
//!         Obs { name: "a", x: 1.0, y: 2.5 },
//!         Obs { name: "b", x: 2.0, y: 3.9 },
//!         Obs { name: "d", x: 4.0, y: 8.1 },
//!     ])
//!     .set_x_label("updated");
//! chart.redraw()?;
//!
//! // Every animated change was recorded for the host to drive.
//! let transitions = chart.take_transitions();
//! assert!(!transitions.is_empty());
//! # Result::<(), ChartError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Lifecycle operations return `Result<(), ChartError>`: fewer than two
//! clean points is `InsufficientData`, a redraw before the first render is
//! `NotRendered`, and duplicate mark keys are `DuplicateKey`. Records whose
//! accessors produce non-finite values — or zero on a logarithmic axis —
//! are silently excluded from the cleaned dataset instead.

// Layer 1: Primitives - configuration records and error types.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
pub mod math;

// Layer 3: Algorithms - regression and keyed reconciliation.
pub mod algorithms;

// Layer 4: Evaluation - fit summary statistics.
pub mod evaluation;

// Layer 5: Engine - validation, cleaning, and frame computation.
pub mod engine;

// Layer 6: Render - scene, axes, palette, transitions, and SVG output.
pub mod render;

// High-level fluent API for building and driving charts.
pub mod api;

// Standard scatterfit prelude.
pub mod prelude {
    pub use crate::api::{
        Accessors, Chart, ChartConfig, ChartError, FitSummary, LinearFit, Margin, Scale,
        ScatterplotBuilder as Scatterplot,
    };
    pub use crate::math::transform::AxisTransform;
    pub use crate::render::palette::{CategoryScale, CATEGORY10};
    pub use crate::render::scene::Scene;
    pub use crate::render::transition::{
        AttributeValue, Transition, TransitionHandle, TransitionLog, TransitionTarget,
    };
}
