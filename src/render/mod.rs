//! Layer 6: Render
//!
//! # Purpose
//!
//! This layer owns the retained drawing surface and everything that varies
//! only in presentation:
//!
//! - **Scene**: The in-memory element tree (axes, labels, frame, clip
//!   region, regression line, keyed marks) that render/redraw mutate in place
//! - **Axis**: Tick and gridline generation bound to a scale
//! - **Palette**: Categorical color assignment
//! - **Transition**: Explicit animation records replacing fire-and-forget
//!   DOM transitions
//! - **Svg**: Serialization of the scene to an SVG document
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Render ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Axis tick and gridline generation.
pub mod axis;

/// Categorical color assignment.
pub mod palette;

/// Retained scene tree.
pub mod scene;

/// Scene-to-SVG serialization.
pub mod svg;

/// Transition records and log.
pub mod transition;
