//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a render/redraw pass: it validates configuration,
//! cleans the dataset, and computes the frame (domains, scales, statistics,
//! regression-line endpoints, mark placements) that the render layer applies
//! to the scene.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Render
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Clean-dataset filtering.
pub mod cleaner;

/// Per-pass frame computation.
pub mod frame;
