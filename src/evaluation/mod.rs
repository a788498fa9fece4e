//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates the statistical metrics derived from the regression
//! fit:
//! - Coefficient of determination (R^2)
//! - Sample Pearson correlation
//! - Sample covariance
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Render
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit summary statistics (R^2, correlation, covariance).
pub mod statistics;
