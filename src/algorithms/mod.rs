//! Layer 3: Algorithms
//!
//! This layer implements the core logic of the chart: ordinary least-squares
//! regression in (possibly log-transformed) coordinate space, the two-point
//! regression-line construction, and keyed reconciliation of marks. It is
//! orchestrated by the engine layer.

// Least-squares regression and regression-line mapping.
pub mod regression;

// Keyed enter/update/exit reconciliation.
pub mod reconcile;
