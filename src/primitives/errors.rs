//! Error types for chart operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring,
//! rendering, or redrawing a chart, including incomplete configuration,
//! invalid dimensions, and datasets too small to regress.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the rejected dimension).
//! * **Deferred**: Builder misuse is caught and stored during configuration,
//!   then reported at `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Missing data or accessors, invalid dimensions.
//! 2. **Data errors**: Too few clean points, duplicate mark keys.
//! 3. **Lifecycle errors**: Redrawing or serializing before the first render.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for chart configuration and lifecycle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No dataset has been configured.
    MissingData,

    /// A required accessor function was never configured.
    MissingAccessor {
        /// Name of the missing accessor ("x", "y", or "key").
        accessor: &'static str,
    },

    /// A dimension or sizing parameter is non-finite or out of range.
    InvalidDimension {
        /// Name of the rejected parameter (e.g., "width", "radius").
        dimension: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The cleaned dataset is below the minimum required for regression.
    InsufficientData {
        /// Number of clean points available.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Two data points produced the same key; keyed reconciliation requires
    /// unique identities.
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// `redraw()` or scene access was attempted before the first `render()`.
    NotRendered,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingData => write!(f, "No dataset configured"),
            Self::MissingAccessor { accessor } => {
                write!(f, "Missing accessor: '{accessor}' was never configured")
            }
            Self::InvalidDimension { dimension, value } => {
                write!(f, "Invalid {dimension}: {value} (must be finite and positive)")
            }
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} clean points, need at least {min}")
            }
            Self::DuplicateKey { key } => {
                write!(f, "Duplicate mark key: '{key}' (keys must be unique)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::NotRendered => write!(f, "Chart has not been rendered; call render() first"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for ChartError {}
