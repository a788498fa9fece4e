//! Input validation for chart configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for chart configuration
//! parameters. It checks requirements such as finite positive dimensions,
//! non-negative margins, and single-assignment of builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Dimension Bounds**: Width, height, and radius must be finite and
//!   strictly positive; margins and duration must be finite and non-negative.
//! * **Single Assignment**: Builder parameters may be configured at most once.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter or transform the dataset (see
//!   `engine::cleaner`).
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::config::Margin;
use crate::primitives::errors::ChartError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for chart configuration.
///
/// Provides static methods for validating configuration parameters. All
/// methods return `Result<(), ChartError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate a plot dimension (width, height, radius): finite and > 0.
    pub fn validate_dimension<T: Float>(value: T, name: &'static str) -> Result<(), ChartError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(ChartError::InvalidDimension {
                dimension: name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a non-negative quantity (margin side, transition duration).
    pub fn validate_non_negative<T: Float>(value: T, name: &'static str) -> Result<(), ChartError> {
        if !value.is_finite() || value < T::zero() {
            return Err(ChartError::InvalidDimension {
                dimension: name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate all four sides of a margin.
    pub fn validate_margin<T: Float>(margin: &Margin<T>) -> Result<(), ChartError> {
        Self::validate_non_negative(margin.top, "margin.top")?;
        Self::validate_non_negative(margin.right, "margin.right")?;
        Self::validate_non_negative(margin.bottom, "margin.bottom")?;
        Self::validate_non_negative(margin.left, "margin.left")?;
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ChartError> {
        if let Some(param) = duplicate_param {
            return Err(ChartError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
