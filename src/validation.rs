//! Input validation for sortation scheduling problems.
//!
//! Checks structural integrity of order records before scheduling.
//! The core's decoder and solver assume structurally valid input; this
//! module is the explicit error surface a loader calls first. Detects:
//! - Duplicate order IDs
//! - Non-positive quantities or lane speeds
//! - Wave number 0 (waves are 1-based)
//! - Negative times (release, processing, packing)
//!
//! Lanes missing from the layout are *not* an error — the decoder
//! resolves them to position 0 — but `validate_input` reports them so a
//! loader can warn about data gaps.

use crate::models::{LaneLayout, Order};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two orders share the same ID.
    DuplicateId,
    /// Quantity is zero or negative.
    NonPositiveQuantity,
    /// Lane speed is zero or negative.
    NonPositiveLaneSpeed,
    /// Wave number is 0; waves are 1-based.
    InvalidWave,
    /// A time attribute is negative.
    NegativeTime,
    /// An order references a lane absent from the layout.
    UnknownLane,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates order records against the lane layout.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(orders: &[Order], layout: &LaneLayout) -> ValidationResult {
    let mut errors = Vec::new();

    let mut order_ids = HashSet::new();
    for order in orders {
        if !order_ids.insert(order.order_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate order ID: {}", order.order_id),
            ));
        }

        if order.quantity <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantity,
                format!(
                    "Order '{}' has non-positive quantity {}",
                    order.order_id, order.quantity
                ),
            ));
        }

        if order.lane_speed <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveLaneSpeed,
                format!(
                    "Order '{}' has non-positive lane speed {}",
                    order.order_id, order.lane_speed
                ),
            ));
        }

        if order.wave == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWave,
                format!("Order '{}' has wave 0; waves are 1-based", order.order_id),
            ));
        }

        if order.release_time < 0.0 || order.processing_time < 0.0 || order.packing_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTime,
                format!("Order '{}' has a negative time attribute", order.order_id),
            ));
        }

        if !layout.is_empty() && !layout.contains(order.lane) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLane,
                format!(
                    "Order '{}' references lane {} absent from the layout",
                    order.order_id, order.lane
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
