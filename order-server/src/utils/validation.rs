//! Input validation helpers
//!
//! Centralized field limits and validation functions for CRUD handlers.
//! Field names in error messages use the JSON (camelCase) spelling since
//! they are client-facing.

use crate::core::ServerError;

// ── Field limits ────────────────────────────────────────────────────

/// Product names
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Order quantity range (inclusive)
pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 1000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(ServerError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an integer falls within an inclusive range.
pub fn validate_int_range(value: i32, field: &str, min: i32, max: i32) -> Result<(), ServerError> {
    if value < min || value > max {
        return Err(ServerError::validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        let err = validate_required_text("", "productName", MAX_PRODUCT_NAME_LEN).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
        // 纯空白也算空
        assert!(validate_required_text("   ", "productName", MAX_PRODUCT_NAME_LEN).is_err());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let name = "x".repeat(MAX_PRODUCT_NAME_LEN + 1);
        let err = validate_required_text(&name, "productName", MAX_PRODUCT_NAME_LEN).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn text_at_limit_is_accepted() {
        let name = "x".repeat(MAX_PRODUCT_NAME_LEN);
        assert!(validate_required_text(&name, "productName", MAX_PRODUCT_NAME_LEN).is_ok());
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        assert!(validate_int_range(MIN_QUANTITY, "quantity", MIN_QUANTITY, MAX_QUANTITY).is_ok());
        assert!(validate_int_range(MAX_QUANTITY, "quantity", MIN_QUANTITY, MAX_QUANTITY).is_ok());
        assert!(validate_int_range(0, "quantity", MIN_QUANTITY, MAX_QUANTITY).is_err());
        assert!(validate_int_range(1001, "quantity", MIN_QUANTITY, MAX_QUANTITY).is_err());
    }
}
