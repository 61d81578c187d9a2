//! # Validation Module
//!
//! Field rules for catalog rows before they reach the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Constructors (Price::new, TaxRate::from_fraction)            │
//! │  └── Numeric invariants, enforced for every item                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Text field rules for persisted catalog rows                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (price >= 0), CHECK (product_type IN ('CD', 'Book'))        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::validation::{validate_producer_name, validate_title};
//!
//! assert!(validate_title("Thriller").is_ok());
//! assert!(validate_title("   ").is_err());
//! assert!(validate_producer_name("surname", "").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_TITLE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog title.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a producer name or surname.
///
/// ## Rules
/// - May be empty (bands like "AC/DC" have no surname)
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_producer_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
