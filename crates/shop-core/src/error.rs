//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Price/rate invariants, rendering failures      │
//! │  └── ValidationError  - Catalog field validation failures              │
//! │                                                                         │
//! │  shop-store errors (separate crate)                                    │
//! │  └── StoreError       - File exchange + database failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → binary exit message  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price was negative, NaN or infinite.
    ///
    /// ## When This Occurs
    /// - Constructing an item with `-1.0` or `f64::NAN`
    /// - Deserializing an item whose stored price breaks the invariant
    #[error("Invalid price {value}: must be a finite, non-negative amount")]
    InvalidPrice { value: f64 },

    /// A tax rate fraction was outside `0.0..=1.0` or not finite.
    #[error("Invalid tax rate {value}: must be a fraction between 0 and 1")]
    InvalidTaxRate { value: f64 },

    /// Unknown catalog product type (only "CD" and "Book" exist).
    #[error("Unknown product type: {0}")]
    UnknownProductType(String),

    /// The XML serializer failed.
    ///
    /// Output goes to an in-memory buffer, so this only surfaces on
    /// encoder bugs, never on a full disk.
    #[error("Failed to render XML: {0}")]
    Render(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog rows.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
