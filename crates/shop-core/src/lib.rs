//! # shop-core: Pure Catalog Logic
//!
//! Chargeable items, tax, checkout and the text/XML renderers, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    tax    │  │  writer   │  │ checkout  │  │   │
//! │  │   │  Product  │  │  TaxRate  │  │   Text    │  │ subtotal  │  │   │
//! │  │   │  Service  │  │  TaxCalc  │  │   XML     │  │ tax/total │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-store (I/O Layer)                       │   │
//! │  │      XML file exchange, SQLite catalog, config, binaries        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Chargeable items (PhysicalProduct, Service, UtilityService)
//! - [`money`] - Validated `Price` and two-decimal formatting
//! - [`tax`] - `TaxRate` and `TaxCalculator`
//! - [`writer`] - Text and XML writers
//! - [`checkout`] - Subtotal, tax and total aggregation
//! - [`catalog`] - Stored catalog rows and the seed catalog
//! - [`query`] - Users/products lookup responses
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Checkout, PhysicalProduct, Service, TaxCalculator, TaxRate, TextWriter};
//!
//! let cd = PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap();
//! let hosting = Service::new("Web Hosting", 50.0).unwrap();
//!
//! let mut writer = TextWriter::new();
//! writer.add_item(cd.clone());
//! writer.add_item(hosting.clone());
//! assert_eq!(writer.write().unwrap().lines().count(), 2);
//!
//! let mut checkout = Checkout::new(TaxCalculator::new(TaxRate::from_bps(2000).unwrap()));
//! checkout.add_item(cd);
//! checkout.add_item(hosting);
//! assert!((checkout.grand_total() - 75.588).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod query;
pub mod tax;
pub mod types;
pub mod validation;
pub mod writer;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogProduct, ProductType};
pub use checkout::{Checkout, CheckoutSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Price;
pub use tax::{TaxCalculator, TaxRate};
pub use types::*;
pub use writer::{OutputFormat, ProductWriter, TextWriter, XmlWriter};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a catalog title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a producer name or surname.
pub const MAX_NAME_LEN: usize = 100;

/// Default tax rate in basis points (20%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 2000;
