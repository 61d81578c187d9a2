//! # shop-store: I/O Layer for the Shop Catalog
//!
//! Everything in the shop that touches the outside world: XML files on disk,
//! the SQLite catalog, environment configuration and logging setup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shop Data Flow                                 │
//! │                                                                         │
//! │  bin/catalog, bin/seed                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌──────────────────┐  │   │
//! │  │   │   exchange    │  │   Database    │  │   StoreConfig    │  │   │
//! │  │   │ save_to_file  │  │   (pool.rs)   │  │   (config.rs)    │  │   │
//! │  │   │ load_from_file│  │ ProductRepo   │  │  SHOP_* env vars │  │   │
//! │  │   └───────┬───────┘  └───────┬───────┘  └──────────────────┘  │   │
//! │  └───────────┼──────────────────┼──────────────────────────────────┘   │
//! │              ▼                  ▼                                       │
//! │        products.xml       shop_dev.db (SQLite)                         │
//! │                                                                         │
//! │  Items, rendering and checkout math come from shop-core.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`exchange`] - Save/load the XML document
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Catalog product repository
//! - [`config`] - Environment configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Store error types and codes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_core::{catalog::seed_catalog, XmlWriter};
//! use shop_store::{Database, DbConfig, XmlFileExchange};
//!
//! let db = Database::new(DbConfig::new("shop_dev.db")).await?;
//! db.products().insert_many(&seed_catalog()?).await?;
//!
//! let mut writer = XmlWriter::new();
//! for row in db.products().list().await? {
//!     writer.add_item(row.to_item());
//! }
//! writer.save_to_file("products.xml")?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod exchange;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, StoreConfig};
pub use error::{ErrorCode, StoreError, StoreResult};
pub use exchange::XmlFileExchange;
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use telemetry::init_tracing;
