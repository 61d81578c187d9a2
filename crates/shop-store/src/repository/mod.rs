//! # Repository Module
//!
//! Database repository implementations for the shop catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Binary / caller                                                       │
//! │       │                                                                 │
//! │       │  db.products().list()                                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert / insert_many                                              │
//! │  ├── get_by_id / list / list_by_type                                   │
//! │  ├── delete                                                            │
//! │  └── count                                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog product storage

pub mod product;
