//! # Writer Module
//!
//! Accumulates chargeable items and renders them in one output format.
//!
//! ## Writer Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ProductWriter<F: OutputFormat>                       │
//! │                                                                         │
//! │  add_item(cd)      ──► items: [cd]                                     │
//! │  add_item(hosting) ──► items: [cd, hosting]                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write() ──► F::render(&items)                                         │
//! │       │                                                                 │
//! │       ├── TextFormat → "Thriller - Produced by: ... \n..."             │
//! │       └── XmlFormat  → "<?xml ...?>\n<products>...</products>\n"       │
//! │                                                                         │
//! │  Items are append-only. write() never mutates, so it can be called     │
//! │  any number of times with the same result.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Formats
//!
//! - [`TextFormat`] - One display line per item
//! - [`XmlFormat`] - Pretty-printed `<products>` document

pub mod text;
pub mod xml;

use std::marker::PhantomData;

use crate::error::CoreResult;
use crate::types::ChargeableItem;

pub use text::TextFormat;
pub use xml::XmlFormat;

/// Writer that renders plain text lines.
pub type TextWriter = ProductWriter<TextFormat>;

/// Writer that renders an XML document.
pub type XmlWriter = ProductWriter<XmlFormat>;

// =============================================================================
// Output Format
// =============================================================================

/// A rendering of an ordered list of items.
///
/// Implementations `match` on every [`ChargeableItem`] variant, which keeps
/// the set of renderable kinds checked by the compiler.
pub trait OutputFormat {
    /// Renders all items in order.
    fn render(items: &[ChargeableItem]) -> CoreResult<String>;
}

// =============================================================================
// Product Writer
// =============================================================================

/// An append-only list of items bound to an output format.
///
/// ## Example
/// ```rust
/// use shop_core::{PhysicalProduct, Service, TextWriter};
///
/// let mut writer = TextWriter::new();
/// writer.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap());
/// writer.add_item(Service::new("Web Hosting", 50.0).unwrap());
///
/// assert_eq!(
///     writer.write().unwrap(),
///     "Thriller - Produced by: Michael Jackson (Price: $12.99)\n\
///      Web Hosting - Service Cost: $50.00\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProductWriter<F> {
    items: Vec<ChargeableItem>,
    format: PhantomData<F>,
}

impl<F: OutputFormat> ProductWriter<F> {
    /// Creates an empty writer.
    pub fn new() -> Self {
        ProductWriter {
            items: Vec::new(),
            format: PhantomData,
        }
    }

    /// Appends an item. Duplicates are kept; there is no cap.
    pub fn add_item(&mut self, item: impl Into<ChargeableItem>) {
        self.items.push(item.into());
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ChargeableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders every accumulated item in insertion order.
    pub fn write(&self) -> CoreResult<String> {
        F::render(&self.items)
    }
}

impl<F: OutputFormat> Default for ProductWriter<F> {
    fn default() -> Self {
        ProductWriter::new()
    }
}

impl<F: OutputFormat> Extend<ChargeableItem> for ProductWriter<F> {
    fn extend<I: IntoIterator<Item = ChargeableItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
