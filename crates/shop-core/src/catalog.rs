//! # Catalog Rows
//!
//! The persisted shape of a physical product and the built-in seed catalog.
//!
//! ## Row vs Item
//! ```text
//! ┌──────────────────────────────┐          ┌──────────────────────────┐
//! │ CatalogProduct (stored row)  │ to_item  │ PhysicalProduct (priced) │
//! │  id, created_at              │ ───────► │  title                   │
//! │  title                       │          │  producer first/last     │
//! │  producer_name / _surname    │          │  price                   │
//! │  price, product_type         │          └──────────────────────────┘
//! └──────────────────────────────┘
//! ```
//!
//! Row identity (`id`) lives only here; items carry nothing but their fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Price;
use crate::types::PhysicalProduct;
use crate::validation::{validate_producer_name, validate_title};

// =============================================================================
// Product Type
// =============================================================================

/// What kind of physical product a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "CD")]
    Cd,
    Book,
}

impl ProductType {
    /// Stored/serialized name: `"CD"` or `"Book"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductType::Cd => "CD",
            ProductType::Book => "Book",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "CD" => Ok(ProductType::Cd),
            "Book" => Ok(ProductType::Book),
            other => Err(CoreError::UnknownProductType(other.to_string())),
        }
    }
}

// =============================================================================
// Catalog Product
// =============================================================================

/// A product row as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Album or book title.
    pub title: String,

    /// Producer first name (artist, author, band).
    pub producer_name: String,

    /// Producer surname. Empty for single-name producers.
    pub producer_surname: String,

    /// Unit price.
    pub price: Price,

    /// CD or Book.
    pub product_type: ProductType,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// Creates a new row with a fresh id, validating every field.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::catalog::{CatalogProduct, ProductType};
    ///
    /// let row = CatalogProduct::new("Rumours", "Fleetwood", "Mac", 9.99, ProductType::Cd).unwrap();
    /// assert_eq!(row.to_item().producer_full_name(), "Fleetwood Mac");
    /// ```
    pub fn new(
        title: impl Into<String>,
        producer_name: impl Into<String>,
        producer_surname: impl Into<String>,
        price: f64,
        product_type: ProductType,
    ) -> CoreResult<Self> {
        let title = title.into();
        let producer_name = producer_name.into();
        let producer_surname = producer_surname.into();

        validate_title(&title)?;
        validate_producer_name("producer_name", &producer_name)?;
        validate_producer_name("producer_surname", &producer_surname)?;

        Ok(CatalogProduct {
            id: generate_product_id(),
            title,
            producer_name,
            producer_surname,
            price: Price::new(price)?,
            product_type,
            created_at: Utc::now(),
        })
    }

    /// Converts the row into a priceable item.
    pub fn to_item(&self) -> PhysicalProduct {
        PhysicalProduct::from_parts(
            self.title.clone(),
            self.producer_name.clone(),
            self.producer_surname.clone(),
            self.price,
        )
    }
}

/// Generates a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Seed Catalog
// =============================================================================

/// `(title, producer_name, producer_surname, price, type)` for the starter catalog.
const SEED_ROWS: &[(&str, &str, &str, f64, ProductType)] = &[
    ("Thriller", "Michael", "Jackson", 12.99, ProductType::Cd),
    ("Back in Black", "AC/DC", "", 10.99, ProductType::Cd),
    ("The Dark Side of the Moon", "Pink", "Floyd", 15.50, ProductType::Cd),
    ("Rumours", "Fleetwood", "Mac", 9.99, ProductType::Cd),
    ("Abbey Road", "The", "Beatles", 14.99, ProductType::Cd),
    ("1984", "George", "Orwell", 7.99, ProductType::Book),
    ("To Kill a Mockingbird", "Harper", "Lee", 8.49, ProductType::Book),
    ("The Great Gatsby", "F. Scott", "Fitzgerald", 10.99, ProductType::Book),
    ("Moby Dick", "Herman", "Melville", 11.50, ProductType::Book),
    ("Pride and Prejudice", "Jane", "Austen", 6.99, ProductType::Book),
];

/// The starter catalog: five CDs then five books.
pub fn seed_catalog() -> CoreResult<Vec<CatalogProduct>> {
    SEED_ROWS
        .iter()
        .map(|&(title, name, surname, price, product_type)| {
            CatalogProduct::new(title, name, surname, price, product_type)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chargeable;

    #[test]
    fn test_product_type_names() {
        assert_eq!(ProductType::Cd.as_str(), "CD");
        assert_eq!(ProductType::Book.to_string(), "Book");
        assert_eq!("CD".parse::<ProductType>().unwrap(), ProductType::Cd);
        assert!(matches!(
            "Vinyl".parse::<ProductType>(),
            Err(CoreError::UnknownProductType(_))
        ));
    }

    #[test]
    fn test_product_type_serde() {
        assert_eq!(serde_json::to_string(&ProductType::Cd).unwrap(), "\"CD\"");
        assert_eq!(
            serde_json::from_str::<ProductType>("\"Book\"").unwrap(),
            ProductType::Book
        );
    }

    #[test]
    fn test_new_validates_fields() {
        assert!(CatalogProduct::new("", "A", "B", 1.0, ProductType::Cd).is_err());
        assert!(matches!(
            CatalogProduct::new("Title", "A", "B", -1.0, ProductType::Cd),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(CatalogProduct::new("Title", "AC/DC", "", 1.0, ProductType::Cd).is_ok());
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = CatalogProduct::new("A", "x", "y", 1.0, ProductType::Book).unwrap();
        let b = CatalogProduct::new("A", "x", "y", 1.0, ProductType::Book).unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_to_item() {
        let row = CatalogProduct::new("1984", "George", "Orwell", 7.99, ProductType::Book).unwrap();
        let item = row.to_item();
        assert_eq!(item.title(), "1984");
        assert_eq!(item.producer_full_name(), "George Orwell");
        assert_eq!(item.price(), 7.99);
    }

    #[test]
    fn test_seed_catalog() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].title, "Thriller");
        assert_eq!(catalog[9].title, "Pride and Prejudice");

        let cds = catalog
            .iter()
            .filter(|row| row.product_type == ProductType::Cd)
            .count();
        assert_eq!(cds, 5);

        assert_eq!(catalog[1].producer_surname, "");
    }
}
