//! # Domain Types
//!
//! The chargeable items sold by the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ChargeableItem (closed set)                          │
//! │                                                                         │
//! │  ┌──────────────────────┐ ┌──────────────────┐ ┌──────────────────┐    │
//! │  │   PhysicalProduct    │ │     Service      │ │  UtilityService  │    │
//! │  │  ──────────────────  │ │  ──────────────  │ │  ──────────────  │    │
//! │  │  title               │ │  service_name    │ │  utility_name    │    │
//! │  │  producer first/last │ │  service_cost    │ │  utility_cost    │    │
//! │  │  price               │ │                  │ │                  │    │
//! │  └──────────────────────┘ └──────────────────┘ └──────────────────┘    │
//! │                                                                         │
//! │  All three implement `Chargeable` → price()                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Renderers `match` on [`ChargeableItem`], so a fourth variant is a compile
//! error in every writer until it gets a rendering, never a silently skipped
//! line.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Price;

// =============================================================================
// Chargeable
// =============================================================================

/// Anything that has a price.
pub trait Chargeable {
    /// Returns the stored cost.
    fn price(&self) -> f64;

    /// Same as [`Chargeable::price`]. Kept for callers that want the
    /// "as a number" spelling.
    fn price_as_number(&self) -> f64 {
        self.price()
    }
}

// =============================================================================
// Physical Product
// =============================================================================

/// A produced good: a CD, a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProduct {
    title: String,
    producer_first_name: String,
    producer_last_name: String,
    price: Price,
}

impl PhysicalProduct {
    /// Creates a product, validating the price.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Chargeable, PhysicalProduct};
    ///
    /// let cd = PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap();
    /// assert_eq!(cd.producer_full_name(), "Michael Jackson");
    /// assert_eq!(cd.price(), 12.99);
    /// ```
    pub fn new(
        title: impl Into<String>,
        producer_first_name: impl Into<String>,
        producer_last_name: impl Into<String>,
        price: f64,
    ) -> CoreResult<Self> {
        Ok(PhysicalProduct {
            title: title.into(),
            producer_first_name: producer_first_name.into(),
            producer_last_name: producer_last_name.into(),
            price: Price::new(price)?,
        })
    }

    /// Builds a product from an already validated price.
    pub(crate) fn from_parts(
        title: String,
        producer_first_name: String,
        producer_last_name: String,
        price: Price,
    ) -> Self {
        PhysicalProduct {
            title,
            producer_first_name,
            producer_last_name,
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn producer_first_name(&self) -> &str {
        &self.producer_first_name
    }

    pub fn producer_last_name(&self) -> &str {
        &self.producer_last_name
    }

    /// First and last name joined by one space.
    ///
    /// The space is kept when the last name is empty (`"AC/DC "`).
    pub fn producer_full_name(&self) -> String {
        format!("{} {}", self.producer_first_name, self.producer_last_name)
    }

    pub fn unit_price(&self) -> Price {
        self.price
    }
}

impl Chargeable for PhysicalProduct {
    fn price(&self) -> f64 {
        self.price.amount()
    }
}

// =============================================================================
// Service
// =============================================================================

/// A billed service, e.g. web hosting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    service_name: String,
    service_cost: Price,
}

impl Service {
    /// Creates a service, validating the cost.
    pub fn new(service_name: impl Into<String>, service_cost: f64) -> CoreResult<Self> {
        Ok(Service {
            service_name: service_name.into(),
            service_cost: Price::new(service_cost)?,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_cost(&self) -> Price {
        self.service_cost
    }
}

impl Chargeable for Service {
    fn price(&self) -> f64 {
        self.service_cost.amount()
    }
}

// =============================================================================
// Utility Service
// =============================================================================

/// A metered utility, e.g. electricity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityService {
    utility_name: String,
    utility_cost: Price,
}

impl UtilityService {
    /// Creates a utility service, validating the cost.
    pub fn new(utility_name: impl Into<String>, utility_cost: f64) -> CoreResult<Self> {
        Ok(UtilityService {
            utility_name: utility_name.into(),
            utility_cost: Price::new(utility_cost)?,
        })
    }

    pub fn utility_name(&self) -> &str {
        &self.utility_name
    }

    pub fn utility_cost(&self) -> Price {
        self.utility_cost
    }
}

impl Chargeable for UtilityService {
    fn price(&self) -> f64 {
        self.utility_cost.amount()
    }
}

// =============================================================================
// Chargeable Item
// =============================================================================

/// Every kind of item the shop can charge for.
///
/// ## Serialization
/// ```json
/// { "kind": "service", "service_name": "Web Hosting", "service_cost": 50.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChargeableItem {
    PhysicalProduct(PhysicalProduct),
    Service(Service),
    UtilityService(UtilityService),
}

impl Chargeable for ChargeableItem {
    fn price(&self) -> f64 {
        match self {
            ChargeableItem::PhysicalProduct(product) => product.price(),
            ChargeableItem::Service(service) => service.price(),
            ChargeableItem::UtilityService(utility) => utility.price(),
        }
    }
}

impl From<PhysicalProduct> for ChargeableItem {
    fn from(product: PhysicalProduct) -> Self {
        ChargeableItem::PhysicalProduct(product)
    }
}

impl From<Service> for ChargeableItem {
    fn from(service: Service) -> Self {
        ChargeableItem::Service(service)
    }
}

impl From<UtilityService> for ChargeableItem {
    fn from(utility: UtilityService) -> Self {
        ChargeableItem::UtilityService(utility)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
