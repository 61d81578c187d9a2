//! # Query Responses
//!
//! Answers a `type` lookup with a JSON envelope, for the storefront's
//! read-only listing endpoint.
//!
//! ```text
//! type=users     → {"status":"success","data":[{"id":1,"name":"John Doe",...}]}
//! type=products  → {"status":"success","data":[{"id":101,"name":"Laptop","price":1200}]}
//! type=orders    → {"status":"error","message":"Invalid type. Use 'users' or 'products'."}
//! (missing)      → {"status":"error","message":"No type provided. Use 'type=users' or 'type=products'."}
//! ```
//!
//! Transport is the caller's business; this module only builds the body.

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
    Error,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// A listed product with a whole-unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedProduct {
    pub id: u32,
    pub name: String,
    pub price: u32,
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryData {
    Users(Vec<User>),
    Products(Vec<ListedProduct>),
}

/// `{status, data?, message?}`. Success carries `data`, error carries `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status: QueryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<QueryData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryResponse {
    pub fn success(data: QueryData) -> Self {
        QueryResponse {
            status: QueryStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        QueryResponse {
            status: QueryStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    /// Serializes the response body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Builds the response for a `type` parameter.
///
/// ## Example
/// ```rust
/// use shop_core::query::{respond, QueryStatus};
///
/// assert_eq!(respond(Some("users")).status, QueryStatus::Success);
/// assert_eq!(respond(None).status, QueryStatus::Error);
/// ```
pub fn respond(kind: Option<&str>) -> QueryResponse {
    match kind {
        Some("users") => QueryResponse::success(QueryData::Users(users())),
        Some("products") => QueryResponse::success(QueryData::Products(listed_products())),
        Some(_) => QueryResponse::error("Invalid type. Use 'users' or 'products'."),
        None => QueryResponse::error("No type provided. Use 'type=users' or 'type=products'."),
    }
}

fn users() -> Vec<User> {
    [
        (1, "John Doe", "john@example.com"),
        (2, "Jane Smith", "jane@example.com"),
        (3, "Alice Johnson", "alice@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}

fn listed_products() -> Vec<ListedProduct> {
    [(101, "Laptop", 1200), (102, "Smartphone", 800), (103, "Tablet", 450)]
        .into_iter()
        .map(|(id, name, price)| ListedProduct {
            id,
            name: name.to_string(),
            price,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
