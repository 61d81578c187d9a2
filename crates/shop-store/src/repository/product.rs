//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Row Mapping
//! ```text
//! ┌──────────────────────┐   TryFrom    ┌──────────────────────────┐
//! │ ProductRecord (SQL)  │ ───────────► │ CatalogProduct (domain)  │
//! │  price: f64          │  Price::new  │  price: Price            │
//! │  product_type: TEXT  │  FromStr     │  product_type: enum      │
//! └──────────────────────┘              └──────────────────────────┘
//! ```
//!
//! A row that breaks a domain rule (hand-edited database) surfaces as a
//! validation error instead of a silently wrong price.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite, SqlitePool};
use tracing::debug;

use shop_core::{CatalogProduct, CoreError, Price, ProductType};

use crate::error::{StoreError, StoreResult};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        title,
        producer_name,
        producer_surname,
        price,
        product_type,
        created_at
    FROM products
"#;

/// Raw `products` row.
#[derive(Debug, FromRow)]
struct ProductRecord {
    id: String,
    title: String,
    producer_name: String,
    producer_surname: String,
    price: f64,
    product_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRecord> for CatalogProduct {
    type Error = CoreError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(CatalogProduct {
            id: record.id,
            title: record.title,
            producer_name: record.producer_name,
            producer_surname: record.producer_surname,
            price: Price::new(record.price)?,
            product_type: record.product_type.parse()?,
            created_at: record.created_at,
        })
    }
}

fn into_products(records: Vec<ProductRecord>) -> StoreResult<Vec<CatalogProduct>> {
    records
        .into_iter()
        .map(|record| CatalogProduct::try_from(record).map_err(StoreError::from))
        .collect()
}

/// Builds the INSERT for one row; runs on a pool or inside a transaction.
fn insert_query(product: &CatalogProduct) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
    sqlx::query(
        r#"
        INSERT INTO products (
            id, title, producer_name, producer_surname,
            price, product_type, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(product.id.as_str())
    .bind(product.title.as_str())
    .bind(product.producer_name.as_str())
    .bind(product.producer_surname.as_str())
    .bind(product.price.amount())
    .bind(product.product_type.as_str())
    .bind(product.created_at)
}

/// Repository for catalog product operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// repo.insert_many(&shop_core::catalog::seed_catalog()?).await?;
/// let rows = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row stored
    /// * `Err(StoreError::UniqueViolation)` - A row with this id already exists
    pub async fn insert(&self, product: &CatalogProduct) -> StoreResult<()> {
        debug!(id = %product.id, title = %product.title, "Inserting product");

        insert_query(product).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts several products in one transaction.
    ///
    /// Either every row is stored or none is.
    pub async fn insert_many(&self, products: &[CatalogProduct]) -> StoreResult<usize> {
        debug!(count = products.len(), "Inserting products");

        let mut tx = self.pool.begin().await?;
        for product in products {
            insert_query(product).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        Ok(products.len())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(CatalogProduct))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<CatalogProduct>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let record = sqlx::query_as::<_, ProductRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match record {
            Some(record) => Ok(Some(CatalogProduct::try_from(record)?)),
            None => Ok(None),
        }
    }

    /// Lists every product in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<CatalogProduct>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY rowid");
        let records = sqlx::query_as::<_, ProductRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = records.len(), "Listed products");
        into_products(records)
    }

    /// Lists products of one type in insertion order.
    pub async fn list_by_type(&self, product_type: ProductType) -> StoreResult<Vec<CatalogProduct>> {
        let sql = format!("{SELECT_COLUMNS} WHERE product_type = ?1 ORDER BY rowid");
        let records = sqlx::query_as::<_, ProductRecord>(&sql)
            .bind(product_type.as_str())
            .fetch_all(&self.pool)
            .await?;

        into_products(records)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(StoreError::NotFound)` - No row with this id
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::pool::{Database, DbConfig};
    use shop_core::catalog::seed_catalog;
    use shop_core::Chargeable;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = test_db().await;
        let repo = db.products();

        let row = CatalogProduct::new("Thriller", "Michael", "Jackson", 12.99, ProductType::Cd)
            .unwrap();
        repo.insert(&row).await.unwrap();

        let found = repo.get_by_id(&row.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Thriller");
        assert_eq!(found.producer_surname, "Jackson");
        assert_eq!(found.price.amount(), 12.99);
        assert_eq!(found.product_type, ProductType::Cd);
        assert_eq!(found.created_at, row.created_at);

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_catalog_listed_in_insertion_order() {
        let db = test_db().await;
        let repo = db.products();

        let seed = seed_catalog().unwrap();
        assert_eq!(repo.insert_many(&seed).await.unwrap(), 10);
        assert_eq!(repo.count().await.unwrap(), 10);

        let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.title).collect();
        let expected: Vec<String> = seed.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, expected);

        let books = repo.list_by_type(ProductType::Book).await.unwrap();
        assert_eq!(books.len(), 5);
        assert_eq!(books[0].title, "1984");
    }

    #[tokio::test]
    async fn test_listed_rows_price_as_items() {
        let db = test_db().await;
        let repo = db.products();
        repo.insert_many(&seed_catalog().unwrap()).await.unwrap();

        let rows = repo.list().await.unwrap();
        let back_in_black = rows.iter().find(|p| p.title == "Back in Black").unwrap();
        let item = back_in_black.to_item();
        assert_eq!(item.producer_full_name(), "AC/DC ");
        assert_eq!(item.price(), 10.99);
    }

    #[tokio::test]
    async fn test_duplicate_id_rolls_back_batch() {
        let db = test_db().await;
        let repo = db.products();

        let first = CatalogProduct::new("Rumours", "Fleetwood", "Mac", 9.99, ProductType::Cd)
            .unwrap();
        let mut duplicate = CatalogProduct::new("Abbey Road", "The", "Beatles", 14.99, ProductType::Cd)
            .unwrap();
        duplicate.id = first.id.clone();

        let err = repo.insert_many(&[first, duplicate]).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_rejected_by_schema() {
        let db = test_db().await;

        let err = sqlx::query(
            "INSERT INTO products (id, title, producer_name, producer_surname, price, product_type, created_at)
             VALUES ('x', 'Bad', 'A', 'B', -1.0, 'CD', '2024-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await
        .map_err(StoreError::from)
        .unwrap_err();

        assert!(matches!(err, StoreError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.products();

        let row = CatalogProduct::new("Moby Dick", "Herman", "Melville", 11.5, ProductType::Book)
            .unwrap();
        repo.insert(&row).await.unwrap();

        repo.delete(&row.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);

        let err = repo.delete(&row.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
