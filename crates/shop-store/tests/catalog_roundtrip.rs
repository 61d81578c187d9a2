//! Seeded database → writers → XML file on disk.

use shop_core::catalog::seed_catalog;
use shop_core::{Checkout, TaxCalculator, TaxRate, XmlWriter};
use shop_store::{Database, DbConfig, ErrorCode, XmlFileExchange};
use tempfile::TempDir;

#[tokio::test]
async fn seeded_catalog_saves_as_xml() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("shop.db")))
        .await
        .unwrap();
    db.products()
        .insert_many(&seed_catalog().unwrap())
        .await
        .unwrap();

    let mut writer = XmlWriter::new();
    for row in db.products().list().await.unwrap() {
        writer.add_item(row.to_item());
    }
    db.close().await;

    let xml_path = dir.path().join("products.xml");
    writer.save_to_file(&xml_path).unwrap();

    let loaded = writer.load_from_file(&xml_path).unwrap();
    assert_eq!(loaded.matches("<product>").count(), 10);
    assert!(loaded.contains("<title>The Dark Side of the Moon</title>"));
    assert!(loaded.contains("<price>15.50</price>"));
    assert_eq!(loaded, writer.write().unwrap());
}

#[tokio::test]
async fn seeded_catalog_checkout() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    db.products()
        .insert_many(&seed_catalog().unwrap())
        .await
        .unwrap();

    let mut checkout = Checkout::new(TaxCalculator::new(TaxRate::from_bps(1000).unwrap()));
    for row in db.products().list().await.unwrap() {
        checkout.add_item(row.to_item());
    }

    // 12.99 + 10.99 + 15.50 + 9.99 + 14.99 + 7.99 + 8.49 + 10.99 + 11.50 + 6.99
    assert!((checkout.subtotal() - 110.42).abs() < 1e-9);
    assert!((checkout.grand_total() - 121.462).abs() < 1e-9);
}

#[test]
fn missing_file_reports_code() {
    let dir = TempDir::new().unwrap();
    let err = XmlWriter::new()
        .load_from_file(dir.path().join("missing.xml"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::FileNotFound);
    assert!(err.to_string().ends_with("missing.xml' does not exist."));
}
