//! # Catalog Demo
//!
//! Walks through the shop end to end.
//!
//! ## Usage
//! ```bash
//! # Writers, XML save/load, missing-file handling, checkout summary
//! cargo run -p shop-store --bin catalog
//!
//! # Render the stored catalog (run `seed` first) as text and XML
//! cargo run -p shop-store --bin catalog -- list
//!
//! # Print a users/products lookup response
//! cargo run -p shop-store --bin catalog -- query users
//! ```
//!
//! Paths and the tax rate come from `SHOP_*` environment variables.

use std::env;
use std::process::ExitCode;

use shop_core::query::respond;
use shop_core::{
    Checkout, PhysicalProduct, Service, TaxCalculator, TextWriter, UtilityService, XmlWriter,
};
use shop_store::{init_tracing, Database, StoreConfig, StoreError, StoreResult, XmlFileExchange};
use tracing::{error, info};

/// File the demo tries to load to show the missing-file path.
const MISSING_FILE: &str = "nonexistent.xml";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None | Some("demo") => demo(),
        Some("list") => list().await,
        Some("query") => {
            query(args.get(1).map(String::as_str));
            Ok(())
        }
        Some("--help") | Some("-h") => {
            print_help();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code().as_str(), "{}", e);
            eprintln!("[{}]: {}", e.code().as_str(), e);
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Shop Catalog Demo");
    println!();
    println!("Usage: catalog [COMMAND]");
    println!();
    println!("Commands:");
    println!("  demo            Writers, XML file exchange and checkout (default)");
    println!("  list            Render the stored catalog as text and XML");
    println!("  query <TYPE>    Print the lookup response for 'users' or 'products'");
}

// =============================================================================
// Commands
// =============================================================================

fn demo() -> StoreResult<()> {
    let config = StoreConfig::load()?;
    info!(xml_path = %config.xml_path.display(), tax_bps = config.tax_rate_bps, "Running demo");

    let thriller = PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99)?;
    let hosting = Service::new("Web Hosting", 50.0)?;
    let electricity = UtilityService::new("Electricity", 100.0)?;

    // XML: save, then try a file that was never written
    let mut xml_writer = XmlWriter::new();
    xml_writer.add_item(thriller.clone());
    xml_writer.save_to_file(&config.xml_path)?;
    println!("Saved {}", config.xml_path.display());

    match xml_writer.load_from_file(MISSING_FILE) {
        Ok(content) => println!("{}", content),
        Err(e @ StoreError::FileNotFound { .. }) => {
            println!("[{}]: {}", e.code().as_str(), e);
        }
        Err(e) => return Err(e),
    }
    println!();

    // Text
    let mut text_writer = TextWriter::new();
    text_writer.add_item(thriller.clone());
    text_writer.add_item(hosting.clone());
    text_writer.add_item(electricity.clone());
    print!("{}", text_writer.write()?);
    println!();

    // Checkout
    let mut checkout = Checkout::new(TaxCalculator::new(config.tax_rate()?));
    checkout.add_item(thriller);
    checkout.add_item(hosting);
    checkout.add_item(electricity);
    println!("{}", checkout.summary());

    Ok(())
}

async fn list() -> StoreResult<()> {
    let config = StoreConfig::load()?;
    let db = Database::new(config.db_config()).await?;

    let rows = db.products().list().await?;
    db.close().await;

    if rows.is_empty() {
        println!("Catalog is empty. Run the `seed` binary first.");
        return Ok(());
    }

    let mut text_writer = TextWriter::new();
    let mut xml_writer = XmlWriter::new();
    for row in &rows {
        let item = row.to_item();
        text_writer.add_item(item.clone());
        xml_writer.add_item(item);
    }

    print!("{}", text_writer.write()?);
    xml_writer.save_to_file(&config.xml_path)?;
    println!();
    println!("Saved {} products to {}", rows.len(), config.xml_path.display());

    Ok(())
}

fn query(kind: Option<&str>) {
    let response = respond(kind);
    match response.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize response: {}", e),
    }
}
