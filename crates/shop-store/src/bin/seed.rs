//! # Catalog Seeder
//!
//! Populates the catalog database with the starter CDs and books.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by SHOP_DB_PATH (default ./shop_dev.db)
//! cargo run -p shop-store --bin seed
//!
//! # Specify database path
//! cargo run -p shop-store --bin seed -- --db ./data/shop.db
//! ```
//!
//! A database that already holds products is left untouched.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use shop_core::catalog::seed_catalog;
use shop_store::{init_tracing, Database, DbConfig, StoreConfig, StoreResult};
use tracing::error;

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Seed { db_path: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let db_path = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Seed { db_path }) => db_path,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(db_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code().as_str(), "Seed failed: {}", e);
            eprintln!("[{}]: {}", e.code().as_str(), e);
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments after the program name.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut db_path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => match args.get(i + 1) {
                Some(path) if !path.starts_with('-') => {
                    db_path = Some(PathBuf::from(path));
                    i += 1;
                }
                _ => return Err(format!("{} requires a <PATH> value", args[i])),
            },
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unexpected argument '{}'", other)),
        }
        i += 1;
    }

    Ok(Command::Seed { db_path })
}

fn print_usage() {
    println!("Shop Catalog Seeder");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>    Database file path (default: $SHOP_DB_PATH or ./shop_dev.db)");
    println!("  -h, --help         Show this help message");
}

async fn run(db_path: Option<PathBuf>) -> StoreResult<()> {
    let config = StoreConfig::load()?;
    let db_config = match db_path {
        Some(path) => DbConfig::new(path).max_connections(config.max_connections),
        None => config.db_config(),
    };

    println!("🌱 Shop Catalog Seeder");
    println!("======================");
    println!("Database: {}", db_config.database_path.display());
    println!();

    let db = Database::new(db_config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let inserted = db.products().insert_many(&seed_catalog()?).await?;

    println!();
    println!("✓ Inserted {} products in {:?}", inserted, start.elapsed());

    for row in db.products().list().await? {
        println!("  {:<4} {:<28} {}", row.product_type.as_str(), row.title, row.price);
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
