//! # XML File Exchange
//!
//! Saves an [`XmlWriter`]'s document to disk and reads it back.
//!
//! ## Save Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  writer.save_to_file("products.xml")                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  writer.write()               ← render in memory (shop-core)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  .products.xml.tmp            ← full document written here             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename → products.xml        ← target is replaced in one step         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A reader never observes a half-written `products.xml`: it sees either the
//! previous document or the new one.
//!
//! ## Load Path
//! Missing files are reported as [`StoreError::FileNotFound`]. The content is
//! returned verbatim and never parsed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use shop_core::XmlWriter;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Extension Trait
// =============================================================================

/// File persistence for the XML writer.
///
/// ## Example
/// ```rust,ignore
/// use shop_core::{PhysicalProduct, XmlWriter};
/// use shop_store::XmlFileExchange;
///
/// let mut writer = XmlWriter::new();
/// writer.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99)?);
/// writer.save_to_file("products.xml")?;
/// let xml = writer.load_from_file("products.xml")?;
/// ```
pub trait XmlFileExchange {
    /// Renders the current document and replaces the file at `path` with it.
    fn save_to_file(&self, path: impl AsRef<Path>) -> StoreResult<()>;

    /// Returns the content of the file at `path` as text.
    ///
    /// The writer's own item list is left untouched.
    fn load_from_file(&self, path: impl AsRef<Path>) -> StoreResult<String>;
}

impl XmlFileExchange for XmlWriter {
    fn save_to_file(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let document = self.write()?;
        save_document(path.as_ref(), &document)?;
        info!(
            path = %path.as_ref().display(),
            items = self.len(),
            "Saved XML catalog"
        );
        Ok(())
    }

    fn load_from_file(&self, path: impl AsRef<Path>) -> StoreResult<String> {
        load_document(path.as_ref())
    }
}

// =============================================================================
// File Operations
// =============================================================================

/// Writes `content` to `path` through a sibling temp file and a rename.
pub fn save_document(path: &Path, content: &str) -> StoreResult<()> {
    let tmp = temp_path_for(path);
    debug!(path = %path.display(), tmp = %tmp.display(), bytes = content.len(), "Writing document");

    if let Err(e) = fs::write(&tmp, content) {
        return Err(StoreError::Io {
            path: tmp,
            source: e,
        });
    }

    if let Err(e) = fs::rename(&tmp, path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            warn!(tmp = %tmp.display(), error = %cleanup, "Could not remove temp file");
        }
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}

/// Reads the whole file at `path`.
pub fn load_document(path: &Path) -> StoreResult<String> {
    if !path.exists() {
        warn!(path = %path.display(), "XML file does not exist");
        return Err(StoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // The file can still vanish between the check and the read;
    // StoreError::io maps that case to FileNotFound as well.
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded document");
    Ok(content)
}

/// `dir/products.xml` → `dir/.products.xml.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// Unit Tests
// =============================================================================
