//! Product catalog loading and validation.
//!
//! The catalog is the static list of sellable products. It is loaded once at
//! startup from a `catalog.toml` file and shared read-only by every view on
//! the page — there is no mutation path after load.
//!
//! ## Catalog File Format
//!
//! ```toml
//! [[products]]
//! id = 1
//! name = "Smartphone X1"
//! price = "$299.99"
//! description = "Latest smartphone with advanced features."
//! image = "assets/smartphone-x1.jpg"
//! category = "electronics"
//! ```
//!
//! ## Validation
//!
//! The loader enforces these rules:
//! - At least one product (an empty catalog is a configuration mistake,
//!   not a valid storefront)
//! - Product ids are unique
//! - Every product's category is one of the known [`Category`] tags
//! - Unknown keys are rejected to catch typos early
//!
//! Catalog order is load order: views and the featured projection preserve
//! the sequence exactly as written in the file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate product id {0} in {1}")]
    DuplicateId(u32, PathBuf),
    #[error("Catalog contains no products: {0}")]
    Empty(PathBuf),
}

/// Product category. A closed set — the filter bar and the catalog file both
/// speak these tags, and the loader rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
}

impl Category {
    /// All categories, in filter-bar display order.
    pub const ALL: [Category; 2] = [Category::Electronics, Category::Fashion];

    /// Stable lowercase tag used in filter requests and file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
        }
    }

    /// Display label for headings ("Electronics", "Fashion").
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One sellable product. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogItem {
    /// Unique, stable identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Pre-formatted price string (e.g. `"$299.99"`). The engine never does
    /// arithmetic on prices; formatting is an upstream editorial decision.
    pub price: String,
    /// Short description shown on the product card.
    pub description: String,
    /// Image reference (path or URL), passed through to the renderer opaquely.
    pub image: String,
    /// Category tag.
    pub category: Category,
}

/// Top-level structure of `catalog.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    products: Vec<CatalogItem>,
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)?;

    if file.products.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }

    let mut seen = BTreeSet::new();
    for product in &file.products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id, path.to_path_buf()));
        }
    }

    Ok(file.products)
}

/// Parse the embedded stock catalog.
///
/// The stock catalog is known-valid TOML, so this cannot fail at runtime;
/// the unreachable branch is covered by tests on [`stock_catalog_toml`].
pub fn stock_catalog() -> Vec<CatalogItem> {
    let file: CatalogFile =
        toml::from_str(stock_catalog_toml()).expect("embedded stock catalog is valid TOML");
    file.products
}

/// The stock catalog as a documented TOML document.
///
/// Printed by `shopfront gen-catalog` as a starting point for a real catalog
/// file. Eight sample products across both categories.
pub fn stock_catalog_toml() -> &'static str {
    r##"# Shopfront Catalog
# =================
# Each [[products]] table is one sellable product.
#
#   id          unique number, stable across edits
#   name        display name
#   price       pre-formatted price string, shown verbatim
#   description short text for the product card
#   image       image path or URL, passed to the renderer as-is
#   category    one of: electronics, fashion
#
# Products appear on the site in file order.

[[products]]
id = 1
name = "Smartphone X1"
price = "$299.99"
description = "Latest smartphone with advanced features and long battery life."
image = "assets/smartphone-x1.jpg"
category = "electronics"

[[products]]
id = 2
name = "Wireless Earbuds"
price = "$49.99"
description = "High-quality wireless earbuds with noise cancellation."
image = "assets/earbud.jpg"
category = "electronics"

[[products]]
id = 3
name = "Laptop Pro"
price = "$899.99"
description = "Powerful laptop for work and entertainment."
image = "assets/laptop-pro.jpg"
category = "electronics"

[[products]]
id = 4
name = "Fashion Watch"
price = "$79.99"
description = "Elegant watch with modern design and durable materials."
image = "assets/fashion-watch.jpg"
category = "fashion"

[[products]]
id = 5
name = "Tablet Mini"
price = "$199.99"
description = "Compact tablet perfect for reading and browsing."
image = "assets/tablet-mini.jpg"
category = "electronics"

[[products]]
id = 6
name = "Designer Bag"
price = "$129.99"
description = "Stylish and functional bag for everyday use."
image = "assets/designer-bag.jpg"
category = "fashion"

[[products]]
id = 7
name = "Bluetooth Speaker"
price = "$59.99"
description = "Portable speaker with excellent sound quality."
image = "assets/bluetooth-speaker.jpg"
category = "electronics"

[[products]]
id = 8
name = "Running Shoes"
price = "$89.99"
description = "Comfortable and durable shoes for active lifestyle."
image = "assets/running-shoes.jpg"
category = "fashion"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn stock_catalog_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_catalog_toml()).expect("stock catalog must be valid TOML");
    }

    #[test]
    fn stock_catalog_has_eight_products() {
        let catalog = stock_catalog();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn stock_catalog_ids_are_sequential() {
        let ids: Vec<u32> = stock_catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn stock_catalog_category_split() {
        let catalog = stock_catalog();
        let electronics: Vec<u32> = catalog
            .iter()
            .filter(|p| p.category == Category::Electronics)
            .map(|p| p.id)
            .collect();
        let fashion: Vec<u32> = catalog
            .iter()
            .filter(|p| p.category == Category::Fashion)
            .map(|p| p.id)
            .collect();
        assert_eq!(electronics, vec![1, 2, 3, 5, 7]);
        assert_eq!(fashion, vec![4, 6, 8]);
    }

    #[test]
    fn load_catalog_roundtrip() {
        let file = write_catalog(stock_catalog_toml());
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "Smartphone X1");
        assert_eq!(catalog[0].price, "$299.99");
        assert_eq!(catalog[7].category, Category::Fashion);
    }

    #[test]
    fn load_catalog_rejects_duplicate_ids() {
        let file = write_catalog(
            r#"
[[products]]
id = 1
name = "A"
price = "$1"
description = "a"
image = "a.jpg"
category = "fashion"

[[products]]
id = 1
name = "B"
price = "$2"
description = "b"
image = "b.jpg"
category = "fashion"
"#,
        );
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::DuplicateId(1, _))));
    }

    #[test]
    fn load_catalog_rejects_empty() {
        let file = write_catalog("products = []\n");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }

    #[test]
    fn load_catalog_rejects_unknown_category() {
        let file = write_catalog(
            r#"
[[products]]
id = 1
name = "A"
price = "$1"
description = "a"
image = "a.jpg"
category = "groceries"
"#,
        );
        assert!(matches!(load_catalog(file.path()), Err(CatalogError::Toml(_))));
    }

    #[test]
    fn load_catalog_rejects_unknown_keys() {
        let file = write_catalog(
            r#"
[[products]]
id = 1
name = "A"
price = "$1"
description = "a"
image = "a.jpg"
category = "fashion"
discount = "10%"
"#,
        );
        assert!(matches!(load_catalog(file.path()), Err(CatalogError::Toml(_))));
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() {
        let result = load_catalog(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn category_tags_are_stable() {
        assert_eq!(Category::Electronics.tag(), "electronics");
        assert_eq!(Category::Fashion.tag(), "fashion");
        assert_eq!(Category::Electronics.to_string(), "electronics");
    }
}
