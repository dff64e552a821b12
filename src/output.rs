//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity is its semantic identity — product id and name, slide
//! position and caption — with file references shown as secondary context
//! via indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Catalog
//!
//! ```text
//! Electronics (5 products)
//! 001 Smartphone X1  $299.99
//!     Source: assets/smartphone-x1.jpg
//! 002 Wireless Earbuds  $49.99
//!     Source: assets/earbud.jpg
//!
//! Fashion (3 products)
//! 004 Fashion Watch  $79.99
//!     Source: assets/fashion-watch.jpg
//! ```
//!
//! ## Render
//!
//! ```text
//! featured (4 products) → dist/featured.html
//! products-all (8 products) → dist/products-all.html
//! hero (3 slides) → dist/hero.html
//! ```
//!
//! ## Rotate
//!
//! ```text
//! t+4000ms  slide 2/3 active: "Quality Products for Every Home"
//! ```
//!
//! All formatting functions are pure (`&data → Vec<String>`); the thin
//! `print_*` wrappers are the only place anything reaches stdout.

use crate::catalog::{CatalogItem, Category};
use std::path::Path;

/// Format the catalog inventory grouped by category, catalog order within
/// each group.
pub fn format_catalog(catalog: &[CatalogItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for category in Category::ALL {
        let products: Vec<&CatalogItem> = catalog
            .iter()
            .filter(|p| p.category == category)
            .collect();
        if products.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({} products)", category.label(), products.len()));
        for product in products {
            lines.push(format!("{:03} {}  {}", product.id, product.name, product.price));
            lines.push(format!("    Source: {}", product.image));
        }
    }
    lines
}

pub fn print_catalog(catalog: &[CatalogItem]) {
    for line in format_catalog(catalog) {
        println!("{line}");
    }
}

/// One fragment written by the render command.
#[derive(Debug)]
pub struct RenderedFragment {
    /// Fragment name (`featured`, `products-electronics`, ...).
    pub name: String,
    /// Short content summary ("4 products", "3 slides").
    pub detail: String,
    /// Path the fragment was written to.
    pub file: std::path::PathBuf,
}

impl RenderedFragment {
    pub fn new(name: &str, detail: String, file: &Path) -> Self {
        Self {
            name: name.to_string(),
            detail,
            file: file.to_path_buf(),
        }
    }
}

/// Format the render summary as `name (detail) → file` lines.
pub fn format_render_summary(fragments: &[RenderedFragment]) -> Vec<String> {
    fragments
        .iter()
        .map(|f| format!("{} ({}) → {}", f.name, f.detail, f.file.display()))
        .collect()
}

pub fn print_render_summary(fragments: &[RenderedFragment]) {
    for line in format_render_summary(fragments) {
        println!("{line}");
    }
}

/// One observed advance of a rotation demo.
#[derive(Debug)]
pub struct TraceEvent {
    /// Virtual time of the tick, milliseconds since start.
    pub at_ms: u64,
    /// Active index after the advance (0-based).
    pub index: usize,
    /// Item count of the rotation.
    pub len: usize,
    /// Label of the newly active item.
    pub label: String,
}

/// Format a rotation trace, one line per tick. Positions are shown 1-based,
/// the way a visitor would count slides.
pub fn format_rotation_trace(events: &[TraceEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| {
            format!(
                "t+{}ms  slide {}/{} active: \"{}\"",
                e.at_ms,
                e.index + 1,
                e.len,
                e.label
            )
        })
        .collect()
}

pub fn print_rotation_trace(events: &[TraceEvent]) {
    for line in format_rotation_trace(events) {
        println!("{line}");
    }
}
