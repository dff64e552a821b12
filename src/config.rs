//! Site configuration module.
//!
//! Handles loading and validating `site.toml`. Configuration is sparse: every
//! section and key is optional, stock defaults fill the gaps, and a missing
//! file means an entirely stock site — the storefront works with zero
//! configuration.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [slideshow]
//! interval_ms = 4000        # Hero slide duration
//! slides = ["..."]          # Hero slide captions, in display order
//!
//! [testimonials]
//! interval_ms = 6000        # Quote rotation duration
//!
//! [[testimonials.quotes]]
//! quote = "..."
//! author = "..."
//!
//! [featured]
//! count = 4                 # Products in the homepage featured strip
//!
//! [contact]
//! recipient = "info@junubmart.example"   # mailto fallback recipient
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Hero slideshow content and timing.
    pub slideshow: SlideshowConfig,
    /// Testimonial carousel content and timing.
    pub testimonials: TestimonialsConfig,
    /// Featured-products strip settings.
    pub featured: FeaturedConfig,
    /// Contact form delivery settings.
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Empty slide or quote lists pass — the matching page feature degrades
    /// to nothing instead of failing the whole site.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slideshow.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "slideshow.interval_ms must be non-zero".into(),
            ));
        }
        if self.testimonials.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "testimonials.interval_ms must be non-zero".into(),
            ));
        }
        if self.featured.count == 0 {
            return Err(ConfigError::Validation(
                "featured.count must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Hero slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Milliseconds each slide stays active.
    pub interval_ms: u64,
    /// Slide captions, in display order.
    pub slides: Vec<String>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            slides: vec![
                "Welcome to JunubMart".to_string(),
                "Quality Products for Every Home".to_string(),
                "Fast Delivery Across Juba".to_string(),
            ],
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    /// Milliseconds each quote stays active.
    pub interval_ms: u64,
    /// Quotes, in display order.
    pub quotes: Vec<Testimonial>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            interval_ms: 6000,
            quotes: vec![
                Testimonial {
                    quote: "The delivery was faster than I expected.".to_string(),
                    author: "Mary Akech".to_string(),
                },
                Testimonial {
                    quote: "Great prices and friendly support.".to_string(),
                    author: "James Lado".to_string(),
                },
                Testimonial {
                    quote: "My go-to shop for electronics.".to_string(),
                    author: "Nyankiir Deng".to_string(),
                },
            ],
        }
    }
}

/// One customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// Featured-products strip settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturedConfig {
    /// How many catalog items the homepage strip shows (first N, catalog order).
    pub count: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self { count: 4 }
    }
}

/// Contact form delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Recipient of the mailto fallback.
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "info@junubmart.example".to_string(),
        }
    }
}

/// Load `site.toml` if present; a missing file yields the stock defaults.
/// The result is validated either way.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Print a stock `site.toml` with all options documented.
pub fn stock_config_toml() -> &'static str {
    r##"# Shopfront Site Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Hero slideshow
# ---------------------------------------------------------------------------
[slideshow]
# Milliseconds each slide stays active before auto-advancing.
interval_ms = 4000
# Slide captions, in display order. An empty list disables the slideshow.
slides = [
    "Welcome to JunubMart",
    "Quality Products for Every Home",
    "Fast Delivery Across Juba",
]

# ---------------------------------------------------------------------------
# Testimonial carousel
# ---------------------------------------------------------------------------
[testimonials]
# Milliseconds each quote stays active before auto-advancing.
interval_ms = 6000

# One [[testimonials.quotes]] table per quote, in display order.
[[testimonials.quotes]]
quote = "The delivery was faster than I expected."
author = "Mary Akech"

[[testimonials.quotes]]
quote = "Great prices and friendly support."
author = "James Lado"

[[testimonials.quotes]]
quote = "My go-to shop for electronics."
author = "Nyankiir Deng"

# ---------------------------------------------------------------------------
# Featured products
# ---------------------------------------------------------------------------
[featured]
# How many products the homepage featured strip shows (first N, catalog order).
count = 4

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Recipient address for the mailto fallback when no endpoint is configured.
recipient = "info@junubmart.example"
"##
}
