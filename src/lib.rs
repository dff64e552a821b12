//! # Shopfront
//!
//! A headless interactivity engine for small storefront sites. The catalog is
//! the data source: a TOML file of products becomes filterable grids and a
//! featured strip, and the site config drives a hero slideshow and a
//! testimonial carousel through one reusable rotation controller.
//!
//! # Architecture: Headless Core, Injected Edges
//!
//! Every interactive behavior of the site lives here as a plain component
//! with its side effects injected:
//!
//! ```text
//! RotationController ── Timeline (timer primitive, manually driven)
//! CatalogView        ── render callback (fn over the visible projection)
//! Forms              ── Delivery trait (endpoint, mailto fallback)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: rotation, filtering, and submission logic run under
//!   unit tests with no browser, no wall clock, and no network.
//! - **Determinism**: the same timeline drive and the same catalog always
//!   produce the same active flags and the same projection.
//! - **Reuse**: the hero slideshow and the testimonial carousel are the same
//!   controller type instantiated twice; the filter grid and the featured
//!   strip are the same view type over one shared catalog.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`rotation`] | Cycles a fixed item sequence on timer ticks or on demand |
//! | [`timer`] | Deterministic repeating-timer timeline (`schedule_repeating`/`cancel`/`advance`) |
//! | [`catalog`] | Product data model, TOML loading, embedded stock catalog |
//! | [`view`] | Filtered catalog projections with render-callback notification |
//! | [`forms`] | Form validation and delivery with a mailto fallback |
//! | [`render`] | Maud HTML fragments: product cards, slides, testimonials |
//! | [`config`] | `site.toml` loading, validation, and the documented stock config |
//! | [`output`] | CLI output formatting — inventory, render summary, rotation trace |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML fragments are generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system: malformed markup is a build error,
//! interpolation is auto-escaped, and there is no template directory to ship.
//!
//! ## One Rotation Controller
//!
//! The hero slideshow and the testimonial carousel used to be two copies of
//! the same timer-and-index dance. They are one type now; each page usage is
//! an instantiation with its own item sequence and interval, and each owns
//! its timer handle for its whole lifecycle.
//!
//! ## Degrade, Never Crash
//!
//! Decorative features fail soft. An empty slide list disables the slideshow
//! instead of erroring the build; an unknown filter category renders an empty
//! grid; a failed submission becomes a user-visible notice. The only hard
//! errors are configuration mistakes a site author must fix — and those are
//! reported at load time with the offending key.
//!
//! ## Recompute Over Patch
//!
//! Filter changes rebuild the visible projection from the full catalog every
//! time. At storefront catalog sizes the rebuild is trivially cheap, and the
//! projection can never drift out of sync with the filter.

pub mod catalog;
pub mod config;
pub mod forms;
pub mod output;
pub mod render;
pub mod rotation;
pub mod timer;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
