//! HTML fragment rendering.
//!
//! The presentation collaborator for the headless components. Every function
//! here is a deterministic mapping from its arguments to markup — no hidden
//! state is read, which is the render-callback contract the catalog view
//! relies on. Fragments are meant to be included into page templates; the
//! CLI writes them to disk as-is.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! type-safe interpolation and automatic XSS escaping.

use crate::catalog::CatalogItem;
use crate::config::Testimonial;
use crate::rotation::DisplayItem;
use maud::{Markup, html};
use std::cell::RefCell;
use std::rc::Rc;

/// A single product card: image, name, price, description, call to action.
pub fn product_card(item: &CatalogItem) -> Markup {
    html! {
        div.product-card {
            div.product-image-container {
                img.product-image src=(item.image) alt=(item.name);
            }
            div.product-info {
                h3.product-title { (item.name) }
                p.product-price { (item.price) }
                p.product-description { (item.description) }
                a.btn href="#" { "Add to Cart" }
            }
        }
    }
}

/// A grid of product cards. An empty projection renders an explicit empty
/// state rather than nothing — the visitor should see that the filter
/// matched no products, not a blank page.
pub fn product_grid(items: &[&CatalogItem]) -> Markup {
    html! {
        div.products-grid {
            @if items.is_empty() {
                p.products-empty { "No products in this category yet." }
            } @else {
                @for item in items {
                    (product_card(item))
                }
            }
        }
    }
}

/// Hero slideshow markup. The `active` class mirrors each item's flag, so
/// re-rendering after an advance moves the visible slide.
pub fn hero_slides(items: &[DisplayItem]) -> Markup {
    html! {
        div.slideshow {
            @for item in items {
                div.slide.active[item.is_active()] {
                    h2.slide-caption { (item.label()) }
                }
            }
        }
    }
}

/// Testimonial carousel markup with dot navigation.
pub fn testimonial_quotes(quotes: &[Testimonial], active: usize) -> Markup {
    html! {
        div.testimonial-carousel {
            @for (i, t) in quotes.iter().enumerate() {
                blockquote.testimonial.active[i == active] {
                    p.testimonial-quote { (t.quote) }
                    footer.testimonial-author { (t.author) }
                }
            }
            div.testimonial-dots {
                @for i in 0..quotes.len() {
                    button.dot.active[i == active] aria-label={ "Show testimonial " (i + 1) } {}
                }
            }
        }
    }
}

/// Render-callback adapter that keeps the latest product grid markup.
///
/// Cloning the sink shares the buffer, so the callback handed to a
/// [`CatalogView`](crate::view::CatalogView) and the writer that reads the
/// markup back can live on opposite sides of the borrow.
#[derive(Clone, Default)]
pub struct HtmlSink {
    latest: Rc<RefCell<String>>,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The render callback to hand to a catalog view.
    pub fn callback(&self) -> impl FnMut(&[&CatalogItem]) + 'static {
        let latest = Rc::clone(&self.latest);
        move |items: &[&CatalogItem]| {
            *latest.borrow_mut() = product_grid(items).into_string();
        }
    }

    /// Markup from the most recent render, empty before the first one.
    pub fn html(&self) -> String {
        self.latest.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::stock_catalog;
    use crate::view::{CatalogView, Filter};

    #[test]
    fn product_card_shows_all_fields() {
        let catalog = stock_catalog();
        let card = product_card(&catalog[0]).into_string();
        assert!(card.contains("Smartphone X1"));
        assert!(card.contains("$299.99"));
        assert!(card.contains(r#"src="assets/smartphone-x1.jpg""#));
        assert!(card.contains("Add to Cart"));
    }

    #[test]
    fn product_card_escapes_html() {
        let mut item = stock_catalog().remove(0);
        item.name = "<script>alert('x')</script>".into();
        let card = product_card(&item).into_string();
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn grid_renders_every_item() {
        let catalog = stock_catalog();
        let items: Vec<&CatalogItem> = catalog.iter().collect();
        let grid = product_grid(&items).into_string();
        assert_eq!(grid.matches("product-card").count(), 8);
    }

    #[test]
    fn empty_grid_renders_empty_state() {
        let grid = product_grid(&[]).into_string();
        assert!(grid.contains("products-empty"));
        assert!(!grid.contains("product-card"));
    }

    #[test]
    fn hero_marks_only_the_active_slide() {
        use crate::rotation::RotationController;
        let items = vec![
            DisplayItem::new("One"),
            DisplayItem::new("Two"),
            DisplayItem::new("Three"),
        ];
        let mut ctrl =
            RotationController::new(items, std::time::Duration::from_millis(100)).unwrap();
        ctrl.advance();
        let markup = hero_slides(ctrl.items()).into_string();
        assert_eq!(markup.matches(r#"class="slide active""#).count(), 1);
        assert_eq!(markup.matches(r#"class="slide""#).count(), 2);
        assert!(markup.contains("Two"));
    }

    #[test]
    fn testimonials_mark_active_quote_and_dot() {
        let quotes = vec![
            Testimonial {
                quote: "Great prices.".into(),
                author: "James Lado".into(),
            },
            Testimonial {
                quote: "Fast delivery.".into(),
                author: "Mary Akech".into(),
            },
        ];
        let markup = testimonial_quotes(&quotes, 1).into_string();
        assert_eq!(markup.matches(r#"class="testimonial active""#).count(), 1);
        assert_eq!(markup.matches(r#"class="dot active""#).count(), 1);
        assert!(markup.contains("Mary Akech"));
        assert!(markup.contains(r#"aria-label="Show testimonial 2""#));
    }

    #[test]
    fn sink_tracks_the_latest_projection() {
        let catalog = stock_catalog();
        let sink = HtmlSink::new();
        assert!(sink.html().is_empty());

        let mut view = CatalogView::new(&catalog, sink.callback());
        view.refresh();
        assert_eq!(sink.html().matches("product-card").count(), 8);

        view.set_filter(Filter::category("fashion"));
        assert_eq!(sink.html().matches("product-card").count(), 3);

        view.set_filter(Filter::category("nonexistent"));
        assert!(sink.html().contains("products-empty"));
    }
}
