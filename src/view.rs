//! Filtered catalog projections.
//!
//! A [`CatalogView`] holds a read-only reference to the catalog and a render
//! callback. Changing the filter recomputes the visible projection from
//! scratch and hands it to the callback — the projection is never patched
//! incrementally. At catalog size the recompute is trivially cheap and the
//! code stays obviously correct.
//!
//! Several views may share one catalog slice (a "featured" strip and a
//! filterable grid on the same page); no view mutates the catalog, so the
//! sharing needs no coordination.
//!
//! ## Render callback contract
//!
//! The callback receives the full ordered projection and must render from
//! that sequence alone. It is invoked on every `set_filter` — including when
//! the projection is empty, so the presentation can clear the grid — and on
//! `refresh`, never during construction.

use crate::catalog::CatalogItem;

/// Current filter of a view: the whole catalog, or one category tag.
///
/// The tag is a plain string rather than a [`Category`](crate::catalog::Category)
/// so that a request for an unknown tag stays representable — it yields an
/// empty projection, by contract not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn category(tag: impl Into<String>) -> Self {
        Filter::Category(tag.into())
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(tag) => item.category.tag() == tag,
        }
    }
}

/// A filtered, renderable projection of the catalog.
pub struct CatalogView<'c> {
    catalog: &'c [CatalogItem],
    filter: Filter,
    visible: Vec<&'c CatalogItem>,
    render: Box<dyn FnMut(&[&CatalogItem]) + 'c>,
}

impl<'c> CatalogView<'c> {
    /// Starts unfiltered. The callback is not invoked here; call [`refresh`]
    /// once the page is ready for the initial render.
    ///
    /// [`refresh`]: CatalogView::refresh
    pub fn new(
        catalog: &'c [CatalogItem],
        render: impl FnMut(&[&CatalogItem]) + 'c,
    ) -> Self {
        let filter = Filter::All;
        let visible = project(catalog, &filter);
        Self {
            catalog,
            filter,
            visible,
            render: Box::new(render),
        }
    }

    /// Recompute the projection for `filter` and invoke the render callback
    /// with it. An unknown category tag yields an empty projection; the
    /// callback is still invoked so the presentation clears the grid.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.visible = project(self.catalog, &self.filter);
        (self.render)(&self.visible);
    }

    /// Invoke the render callback with the current projection. The page's
    /// initial render goes through here.
    pub fn refresh(&mut self) {
        (self.render)(&self.visible);
    }

    /// First `min(n, catalog length)` items in catalog order, independent of
    /// the current filter. Does not invoke the render callback.
    pub fn featured(&self, n: usize) -> &'c [CatalogItem] {
        &self.catalog[..n.min(self.catalog.len())]
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn visible(&self) -> &[&'c CatalogItem] {
        &self.visible
    }
}

fn project<'c>(catalog: &'c [CatalogItem], filter: &Filter) -> Vec<&'c CatalogItem> {
    catalog.iter().filter(|item| filter.matches(item)).collect()
}
