pub mod predicate;
pub mod view;

use std::fmt;

use tracing::{debug, trace};

use crate::{
    data::{catalog::Catalog, category::CategoryFilter, link::LinkId},
    navigate::{Navigator, RecordSelected},
};

use predicate::fold_case;
use view::VisibleRecords;

/// What the user has asked to see: a search string and a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    /// The search string exactly as typed. An empty query matches everything.
    pub query: String,
    pub category: CategoryFilter,
}

/// Called with the freshly computed visible links after every change to the
/// selection.
pub type ChangeListener<'c> = Box<dyn FnMut(&VisibleRecords<'c>) + 'c>;

/// One entry of the category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption<'c> {
    pub label: &'c str,
    pub filter: CategoryFilter,
    /// Whether this is the currently selected category.
    pub active: bool,
}

/// The state of one open view of a catalog. Each view owns its own selection;
/// the catalog itself is shared.
///
/// The visible links are recomputed eagerly whenever the selection changes, so
/// `visible_records` is always up to date and never fails.
pub struct CatalogFilter<'c> {
    catalog: &'c Catalog,
    selection: Selection,
    /// The links passing `self.selection`, always kept in sync with it.
    visible: VisibleRecords<'c>,
    listeners: Vec<ChangeListener<'c>>,
}

impl<'c> CatalogFilter<'c> {
    /// Opens a view with an empty query and the "all" category.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_selection(catalog, Selection::default())
    }

    pub fn with_selection(catalog: &'c Catalog, selection: Selection) -> Self {
        let visible = compute_visible(catalog, &selection);
        Self { catalog, selection, visible, listeners: Vec::new() }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.selection.query
    }

    pub fn category(&self) -> CategoryFilter {
        self.selection.category
    }

    /// Replaces the query verbatim; no trimming or other normalization.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.selection.query = query.into();
        self.refresh();
    }

    /// Replaces the active category. `category` must come from this view's
    /// catalog (see `Catalog::category_filter` and `category_options`).
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.selection.category = category;
        self.refresh();
    }

    /// The links passing both the text and the category test, in catalog
    /// order.
    pub fn visible_records(&self) -> &VisibleRecords<'c> {
        &self.visible
    }

    /// Total number of links in the catalog, visible or not.
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Registers a listener that is called synchronously after each change to
    /// the selection.
    pub fn on_change(&mut self, listener: impl FnMut(&VisibleRecords<'c>) + 'c) {
        self.listeners.push(Box::new(listener));
    }

    /// The values the category selector offers, "all" first.
    pub fn category_options(&self) -> impl Iterator<Item = CategoryOption<'c>> + '_ {
        let active = self.selection.category;
        self.catalog.categories().options().map(move |(label, filter)| CategoryOption {
            label,
            filter,
            active: filter == active,
        })
    }

    /// Notifies `navigator` that the link with the given ID was picked.
    /// Only visible links can be picked; returns whether a notification was
    /// sent.
    pub fn select(&self, id: LinkId, navigator: &mut impl Navigator) -> bool {
        let Some(link) = self.visible.get(id) else {
            return false;
        };
        trace!(%id, url = %link.url, "link selected");
        navigator.record_selected(RecordSelected { id, url: link.url.clone() });
        true
    }

    fn refresh(&mut self) {
        self.visible = compute_visible(self.catalog, &self.selection);
        for listener in self.listeners.iter_mut() {
            listener(&self.visible);
        }
    }
}

impl fmt::Debug for CatalogFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogFilter")
            .field("selection", &self.selection)
            .field("visible", &self.visible.ids())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Runs both tests over every link of the catalog. Catalog order is kept;
/// nothing is sorted.
fn compute_visible<'c>(catalog: &'c Catalog, selection: &Selection) -> VisibleRecords<'c> {
    let query = fold_case(&selection.query);
    let links: Vec<_> = catalog
        .entries()
        .filter(|(_, entry)| {
            predicate::matches_category(selection.category, entry.category)
                && entry.text.contains(&query)
        })
        .map(|(link, _)| link)
        .collect();

    debug!(
        query = %selection.query,
        category = ?selection.category,
        visible = links.len(),
        "recomputed visible links"
    );
    VisibleRecords::new(links)
}
