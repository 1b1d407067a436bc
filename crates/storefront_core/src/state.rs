use crate::catalog::{price_text, Product};
use crate::filter::filter_catalog;
use crate::view_model::{CatalogViewModel, ProductCardView, ViewPhase};

/// Lifecycle of the one-time catalog fetch. Starts at `Loading` and leaves
/// it exactly once; `Ready` and `Failed` are both terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Whole-application state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    catalog: Vec<Product>,
    visible: Vec<usize>,
    query: String,
    status: LoadStatus,
    fetch_started: bool,
    bytes_fetched: Option<u64>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Indices of catalog entries matching the current query, in catalog
    /// order. Always an order-preserving subsequence of the catalog.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Returns the dirty flag and clears it; the shell redraws when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> CatalogViewModel {
        let phase = match &self.status {
            LoadStatus::Loading => ViewPhase::Loading {
                bytes_fetched: self.bytes_fetched,
            },
            LoadStatus::Failed(message) => ViewPhase::Failed {
                message: message.clone(),
            },
            LoadStatus::Ready => ViewPhase::Ready,
        };
        let cards = self
            .visible
            .iter()
            .map(|&index| card_view(&self.catalog[index]))
            .collect();
        CatalogViewModel {
            phase,
            query: self.query.clone(),
            cards,
            total: self.catalog.len(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.fetch_started = true;
        self.dirty = true;
    }

    pub(crate) fn fetch_started(&self) -> bool {
        self.fetch_started
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.refilter();
        self.dirty = true;
    }

    pub(crate) fn apply_progress(&mut self, bytes: u64) {
        if self.status != LoadStatus::Loading || self.bytes_fetched == Some(bytes) {
            return;
        }
        self.bytes_fetched = Some(bytes);
        self.dirty = true;
    }

    /// Applies a successful fetch. Completions arriving after the status has
    /// left `Loading` are discarded, so the fetch resolves at most once.
    pub(crate) fn apply_catalog(&mut self, products: Vec<Product>) {
        if self.status != LoadStatus::Loading {
            return;
        }
        self.catalog = products;
        self.status = LoadStatus::Ready;
        self.refilter();
        self.dirty = true;
    }

    /// Applies a failed fetch; same at-most-once discipline as
    /// [`AppState::apply_catalog`]. The catalog stays empty.
    pub(crate) fn apply_failure(&mut self, message: String) {
        if self.status != LoadStatus::Loading {
            return;
        }
        self.status = LoadStatus::Failed(message);
        self.dirty = true;
    }

    fn refilter(&mut self) {
        self.visible = filter_catalog(&self.catalog, &self.query);
    }
}

fn card_view(product: &Product) -> ProductCardView {
    ProductCardView {
        id: product.id,
        title: product.title.clone(),
        price_text: price_text(product.price),
        category: product.category.clone(),
        description: product.description.clone(),
        image: product.image.clone(),
        rating_rate: product.rating.rate,
        rating_count: product.rating.count,
    }
}
