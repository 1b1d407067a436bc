/// Which of the three screens the renderer should draw. Exactly one is
/// active at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    Loading { bytes_fetched: Option<u64> },
    Failed { message: String },
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    pub phase: ViewPhase,
    pub query: String,
    /// One card per matching product, in catalog order.
    pub cards: Vec<ProductCardView>,
    /// Size of the full catalog, for the "N of M" status line.
    pub total: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: u64,
    pub title: String,
    pub price_text: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub rating_rate: f64,
    pub rating_count: u64,
}
