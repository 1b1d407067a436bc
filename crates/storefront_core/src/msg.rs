#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Shell finished booting; triggers the one-time catalog fetch.
    Started,
    /// User edited the search input (full replacement text).
    QueryChanged(String),
    /// Engine byte count while the catalog download is in flight.
    FetchProgress { bytes: u64 },
    /// Engine delivered the decoded catalog.
    CatalogLoaded(Vec<crate::Product>),
    /// Engine gave up on the fetch; the message is shown verbatim.
    CatalogFailed(String),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
