#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine for the one-time catalog download.
    FetchCatalog,
}
