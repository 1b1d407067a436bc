use serde::Deserialize;

/// A single catalog entry as served by the remote store API.
///
/// Immutable once decoded; the rest of the system only reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
    /// Some records arrive without a rating object; default to zero.
    #[serde(default)]
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Decimal text form of a price, used both on cards and for free-text
/// substring matching. `f64`'s `Display` prints the shortest round-trip
/// form, so `22.0` renders as `22` and `109.95` stays `109.95`.
pub fn price_text(price: f64) -> String {
    price.to_string()
}
