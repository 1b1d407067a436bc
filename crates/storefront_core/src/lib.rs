//! Storefront core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use catalog::{price_text, Product, Rating};
pub use effect::Effect;
pub use filter::{filter_catalog, matches_query};
pub use msg::Msg;
pub use state::{AppState, LoadStatus};
pub use update::update;
pub use view_model::{CatalogViewModel, ProductCardView, ViewPhase};
