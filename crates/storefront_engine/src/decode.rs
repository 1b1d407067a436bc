use storefront_core::Product;

use crate::{FailureKind, FetchError};

/// Decodes the response body as a JSON array of products.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    serde_json::from_slice(body).map_err(|err| {
        FetchError::new(
            FailureKind::InvalidBody,
            format!("invalid catalog body: {err}"),
        )
    })
}
