use crate::catalog::{price_text, Product};

/// Derives the visible subset of `catalog` for `query`, as catalog indices
/// in original order.
pub fn filter_catalog(catalog: &[Product], query: &str) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| matches_query(product, query))
        .map(|(index, _)| index)
        .collect()
}

/// Whether one product matches the query.
///
/// `<N` keeps products priced at most N, `>N` keeps products priced at least
/// N; anything else matches the title case-insensitively or the price text
/// literally. When both operators appear, `<` wins (first branch taken).
/// An unparseable bound matches nothing, and so does a non-finite price.
pub fn matches_query(product: &Product, query: &str) -> bool {
    if !product.price.is_finite() {
        return false;
    }
    if query.contains('<') {
        return match parse_leading_float(&query.replacen('<', "", 1)) {
            Some(max_price) => product.price <= max_price,
            None => false,
        };
    }
    if query.contains('>') {
        return match parse_leading_float(&query.replacen('>', "", 1)) {
            Some(min_price) => product.price >= min_price,
            None => false,
        };
    }
    product.title.to_lowercase().contains(&query.to_lowercase())
        || price_text(product.price).contains(query)
}

/// Parses the longest leading decimal prefix of `input` after skipping
/// leading whitespace, so `"50 off"` reads as `50`. Returns `None` when no
/// digits are present at all.
fn parse_leading_float(input: &str) -> Option<f64> {
    let rest = input.trim_start();
    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut saw_digit = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        saw_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // Keep a trailing exponent only when it is well formed.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let digits_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > digits_start {
            end = cursor;
        }
    }

    rest[..end].parse().ok()
}
