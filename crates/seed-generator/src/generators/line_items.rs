//! Invoice line items, serialized as a JSON array.

use super::company::catch_phrase;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LineItem {
    description: String,
    quantity: u32,
    unit_price: f64,
}

/// JSON array of `min_items..=max_items` line items.
///
/// Each item has a description, a quantity in 1..=10 and a unit price in
/// 10.00..=500.00.
pub fn line_items_json<R: Rng>(rng: &mut R, min_items: u32, max_items: u32) -> String {
    let count = if min_items >= max_items {
        min_items
    } else {
        rng.random_range(min_items..=max_items)
    };

    let items: Vec<LineItem> = (0..count)
        .map(|_| LineItem {
            description: catch_phrase(rng),
            quantity: rng.random_range(1..=10),
            unit_price: rng.random_range(1000..=50000) as f64 / 100.0,
        })
        .collect();

    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}
