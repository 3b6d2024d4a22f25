//! Aggregate statistics over the damage log.

use crate::models::{DamageReport, Dimension};
use std::collections::HashMap;

/// Number of rows in the table.
pub fn total_count(table: &[DamageReport]) -> usize {
    table.len()
}

/// Per-category counts for one dimension, descending by count.
/// Ties keep the order the categories first appear in the table (the sort is
/// stable over first-seen order). An empty table yields an empty list.
pub fn count_by(table: &[DamageReport], dim: Dimension) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for row in table {
        let value = dim.value_of(row);
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let n = counts[&value];
            (value, n)
        })
        .collect();

    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// The `n` highest-count categories of a dimension, same ordering rules as
/// `count_by`; fewer entries when fewer distinct categories exist.
pub fn top_n(table: &[DamageReport], dim: Dimension, n: usize) -> Vec<(String, usize)> {
    let mut ranked = count_by(table, dim);
    ranked.truncate(n);
    ranked
}

/// Default ranking depth for the "most damaged products" view.
pub const DEFAULT_TOP_PRODUCTS: usize = 5;
