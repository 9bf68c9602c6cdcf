use itertools::Itertools;

use crate::entities::Instance;

/// Builds an item sequence ordered by descending priority.
///
/// `priorities[i]` is the priority of item type `i`, item types without an entry have priority 0.
/// Ties keep catalog order. Every item type is repeated `min(quantity, cap)` times.
pub fn priority_sequence(instance: &Instance, priorities: &[u32], cap: usize) -> Vec<usize> {
    instance
        .items
        .iter()
        .sorted_by_key(|item| std::cmp::Reverse(priorities.get(item.id).copied().unwrap_or(0)))
        .flat_map(|item| std::iter::repeat_n(item.id, item.quantity.min(cap)))
        .collect()
}

/// Builds an item sequence in catalog order, every item type repeated `min(quantity, cap)` times
pub fn catalog_sequence(instance: &Instance, cap: usize) -> Vec<usize> {
    instance
        .items
        .iter()
        .flat_map(|item| std::iter::repeat_n(item.id, item.quantity.min(cap)))
        .collect()
}
