//! # Search Engine
//!
//! Two lookups over the current item sequence:
//!
//! - [`binary_search_by_id`]: recursive, logarithmic; assumes the slice is
//!   sorted by id ascending. Nothing checks that: on an unsorted slice it
//!   may simply miss.
//! - [`search_by_name`]: linear, case-insensitive substring match, works on
//!   any order.
//!
//! Neither function mutates the slice.

use crate::item::Item;

/// Finds the position of `key` in an id-sorted slice.
///
/// ## Example
/// ```rust
/// use warehouse_core::{search, Item, Money};
///
/// let items = vec![
///     Item::new("B001", "Nail", "Hardware", 200, Money::from_cents(10)),
///     Item::new("B002", "Bolt", "Hardware", 50, Money::from_cents(50)),
/// ];
/// assert_eq!(search::binary_search_by_id(&items, "B002"), Some(1));
/// assert_eq!(search::binary_search_by_id(&items, "B003"), None);
/// ```
pub fn binary_search_by_id(items: &[Item], key: &str) -> Option<usize> {
    search_range(items, key, 0, items.len())
}

/// Searches the half-open range `[left, right)`.
fn search_range(items: &[Item], key: &str, left: usize, right: usize) -> Option<usize> {
    if left >= right {
        return None;
    }

    let mid = left + (right - left - 1) / 2;
    match items[mid].id.as_str().cmp(key) {
        std::cmp::Ordering::Equal => Some(mid),
        std::cmp::Ordering::Greater => search_range(items, key, left, mid),
        std::cmp::Ordering::Less => search_range(items, key, mid + 1, right),
    }
}

/// Returns every item whose name contains `keyword`, ignoring case, in the
/// current order. An empty keyword matches everything.
pub fn search_by_name<'a>(items: &'a [Item], keyword: &str) -> Vec<&'a Item> {
    let keyword = keyword.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&keyword))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
