//! # Ordering Engine
//!
//! Top-down merge sort over a slice, with the two orderings the register
//! offers.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sort(left, right)                                                      │
//! │     left >= right ──► done (0 or 1 element)                            │
//! │     mid = left + (right - left) / 2                                     │
//! │     sort(left, mid); sort(mid + 1, right); merge(left, mid, right)      │
//! │                                                                         │
//! │  merge(left, mid, right)                                                │
//! │     buffer[left..=right] ◄── slice[left..=right]                        │
//! │                                                                         │
//! │     i ─► left half        j ─► right half       k ─► write cursor       │
//! │     while both halves remain:                                           │
//! │         before(buffer[i], buffer[j]) ? take i : take j                  │
//! │     flush the rest of the left half                                     │
//! │     rest of the right half: already in place (k == j)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Taking the left element whenever `before` holds (including equal keys)
//! makes the sort stable.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// What a sort request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOutcome {
    /// The sequence was sorted in place.
    Sorted { len: usize },
    /// Fewer than two items; nothing was touched.
    TooFewItems,
}

// =============================================================================
// Orderings
// =============================================================================

/// Id ascending. Ids are unique so the tie branch never matters.
#[inline]
pub fn id_ascending(a: &Item, b: &Item) -> bool {
    a.id <= b.id
}

/// Quantity descending, stable for equal quantities.
#[inline]
pub fn quantity_descending(a: &Item, b: &Item) -> bool {
    a.quantity >= b.quantity
}

/// Sorts items by id, ascending.
pub fn sort_by_id(items: &mut [Item]) -> SortOutcome {
    merge_sort_by(items, id_ascending)
}

/// Sorts items by quantity, descending.
pub fn sort_by_quantity_desc(items: &mut [Item]) -> SortOutcome {
    merge_sort_by(items, quantity_descending)
}

// =============================================================================
// Merge Sort
// =============================================================================

/// Sorts `items` in place.
///
/// `before(a, b)` returns `true` when `a` may be placed ahead of `b`; it
/// must hold for equal keys for the sort to stay stable.
pub fn merge_sort_by<T, F>(items: &mut [T], before: F) -> SortOutcome
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return SortOutcome::TooFewItems;
    }

    let mut buffer = items.to_vec();
    let right = items.len() - 1;
    sort_range(items, &mut buffer, 0, right, &before);

    SortOutcome::Sorted { len: items.len() }
}

fn sort_range<T, F>(items: &mut [T], buffer: &mut [T], left: usize, right: usize, before: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(items, buffer, left, mid, before);
    sort_range(items, buffer, mid + 1, right, before);
    merge(items, buffer, left, mid, right, before);
}

fn merge<T, F>(items: &mut [T], buffer: &mut [T], left: usize, mid: usize, right: usize, before: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    buffer[left..=right].clone_from_slice(&items[left..=right]);

    let (mut i, mut j, mut k) = (left, mid + 1, left);
    while i <= mid && j <= right {
        if before(&buffer[i], &buffer[j]) {
            items[k] = buffer[i].clone();
            i += 1;
        } else {
            items[k] = buffer[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i <= mid {
        items[k] = buffer[i].clone();
        i += 1;
        k += 1;
    }

    // Whatever is left of the right half was never moved.
    debug_assert!(j > right || k == j);
}

// =============================================================================
// Unit Tests
// =============================================================================
