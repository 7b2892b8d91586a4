//! # Item Store
//!
//! The bounded, append-only sequence of items the register works on.
//!
//! ## Invariants
//! - `len() <= capacity()`
//! - No two items share an id
//! - Items are never removed; only `quantity` changes after insertion
//! - Order changes only through appends and the explicit sorts
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Menu Action              Store Method              Effect              │
//! │  ───────────              ────────────              ──────              │
//! │                                                                         │
//! │  Add item ──────────────► add() ──────────────────► items.push(item)   │
//! │                                                                         │
//! │  Sort by id ────────────► sort_by_id() ───────────► merge sort ▲ id    │
//! │                                                                         │
//! │  Sort by quantity ──────► sort_by_quantity_desc() ► merge sort ▼ qty   │
//! │                                                                         │
//! │  Find by id ────────────► binary_search_by_id() ──► (read only)        │
//! │                                                                         │
//! │  Find by name ──────────► search_by_name() ───────► (read only)        │
//! │                                                                         │
//! │  Update stock ──────────► find_by_id() ───────────► (read only)        │
//! │                           apply_stock_action() ───► items[i].quantity  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, StockAction};
use crate::money::Money;
use crate::search;
use crate::sort::{self, SortOutcome};
use crate::DEFAULT_CAPACITY;

/// The sort most recently applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Insertion order, or an append happened after the last sort.
    Unsorted,
    /// Id ascending: binary search is reliable.
    ById,
    /// Quantity descending.
    ByQuantityDesc,
}

/// Fixed-capacity store of items.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    capacity: usize,
    ordering: SortOrder,
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ItemStore {
    /// Creates an empty store that holds at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        ItemStore {
            items: Vec::new(),
            capacity,
            ordering: SortOrder::Unsorted,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn ordering(&self) -> SortOrder {
        self.ordering
    }

    /// Total value of all stock on hand.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(Item::stock_value).sum()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Appends `item`.
    ///
    /// ## Errors
    /// - [`CoreError::CapacityExceeded`] when the store is full
    /// - [`CoreError::DuplicateId`] when the id is already taken
    ///
    /// The store is left untouched on error.
    pub fn add(&mut self, item: Item) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.find_by_id(&item.id).is_some() {
            return Err(CoreError::DuplicateId(item.id));
        }

        self.items.push(item);
        self.ordering = SortOrder::Unsorted;
        Ok(())
    }

    /// Changes the quantity at `index` by `delta` and returns the new
    /// quantity.
    ///
    /// ## Errors
    /// - [`CoreError::NotFound`] when `index` is out of range
    /// - [`CoreError::InvalidAdjustment`] when the result would be negative
    pub fn adjust_quantity(&mut self, index: usize, delta: i64) -> CoreResult<u64> {
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| CoreError::NotFound(format!("#{index}")))?;

        let updated = item
            .quantity
            .checked_add_signed(delta)
            .ok_or_else(|| CoreError::InvalidAdjustment {
                id: item.id.clone(),
                quantity: item.quantity,
                delta,
            })?;

        item.quantity = updated;
        Ok(updated)
    }

    /// Stock-in or stock-out of `amount` units for the item at `index`.
    ///
    /// A negative `amount` is rejected for both directions, as is a
    /// stock-out larger than the quantity on hand. The error's `delta` is
    /// the signed change the request asked for, as in
    /// [`adjust_quantity`](Self::adjust_quantity): stock-out of `-3` is `+3`.
    ///
    /// ## User Workflow
    /// ```text
    /// Update stock (id: B001, qty 5)
    ///      │
    ///      ├── In,  amount  3 ──► quantity 8
    ///      ├── In,  amount -3 ──► InvalidAdjustment, quantity 5
    ///      ├── Out, amount  5 ──► quantity 0
    ///      └── Out, amount  6 ──► InvalidAdjustment, quantity 5
    /// ```
    pub fn apply_stock_action(
        &mut self,
        index: usize,
        action: StockAction,
        amount: i64,
    ) -> CoreResult<u64> {
        let Ok(amount) = u64::try_from(amount) else {
            let item = self
                .items
                .get(index)
                .ok_or_else(|| CoreError::NotFound(format!("#{index}")))?;
            let delta = match action {
                StockAction::In => amount,
                StockAction::Out => amount.saturating_neg(),
            };
            return Err(CoreError::InvalidAdjustment {
                id: item.id.clone(),
                quantity: item.quantity,
                delta,
            });
        };

        self.adjust_quantity(index, action.delta(amount))
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Linear scan for the first item whose id equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Binary search by id; only reliable right after [`sort_by_id`](Self::sort_by_id).
    pub fn binary_search_by_id(&self, key: &str) -> Option<usize> {
        search::binary_search_by_id(&self.items, key)
    }

    /// Case-insensitive substring search over item names.
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Item> {
        search::search_by_name(&self.items, keyword)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort_by_id(&mut self) -> SortOutcome {
        let outcome = sort::sort_by_id(&mut self.items);
        self.record(outcome, SortOrder::ById);
        outcome
    }

    pub fn sort_by_quantity_desc(&mut self) -> SortOutcome {
        let outcome = sort::sort_by_quantity_desc(&mut self.items);
        self.record(outcome, SortOrder::ByQuantityDesc);
        outcome
    }

    fn record(&mut self, outcome: SortOutcome, ordering: SortOrder) {
        if let SortOutcome::Sorted { .. } = outcome {
            self.ordering = ordering;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: u64) -> Item {
        Item::new(id, format!("Item {id}"), "General", quantity, Money::from_cents(100))
    }

    fn ids(store: &ItemStore) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("C", 1)).unwrap();
        store.add(item("A", 1)).unwrap();
        store.add(item("B", 1)).unwrap();
        assert_eq!(ids(&store), vec!["C", "A", "B"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("B001", 1)).unwrap();

        let err = store.add(item("B001", 99)).unwrap_err();
        assert_eq!(err, CoreError::DuplicateId("B001".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_beyond_capacity() {
        let mut store = ItemStore::with_capacity(2);
        store.add(item("A", 1)).unwrap();
        store.add(item("B", 1)).unwrap();
        assert!(store.is_full());

        let err = store.add(item("C", 1)).unwrap_err();
        assert_eq!(err, CoreError::CapacityExceeded { capacity: 2 });
        assert_eq!(ids(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_capacity_checked_before_duplicate() {
        let mut store = ItemStore::with_capacity(1);
        store.add(item("A", 1)).unwrap();
        assert!(matches!(
            store.add(item("A", 1)),
            Err(CoreError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_find_by_id() {
        let mut store = ItemStore::default();
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert_eq!(store.find_by_id("A"), None);

        store.add(item("A", 1)).unwrap();
        store.add(item("B", 1)).unwrap();
        assert_eq!(store.find_by_id("B"), Some(1));
        assert_eq!(store.find_by_id("b"), None);
    }

    #[test]
    fn test_adjust_quantity() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("A", 5)).unwrap();

        assert_eq!(store.adjust_quantity(0, 3), Ok(8));
        assert_eq!(store.adjust_quantity(0, -8), Ok(0));
        assert!(matches!(
            store.adjust_quantity(0, -1),
            Err(CoreError::InvalidAdjustment { quantity: 0, delta: -1, .. })
        ));
        assert_eq!(store.get(0).unwrap().quantity, 0);
        assert!(matches!(store.adjust_quantity(4, 1), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_stock_out_rules() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("A", 5)).unwrap();

        let err = store.apply_stock_action(0, StockAction::Out, -1).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAdjustment {
                id: "A".to_string(),
                quantity: 5,
                delta: 1,
            }
        );
        assert_eq!(store.get(0).unwrap().quantity, 5);

        assert!(matches!(
            store.apply_stock_action(0, StockAction::Out, 6),
            Err(CoreError::InvalidAdjustment { quantity: 5, delta: -6, .. })
        ));
        assert_eq!(store.get(0).unwrap().quantity, 5);

        assert_eq!(store.apply_stock_action(0, StockAction::Out, 5), Ok(0));
    }

    #[test]
    fn test_stock_in_rules() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("A", 5)).unwrap();

        assert_eq!(store.apply_stock_action(0, StockAction::In, 0), Ok(5));
        assert_eq!(store.apply_stock_action(0, StockAction::In, 10), Ok(15));

        let err = store.apply_stock_action(0, StockAction::In, -3).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAdjustment {
                id: "A".to_string(),
                quantity: 15,
                delta: -3,
            }
        );
        assert_eq!(store.get(0).unwrap().quantity, 15);
    }

    #[test]
    fn test_ordering_tracking() {
        let mut store = ItemStore::with_capacity(10);
        store.add(item("B", 1)).unwrap();
        assert_eq!(store.sort_by_id(), SortOutcome::TooFewItems);
        assert_eq!(store.ordering(), SortOrder::Unsorted);

        store.add(item("A", 2)).unwrap();
        assert_eq!(store.sort_by_id(), SortOutcome::Sorted { len: 2 });
        assert_eq!(store.ordering(), SortOrder::ById);

        store.sort_by_quantity_desc();
        assert_eq!(store.ordering(), SortOrder::ByQuantityDesc);

        store.add(item("C", 3)).unwrap();
        assert_eq!(store.ordering(), SortOrder::Unsorted);
    }

    #[test]
    fn test_total_value() {
        let mut store = ItemStore::with_capacity(10);
        assert!(store.total_value().is_zero());

        store
            .add(Item::new("B002", "Bolt", "Hardware", 50, Money::from_cents(50)))
            .unwrap();
        store
            .add(Item::new("B001", "Nail", "Hardware", 200, Money::from_cents(10)))
            .unwrap();
        assert_eq!(store.total_value().cents(), 4500);
    }

    #[test]
    fn test_bolt_and_nail_scenario() {
        let mut store = ItemStore::with_capacity(10);
        store
            .add(Item::new("B002", "Bolt", "Hardware", 50, Money::from_cents(50)))
            .unwrap();
        store
            .add(Item::new("B001", "Nail", "Hardware", 200, Money::from_cents(10)))
            .unwrap();

        store.sort_by_id();
        assert_eq!(ids(&store), vec!["B001", "B002"]);
        assert_eq!(store.binary_search_by_id("B002"), Some(1));

        store.sort_by_quantity_desc();
        let order: Vec<(&str, u64)> = store
            .items()
            .iter()
            .map(|i| (i.id.as_str(), i.quantity))
            .collect();
        assert_eq!(order, vec![("B001", 200), ("B002", 50)]);
    }

    #[test]
    fn test_search_by_name_through_store() {
        let mut store = ItemStore::with_capacity(10);
        store
            .add(Item::new("1", "Blueberry", "Food", 1, Money::zero()))
            .unwrap();
        store
            .add(Item::new("2", "black", "Paint", 1, Money::zero()))
            .unwrap();
        store
            .add(Item::new("3", "SkyBlue", "Paint", 1, Money::zero()))
            .unwrap();

        let names: Vec<&str> = store
            .search_by_name("blue")
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blueberry", "SkyBlue"]);
    }
}
