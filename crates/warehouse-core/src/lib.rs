//! # warehouse-core: Pure Business Logic for the Warehouse Register
//!
//! This crate contains the item store and the two classic algorithms the
//! register is built around (merge sort, binary search), as pure code with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Warehouse Register Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console Session (apps/console)                  │   │
//! │  │     Menu ──► Prompt ──► Dispatch ──► Render ──► Menu ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ warehouse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   store   │  │   sort    │  │  search   │  │   │
//! │  │   │   Item    │  │ ItemStore │  │ by id ▲   │  │ binary/id │  │   │
//! │  │   │   Money   │  │ add/find  │  │ by qty ▼  │  │ linear/nm │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `Item` record and stock actions
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`store`] - `ItemStore`, the bounded, id-unique item sequence
//! - [`sort`] - Merge sort and its two orderings
//! - [`search`] - Binary search by id, linear search by name
//! - [`validation`] - Parse-and-check helpers for operator input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use warehouse_core::{Item, ItemStore, Money};
//!
//! let mut store = ItemStore::with_capacity(10);
//! store.add(Item::new("B002", "Bolt", "Hardware", 50, Money::from_cents(50))).unwrap();
//! store.add(Item::new("B001", "Nail", "Hardware", 200, Money::from_cents(10))).unwrap();
//!
//! store.sort_by_id();
//! assert_eq!(store.binary_search_by_id("B002"), Some(1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod money;
pub mod search;
pub mod sort;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Item, StockAction};
pub use money::Money;
pub use sort::SortOutcome;
pub use store::{ItemStore, SortOrder};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum number of items a store can hold.
///
/// ## Business Reason
/// The register is a bounded in-memory ledger. The console can override
/// this at startup, but never lifts the bound entirely.
pub const DEFAULT_CAPACITY: usize = 2000;
