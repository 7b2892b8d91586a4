//! # Console Session
//!
//! The request/response loop: show the menu, read a selector, run one store
//! operation, print the result, repeat.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   ┌───────────────┐   ┌────────────┐   ┌────────────┐   │
//! │   │   Menu   │──►│ Read selector │──►│  Dispatch  │──►│   Print    │   │
//! │   └──────────┘   └───────────────┘   └────────────┘   └─────┬──────┘   │
//! │        ▲                                                    │          │
//! │        └────────────────────────────────────────────────────┘          │
//! │                                                                         │
//! │   Selector 0 or end of input ──► session ends                           │
//! │   Selector outside 0-7       ──► "Invalid choice.", menu again          │
//! │   Domain error               ──► message, menu again                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session owns the [`ItemStore`]; nothing else touches it while the
//! loop runs.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use warehouse_core::{CoreError, Item, ItemStore, SortOrder, SortOutcome, StockAction};

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::menu::MenuChoice;
use crate::prompt::Prompter;
use crate::render;

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over an input/output pair.
pub struct Session<R, W> {
    store: ItemStore,
    config: ConsoleConfig,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Session {
            store: ItemStore::with_capacity(config.capacity),
            config,
            io: Prompter::new(input, output),
        }
    }

    pub fn into_store(self) -> ItemStore {
        self.store
    }

    /// Runs until the operator picks exit or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!(capacity = self.store.capacity(), "session started");

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ConsoleError::InputClosed) => {
                    info!("input closed");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(items = self.store.len(), "session ended");
        Ok(())
    }

    fn step(&mut self) -> ConsoleResult<Flow> {
        self.io.say(MenuChoice::render())?;
        let value = self.io.integer("Choose menu: ", "choice")?;

        let flow = match MenuChoice::try_from(value) {
            Ok(choice) => {
                debug!(?choice, "menu choice");
                self.dispatch(choice)?
            }
            Err(err) => {
                debug!(%err, "rejected selector");
                self.io.say("Invalid choice.")?;
                Flow::Continue
            }
        };

        self.io.say("")?;
        Ok(flow)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ConsoleResult<Flow> {
        match choice {
            MenuChoice::AddItem => self.add_item()?,
            MenuChoice::ListItems => self.list_items()?,
            MenuChoice::SortById => self.sort_by_id()?,
            MenuChoice::SortByQuantity => self.sort_by_quantity()?,
            MenuChoice::FindById => self.find_by_id()?,
            MenuChoice::FindByName => self.find_by_name()?,
            MenuChoice::UpdateStock => self.update_stock()?,
            MenuChoice::Exit => {
                self.io.say("Exiting. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    fn add_item(&mut self) -> ConsoleResult<()> {
        if self.store.is_full() {
            let err = CoreError::CapacityExceeded {
                capacity: self.store.capacity(),
            };
            return self.reject(err, "Warehouse is full!");
        }

        let id = self.io.text("Item ID: ")?;
        if self.store.find_by_id(&id).is_some() {
            return self.reject(
                CoreError::DuplicateId(id),
                "Item ID already exists. Use the stock update menu to change its quantity.",
            );
        }

        let name = self.io.text("Item name: ")?;
        let category = self.io.text("Category: ")?;
        let quantity = self.io.quantity("Initial quantity: ", "quantity")?;
        let price = self.io.price("Unit price: ")?;

        match self.store.add(Item::new(id, name, category, quantity, price)) {
            Ok(()) => {
                info!(items = self.store.len(), "item added");
                self.io.say("Item added.")
            }
            Err(err) => {
                let message = err.to_string();
                self.reject(err, &message)
            }
        }
    }

    fn list_items(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items in the warehouse yet.");
        }
        let listing = render::listing(&self.store, &self.config.currency_symbol);
        self.io.say(listing)
    }

    fn sort_by_id(&mut self) -> ConsoleResult<()> {
        match self.store.sort_by_id() {
            SortOutcome::TooFewItems => self.io.say("Fewer than 2 items, nothing to sort."),
            SortOutcome::Sorted { len } => {
                debug!(len, "sorted by id");
                self.io.say("Items sorted by item ID (ascending).")
            }
        }
    }

    fn sort_by_quantity(&mut self) -> ConsoleResult<()> {
        match self.store.sort_by_quantity_desc() {
            SortOutcome::TooFewItems => self.io.say("Fewer than 2 items, nothing to sort."),
            SortOutcome::Sorted { len } => {
                debug!(len, "sorted by quantity");
                self.io.say("Items sorted by quantity (descending).")
            }
        }
    }

    fn find_by_id(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items yet.");
        }

        self.io.say("Make sure the items are sorted by item ID first.")?;
        if self.store.ordering() != SortOrder::ById {
            warn!(ordering = ?self.store.ordering(), "binary search on items not sorted by id");
        }

        let key = self.io.text("Item ID to find: ")?;
        match self.store.binary_search_by_id(&key) {
            Some(index) => {
                let block = self.block_at(index);
                self.io.say(format_args!("Item found at index {index}:"))?;
                self.io.say(block)
            }
            None => {
                let message = format!("Item with ID {key} not found.");
                self.reject(CoreError::NotFound(key), &message)
            }
        }
    }

    fn find_by_name(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items yet.");
        }

        let keyword = self.io.text("Name keyword: ")?;
        let blocks: Vec<String> = self
            .store
            .search_by_name(&keyword)
            .into_iter()
            .map(|item| render::item_block(item, &self.config.currency_symbol))
            .collect();

        if blocks.is_empty() {
            return self.io.say("No matching items.");
        }

        self.io.say("Matching items:")?;
        for block in blocks {
            self.io.say(render::SEPARATOR)?;
            self.io.say(block)?;
        }
        Ok(())
    }

    fn update_stock(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items yet.");
        }

        let id = self.io.text("Item ID to update: ")?;
        let Some(index) = self.store.find_by_id(&id) else {
            return self.reject(CoreError::NotFound(id), "Item not found.");
        };

        let block = self.block_at(index);
        self.io.say("Item found:")?;
        self.io.say(block)?;
        self.io.say("1. Stock in (IN)")?;
        self.io.say("2. Stock out (OUT)")?;

        let selector = self.io.integer("Choose action: ", "action")?;
        let action = match StockAction::try_from(selector) {
            Ok(action) => action,
            Err(err) => return self.reject(err, "Invalid choice."),
        };

        let prompt = match action {
            StockAction::In => "Amount received: ",
            StockAction::Out => "Amount issued: ",
        };
        let amount = self.io.integer(prompt, "amount")?;

        match (self.store.apply_stock_action(index, action, amount), action) {
            (Ok(quantity), StockAction::In) => {
                info!(%id, quantity, "stock in");
                self.io.say(format_args!("Stock increased. Qty now: {quantity}"))
            }
            (Ok(quantity), StockAction::Out) => {
                info!(%id, quantity, "stock out");
                self.io.say(format_args!("Stock decreased. Qty now: {quantity}"))
            }
            (Err(err), StockAction::In) => self.reject(err, "Invalid amount."),
            (Err(err), StockAction::Out) => {
                self.reject(err, "Invalid amount or exceeds stock.")
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn block_at(&self, index: usize) -> String {
        self.store
            .get(index)
            .map(|item| render::item_block(item, &self.config.currency_symbol))
            .unwrap_or_default()
    }

    /// Reports a recovered domain error to the operator.
    fn reject(&mut self, err: CoreError, message: &str) -> ConsoleResult<()> {
        debug!(%err, "operation rejected");
        self.io.say(message)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(config: ConsoleConfig, input: &str) -> (ItemStore, String) {
        let mut output = Vec::new();
        let store = {
            let mut session = Session::new(config, Cursor::new(input.as_bytes()), &mut output);
            session.run().unwrap();
            session.into_store()
        };
        (store, String::from_utf8(output).unwrap())
    }

    fn run(input: &str) -> (ItemStore, String) {
        run_with(ConsoleConfig::default(), input)
    }

    const BOLT: &str = "1\nB002\nBolt\nHardware\n50\n0.5\n";
    const NAIL: &str = "1\nB001\nNail\nHardware\n200\n0.1\n";

    fn ids(store: &ItemStore) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_exit_immediately() {
        let (store, out) = run("0\n");
        assert!(store.is_empty());
        assert!(out.starts_with("===== WAREHOUSE MANAGEMENT SYSTEM ====="));
        assert!(out.contains("Exiting. Goodbye!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (store, out) = run(BOLT);
        assert_eq!(store.len(), 1);
        assert!(out.contains("Item added."));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_, out) = run("9\nx\n0\n");
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("choice must be a whole number, got 'x'. Try again."));
        assert_eq!(out.matches("===== WAREHOUSE MANAGEMENT SYSTEM =====").count(), 2);
    }

    #[test]
    fn test_bolt_and_nail_scenario() {
        let input = format!("{BOLT}{NAIL}3\n5\nB002\n4\n0\n");
        let (store, out) = run(&input);

        assert!(out.contains("Items sorted by item ID (ascending)."));
        assert!(out.contains("Make sure the items are sorted by item ID first."));
        assert!(out.contains("Item found at index 1:\nID      : B002"));
        assert!(out.contains("Items sorted by quantity (descending)."));

        let order: Vec<(&str, u64)> = store
            .items()
            .iter()
            .map(|i| (i.id.as_str(), i.quantity))
            .collect();
        assert_eq!(order, vec![("B001", 200), ("B002", 50)]);
    }

    #[test]
    fn test_add_duplicate_id_stops_early() {
        let input = format!("{BOLT}1\nB002\n0\n");
        let (store, out) = run(&input);
        assert_eq!(store.len(), 1);
        assert!(out.contains("Item ID already exists."));
        assert_eq!(out.matches("Item name: ").count(), 1);
    }

    #[test]
    fn test_add_when_full() {
        let config = ConsoleConfig {
            capacity: 1,
            ..ConsoleConfig::default()
        };
        let input = format!("{BOLT}1\n0\n");
        let (store, out) = run_with(config, &input);
        assert_eq!(store.len(), 1);
        assert!(out.contains("Warehouse is full!"));
    }

    #[test]
    fn test_add_reprompts_bad_numbers() {
        let (store, out) = run("1\nX1\nWidget\nMisc\n-4\nten\n3\nfree\n2.25\n0\n");
        let item = store.get(0).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price.cents(), 225);
        assert_eq!(out.matches("Initial quantity: ").count(), 3);
        assert_eq!(out.matches("Unit price: ").count(), 2);
    }

    #[test]
    fn test_add_accepts_fine_grained_prices() {
        let input = "1\nS1\nScrew\nHardware\n8\n0.125\n1\nS2\nShim\nHardware\n1\n1e2\n2\n0\n";
        let (store, out) = run(input);
        assert_eq!(store.get(0).unwrap().price.cents(), 13);
        assert_eq!(store.get(1).unwrap().price.cents(), 10000);
        assert_eq!(out.matches("Unit price: ").count(), 2);
        assert!(!out.contains("Try again."));
        assert!(out.contains("Price   : $0.13"));
        assert!(out.contains("Total stock value: $101.04"));
    }

    #[test]
    fn test_empty_store_notices() {
        let (_, out) = run("2\n5\n6\n7\n3\n0\n");
        assert!(out.contains("No items in the warehouse yet."));
        assert_eq!(out.matches("No items yet.").count(), 3);
        assert!(out.contains("Fewer than 2 items, nothing to sort."));
        assert!(!out.contains("Item ID to find: "));
    }

    #[test]
    fn test_list_items() {
        let input = format!("{BOLT}{NAIL}2\n0\n");
        let (_, out) = run(&input);
        assert!(out.contains("Item #1\nID      : B002"));
        assert!(out.contains("Item #2\nID      : B001"));
        assert!(out.contains("Total stock value: $45.00"));
    }

    #[test]
    fn test_currency_symbol_from_config() {
        let config = ConsoleConfig {
            currency_symbol: "Rp".to_string(),
            ..ConsoleConfig::default()
        };
        let input = format!("{BOLT}2\n0\n");
        let (_, out) = run_with(config, &input);
        assert!(out.contains("Price   : Rp0.50"));
    }

    #[test]
    fn test_find_by_id_not_found() {
        let input = format!("{BOLT}5\nZZZ\n0\n");
        let (_, out) = run(&input);
        assert!(out.contains("Item with ID ZZZ not found."));
    }

    #[test]
    fn test_find_by_name() {
        let input = "1\nP1\nBlueberry\nFood\n1\n1\n\
                     1\nP2\nblack\nPaint\n1\n1\n\
                     1\nP3\nSkyBlue\nPaint\n1\n1\n\
                     6\nBLUE\n6\ngreen\n0\n";
        let (_, out) = run(input);
        assert!(out.contains("Matching items:"));
        assert!(out.contains("Name    : Blueberry"));
        assert!(out.contains("Name    : SkyBlue"));
        assert!(!out.contains("Name    : black"));
        assert!(out.contains("No matching items."));
    }

    #[test]
    fn test_stock_in_and_out() {
        let input = format!("{BOLT}7\nB002\n1\n10\n7\nB002\n2\n60\n0\n");
        let (store, out) = run(&input);
        assert!(out.contains("Stock increased. Qty now: 60"));
        assert!(out.contains("Stock decreased. Qty now: 0"));
        assert_eq!(store.get(0).unwrap().quantity, 0);
    }

    #[test]
    fn test_stock_rejections_leave_quantity() {
        let input = format!(
            "{BOLT}7\nB002\n2\n51\n7\nB002\n1\n-1\n7\nB002\n2\n-1\n7\nB002\n3\n7\nNOPE\n0\n"
        );
        let (store, out) = run(&input);
        assert_eq!(out.matches("Invalid amount or exceeds stock.").count(), 2);
        assert!(out.contains("Invalid amount.\n"));
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Item not found."));
        assert_eq!(store.get(0).unwrap().quantity, 50);
    }

    #[test]
    fn test_sort_tracks_order_for_search() {
        let input = format!("{BOLT}{NAIL}3\n0\n");
        let (store, _) = run(&input);
        assert_eq!(store.ordering(), SortOrder::ById);
        assert_eq!(ids(&store), vec!["B001", "B002"]);
    }
}
