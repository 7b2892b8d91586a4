//! Text rendering of items for the console.

use warehouse_core::{Item, ItemStore};

pub const SEPARATOR: &str = "---------------------";

/// Multi-line description of one item.
pub fn item_block(item: &Item, currency_symbol: &str) -> String {
    format!(
        "ID      : {}\nName    : {}\nCategory: {}\nQty     : {}\nPrice   : {}",
        item.id,
        item.name,
        item.category,
        item.quantity,
        item.price.display_with(currency_symbol)
    )
}

/// Every item in current order, numbered from 1, followed by the total
/// stock value.
pub fn listing(store: &ItemStore, currency_symbol: &str) -> String {
    let mut out = String::from("===== ITEM LIST =====\n");
    for (pos, item) in store.items().iter().enumerate() {
        out.push_str(&format!("Item #{}\n", pos + 1));
        out.push_str(&item_block(item, currency_symbol));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out.push_str(&format!(
        "Total stock value: {}",
        store.total_value().display_with(currency_symbol)
    ));
    out
}
