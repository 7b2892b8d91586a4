//! Main menu entries and their selector numbers.

use warehouse_core::CoreError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddItem,
    ListItems,
    SortById,
    SortByQuantity,
    FindById,
    FindByName,
    UpdateStock,
}

impl MenuChoice {
    /// Entries in display order (exit last, as on screen).
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddItem,
        MenuChoice::ListItems,
        MenuChoice::SortById,
        MenuChoice::SortByQuantity,
        MenuChoice::FindById,
        MenuChoice::FindByName,
        MenuChoice::UpdateStock,
        MenuChoice::Exit,
    ];

    pub fn selector(self) -> i64 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddItem => 1,
            MenuChoice::ListItems => 2,
            MenuChoice::SortById => 3,
            MenuChoice::SortByQuantity => 4,
            MenuChoice::FindById => 5,
            MenuChoice::FindByName => 6,
            MenuChoice::UpdateStock => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddItem => "Add item",
            MenuChoice::ListItems => "List all items",
            MenuChoice::SortById => "Sort by item ID (ascending) [Merge Sort]",
            MenuChoice::SortByQuantity => "Sort by quantity (descending) [Merge Sort]",
            MenuChoice::FindById => "Find item by ID (Binary Search, recursive)",
            MenuChoice::FindByName => "Find item by name (Linear Search)",
            MenuChoice::UpdateStock => "Update stock (in/out)",
        }
    }

    /// The full menu as printed before every choice.
    pub fn render() -> String {
        let mut menu = String::from("===== WAREHOUSE MANAGEMENT SYSTEM =====\n");
        for choice in MenuChoice::ALL {
            menu.push_str(&format!("{}. {}\n", choice.selector(), choice.label()));
        }
        menu.pop();
        menu
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.selector() == value)
            .ok_or(CoreError::InvalidSelector { value })
    }
}
