pub mod add_item;
pub mod close_shopping_list;
pub mod open_shopping_list;
pub mod remove_item;
