pub mod help;
pub mod root;
pub mod swatch_list;
pub mod toggle_button;
