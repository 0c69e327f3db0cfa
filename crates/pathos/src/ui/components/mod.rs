//! Collection of reusable TUI components.

pub mod entry_input;
pub mod help;
pub mod legend;
pub mod path_list;
