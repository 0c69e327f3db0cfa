//! Editor core: classification, the path list, the edit-session state machine, and export.

pub mod classify;
pub mod draft;
pub mod editor;
pub mod export;
pub mod path_list;
pub mod session;
pub mod store;
