//! Domain types shared by the editor core and its adapters.

pub mod errors;
pub mod model;
