//! Application pages

mod not_found;
mod search;

pub use not_found::*;
pub use search::*;
