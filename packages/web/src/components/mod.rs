//! Reusable UI components

mod loading;
mod provider_card;
mod provider_list;
mod search_bar;

pub use loading::*;
pub use provider_card::*;
pub use provider_list::*;
pub use search_bar::*;
