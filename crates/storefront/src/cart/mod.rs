//! Shopping cart state management.
//!
//! The cart store is the single source of truth for the shopping cart.
//! Every read and write of persisted cart state flows through it; UI
//! surfaces never touch storage directly.

mod line_item;
mod store;

pub use line_item::CartLineItem;
pub use store::{CartStore, DisplayState};
