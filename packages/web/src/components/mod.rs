//! Reusable UI components

mod layout;
mod loading;
mod resource_card;

pub use layout::*;
pub use loading::*;
pub use resource_card::*;
