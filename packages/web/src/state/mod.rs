//! Browser state: a pure update function plus the Dioxus hook driving it

mod browser;
mod hook;

pub use browser::*;
pub use hook::*;
