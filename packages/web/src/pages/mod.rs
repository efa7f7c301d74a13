//! Application pages

mod browse;
mod landing;

pub use browse::*;
pub use landing::*;
