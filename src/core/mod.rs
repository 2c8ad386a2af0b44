//! Core data models and error taxonomy

mod error;
mod history_item;
mod icon_set;
mod style;

pub use error::*;
pub use history_item::*;
pub use icon_set::*;
pub use style::*;
