//! Durable generation history
//!
//! The store keeps a newest-first sequence of past generations behind an
//! injected storage port, mirroring durable state after every change.

mod backend;
mod store;

pub use backend::*;
pub use store::*;
