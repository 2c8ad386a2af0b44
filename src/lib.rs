//! IconGenius - client library for generating themed app-icon sets
//!
//! The pieces mirror the generation workflow: [`client`] talks to the
//! remote service, [`history`] persists past results behind a storage
//! port, [`archive`] bundles a result for download, and [`controller`]
//! wires them together behind the session state machine.

pub mod archive;
pub mod client;
pub mod controller;
pub mod core;
pub mod history;
pub mod logging;
pub mod settings;
