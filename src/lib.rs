//! Reward points for purchase receipts.
//!
//! A submitted [`Receipt`] is validated, scored against a fixed set of rules
//! and stored in memory under a random id; the points can then be looked up
//! by that id. [`ReceiptService`] ties the pieces together and [`server`]
//! exposes it over HTTP.

pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod output;
pub mod receipt;
pub mod scoring;
pub mod server;
pub mod service;
pub mod store;

pub use error::ReceiptError;
pub use receipt::{Item, Receipt};
pub use service::ReceiptService;
pub use store::ReceiptStore;
