//! Coffee Snobs order cost calculator.
//!
//! Library surface for pricing café orders: immutable price catalogs, an
//! order-line parser and the `OrderCostCalculator` that turns an order
//! string into a formatted bill. The console shell in `main.rs` is a thin
//! read/print loop over this crate.

pub mod catalog;
pub mod error;
pub mod order;

pub use catalog::Catalog;
pub use error::{AppError, Result};
pub use order::OrderCostCalculator;
