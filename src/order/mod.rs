//! Order pricing engine.
//!
//! Parses comma-separated order lines like
//! `"1 x regular + milk + sugar, 2 x decaf + cream, 5 x muffins"` and
//! computes the total bill. Problems are resolved per clause: a bad clause
//! is reported and contributes nothing, the rest of the order still prices.

pub mod calculator;
pub mod diagnostics;
pub mod parser;
pub mod pricer;

// Re-export commonly used items
pub use calculator::{format_bill, OrderCostCalculator, OrderReceipt};
pub use diagnostics::{ClauseIssue, Diagnostic};
