//! Order cost aggregation and bill formatting.
//!
//! Pure decimal arithmetic end to end: per-clause costs are summed as
//! `rust_decimal::Decimal`, the total is rounded to cents with half-up
//! tie-breaking, and the bill is rendered with exactly two decimal digits.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::catalog::Catalog;

use super::diagnostics::Diagnostic;
use super::parser::{split_clause, split_contents, split_order};
use super::pricer::unit_price;

/// Result of pricing a whole order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Exact (unrounded) sum over all valid clauses.
    pub total: Decimal,
    /// One entry per skipped or warned clause, in order of appearance.
    pub diagnostics: Vec<Diagnostic>,
}

/// Calculator for Coffee Snobs orders.
///
/// Holds the immutable price catalog; every calculation is independent, so a
/// single instance can serve any number of orders.
#[derive(Debug, Clone)]
pub struct OrderCostCalculator {
    catalog: Catalog,
}

impl OrderCostCalculator {
    pub fn new(catalog: Catalog) -> Self {
        OrderCostCalculator { catalog }
    }

    /// Price an order, collecting per-clause diagnostics.
    ///
    /// Invalid clauses contribute zero and never abort the order.
    pub fn price_order(&self, order: &str) -> OrderReceipt {
        let mut total = Decimal::ZERO;
        let mut diagnostics = Vec::new();

        for clause in split_order(order) {
            let (quantity, contents) = match split_clause(clause) {
                Ok(parsed) => parsed,
                Err(issue) => {
                    diagnostics.push(Diagnostic::new(clause, issue));
                    continue;
                }
            };

            let parts = split_contents(contents);
            // split always yields at least one part
            let (base, modifiers) = match parts.split_first() {
                Some(split) => split,
                None => continue,
            };

            let pricing = unit_price(&self.catalog, base, modifiers);
            if let Some(warning) = pricing.warning {
                diagnostics.push(Diagnostic::new(clause, warning));
            }
            match pricing.result {
                Ok(price) => total += price * Decimal::from(quantity),
                Err(issue) => diagnostics.push(Diagnostic::new(clause, issue)),
            }
        }

        OrderReceipt { total, diagnostics }
    }

    /// Price an order and render the final bill.
    ///
    /// Diagnostics are logged at `warn` level; they never appear in the
    /// returned string.
    pub fn calculate(&self, order: &str) -> String {
        let receipt = self.price_order(order);
        for diagnostic in &receipt.diagnostics {
            tracing::warn!("{}", diagnostic);
        }
        format_bill(receipt.total)
    }
}

impl Default for OrderCostCalculator {
    fn default() -> Self {
        OrderCostCalculator::new(Catalog::coffee_snobs())
    }
}

/// Render a total as `"Final bill is $X.YY"`.
///
/// Rounds to cents with half-up tie-breaking (halves round away from zero,
/// not to even) and always shows two decimal digits.
pub fn format_bill(total: Decimal) -> String {
    let mut rounded = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("Final bill is ${}", rounded)
}
