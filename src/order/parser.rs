//! Order line grammar.
//!
//! An order is a comma-separated list of clauses; each clause is
//! `<quantity> x <base>[ + <modifier>]*`, e.g. `"2 x decaf + cream"`.
//! Parsing failures are reported per clause, never thrown across the order.

use super::diagnostics::ClauseIssue;

/// Split an order into its clauses.
///
/// Blank input yields no clauses at all; the shell treats that as
/// end-of-session rather than an order.
pub fn split_order(order: &str) -> Vec<&str> {
    if order.trim().is_empty() {
        return Vec::new();
    }
    order.split(',').collect()
}

/// Split a clause into its quantity and contents text.
///
/// The text before the first `x` is the quantity; everything after it is the
/// contents. The quantity is deliberately not bounds-checked: zero and
/// negative quantities multiply through the arithmetic untouched.
pub fn split_clause(clause: &str) -> Result<(i64, &str), ClauseIssue> {
    let separator = clause
        .find('x')
        .ok_or(ClauseIssue::MissingQuantitySeparator)?;

    let quantity = clause[..separator]
        .trim()
        .parse::<i64>()
        .map_err(|_| ClauseIssue::InvalidQuantity)?;

    Ok((quantity, &clause[separator + 1..]))
}

/// Split clause contents into the base item name and its modifiers.
///
/// Parts are `+`-separated, trimmed and lower-cased; the first part is the
/// base name, the rest are modifiers in order of appearance.
pub fn split_contents(contents: &str) -> Vec<String> {
    contents
        .split('+')
        .map(|part| part.trim().to_lowercase())
        .collect()
}
