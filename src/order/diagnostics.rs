//! Clause-scoped diagnostics.
//!
//! Every problem found while pricing an order is resolved at the clause
//! boundary: the clause is reported and (except for the baked-good modifier
//! warning) contributes nothing to the total. Nothing here ever aborts the
//! order or the session.

/// Reason a clause was skipped or warned about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClauseIssue {
    /// The clause has no `x` between the quantity and the item.
    #[error("missing 'x' quantity separator")]
    MissingQuantitySeparator,

    /// The text before the `x` is not a whole number.
    #[error("quantity is not a whole number")]
    InvalidQuantity,

    /// The base item matches neither a beverage nor a baked good.
    #[error("unsupported item")]
    UnsupportedItem,

    /// A drink modifier is not on the menu.
    #[error("unsupported drink modifier '{0}'")]
    UnsupportedModifier(String),

    /// A baked-good clause carried `+`-separated extras. Non-fatal: the
    /// clause is still priced using the base item alone.
    #[error("baked goods do not take modifiers")]
    UnexpectedModifierOnBakedGood,
}

impl ClauseIssue {
    /// Whether the clause is still priced despite the issue.
    pub fn is_warning(&self) -> bool {
        matches!(self, ClauseIssue::UnexpectedModifierOnBakedGood)
    }
}

/// A diagnostic tied to the raw text of the offending clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The clause exactly as it appeared in the order.
    pub clause: String,
    pub issue: ClauseIssue,
}

impl Diagnostic {
    pub fn new(clause: &str, issue: ClauseIssue) -> Self {
        Diagnostic {
            clause: clause.to_string(),
            issue,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issue.is_warning() {
            write!(f, "{} in \"{}\"", self.issue, self.clause)
        } else {
            write!(f, "{} in \"{}\". Item skipped", self.issue, self.clause)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_clause_display() {
        let diag = Diagnostic::new("3 x croissant", ClauseIssue::UnsupportedItem);
        assert_eq!(
            diag.to_string(),
            "unsupported item in \"3 x croissant\". Item skipped"
        );
    }

    #[test]
    fn test_warning_display_has_no_skip_suffix() {
        let diag = Diagnostic::new(
            "1 x muffin + sugar",
            ClauseIssue::UnexpectedModifierOnBakedGood,
        );
        assert!(!diag.to_string().contains("Item skipped"));
    }

    #[test]
    fn test_only_baked_good_modifier_is_warning() {
        assert!(ClauseIssue::UnexpectedModifierOnBakedGood.is_warning());
        assert!(!ClauseIssue::MissingQuantitySeparator.is_warning());
        assert!(!ClauseIssue::InvalidQuantity.is_warning());
        assert!(!ClauseIssue::UnsupportedItem.is_warning());
        assert!(!ClauseIssue::UnsupportedModifier("oat milk".into()).is_warning());
    }
}
