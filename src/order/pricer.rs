//! Item classification and unit pricing.
//!
//! A clause base name that matches a beverage type is priced as base price
//! plus modifier surcharges; anything else is treated as a baked-good
//! candidate and priced from the baked-goods table.

use rust_decimal::Decimal;

use crate::catalog::Catalog;

use super::diagnostics::ClauseIssue;

/// Outcome of pricing one clause, before the quantity multiplier.
///
/// The warning and the price result are independent: a baked-good clause
/// carrying modifiers is warned about whether or not the item itself turns
/// out to be priceable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pricing {
    /// Non-fatal issue found on the way to a price.
    pub warning: Option<ClauseIssue>,
    /// The unit price, or the issue that made the clause unpriceable.
    pub result: Result<Decimal, ClauseIssue>,
}

impl Pricing {
    fn priced(unit_price: Decimal) -> Self {
        Pricing {
            warning: None,
            result: Ok(unit_price),
        }
    }

    fn failed(issue: ClauseIssue) -> Self {
        Pricing {
            warning: None,
            result: Err(issue),
        }
    }
}

/// Resolve the unit price of a clause from its base name and modifiers.
///
/// Beverages: unknown modifiers abort the clause all-or-nothing; a partial
/// modifier sum is never kept. Baked goods: modifiers are not permitted, but
/// a clause carrying them is warned about and still priced from the base
/// name alone.
pub fn unit_price(catalog: &Catalog, base: &str, modifiers: &[String]) -> Pricing {
    if let Some(base_price) = catalog.beverage_base_price(base) {
        let mut price = base_price;
        for modifier in modifiers {
            match catalog.modifier_price(modifier) {
                Some(surcharge) => price += surcharge,
                None => {
                    return Pricing::failed(ClauseIssue::UnsupportedModifier(modifier.clone()))
                }
            }
        }
        return Pricing::priced(price);
    }

    // Baked-good candidate: should be a single item.
    let warning = (!modifiers.is_empty()).then_some(ClauseIssue::UnexpectedModifierOnBakedGood);

    let result = catalog
        .baked_good_price(base)
        .ok_or(ClauseIssue::UnsupportedItem);

    Pricing { warning, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::coffee_snobs()
    }

    // ==================== beverage tests ====================

    #[test]
    fn test_beverage_without_modifiers() {
        let pricing = unit_price(&catalog(), "decaf", &[]);
        assert_eq!(pricing.result, Ok(dec!(1.10)));
        assert_eq!(pricing.warning, None);
    }

    #[test]
    fn test_beverage_with_modifiers() {
        let modifiers = vec!["milk".to_string(), "sugar".to_string()];
        let pricing = unit_price(&catalog(), "regular", &modifiers);
        assert_eq!(pricing.result, Ok(dec!(2.00))); // 1.30 + 0.53 + 0.17
    }

    #[test]
    fn test_beverage_unknown_modifier_aborts_clause() {
        // All-or-nothing: the valid "milk" surcharge is discarded too.
        let modifiers = vec!["milk".to_string(), "syrup".to_string()];
        let pricing = unit_price(&catalog(), "regular", &modifiers);
        assert_eq!(
            pricing.result,
            Err(ClauseIssue::UnsupportedModifier("syrup".to_string()))
        );
        assert_eq!(pricing.warning, None);
    }

    // ==================== baked-good tests ====================

    #[test]
    fn test_baked_good_priced_by_plural_lookup() {
        let pricing = unit_price(&catalog(), "muffin", &[]);
        assert_eq!(pricing.result, Ok(dec!(2.03)));
        assert_eq!(pricing.warning, None);
    }

    #[test]
    fn test_baked_good_with_modifiers_warns_but_prices() {
        let modifiers = vec!["sugar".to_string()];
        let pricing = unit_price(&catalog(), "muffin", &modifiers);
        assert_eq!(pricing.result, Ok(dec!(2.03)));
        assert_eq!(
            pricing.warning,
            Some(ClauseIssue::UnexpectedModifierOnBakedGood)
        );
    }

    #[test]
    fn test_unknown_item() {
        let pricing = unit_price(&catalog(), "croissant", &[]);
        assert_eq!(pricing.result, Err(ClauseIssue::UnsupportedItem));
        assert_eq!(pricing.warning, None);
    }

    #[test]
    fn test_unknown_item_with_modifiers_warns_and_fails() {
        // Both diagnostics surface: the modifier warning and the skip.
        let modifiers = vec!["milk".to_string()];
        let pricing = unit_price(&catalog(), "croissant", &modifiers);
        assert_eq!(pricing.result, Err(ClauseIssue::UnsupportedItem));
        assert_eq!(
            pricing.warning,
            Some(ClauseIssue::UnexpectedModifierOnBakedGood)
        );
    }
}
