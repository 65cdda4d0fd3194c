//! Price catalogs for the café menu.
//!
//! Three immutable name-to-price tables: drink modifiers, baked goods and
//! beverage bases. Built once at startup (from the built-in menu or a JSON
//! file) and shared read-only for the lifetime of the process.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Errors raised while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("negative price {price} for '{name}'")]
    NegativePrice { name: String, price: Decimal },
}

/// Immutable price tables for the menu.
///
/// All keys are stored lower-cased; lookups lower-case the query, so name
/// matching is case-insensitive on both sides.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Drink add-ons (milk, sugar, ...) with their surcharge.
    modifiers: HashMap<String, Decimal>,
    /// Baked goods, keyed by their plural name (muffins, flapjacks, ...).
    baked_goods: HashMap<String, Decimal>,
    /// Beverage bases (decaf, regular, ...) with their base price.
    beverages: HashMap<String, Decimal>,
}

impl Catalog {
    /// The built-in Coffee Snobs menu.
    pub fn coffee_snobs() -> Self {
        Catalog {
            modifiers: HashMap::from([
                ("milk".to_string(), dec!(0.53)),
                ("sugar".to_string(), dec!(0.17)),
                ("cream".to_string(), dec!(0.73)),
                ("sprinkles".to_string(), dec!(0.29)),
            ]),
            baked_goods: HashMap::from([
                ("muffins".to_string(), dec!(2.03)),
                ("flapjacks".to_string(), dec!(2.59)),
                ("panettones".to_string(), dec!(2.88)),
            ]),
            beverages: HashMap::from([
                ("decaf".to_string(), dec!(1.10)),
                ("regular".to_string(), dec!(1.30)),
            ]),
        }
    }

    /// Load a catalog from a JSON file.
    ///
    /// The document has the same shape as the struct:
    /// `{"modifiers": {...}, "baked_goods": {...}, "beverages": {...}}`.
    /// Keys are normalized to lower case; a negative price is rejected.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        catalog.normalized()
    }

    /// Lower-case all keys and validate prices.
    fn normalized(self) -> Result<Self, CatalogError> {
        fn normalize(
            table: HashMap<String, Decimal>,
        ) -> Result<HashMap<String, Decimal>, CatalogError> {
            table
                .into_iter()
                .map(|(name, price)| {
                    if price < Decimal::ZERO {
                        Err(CatalogError::NegativePrice { name, price })
                    } else {
                        Ok((name.to_lowercase(), price))
                    }
                })
                .collect()
        }

        Ok(Catalog {
            modifiers: normalize(self.modifiers)?,
            baked_goods: normalize(self.baked_goods)?,
            beverages: normalize(self.beverages)?,
        })
    }

    /// Price of a drink modifier, if the modifier is on the menu.
    pub fn modifier_price(&self, name: &str) -> Option<Decimal> {
        self.modifiers.get(&name.to_lowercase()).copied()
    }

    /// Base price of a beverage, if the name is a known beverage type.
    pub fn beverage_base_price(&self, name: &str) -> Option<Decimal> {
        self.beverages.get(&name.to_lowercase()).copied()
    }

    /// Price of a baked good, if it is on the menu.
    ///
    /// Catalog keys are plural; a name that does not already end in `s` is
    /// retried with `s` appended. One attempt only, no stemming.
    pub fn baked_good_price(&self, name: &str) -> Option<Decimal> {
        let mut key = name.to_lowercase();
        if !key.ends_with('s') {
            key.push('s');
        }
        self.baked_goods.get(&key).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::coffee_snobs()
    }
}
