//! Monetary formatting — minor currency units (pence) to display values.
//!
//! Costs are stored in minor units to keep floating-point error out of
//! storage; conversion happens only at the presentation edge.

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeMap, AttributeValue};

/// Currency code used when the account does not specify one.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// A monetary amount derived from raw minor units, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The untouched input, in minor units.
    pub raw: i32,
    /// Major units: `raw / 100.0`, no further rounding.
    pub amount: f64,
    /// ISO 4217 code, e.g. `"GBP"`. Never a symbol.
    pub currency: String,
    /// Display string, e.g. `"99.45 GBP"`.
    pub formatted: String,
}

impl Money {
    /// Convert minor units into a displayable amount.
    ///
    /// Integral amounts keep one decimal place (`"27648.0 GBP"`); fractional
    /// amounts use the shortest natural form (`"0.61 GBP"`).
    #[must_use]
    pub fn from_minor_units(raw: i32, currency: &str) -> Self {
        let amount = f64::from(raw) / 100.0;
        let formatted = if amount.fract() == 0.0 {
            format!("{amount:.1} {currency}")
        } else {
            format!("{amount} {currency}")
        };
        Self {
            raw,
            amount,
            currency: currency.to_string(),
            formatted,
        }
    }

    /// Flat attribute map for auxiliary display: `raw`, `amount`, `currency`,
    /// `formatted`.
    #[must_use]
    pub fn attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("raw".to_string(), AttributeValue::Int(i64::from(self.raw)));
        attrs.insert("amount".to_string(), AttributeValue::Float(self.amount));
        attrs.insert(
            "currency".to_string(),
            AttributeValue::String(self.currency.clone()),
        );
        attrs.insert(
            "formatted".to_string(),
            AttributeValue::String(self.formatted.clone()),
        );
        attrs
    }
}
