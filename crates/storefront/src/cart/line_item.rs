//! Cart line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use verge_vr_core::{Price, ProductId};

/// One product entry in the cart.
///
/// `name` and `price` are captured from the product card at add time and
/// never re-fetched; if the underlying product changes later, existing
/// entries keep what they were added with. The price is kept in its
/// `"US$ <amount>"` display form and the numeric amount is parsed out
/// wherever a computation needs it.
///
/// The serialized form is exactly the persisted layout: `id`, `name`,
/// `price`, `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier; unique within a cart.
    pub id: ProductId,
    /// Display name captured at add time.
    pub name: String,
    /// Display price captured at add time, `"US$ <amount>"` form.
    pub price: String,
    /// Number of units; positive, starts at 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item for a newly added product, with quantity 1.
    pub fn new(id: ProductId, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            quantity: 1,
        }
    }

    /// The unit price parsed from the captured display string.
    ///
    /// A malformed price string is a data-entry bug upstream; it is logged
    /// and counted as zero so total computation never fails.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::parse_display(&self.price).unwrap_or_else(|e| {
            warn!(product = %self.id, error = %e, "unparseable line price, counting as zero");
            Price::ZERO
        })
    }

    /// The line's contribution to the cart total: unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price().amount() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quest() -> CartLineItem {
        CartLineItem::new(ProductId::new("v1"), "Meta Quest 3", "US$ 499.00")
    }

    #[test]
    fn test_new_starts_at_quantity_one() {
        let line = quest();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Meta Quest 3");
        assert_eq!(line.price, "US$ 499.00");
    }

    #[test]
    fn test_unit_price_parses_display_form() {
        let line = quest();
        assert_eq!(line.unit_price(), Price::parse_display("499.00").unwrap());
    }

    #[test]
    fn test_unit_price_malformed_counts_as_zero() {
        let mut line = quest();
        line.price = "US$ free".to_owned();
        assert_eq!(line.unit_price(), Price::ZERO);
        assert_eq!(line.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_multiplies_by_quantity() {
        let mut line = quest();
        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::new(149_700, 2));
    }

    #[test]
    fn test_serde_matches_persisted_layout() {
        let line = quest();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(
            json,
            r#"{"id":"v1","name":"Meta Quest 3","price":"US$ 499.00","quantity":1}"#
        );

        let parsed: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_serde_rejects_negative_quantity() {
        let json = r#"{"id":"v1","name":"Meta Quest 3","price":"US$ 499.00","quantity":-2}"#;
        assert!(serde_json::from_str::<CartLineItem>(json).is_err());
    }
}
