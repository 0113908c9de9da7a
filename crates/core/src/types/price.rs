//! Price representation using decimal arithmetic.
//!
//! Prices on the site are carried around as display strings in the literal
//! form `"US$ <amount>"` (that is what product markup shows and what the
//! cart persists). [`Price`] is the parsed numeric side of that contract:
//! it extracts the decimal amount for computation and formats it back with
//! exactly two decimal places.

use core::fmt;

use rust_decimal::Decimal;

/// Errors that can occur when parsing a [`Price`] from its display form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string has no amount to parse.
    #[error("price cannot be empty")]
    Empty,
    /// The amount portion is not a valid decimal number.
    #[error("invalid price amount: {0:?}")]
    InvalidAmount(String),
    /// The amount parsed to a negative number.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative price in US dollars.
///
/// ## Examples
///
/// ```
/// use verge_vr_core::Price;
///
/// let price = Price::parse_display("US$ 499.00").unwrap();
/// assert_eq!(price.display(), "US$ 499.00");
///
/// // The display prefix is optional when parsing
/// assert!(Price::parse_display("19.99").is_ok());
///
/// // Negative and malformed amounts are rejected
/// assert!(Price::parse_display("US$ -5.00").is_err());
/// assert!(Price::parse_display("US$ free").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// Prefix used for all price display strings on the site.
    pub const DISPLAY_PREFIX: &'static str = "US$ ";

    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Price` from a display string.
    ///
    /// Accepts both the full display form (`"US$ 499.00"`) and a bare
    /// decimal amount (`"499.00"`). Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount portion is empty, is not a valid
    /// decimal number, or is negative.
    pub fn parse_display(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        let amount = s.strip_prefix(Self::DISPLAY_PREFIX).unwrap_or(s).trim();

        if amount.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = amount
            .parse()
            .map_err(|_| PriceError::InvalidAmount(amount.to_owned()))?;

        if amount.is_sign_negative() {
            return Err(PriceError::Negative(amount));
        }

        Ok(Self(amount))
    }

    /// Create a `Price` from an already-validated decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is negative.
    pub fn from_amount(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// The numeric amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format this price in the site's display form.
    #[must_use]
    pub fn display(&self) -> String {
        format_usd(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a dollar amount in the site's display form.
///
/// Rounds to exactly two decimal places and applies the `"US$ "` prefix.
/// This is the single place where the prefix is attached: computations work
/// on numeric amounts and only rendering goes through here.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("{}{:.2}", Price::DISPLAY_PREFIX, amount.round_dp(2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        let price = Price::parse_display("US$ 499.00").unwrap();
        assert_eq!(price.amount(), Decimal::new(49900, 2));
    }

    #[test]
    fn test_parse_bare_amount() {
        let price = Price::parse_display("19.99").unwrap();
        assert_eq!(price.amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let price = Price::parse_display("  US$ 3499.00 ").unwrap();
        assert_eq!(price.amount(), Decimal::new(349900, 2));
    }

    #[test]
    fn test_parse_zero() {
        let price = Price::parse_display("US$ 0.00").unwrap();
        assert_eq!(price, Price::ZERO);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Price::parse_display(""), Err(PriceError::Empty)));
        assert!(matches!(
            Price::parse_display("US$ "),
            Err(PriceError::Empty)
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Price::parse_display("US$ free"),
            Err(PriceError::InvalidAmount(_))
        ));
        assert!(matches!(
            Price::parse_display("not a price"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(
            Price::parse_display("US$ -5.00"),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        let price = Price::parse_display("US$ 499").unwrap();
        assert_eq!(price.display(), "US$ 499.00");

        let price = Price::parse_display("US$ 19.9").unwrap();
        assert_eq!(price.display(), "US$ 19.90");
    }

    #[test]
    fn test_display_rounds_at_boundary() {
        // The stored amount keeps full precision; only display rounds.
        let price = Price::parse_display("US$ 19.999").unwrap();
        assert_eq!(price.amount(), Decimal::new(19999, 3));
        assert_eq!(price.display(), "US$ 20.00");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::ZERO), "US$ 0.00");
        assert_eq!(format_usd(Decimal::new(99800, 2)), "US$ 998.00");
    }

    #[test]
    fn test_from_amount_rejects_negative() {
        assert!(Price::from_amount(Decimal::new(-1, 0)).is_err());
        assert!(Price::from_amount(Decimal::ONE).is_ok());
    }
}
