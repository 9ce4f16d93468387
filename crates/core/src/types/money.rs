//! Type-safe money representation in minor currency units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is negative.
    #[error("money amount cannot be negative (got {0})")]
    Negative(i64),
    /// An arithmetic operation overflowed.
    #[error("money arithmetic overflow")]
    Overflow,
}

/// A non-negative amount of money in minor currency units.
///
/// Tugrik amounts (and the Stripe API) are integral minor units, so the
/// representation is a plain `i64` that is guaranteed non-negative on
/// construction and on deserialization. Arithmetic is checked; there is no
/// way to produce a negative or overflowed amount without going through
/// [`MoneyError`].
///
/// ## Examples
///
/// ```
/// use tavag_core::Money;
///
/// let unit_price = Money::new(1000).unwrap();
/// let line = unit_price.checked_mul(2).unwrap();
/// let fee = Money::new(2490).unwrap();
/// assert_eq!(line.checked_add(fee).unwrap().minor_units(), 4490);
///
/// assert!(Money::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new amount from minor units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if `minor_units` is negative.
    pub const fn new(minor_units: i64) -> Result<Self, MoneyError> {
        if minor_units < 0 {
            return Err(MoneyError::Negative(minor_units));
        }
        Ok(Self(minor_units))
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the sum overflows.
    pub const fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        match self.0.checked_add(other.0) {
            Some(sum) => Ok(Self(sum)),
            None => Err(MoneyError::Overflow),
        }
    }

    /// Checked multiplication by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the product overflows.
    pub const fn checked_mul(self, quantity: u32) -> Result<Self, MoneyError> {
        match self.0.checked_mul(quantity as i64) {
            Some(product) => Ok(Self(product)),
            None => Err(MoneyError::Overflow),
        }
    }
}

impl TryFrom<i64> for Money {
    type Error = MoneyError;

    fn try_from(minor_units: i64) -> Result<Self, Self::Error> {
        Self::new(minor_units)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency codes accepted by the payment layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Mongolian tugrik.
    #[default]
    Mnt,
    Usd,
}

impl Currency {
    /// Lowercase code as the Stripe API expects it.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Mnt => "mnt",
            Self::Usd => "usd",
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Mnt => "₮",
            Self::Usd => "$",
        }
    }
}
