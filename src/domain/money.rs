use crate::error::{Result, VendError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary value held by the machine, in whole cents.
///
/// Coin values, product prices and the running balance are all expressed in
/// `Cents`. Rendering goes through `rust_decimal::Decimal` so the dollar
/// amount always carries exactly two decimal places.
///
/// Addition saturates at `u32::MAX`. Subtraction only exists as
/// [`Cents::checked_sub`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cents(pub u32);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self - rhs`, or `None` when `rhs` is larger.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// The amount in dollars, scaled to two decimal places.
    pub fn to_dollars(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Converts a dollar amount (e.g. `1.00`) into cents.
    ///
    /// Fails when the amount is negative, has fractional cents, or does not
    /// fit in a `u32`.
    pub fn from_dollars(dollars: Decimal) -> Result<Self> {
        let cents = dollars
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| VendError::InvalidPrice(format!("{} is out of range", dollars)))?;
        if cents.is_sign_negative() || !cents.fract().is_zero() {
            return Err(VendError::InvalidPrice(format!(
                "{} is not a whole number of cents",
                dollars
            )));
        }
        cents
            .to_u32()
            .map(Self)
            .ok_or_else(|| VendError::InvalidPrice(format!("{} is out of range", dollars)))
    }
}

/// Formats a cent amount as `$D.CC`.
pub fn format_value(cents: Cents) -> String {
    format!("${:.2}", cents.to_dollars())
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(*self))
    }
}

impl Add for Cents {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}
