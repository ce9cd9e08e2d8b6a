use crate::domain::change::CHANGE_DENOMINATIONS;
use crate::domain::money::Cents;
use crate::error::{Result, VendError};
use serde::Serialize;

/// An item for sale.
///
/// Prices are validated on construction: they must be positive and a
/// multiple of the smallest coin the machine pays change in, so any
/// overpayment can be returned exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Cents,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Cents) -> Result<Self> {
        let name = name.into();
        let step = smallest_change_unit();
        if price.is_zero() || price.value() % step.value() != 0 {
            return Err(VendError::InvalidPrice(format!(
                "{} costs {}, prices must be a positive multiple of {}",
                name, price, step
            )));
        }
        Ok(Self { name, price })
    }

    pub fn cola() -> Self {
        Self::fixed("cola", 100)
    }

    pub fn chips() -> Self {
        Self::fixed("chips", 50)
    }

    pub fn candy() -> Self {
        Self::fixed("candy", 65)
    }

    fn fixed(name: &str, price: u32) -> Self {
        Self {
            name: name.to_string(),
            price: Cents(price),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Cents {
        self.price
    }
}

fn smallest_change_unit() -> Cents {
    CHANGE_DENOMINATIONS
        .iter()
        .map(|d| d.value())
        .min()
        .unwrap_or(Cents(1))
}
