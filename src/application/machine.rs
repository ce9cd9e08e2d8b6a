use crate::domain::change::{make_change, total_value};
use crate::domain::coin::{self, Coin};
use crate::domain::display::{DisplayState, THANK_YOU};
use crate::domain::money::{self, Cents};
use crate::domain::ports::ProductCatalogBox;
use crate::domain::product::Product;
use crate::error::{Result, VendError};
use crate::infrastructure::in_memory::InMemoryCatalog;
use tracing::{debug, info, warn};

/// The vending machine state machine.
///
/// Tracks the credited balance, coins waiting in the return tray and the
/// display. Every operation is infallible: bad coins are rejected into the
/// tray and unaffordable purchases only prompt with the price.
pub struct VendingMachine {
    balance: Cents,
    rejected: Vec<Coin>,
    returned: Vec<Coin>,
    display: DisplayState,
    catalog: ProductCatalogBox,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Creates a machine stocked with the default catalog.
    pub fn new() -> Self {
        Self::with_catalog(Box::new(InMemoryCatalog::default()))
    }

    pub fn with_catalog(catalog: ProductCatalogBox) -> Self {
        Self {
            balance: Cents::ZERO,
            rejected: Vec::new(),
            returned: Vec::new(),
            display: DisplayState::new(),
            catalog,
        }
    }

    /// Formats a cent amount as `$D.CC`.
    pub fn format_value(cents: Cents) -> String {
        money::format_value(cents)
    }

    /// Whether two coins resolve to the same denomination by measurement.
    pub fn match_coins(a: &Coin, b: &Coin) -> bool {
        coin::match_coins(a, b)
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Credits a nickel, dime or quarter; anything else goes to the tray.
    pub fn accept(&mut self, coin: Coin) {
        match coin.denomination().filter(|d| d.is_accepted()) {
            Some(denomination) => {
                self.balance += denomination.value();
                self.display.clear();
                debug!(%coin, balance = %self.balance, "coin accepted");
            }
            None => {
                warn!(%coin, "coin rejected");
                self.rejected.push(coin);
            }
        }
    }

    /// Vends `product` if the balance covers it, returning any overpayment.
    pub fn buy(&mut self, product: &Product) {
        let price = product.price();
        let Some(overpayment) = self.balance.checked_sub(price) else {
            warn!(
                product = product.name(),
                price = %price,
                balance = %self.balance,
                "insufficient funds"
            );
            self.display
                .set_with_lifetime(format!("PRICE: {}", Self::format_value(price)), 1);
            return;
        };

        let change = make_change(overpayment);
        info!(
            product = product.name(),
            change = %total_value(&change),
            "product dispensed"
        );
        self.returned.extend(change);
        self.balance = Cents::ZERO;
        self.display.set_with_lifetime(THANK_YOU, 1);
    }

    /// Looks up `name` in the catalog and buys it.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let product = self
            .catalog
            .get(name)
            .ok_or_else(|| VendError::UnknownProduct(name.trim().to_string()))?;
        self.buy(&product);
        Ok(())
    }

    /// Returns the whole balance as change. Does nothing when empty.
    pub fn cancel(&mut self) {
        if self.balance.is_zero() {
            return;
        }
        info!(amount = %self.balance, "transaction cancelled");
        self.returned.extend(make_change(self.balance));
        self.balance = Cents::ZERO;
    }

    /// Reads the display. Timed messages count down on each read.
    pub fn display(&mut self) -> String {
        self.display.read(self.balance)
    }

    pub fn set_display_with_lifetime(&mut self, message: impl Into<String>, reads: u32) {
        self.display.set_with_lifetime(message, reads);
    }

    pub fn set_display(&mut self, message: impl Into<String>) {
        self.display.set(message);
    }

    /// Empties the coin return tray: rejected coins first, then change.
    pub fn coin_return(&mut self) -> Vec<Coin> {
        let mut coins = std::mem::take(&mut self.rejected);
        coins.append(&mut self.returned);
        coins
    }
}
