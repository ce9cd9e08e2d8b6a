use crate::domain::money::{Cents, format_value};

pub const INSERT_COIN: &str = "INSERT COIN";
pub const THANK_YOU: &str = "THANK YOU";

/// How many more reads a message survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifetime {
    Reads(u32),
    Infinite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    text: String,
    lifetime: Lifetime,
}

/// The customer-facing display.
///
/// Holds at most one pending message. When no message is pending the
/// display falls back to the balance, or `INSERT COIN` when the balance is
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    message: Option<Message>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` for the next `reads` reads. Zero reads leaves the
    /// display as it was.
    pub fn set_with_lifetime(&mut self, text: impl Into<String>, reads: u32) {
        if reads == 0 {
            return;
        }
        self.message = Some(Message {
            text: text.into(),
            lifetime: Lifetime::Reads(reads),
        });
    }

    /// Shows `text` until another transition replaces it.
    pub fn set(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            lifetime: Lifetime::Infinite,
        });
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Reads the display, consuming one show of a timed message.
    pub fn read(&mut self, balance: Cents) -> String {
        let Some(message) = self.message.as_mut() else {
            return fallback(balance);
        };
        let text = message.text.clone();
        let expired = match &mut message.lifetime {
            Lifetime::Reads(remaining) => {
                *remaining -= 1;
                *remaining == 0
            }
            Lifetime::Infinite => false,
        };
        if expired {
            self.message = None;
        }
        text
    }
}

fn fallback(balance: Cents) -> String {
    if balance.is_zero() {
        INSERT_COIN.to_string()
    } else {
        format_value(balance)
    }
}
