use crate::application::machine::VendingMachine;
use crate::domain::coin::Coin;
use crate::error::Result;
use serde::Serialize;

/// A single customer interaction with the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert(Coin),
    Select(String),
    Cancel,
    Display,
    Return,
}

/// Something the customer sees as a result of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub action: String,
    pub output: String,
}

impl Observation {
    pub fn new(action: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            output: output.into(),
        }
    }
}

impl Action {
    /// Applies the action to `machine`.
    ///
    /// Reading the display or emptying the coin return produces an
    /// observation; other actions only change machine state.
    pub fn apply(self, machine: &mut VendingMachine) -> Result<Option<Observation>> {
        let observation = match self {
            Action::Insert(coin) => {
                machine.accept(coin);
                None
            }
            Action::Select(name) => {
                machine.select(&name)?;
                None
            }
            Action::Cancel => {
                machine.cancel();
                None
            }
            Action::Display => Some(Observation::new("display", machine.display())),
            Action::Return => {
                let coins = machine
                    .coin_return()
                    .iter()
                    .map(Coin::to_string)
                    .collect::<Vec<_>>()
                    .join(";");
                Some(Observation::new("return", coins))
            }
        };
        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendError;

    #[test]
    fn test_display_is_observed() {
        let mut machine = VendingMachine::new();
        let observation = Action::Display.apply(&mut machine).unwrap();
        assert_eq!(observation, Some(Observation::new("display", "INSERT COIN")));
    }

    #[test]
    fn test_return_joins_coin_tokens() {
        let mut machine = VendingMachine::new();
        Action::Insert(Coin::Penny).apply(&mut machine).unwrap();
        Action::Insert(Coin::Dime).apply(&mut machine).unwrap();
        Action::Cancel.apply(&mut machine).unwrap();
        let observation = Action::Return.apply(&mut machine).unwrap();
        assert_eq!(observation, Some(Observation::new("return", "penny;dime")));
    }

    #[test]
    fn test_select_unknown_product_fails() {
        let mut machine = VendingMachine::new();
        let result = Action::Select("gum".to_string()).apply(&mut machine);
        assert!(matches!(result, Err(VendError::UnknownProduct(_))));
    }
}
