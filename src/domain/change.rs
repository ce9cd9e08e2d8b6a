use crate::domain::coin::{Coin, Denomination};
use crate::domain::money::Cents;

/// Denominations the machine pays change in, largest first.
pub const CHANGE_DENOMINATIONS: [Denomination; 3] = [
    Denomination::Quarter,
    Denomination::Dime,
    Denomination::Nickel,
];

/// Breaks `amount` into coins by repeatedly taking the largest
/// denomination that still fits.
///
/// Amounts that are not a multiple of five cents leave a remainder that
/// cannot be paid out; it is dropped. Prices are validated so this never
/// happens inside the machine.
pub fn make_change(amount: Cents) -> Vec<Coin> {
    let mut remaining = amount;
    let mut coins = Vec::new();
    for denomination in CHANGE_DENOMINATIONS {
        let value = denomination.value();
        while let Some(rest) = remaining.checked_sub(value) {
            remaining = rest;
            coins.push(denomination.coin());
        }
    }
    coins
}

/// Total value of a set of coins, as judged by measurement.
pub fn total_value(coins: &[Coin]) -> Cents {
    coins.iter().fold(Cents::ZERO, |acc, coin| acc + coin.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_makes_no_change() {
        assert!(make_change(Cents::ZERO).is_empty());
    }

    #[test]
    fn test_quarter_is_one_coin() {
        assert_eq!(make_change(Cents(25)), vec![Coin::Quarter]);
    }

    #[test]
    fn test_largest_first() {
        assert_eq!(
            make_change(Cents(90)),
            vec![
                Coin::Quarter,
                Coin::Quarter,
                Coin::Quarter,
                Coin::Dime,
                Coin::Nickel
            ]
        );
        assert_eq!(make_change(Cents(15)), vec![Coin::Dime, Coin::Nickel]);
    }

    #[test]
    fn test_remainder_below_nickel_is_dropped() {
        assert_eq!(make_change(Cents(7)), vec![Coin::Nickel]);
        assert!(make_change(Cents(4)).is_empty());
    }

    #[test]
    fn test_total_value() {
        let coins = make_change(Cents(140));
        assert_eq!(total_value(&coins), Cents(140));
    }
}
