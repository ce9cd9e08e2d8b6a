//! Domain layer: coins, money, products and the display, free of any I/O.

pub mod change;
pub mod coin;
pub mod display;
pub mod money;
pub mod ports;
pub mod product;
