//! Application layer containing the vending machine state machine.
//!
//! `VendingMachine` owns the balance, the coin return tray, the display and
//! a product catalog, and exposes the customer operations on top of the
//! domain types.

pub mod machine;
