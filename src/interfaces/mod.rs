pub mod action;
pub mod csv;
