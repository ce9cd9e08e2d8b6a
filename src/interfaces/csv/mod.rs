//! CSV action scripts in, CSV observations out.

pub mod action_reader;
pub mod observation_writer;
