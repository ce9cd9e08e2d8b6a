//! Catalog implementations: the built-in stock and the JSON configuration file.

pub mod in_memory;
pub mod json_catalog;
