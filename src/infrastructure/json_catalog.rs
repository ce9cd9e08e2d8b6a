use crate::domain::money::Cents;
use crate::domain::product::Product;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryCatalog;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One catalog entry as written in the configuration file.
///
/// The price is given in dollars, e.g. `"1.00"` or `0.65`.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    price: Decimal,
}

/// Loads a product catalog from a JSON array of `{name, price}` entries.
pub struct JsonCatalog;

impl JsonCatalog {
    pub fn from_reader<R: Read>(source: R) -> Result<InMemoryCatalog> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(source)?;
        let products = entries
            .into_iter()
            .map(|entry| Product::new(entry.name, Cents::from_dollars(entry.price)?))
            .collect::<Result<Vec<_>>>()?;
        InMemoryCatalog::with_products(products)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
