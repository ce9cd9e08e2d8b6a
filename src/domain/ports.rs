use super::product::Product;

/// Lookup of products by the name a customer selects them with.
pub trait ProductCatalog: Send + Sync {
    /// Finds a product by name, ignoring ASCII case.
    fn get(&self, name: &str) -> Option<Product>;
    fn products(&self) -> Vec<Product>;
}

pub type ProductCatalogBox = Box<dyn ProductCatalog>;
