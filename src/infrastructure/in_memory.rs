use crate::domain::ports::ProductCatalog;
use crate::domain::product::Product;
use crate::error::{Result, VendError};

/// An in-memory product catalog.
///
/// Keeps products in the order they were supplied. The default catalog
/// stocks cola, chips and candy.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `products`, rejecting duplicate names.
    pub fn with_products(products: Vec<Product>) -> Result<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i]
                .iter()
                .any(|p| p.name().eq_ignore_ascii_case(product.name()))
            {
                return Err(VendError::Config(format!(
                    "duplicate product name: {}",
                    product.name()
                )));
            }
        }
        Ok(Self { products })
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self {
            products: vec![Product::cola(), Product::chips(), Product::candy()],
        }
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn get(&self, name: &str) -> Option<Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }
}
