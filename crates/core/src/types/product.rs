//! Product shapes for the catalog.
//!
//! [`NewProduct`] is what gets written to the store when the catalog is seeded.
//! [`Product`] is what the listing endpoints return: the same fields plus the
//! store-assigned identity, if there is one.

use serde::{Deserialize, Serialize};

use super::id::DocumentId;

/// Category used when a stored document does not carry one.
pub const DEFAULT_CATEGORY: &str = "shoes";

/// A product as written to the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    /// Unit price, never negative.
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Image URL.
    pub image: Option<String>,
    pub brand: Option<String>,
    pub colors: Option<Vec<String>>,
}

/// A product as served by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store identity; `None` for fallback sample data.
    pub id: Option<DocumentId>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub colors: Option<Vec<String>>,
}

impl Product {
    /// Attach an optional identity to a new product.
    #[must_use]
    pub fn from_new(product: NewProduct, id: Option<DocumentId>) -> Self {
        Self {
            id,
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            image: product.image,
            brand: product.brand,
            colors: product.colors,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

const fn default_in_stock() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product: NewProduct =
            serde_json::from_str(r#"{"title": "Loafer", "price": 10.0}"#).unwrap();
        assert_eq!(product.category, "shoes");
        assert!(product.in_stock);
        assert!(product.colors.is_none());
    }

    #[test]
    fn test_product_serializes_absent_fields_as_null() {
        let product = Product::from_new(
            NewProduct {
                title: "Loafer".to_string(),
                description: None,
                price: 10.0,
                category: DEFAULT_CATEGORY.to_string(),
                in_stock: true,
                image: None,
                brand: None,
                colors: None,
            },
            None,
        );

        let value = serde_json::to_value(&product).unwrap();
        assert!(value["id"].is_null());
        assert!(value["brand"].is_null());
        assert_eq!(value["category"], "shoes");
    }
}
