//! Raw document to [`Product`] normalization.
//!
//! Stored documents are schemaless, so every field is coerced on the way out:
//!
//! | field | absent | coercion |
//! |---|---|---|
//! | `_id` | no id | string as-is, other values as JSON text, empty or `null` -> no id |
//! | `title` | error | must be a string |
//! | `price` | `0.0` | numbers, numeric strings, booleans (1.0 / 0.0); must be finite and >= 0 |
//! | `in_stock` | `true` | truthiness |
//! | `category` | `"shoes"` | must be a string |
//! | `description`, `image`, `brand` | none | string or `null` |
//! | `colors` | none | array of strings or `null` |

use serde_json::Value;

use stride_core::{DEFAULT_CATEGORY, DocumentId, Product};

use super::CatalogError;
use crate::db::{Document, ID_FIELD};

/// Normalize a raw store document into a product.
///
/// # Errors
///
/// Returns `CatalogError::Validation` naming the first field that cannot be coerced.
pub fn normalize_document(document: &Document) -> Result<Product, CatalogError> {
    Ok(Product {
        id: document_id(document.get(ID_FIELD)),
        title: required_string(document, "title")?,
        description: optional_string(document, "description")?,
        price: price(document.get("price"))?,
        category: category(document.get("category"))?,
        in_stock: document.get("in_stock").is_none_or(truthy),
        image: optional_string(document, "image")?,
        brand: optional_string(document, "brand")?,
        colors: colors(document.get("colors"))?,
    })
}

fn document_id(value: Option<&Value>) -> Option<DocumentId> {
    match value? {
        Value::Null => None,
        Value::String(id) => DocumentId::from_raw(id),
        other => DocumentId::from_raw(&other.to_string()),
    }
}

fn required_string(document: &Document, field: &'static str) -> Result<String, CatalogError> {
    match document.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        None | Some(Value::Null) => Err(CatalogError::invalid(field, "field required")),
        Some(other) => Err(CatalogError::invalid(
            field,
            format!("expected a string, got {other}"),
        )),
    }
}

fn optional_string(document: &Document, field: &'static str) -> Result<Option<String>, CatalogError> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(CatalogError::invalid(
            field,
            format!("expected a string, got {other}"),
        )),
    }
}

fn price(value: Option<&Value>) -> Result<f64, CatalogError> {
    let price = match value {
        None => 0.0,
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| CatalogError::invalid("price", format!("{number} is not a float")))?,
        Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|_| {
            CatalogError::invalid("price", format!("could not convert {text:?} to float"))
        })?,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(other) => {
            return Err(CatalogError::invalid(
                "price",
                format!("could not convert {other} to float"),
            ));
        }
    };

    if !price.is_finite() {
        return Err(CatalogError::invalid("price", "must be a finite number"));
    }
    if price < 0.0 {
        return Err(CatalogError::invalid(
            "price",
            format!("must be greater than or equal to 0 (got {price})"),
        ));
    }
    Ok(price)
}

fn category(value: Option<&Value>) -> Result<String, CatalogError> {
    match value {
        None => Ok(DEFAULT_CATEGORY.to_string()),
        Some(Value::String(category)) => Ok(category.clone()),
        Some(other) => Err(CatalogError::invalid(
            "category",
            format!("expected a string, got {other}"),
        )),
    }
}

fn colors(value: Option<&Value>) -> Result<Option<Vec<String>>, CatalogError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(color) => Ok(color.clone()),
                other => Err(CatalogError::invalid(
                    "colors",
                    format!("expected a string entry, got {other}"),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => Err(CatalogError::invalid(
            "colors",
            format!("expected a list, got {other}"),
        )),
    }
}

/// Truthiness of a JSON value: empty, zero, `false` and `null` are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
