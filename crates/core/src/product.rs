//! Product model, create/update DTOs, and field validation.
//!
//! Validation reports every violated rule at once rather than stopping at
//! the first failure, so API clients can fix a whole payload in one round
//! trip. The create DTO keeps its fields optional for the same reason: a
//! missing field must surface as an itemized violation, not as a body
//! deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{ProductId, Timestamp};

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for a category label.
pub const MAX_CATEGORY_LEN: usize = 100;

/* --------------------------------------------------------------------------
   Models and DTOs
   -------------------------------------------------------------------------- */

/// A product record as held by the store.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire DTO for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// Wire DTO for updating an existing product. All fields are optional;
/// a field that is present must satisfy the same rule as on create.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// A create payload that has passed validation.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a create payload, returning the checked fields.
///
/// Collects every violation before failing.
pub fn validate_new_product(input: &CreateProduct) -> Result<NewProduct, CoreError> {
    let mut errors = Vec::new();

    match input.name.as_deref() {
        None => errors.push("name is required".to_string()),
        Some(name) => {
            if let Some(e) = name_violation(name) {
                errors.push(e);
            }
        }
    }

    match input.price {
        None => errors.push("price is required".to_string()),
        Some(price) => {
            if let Some(e) = price_violation(price) {
                errors.push(e);
            }
        }
    }

    match input.category.as_deref() {
        None => errors.push("category is required".to_string()),
        Some(category) => {
            if let Some(e) = category_violation(category) {
                errors.push(e);
            }
        }
    }

    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }

    // Presence of all three fields was just checked above.
    Ok(NewProduct {
        name: input.name.clone().unwrap_or_default(),
        price: input.price.unwrap_or_default(),
        category: input.category.clone().unwrap_or_default(),
    })
}

/// Validate an update payload. Only fields that are present are checked.
pub fn validate_product_update(input: &UpdateProduct) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    if let Some(name) = input.name.as_deref() {
        if let Some(e) = name_violation(name) {
            errors.push(e);
        }
    }
    if let Some(price) = input.price {
        if let Some(e) = price_violation(price) {
            errors.push(e);
        }
    }
    if let Some(category) = input.category.as_deref() {
        if let Some(e) = category_violation(category) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}

/// Rule for `name`: non-empty after trimming, within length limit.
fn name_violation(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("name must not be empty".to_string());
    }
    // Limits are in characters, not bytes.
    let chars = name.chars().count();
    if chars > MAX_NAME_LEN {
        return Some(format!("name too long: {chars} chars (max {MAX_NAME_LEN})"));
    }
    None
}

/// Rule for `price`: a positive, finite number. NaN and infinities fail.
fn price_violation(price: f64) -> Option<String> {
    if price > 0.0 && price.is_finite() {
        None
    } else {
        Some("price must be a positive number".to_string())
    }
}

/// Rule for `category`: non-empty after trimming, within length limit.
fn category_violation(category: &str) -> Option<String> {
    if category.trim().is_empty() {
        return Some("category must not be empty".to_string());
    }
    let chars = category.chars().count();
    if chars > MAX_CATEGORY_LEN {
        return Some(format!(
            "category too long: {chars} chars (max {MAX_CATEGORY_LEN})"
        ));
    }
    None
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
