// src/dtos/product.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductChanges};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub available: bool,
    pub category: String,
}

// Any `id` in the body is ignored; ids are immutable.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub available: Option<bool>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub available: bool,
    pub category: String,
}

// Column limits of the products table.
const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 250;
const MAX_CATEGORY_LEN: usize = 63;
const MAX_PRICE_SCALE: u32 = 2;

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    validate_len("name", name, MAX_NAME_LEN)
}

fn validate_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "Product {field} cannot be longer than {max} characters"
        )));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price cannot be negative"));
    }
    if price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(AppError::validation("Price cannot have more than 2 decimal places"));
    }
    // NUMERIC(14, 2) leaves 12 integer digits.
    if price >= Decimal::from(1_000_000_000_000i64) {
        return Err(AppError::validation("Price is too large"));
    }
    Ok(())
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        validate_name(&self.name)?;
        validate_len("description", &self.description, MAX_DESCRIPTION_LEN)?;
        validate_len("category", &self.category, MAX_CATEGORY_LEN)?;
        validate_price(self.price)?;

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            category: self.category,
        })
    }
}

impl UpdateProductRequest {
    pub fn into_changes(self) -> Result<ProductChanges, AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_len("description", description, MAX_DESCRIPTION_LEN)?;
        }
        if let Some(category) = &self.category {
            validate_len("category", category, MAX_CATEGORY_LEN)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }

        Ok(ProductChanges {
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            category: self.category,
        })
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}
