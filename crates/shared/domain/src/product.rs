//! Product domain entity, validated drafts and search terms.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    MAX_CATEGORY_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_PRODUCT_NAME_LENGTH, MAX_SEARCH_LENGTH,
    MIN_CATEGORY_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_PRODUCT_NAME_LENGTH,
};
use crate::error::{DomainError, DomainResult};
use crate::pricing::validate_price;
use crate::text;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "openapi", schema(value_type = f64, example = 9.99))]
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw product fields as submitted by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
}

/// Product fields that passed validation and sanitisation.
///
/// Only constructible through [`ProductDraft::new`], so holding one proves
/// the four mutable fields are within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: Decimal,
    category: String,
    description: String,
}

impl ProductDraft {
    /// Validate in field order (name, price, category, description) and
    /// fail on the first violated constraint.
    pub fn new(input: ProductInput) -> DomainResult<Self> {
        let name = text::clean_field(
            "Name",
            &input.name,
            MIN_PRODUCT_NAME_LENGTH,
            MAX_PRODUCT_NAME_LENGTH,
        )?;
        let price = validate_price(input.price)?;
        let category = text::clean_field(
            "Category",
            &input.category,
            MIN_CATEGORY_LENGTH,
            MAX_CATEGORY_LENGTH,
        )?;
        let description = text::clean_field(
            "Description",
            &input.description,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )?;

        Ok(Self {
            name,
            price,
            category,
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Case-insensitive substring filter on product names.
///
/// Blank terms mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch(Option<String>);

impl ProductSearch {
    pub fn new(raw: Option<&str>) -> DomainResult<Self> {
        let term = raw.map(str::trim).filter(|t| !t.is_empty());
        match term {
            Some(t) if t.chars().count() > MAX_SEARCH_LENGTH => Err(DomainError::validation(
                format!("Search must be at most {} characters", MAX_SEARCH_LENGTH),
            )),
            Some(t) => Ok(Self(Some(t.to_string()))),
            None => Ok(Self(None)),
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
