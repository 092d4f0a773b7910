//! Field rules for request DTOs.
//!
//! Each check delegates to the domain so the HTTP layer and the services
//! report identical messages.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

use domain::pricing::validate_price;
use domain::text::check_length;
use domain::{
    normalize_email, DomainResult, Discount, Password, MAX_CATEGORY_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_PRODUCT_NAME_LENGTH,
    MIN_CATEGORY_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_NAME_LENGTH, MIN_PRODUCT_NAME_LENGTH,
};

fn rule<T>(code: &'static str, result: DomainResult<T>) -> Result<(), ValidationError> {
    result.map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new(code);
        err.message = Some(Cow::Owned(e.to_string()));
        err
    })
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    rule("email", normalize_email(value))
}

pub fn new_password(value: &str) -> Result<(), ValidationError> {
    rule("password", Password::validate(value))
}

/// Login only needs a non-empty password within the hashing bound
pub fn login_password(value: &str) -> Result<(), ValidationError> {
    rule("password", check_length("Password", value, 1, MAX_PASSWORD_LENGTH))
}

pub fn person_name(value: &str) -> Result<(), ValidationError> {
    rule("name", check_length("Name", value.trim(), MIN_NAME_LENGTH, MAX_NAME_LENGTH))
}

pub fn product_name(value: &str) -> Result<(), ValidationError> {
    rule(
        "name",
        check_length("Name", value.trim(), MIN_PRODUCT_NAME_LENGTH, MAX_PRODUCT_NAME_LENGTH),
    )
}

pub fn category(value: &str) -> Result<(), ValidationError> {
    rule(
        "category",
        check_length("Category", value.trim(), MIN_CATEGORY_LENGTH, MAX_CATEGORY_LENGTH),
    )
}

pub fn description(value: &str) -> Result<(), ValidationError> {
    rule(
        "description",
        check_length(
            "Description",
            value.trim(),
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        ),
    )
}

pub fn price(value: &Decimal) -> Result<(), ValidationError> {
    rule("price", validate_price(*value))
}

pub fn discount(value: &Decimal) -> Result<(), ValidationError> {
    rule("discount_percent", Discount::new(*value))
}
