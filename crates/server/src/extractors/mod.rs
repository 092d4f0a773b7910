//! Request extractors that validate before the handler runs.

mod validated_json;
mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

use validator::ValidationErrors;

use common::AppError;

/// Request field names in the order their rules are checked.
///
/// Validation stops at the first failing field in this order, the same
/// order the domain uses when it re-validates.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Turn validator output into a single message.
///
/// Fields listed in `order` are reported first, in that order; anything else
/// follows by name.
pub(crate) fn first_error(errors: &ValidationErrors, order: &[&str]) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    let rank = |field: &str| order.iter().position(|f| *f == field).unwrap_or(order.len());
    fields.sort_by(|(a, _), (b, _)| {
        let a: &str = a;
        let b: &str = b;
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });

    let message = fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .unwrap_or_else(|| "Validation failed".to_string());

    AppError::validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
        #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
        description: String,
        #[validate(range(min = 1))]
        page: u64,
    }

    const ORDER: &[&str] = &["name", "description", "page"];

    #[test]
    fn test_first_error_follows_declared_order() {
        let sample = Sample {
            name: "x".to_string(),
            description: "short".to_string(),
            page: 1,
        };

        let err = first_error(&sample.validate().unwrap_err(), ORDER);
        assert_eq!(err.to_string(), "Name must be at least 2 characters");
    }

    #[test]
    fn test_unlisted_fields_fall_back_to_name_order() {
        let sample = Sample {
            name: "x".to_string(),
            description: "short".to_string(),
            page: 1,
        };

        let err = first_error(&sample.validate().unwrap_err(), &[]);
        assert_eq!(err.to_string(), "Description must be at least 10 characters");
    }

    #[test]
    fn test_missing_message_names_the_field() {
        let sample = Sample {
            name: "Widget".to_string(),
            description: "long enough description".to_string(),
            page: 0,
        };

        let err = first_error(&sample.validate().unwrap_err(), ORDER);
        assert_eq!(err.to_string(), "page is invalid");
    }
}
