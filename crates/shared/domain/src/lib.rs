//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Users and products, the rules that guard them, and the pricing and
//! pagination arithmetic shared by the services.

pub mod constants;
pub mod error;
pub mod pagination;
pub mod password;
pub mod pricing;
pub mod product;
pub mod text;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use pagination::{Page, PageRequest};
pub use password::Password;
pub use pricing::{cents_to_price, price_to_cents, Discount};
pub use product::{Product, ProductDraft, ProductInput, ProductSearch};
pub use user::{normalize_email, NewUser, Registration, User, UserResponse, UserRole};
