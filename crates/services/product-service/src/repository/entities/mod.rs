//! SeaORM entities owned by the product service.

pub mod product;
