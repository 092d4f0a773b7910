//! SeaORM entities owned by the auth service.

pub mod user;
