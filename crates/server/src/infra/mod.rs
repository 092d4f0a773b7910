//! Infrastructure layer - database bootstrap, migrations and seed data.

mod db;
pub mod migrations;
pub mod seed;

pub use db::Database;
pub use migrations::Migrator;
