//! SeaORM entity models for the devcamp database schema.

pub mod bootcamp;
pub mod prelude;
