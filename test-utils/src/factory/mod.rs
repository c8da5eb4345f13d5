//! Factories for inserting test entities into the database.

pub mod bootcamp;
pub mod helpers;
