//! In-memory fixture data for tests.

pub mod bootcamp;
