//! Database repository layer.
//!
//! Repository structs handle database operations for each domain. They use
//! SeaORM entity models internally; conversion to domain models happens at
//! the service boundary.

pub mod bootcamp;
