//! Domain models, request/response DTOs, and operation parameter types.

pub mod api;
pub mod bootcamp;
