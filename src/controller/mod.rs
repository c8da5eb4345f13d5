//! HTTP request handlers and DTO conversion.

pub mod bootcamp;
