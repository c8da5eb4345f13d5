//! Devcamp — REST API for managing bootcamp listings.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and the slug/geocode enrichment
//!   pipeline run before every write, plus the geocoder client
//! - **Data Layer** (`data/`) - Database operations and the radius containment query
//! - **Model Layer** (`model/`) - Domain models, request/response DTOs, and
//!   operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, geocoder)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Seed** (`seed`) - One-shot fixture import/delete used by the `seed` binary
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** converts the DTO to params, calls the service
//! 3. **Service** validates, derives the slug, geocodes the address, and calls
//!    the repository
//! 4. **Data** performs the query and returns entity models
//! 5. **Controller** converts the domain model back to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
