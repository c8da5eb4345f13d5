//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the `DatabaseConnection` is a connection pool and the geocoder is
//! reference-counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::geocoder::Geocoder;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Geocoding collaborator used by the enrichment pipeline and the radius
    /// search. Held behind the trait so tests can substitute a stub.
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after the database connection and
    /// geocoder client have been initialized.
    pub fn new(db: DatabaseConnection, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { db, geocoder }
    }
}
