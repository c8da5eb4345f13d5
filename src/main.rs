use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use devcamp::{
    config::Config,
    error::AppError,
    router::{self, ApiDoc},
    service::geocoder::MapQuestGeocoder,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("devcamp=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let geocoder = Arc::new(MapQuestGeocoder::new(reqwest::Client::new(), &config));

    let state = AppState::new(db, geocoder);

    let mut app = router::router()
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Request logging in development, the quiet default elsewhere.
    if config.is_development() {
        app = app.layer(TraceLayer::new_for_http());
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        "Server running in {} mode on port {}",
        config.environment,
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
