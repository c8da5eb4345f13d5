//! Seeder binary: one-shot import or delete of bootcamp fixture data.
//!
//! Usage:
//!   seed -i   import the fixture file (SEED_FILE, default data/bootcamps.json)
//!   seed -d   delete all bootcamps

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use devcamp::{
    config::Config, error::AppError, seed, service::geocoder::MapQuestGeocoder, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devcamp=info")),
        )
        .init();

    let flag = std::env::args().nth(1);

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    match flag.as_deref() {
        Some("-i") => {
            let geocoder = Arc::new(MapQuestGeocoder::new(reqwest::Client::new(), &config));

            let imported = seed::import(&db, geocoder.as_ref(), &config.seed_file).await?;

            tracing::info!("Data imported: {} bootcamps", imported);
        }
        Some("-d") => {
            let deleted = seed::destroy(&db).await?;

            tracing::info!("Data destroyed: {} bootcamps", deleted);
        }
        _ => {
            eprintln!("Usage: seed [-i | -d]");
            std::process::exit(2);
        }
    }

    Ok(())
}
