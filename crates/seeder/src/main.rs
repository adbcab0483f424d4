//! LoreKeepr Seeder - Main entry point.
//!
//! Populates the engine's reference store (races and classes) exactly once
//! per setup run. There is no update-if-exists logic; re-running against a
//! non-empty store produces duplicates. The first creation error aborts the
//! remaining sequence and the process exits non-zero.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lorekeepr_client::{Api, ClientConfig, HttpApi};

mod catalogue;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lorekeepr_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Seeding reference catalogue into {}", config.base_url());

    let api = Api::new(Arc::new(HttpApi::new(config)));
    let total = catalogue::seed_all(&api).await?;

    tracing::info!("Seeding complete: {total} reference entries created");
    Ok(())
}
