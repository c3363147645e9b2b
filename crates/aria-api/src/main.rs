use tracing_subscriber::EnvFilter;

use aria_api::state::AppState;
use aria_import::ImportConfig;
use aria_instruments::catalog::Catalog;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let catalog = Catalog::builtin();
    let import_config = ImportConfig::from_env();
    tracing::info!(
        instruments = catalog.len(),
        max_input_bytes = import_config.max_input_bytes,
        "starting aria-api"
    );

    let app = aria_api::app(AppState::new(catalog, import_config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
