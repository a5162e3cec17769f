use std::error::Error;

use ad_insights::{Clock, Dataset, InsightsConfig, QueryEngine};
use api::{ApiConfig, core::app_state::AppState};
use tracing::info;

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; variables may come from the real environment.
    let dotenv = dotenvy::dotenv().ok();

    telemetry::init()?;
    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let insights = InsightsConfig::from_env()?;
    let api_config = ApiConfig::from_env()?;

    let dataset = Dataset::bundled()?;
    let engine = QueryEngine::from_config(&insights, dataset, Clock::System)?;
    info!(
        records = engine.dataset().len(),
        interpreter = engine.interpreter_name(),
        "query engine ready"
    );

    api::start(AppState::new(engine, api_config)).await?;

    Ok(())
}
