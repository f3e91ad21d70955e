//! Wiring & DI. Entry point: bootstrap adapters, inject into the session, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_time::adapters::mock_provider::MockQuestionProvider;
use trivia_time::adapters::opentdb::OpenTdbProvider;
use trivia_time::adapters::ui::tui::TuiInputPort;
use trivia_time::ports::{InputPort, QuestionProvider};
use trivia_time::shared::config::AppConfig;
use trivia_time::usecases::QuizSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Logs go to stderr at `warn` by default so they stay out of the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "invalid configuration, using defaults");
            AppConfig::default()
        }
    };

    let provider: Arc<dyn QuestionProvider> = if cfg.is_offline() {
        info!("offline mode: serving built-in questions");
        Arc::new(MockQuestionProvider::with_delay(
            cfg.offline_delay_ms_or_default(),
        ))
    } else {
        let url = cfg.api_url_or_default();
        info!(url = %url, timeout = ?cfg.request_timeout(), "using Open Trivia DB");
        Arc::new(
            OpenTdbProvider::new(url, cfg.request_timeout())
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    trivia_time::adapters::ui::init_ui();

    let session = Arc::new(QuizSession::new(provider));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(Arc::clone(&session)));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
