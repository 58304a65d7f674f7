//! Starts the task management HTTP service.
//!
//! Configuration comes from the environment, optionally seeded from a `.env`
//! file in the working directory. See [`taskwise::config::AppConfig`].

use std::sync::Arc;

use taskwise::{
    api::{self, AppState},
    config::AppConfig,
    task::{
        adapters::{
            generation::{GeminiGenerator, StubGenerator},
            memory::InMemoryTaskRepository,
        },
        composition::{UseCaseOptions, build_use_cases},
        ports::{StructuredGenerator, TaskRepository},
    },
};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "taskwise=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable environment file"),
    }

    let config = AppConfig::from_env()?;
    let repository = build_repository(&config)?;
    let generator = build_generator(&config);
    let use_cases = build_use_cases(
        repository,
        generator,
        UseCaseOptions {
            generation_timeout: config.generation_timeout,
        },
    );
    let app = api::router(Arc::new(AppState::new(use_cases, config.mode)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, mode = ?config.mode, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn build_generator(config: &AppConfig) -> Arc<dyn StructuredGenerator> {
    if let Some(gemini) = &config.gemini {
        info!(model = %gemini.model, "using Gemini generator");
        return Arc::new(
            GeminiGenerator::new(gemini.api_key.clone(), gemini.model.clone())
                .with_base_url(gemini.base_url.clone()),
        );
    }
    warn!("GEMINI_API_KEY is not set, AI enhancement uses the offline stub");
    Arc::new(StubGenerator::new().with_latency(config.stub_latency))
}

#[cfg(feature = "postgres")]
fn build_repository(config: &AppConfig) -> Result<Arc<dyn TaskRepository>, BoxError> {
    use diesel::r2d2::{ConnectionManager, Pool};
    use taskwise::task::adapters::postgres::PostgresTaskRepository;

    let Some(url) = config.database_url.as_deref() else {
        info!("DATABASE_URL is not set, tasks are kept in memory");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };
    let pool = Pool::builder().build(ConnectionManager::new(url))?;
    info!("using PostgreSQL task store");
    Ok(Arc::new(PostgresTaskRepository::new(pool)))
}

#[cfg(not(feature = "postgres"))]
#[expect(
    clippy::unnecessary_wraps,
    reason = "signature matches the postgres-enabled build"
)]
fn build_repository(config: &AppConfig) -> Result<Arc<dyn TaskRepository>, BoxError> {
    if config.database_url.is_some() {
        warn!("DATABASE_URL is set but the postgres feature is disabled, tasks are kept in memory");
    }
    Ok(Arc::new(InMemoryTaskRepository::new()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
