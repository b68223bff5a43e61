//! Application state shared by all handlers.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>`. The async
//! mutex lets handlers await the lock without blocking the runtime, and
//! `rusqlite::Connection` is `!Sync`, which rules out an `RwLock`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::forms::FormTokens;
use crate::service::ReportService;

/// Default form token lifetime, in line with the `--csrf-time-limit` default.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The report service (async Mutex, held for one store call per request).
    pub service: Arc<tokio::sync::Mutex<ReportService>>,
    /// Signs and checks the tokens embedded in the submission form.
    pub forms: Arc<FormTokens>,
}

impl AppState {
    /// Creates the state from configuration, opening the SQLite database.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let service = ReportService::new(&config.db_path)?;
        tracing::info!(
            db_path = %config.db_path,
            reports = service.count_reports()?,
            "report store ready"
        );

        let forms = match &config.secret_key {
            Some(secret) => FormTokens::new(secret, config.csrf_time_limit()),
            None => {
                tracing::warn!("no secret key configured; form tokens will not survive a restart");
                FormTokens::random(config.csrf_time_limit())
            }
        };

        Ok(Self::from_parts(service, forms))
    }

    /// Creates a state backed by an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = ReportService::in_memory()?;
        Ok(Self::from_parts(service, FormTokens::random(DEFAULT_TOKEN_TTL)))
    }

    pub fn from_parts(service: ReportService, forms: FormTokens) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            forms: Arc::new(forms),
        }
    }
}
