//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::Parser;

/// Runtime configuration for the report server.
///
/// Every flag can also be set through its `REPORTS_*` environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "report-server", about = "Report submission web application")]
pub struct ServerConfig {
    /// SQLite database file path.
    #[arg(long, env = "REPORTS_DB_PATH", default_value = "reports.db")]
    pub db_path: String,

    /// Address to listen on.
    #[arg(long, env = "REPORTS_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Secret used to sign form tokens. A random per-process secret is used
    /// when unset, so tokens do not survive a restart.
    #[arg(long, env = "REPORTS_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Seconds a form token stays valid.
    #[arg(long, env = "REPORTS_CSRF_TIME_LIMIT", default_value_t = 3600)]
    pub csrf_time_limit: u64,
}

impl ServerConfig {
    pub fn csrf_time_limit(&self) -> Duration {
        Duration::from_secs(self.csrf_time_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = ServerConfig::try_parse_from(["report-server"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.csrf_time_limit(), Duration::from_secs(3600));
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "report-server",
            "--db-path",
            "/tmp/r.db",
            "--secret-key",
            "s3cret",
            "--csrf-time-limit",
            "60",
        ])
        .unwrap();
        assert_eq!(config.db_path, "/tmp/r.db");
        assert_eq!(config.secret_key.as_deref(), Some("s3cret"));
        assert_eq!(config.csrf_time_limit(), Duration::from_secs(60));
    }
}
