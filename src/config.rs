// ABOUTME: Runtime configuration parsed from command-line flags and environment variables
// ABOUTME: Covers the database connection and log output settings

use clap::Parser;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:bookmarks.db?mode=rwc";

#[derive(Debug, Clone, Parser)]
#[command(name = "bookmark-store", about = "Provision the bookmark store schema")]
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite:bookmarks.db?mode=rwc`.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    #[arg(long, env = "LOG_JSON")]
    pub json_logs: bool,
}

impl Config {
    /// Config pointing at an explicit database URL with default pool and log settings.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = Config::try_parse_from(["bookmark-store"]).unwrap();
        assert_eq!(config.max_connections, 5);
        assert!(!config.json_logs);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bookmark-store",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "1",
            "--json-logs",
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert!(config.json_logs);
    }
}
