use std::env;

/// Formatting mode for JSON response bodies.
///
/// The directory serves pretty-printed JSON by default so payloads read
/// well in a browser or curl; compact mode drops the insignificant
/// whitespace. Key order and values are identical in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonFormat {
    #[default]
    Pretty,
    Compact,
}

impl JsonFormat {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "compact" => JsonFormat::Compact,
            _ => JsonFormat::Pretty,
        }
    }
}

/// Startup configuration, resolved once from the environment and passed
/// into router construction. No process-wide mutable state.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub json_format: JsonFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://pets.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            json_format: env::var("JSON_FORMAT")
                .map(|v| JsonFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}
