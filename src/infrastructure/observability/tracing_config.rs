/// Configuration for tracing initialization. `LOG_FORMAT=json`
/// switches the assistant to JSON log lines; `APP_ENV` names the
/// deployment environment (defaulting to local).
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
