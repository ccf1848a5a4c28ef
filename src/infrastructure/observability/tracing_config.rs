/// Subscriber options, usually taken from the `logging` settings section.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            json_format: false,
            default_filter: "info,docforge=debug,tower_http=debug".to_string(),
        }
    }
}
