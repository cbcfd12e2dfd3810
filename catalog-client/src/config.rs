use std::time::Duration;

use tracing::info;

use crate::render::RenderOptions;

pub const NOT_READY_DELAY: Duration = Duration::from_millis(2000);
pub const RETRY_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,          // http://127.0.0.1:8000
    pub not_ready_delay: Duration, // 2000 ms
    pub retry_delay: Duration,     // 3000 ms, after a failed readiness check
    pub render: RenderOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            not_ready_delay: NOT_READY_DELAY,
            retry_delay: RETRY_DELAY,
            render: RenderOptions::default(),
        }
    }
}

impl ClientConfig {
    /// - CATALOG_URL (default http://127.0.0.1:8000)
    /// - CATALOG_NOT_READY_DELAY_MS (default 2000)
    /// - CATALOG_RETRY_DELAY_MS (default 3000)
    /// - CATALOG_ESCAPE_RESULT_FIELDS (bool, default false)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(url) = std::env::var("CATALOG_URL") {
            if !url.trim().is_empty() {
                cfg.base_url = url.trim().to_string();
            }
        }
        cfg.not_ready_delay = Duration::from_millis(parse_env_u64(
            "CATALOG_NOT_READY_DELAY_MS",
            cfg.not_ready_delay.as_millis() as u64,
        ));
        cfg.retry_delay = Duration::from_millis(parse_env_u64(
            "CATALOG_RETRY_DELAY_MS",
            cfg.retry_delay.as_millis() as u64,
        ));
        cfg.render.escape_result_fields =
            parse_env_bool("CATALOG_ESCAPE_RESULT_FIELDS", cfg.render.escape_result_fields);

        info!(
            target: "catalog_client",
            "config: url={} not_ready_delay={:?} retry_delay={:?} escape_result_fields={}",
            cfg.base_url, cfg.not_ready_delay, cfg.retry_delay, cfg.render.escape_result_fields
        );
        cfg
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| {
            let s = s.trim().to_ascii_lowercase();
            matches!(s.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(default)
}
