use std::path::PathBuf;

use tracing::info;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,              // 127.0.0.1:8000
    pub ui_dir: Option<PathBuf>,   // None (search default locations)
    pub embedder: String,          // "hashing"
    pub warmup_ms: u64,            // 0
    pub min_score: f32,            // 0.1 (cosine, before the percent conversion)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
            ui_dir: None,
            embedder: "hashing".to_string(),
            warmup_ms: 0,
            min_score: 0.1,
        }
    }
}

impl ServerConfig {
    /// - CATALOG_ADDR (default 127.0.0.1:8000)
    /// - CATALOG_UI_DIR (optional)
    /// - CATALOG_EMBEDDER (default "hashing"; "minilm" with the `minilm` feature)
    /// - CATALOG_WARMUP_MS (default 0); simulated model load time
    /// - CATALOG_MIN_SCORE (default 0.1)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(addr) = std::env::var("CATALOG_ADDR") {
            if !addr.trim().is_empty() {
                cfg.addr = addr.trim().to_string();
            }
        }
        cfg.ui_dir = std::env::var("CATALOG_UI_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        if let Ok(name) = std::env::var("CATALOG_EMBEDDER") {
            if !name.trim().is_empty() {
                cfg.embedder = name.trim().to_string();
            }
        }
        cfg.warmup_ms = parse_env_u64("CATALOG_WARMUP_MS", cfg.warmup_ms);
        cfg.min_score = parse_env_f32("CATALOG_MIN_SCORE", cfg.min_score);

        info!(
            target: "catalogd",
            "config: addr={} embedder={} warmup_ms={} min_score={}",
            cfg.addr, cfg.embedder, cfg.warmup_ms, cfg.min_score
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

fn parse_env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
