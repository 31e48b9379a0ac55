//! Configuration loading for Ecdotica
//!
//! Precedence: built-in defaults, then a TOML file, then `ECDOTICA_*`
//! environment variables. The binary applies CLI flags last.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::AnalyzerConfig;
use crate::error::{EcdoticaError, Result};
use crate::{MAX_UPLOAD_BYTES, MIN_ANALYZE_CHARS, MIN_QUICK_EVAL_CHARS};

pub const CONFIG_FILENAME: &str = "ecdotica.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub limits: LimitsConfig,
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, host:port
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Applied once when the router is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `*` allows any
    pub allowed_origins: Vec<String>,
    /// HTTP methods allowed cross-origin; `*` allows any
    pub allowed_methods: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn allows_any_method(&self) -> bool {
        self.allowed_methods.is_empty() || self.allowed_methods.iter().any(|m| m == "*")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_upload_bytes: usize,
    pub min_analyze_chars: usize,
    pub min_quick_eval_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            min_analyze_chars: MIN_ANALYZE_CHARS,
            min_quick_eval_chars: MIN_QUICK_EVAL_CHARS,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EcdoticaError::Config(format!("Invalid TOML: {}", e)))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EcdoticaError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| EcdoticaError::Config(format!("{} ({})", e, path.display())))
    }

    /// Load from `custom_path`, or `ecdotica.toml` in `work_dir` if present,
    /// then apply environment overrides.
    pub fn load(work_dir: &Path, custom_path: Option<&Path>) -> Result<Self> {
        let path = match custom_path {
            Some(p) => {
                let path = if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    work_dir.join(p)
                };
                if !path.exists() {
                    return Err(EcdoticaError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => discover(work_dir),
        };

        let mut config = match path {
            Some(path) => {
                tracing::info!("Loaded config from {}", path.display());
                Self::from_toml_file(&path)?
            }
            None => {
                tracing::info!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `ECDOTICA_*` overrides through `lookup`; bad values are logged and skipped
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("ECDOTICA_ADDR") {
            self.server.addr = addr;
        }
        if let Some(origins) = lookup("ECDOTICA_CORS_ORIGINS") {
            self.cors.allowed_origins = split_list(&origins);
        }
        if let Some(methods) = lookup("ECDOTICA_CORS_METHODS") {
            self.cors.allowed_methods = split_list(&methods);
        }
        if let Some(value) = lookup("ECDOTICA_MAX_UPLOAD_BYTES") {
            match value.parse::<usize>() {
                Ok(bytes) if bytes > 0 => self.limits.max_upload_bytes = bytes,
                _ => tracing::warn!(
                    "Ignoring ECDOTICA_MAX_UPLOAD_BYTES='{}', must be a positive integer",
                    value
                ),
            }
        }
        if let Some(value) = lookup("ECDOTICA_COMPLEX_WORD_THRESHOLD") {
            match value.parse::<usize>() {
                Ok(threshold) => self.analyzer.complex_word_threshold = threshold,
                Err(_) => tracing::warn!(
                    "Ignoring ECDOTICA_COMPLEX_WORD_THRESHOLD='{}', must be an integer",
                    value
                ),
            }
        }
    }
}

fn discover(work_dir: &Path) -> Option<PathBuf> {
    let candidate = work_dir.join(CONFIG_FILENAME);
    candidate.is_file().then_some(candidate)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr, "127.0.0.1:8000");
        assert!(config.cors.allows_any_origin());
        assert_eq!(config.limits.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.analyzer.complex_word_threshold, 12);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [cors]
            allowed_origins = ["https://ecdotica.com", "http://localhost:3000"]

            [analyzer]
            complex_word_threshold = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(!config.cors.allows_any_origin());
        assert!(config.cors.allows_any_method());
        assert_eq!(config.analyzer.complex_word_threshold, 8);
        assert_eq!(config.limits.min_analyze_chars, 100);
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("[server\naddr = 1").unwrap_err();
        assert!(matches!(err, EcdoticaError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ECDOTICA_CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("ECDOTICA_CORS_METHODS", "GET,POST"),
            ("ECDOTICA_MAX_UPLOAD_BYTES", "2048"),
            ("ECDOTICA_COMPLEX_WORD_THRESHOLD", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_from(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.cors.allowed_methods, vec!["GET", "POST"]);
        assert_eq!(config.limits.max_upload_bytes, 2048);
        // invalid value ignored
        assert_eq!(config.analyzer.complex_word_threshold, 12);
    }

    #[test]
    fn test_missing_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path(), Some(Path::new("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
