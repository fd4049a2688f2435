//! Tracing / logging initialisation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Override per component: crate name → level
    #[serde(default)]
    pub components: HashMap<String, String>,
    /// Emit JSON structured logs (true) or human-readable text (false)
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: HashMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// `"info,tvmcodec_abi=debug"`; component names are crate names.
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone();
        let mut components: Vec<_> = self.components.iter().collect();
        components.sort();
        for (component, level) in components {
            directives.push_str(&format!(",{}={}", component.replace('-', "_"), level));
        }
        directives
    }
}

/// Parse a `crate=level` pair for [`LogConfig::components`].
pub fn parse_component(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((component, level)) if !component.is_empty() && !level.is_empty() => {
            Ok((component.to_string(), level.to_string()))
        }
        _ => Err(format!("expected crate=level, got '{s}'")),
    }
}

/// Install the global subscriber. Call once at startup.
///
/// `RUST_LOG`, when set, replaces the configured directives. Output goes to
/// stderr so stdout carries only command results.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.directives()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_include_components() {
        let mut cfg = LogConfig {
            level: "warn".into(),
            ..LogConfig::default()
        };
        cfg.components.insert("tvmcodec-rpc".into(), "debug".into());
        cfg.components.insert("tvmcodec-abi".into(), "trace".into());
        assert_eq!(cfg.directives(), "warn,tvmcodec_abi=trace,tvmcodec_rpc=debug");
    }

    #[test]
    fn component_pairs() {
        assert_eq!(
            parse_component("tvmcodec_rpc=debug"),
            Ok(("tvmcodec_rpc".to_string(), "debug".to_string()))
        );
        assert!(parse_component("tvmcodec_rpc").is_err());
        assert!(parse_component("=debug").is_err());
    }

    #[test]
    fn defaults_from_empty_json() {
        let cfg: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.level, "info");
        assert!(!cfg.json);
        assert_eq!(cfg.directives(), "info");
    }
}
