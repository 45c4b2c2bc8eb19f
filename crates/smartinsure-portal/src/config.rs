//! Portal configuration

use serde::{Deserialize, Serialize};
use smartinsure_common::{Result, SmartInsureError, DEFAULT_PROCESSING_DELAY_MS};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::state::claims::DEFAULT_CLAIM_YEAR;

/// Default cap on concurrently held sessions
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Portal service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Simulated "AI processing" time
    pub processing_delay_ms: u64,
    /// Fixed RNG seed; every session draws the same sequence when set
    pub rng_seed: Option<u64>,
    /// Year stamped into generated claim ids
    pub claim_year: i32,
    pub max_sessions: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            rng_seed: None,
            claim_year: DEFAULT_CLAIM_YEAR,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl PortalConfig {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let cfg = Self::from_lookup(|key| std::env::var(key).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that parse but cannot run the service
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SmartInsureError::Config("SMARTINSURE_HOST must not be empty".into()));
        }
        if self.max_sessions == 0 {
            return Err(SmartInsureError::Config(
                "SMARTINSURE_MAX_SESSIONS must be at least 1".into(),
            ));
        }
        if !(1000..=9999).contains(&self.claim_year) {
            return Err(SmartInsureError::Config(format!(
                "SMARTINSURE_CLAIM_YEAR must be a four-digit year, got {}",
                self.claim_year
            )));
        }
        Ok(())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        // Platform PORT first, SMARTINSURE_PORT overrides it
        override_parsed(&lookup, "PORT", &mut cfg.port);
        if let Some(host) = lookup("SMARTINSURE_HOST") {
            cfg.host = host;
        }
        override_parsed(&lookup, "SMARTINSURE_PORT", &mut cfg.port);
        override_parsed(
            &lookup,
            "SMARTINSURE_PROCESSING_DELAY_MS",
            &mut cfg.processing_delay_ms,
        );
        override_parsed(&lookup, "SMARTINSURE_CLAIM_YEAR", &mut cfg.claim_year);
        override_parsed(&lookup, "SMARTINSURE_MAX_SESSIONS", &mut cfg.max_sessions);

        let mut seed = 0u64;
        if override_parsed(&lookup, "SMARTINSURE_RNG_SEED", &mut seed) {
            cfg.rng_seed = Some(seed);
        }

        cfg
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn override_parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) -> bool {
    let Some(raw) = lookup(key) else {
        return false;
    };
    match raw.trim().parse() {
        Ok(value) => {
            *slot = value;
            true
        }
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable config value");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> PortalConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PortalConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&[]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.processing_delay(), Duration::from_millis(2000));
        assert_eq!(cfg.rng_seed, None);
        assert_eq!(cfg.claim_year, 2024);
    }

    #[test]
    fn test_prefixed_port_wins() {
        let cfg = load(&[("PORT", "3000"), ("SMARTINSURE_PORT", "4000")]);
        assert_eq!(cfg.port, 4000);
        assert_eq!(load(&[("PORT", "3000")]).port, 3000);
    }

    #[test]
    fn test_overrides() {
        let cfg = load(&[
            ("SMARTINSURE_HOST", "127.0.0.1"),
            ("SMARTINSURE_PROCESSING_DELAY_MS", "0"),
            ("SMARTINSURE_RNG_SEED", "42"),
            ("SMARTINSURE_CLAIM_YEAR", "2026"),
            ("SMARTINSURE_MAX_SESSIONS", "8"),
        ]);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.processing_delay_ms, 0);
        assert_eq!(cfg.rng_seed, Some(42));
        assert_eq!(cfg.claim_year, 2026);
        assert_eq!(cfg.max_sessions, 8);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let cfg = load(&[("PORT", "eighty"), ("SMARTINSURE_RNG_SEED", "-1")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.rng_seed, None);
    }

    #[test]
    fn test_validate() {
        assert!(load(&[]).validate().is_ok());

        for vars in [
            [("SMARTINSURE_MAX_SESSIONS", "0")],
            [("SMARTINSURE_HOST", " ")],
            [("SMARTINSURE_CLAIM_YEAR", "-5")],
        ] {
            let err = load(&vars).validate().unwrap_err();
            assert!(matches!(err, SmartInsureError::Config(ref msg) if msg.contains(vars[0].0)));
        }
    }
}
