//! Server configuration from environment variables.

use crate::logic::TieBreak;

/// Runtime settings for the web server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tie_break: TieBreak,
    /// Fixed seed for bye selection; entropy-seeded when `None`.
    pub pairing_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            tie_break: TieBreak::default(),
            pairing_seed: None,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `TIE_BREAK` and `PAIRING_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but with a custom lookup. Unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => log::warn!("Ignoring invalid PORT {:?}", port),
            }
        }
        if let Some(tie_break) = lookup("TIE_BREAK") {
            match tie_break.parse() {
                Ok(t) => config.tie_break = t,
                Err(e) => log::warn!("Ignoring TIE_BREAK: {}", e),
            }
        }
        if let Some(seed) = lookup("PAIRING_SEED") {
            match seed.parse() {
                Ok(s) => config.pairing_seed = Some(s),
                Err(_) => log::warn!("Ignoring invalid PAIRING_SEED {:?}", seed),
            }
        }
        config
    }
}
