use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

pub const DATA_VAR: &str = "TRIPSPLIT_DATA";
pub const CURRENCY_VAR: &str = "TRIPSPLIT_CURRENCY";

const DEFAULT_DATA_PATH: &str = "tripsplit.json";
const DEFAULT_CURRENCY: &str = "₹";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub currency: String,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_path: non_blank(DATA_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            currency: non_blank(CURRENCY_VAR).unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
        }
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, data: Option<PathBuf>, currency: Option<String>) -> Self {
        if let Some(data) = data {
            self.data_path = data;
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
        self
    }
}

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
