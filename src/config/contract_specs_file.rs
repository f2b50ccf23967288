//! Contract specification file loading.
//!
//! The file is TOML; every key is optional and falls back to the built-in
//! tables:
//!
//! ```toml
//! lot_units = "100000"
//! default_pip_size = "0.0001"
//! fiat_currencies = ["USD", "EUR", "GBP", "JPY", "CHF", "AUD", "CAD", "NZD", "SEK"]
//!
//! [pip_size_by_quote]
//! JPY = "0.01"
//!
//! [metal_contract_sizes]
//! XAUUSD = "100"
//! XAGUSD = "5000"
//! ```

use crate::domain::trading::contract_specs::ContractSpecs;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Contract specs environment configuration
#[derive(Debug, Clone, Default)]
pub struct ContractSpecsEnvConfig {
    pub path: Option<PathBuf>,
}

impl ContractSpecsEnvConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("PNL_CONTRACT_SPECS")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl ContractSpecs {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let specs: ContractSpecs =
            toml::from_str(raw).context("Failed to parse contract specs TOML")?;
        specs
            .validated()
            .context("Invalid contract specs")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contract specs from {}", path.display()))?;
        let specs = Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to load contract specs from {}", path.display()))?;

        info!(
            path = %path.display(),
            metals = specs.metal_contract_sizes.len(),
            fiat_currencies = specs.fiat_currencies.len(),
            "Contract specs loaded"
        );
        Ok(specs)
    }
}
