//! Configuration module for tradepnl.
//!
//! Structured configuration loaded from environment variables, split into
//! contract specification tables and logging output.

mod contract_specs_file;
mod observability_config;

pub use contract_specs_file::ContractSpecsEnvConfig;
pub use observability_config::ObservabilityEnvConfig;

use crate::application::pnl_engine::PnlEngine;
use crate::domain::trading::contract_specs::ContractSpecs;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// TOML file overriding the built-in contract tables
    pub contract_specs_path: Option<PathBuf>,
    pub log_json: bool,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let specs = ContractSpecsEnvConfig::from_env();
        let observability = ObservabilityEnvConfig::from_env()
            .context("Failed to load observability config")?;

        Ok(Self {
            contract_specs_path: specs.path,
            log_json: observability.log_json,
            log_level: observability.log_level,
        })
    }

    /// Override the contract specs file, e.g. from a command-line flag.
    pub fn with_contract_specs_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.contract_specs_path = path;
        }
        self
    }

    /// Contract tables from the configured file, or the built-in defaults.
    pub fn contract_specs(&self) -> Result<ContractSpecs> {
        match &self.contract_specs_path {
            Some(path) => ContractSpecs::from_toml_file(path),
            None => Ok(ContractSpecs::default()),
        }
    }

    pub fn build_engine(&self) -> Result<PnlEngine> {
        Ok(PnlEngine::new(self.contract_specs()?))
    }
}
