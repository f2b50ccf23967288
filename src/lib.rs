pub mod application;
pub mod config;
pub mod domain;

pub use application::pnl_engine::{PnlEngine, compute_pnl};
pub use domain::trading::types::{Denomination, PnlResult, TradeDirection, TradeInput};

#[cfg(test)]
mod config_tests;
