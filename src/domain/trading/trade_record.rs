use crate::application::pnl_engine::PnlEngine;
use crate::domain::trading::types::{PnlResult, TradeDirection, TradeInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

/// Journal entry for a trade, open or closed.
///
/// Only closed trades with an exit price carry a realized P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub quantity: Decimal,
    pub direction: TradeDirection,
    pub status: TradeStatus,
}

impl TradeRecord {
    /// Open a new trade
    pub fn open(
        symbol: impl Into<String>,
        entry_price: Decimal,
        quantity: Decimal,
        direction: TradeDirection,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            entry_price,
            exit_price: None,
            quantity,
            direction,
            status: TradeStatus::Open,
        }
    }

    /// Close the trade at `exit_price`
    pub fn close(&mut self, exit_price: Decimal) {
        self.exit_price = Some(exit_price);
        self.status = TradeStatus::Closed;
    }

    /// Engine input for a closed trade, `None` while the trade is still open.
    pub fn closed_input(&self) -> Option<TradeInput> {
        match (self.status, self.exit_price) {
            (TradeStatus::Closed, Some(exit_price)) => Some(TradeInput::new(
                self.symbol.clone(),
                self.entry_price,
                exit_price,
                self.quantity,
                self.direction,
            )),
            _ => None,
        }
    }

    pub fn realize(&self, engine: &PnlEngine) -> Option<PnlResult> {
        self.closed_input().map(|input| engine.compute(&input))
    }
}
