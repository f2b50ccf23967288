use crate::domain::trading::saturating;
use crate::domain::trading::types::PnlResult;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Aggregate figures over realized trades.
///
/// Money totals only include USD-denominated results; quote-currency
/// fallbacks are counted in `excluded_non_usd` instead of being added to dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub closed_trades: usize,
    pub total_pnl: Decimal,
    pub winning_trades: usize,
    pub losing_trades: usize,
    /// Percent of counted trades with pnl > 0
    pub win_rate: Decimal,
    pub avg_win: Decimal,
    /// Absolute value of the mean losing pnl
    pub avg_loss: Decimal,
    pub excluded_non_usd: usize,
}

impl PerformanceSummary {
    pub fn from_results(results: &[PnlResult]) -> Self {
        let mut closed_trades = 0usize;
        let mut excluded_non_usd = 0usize;
        let mut total_pnl = Decimal::ZERO;
        let mut gross_win = Decimal::ZERO;
        let mut gross_loss = Decimal::ZERO;
        let mut winning_trades = 0usize;
        let mut losing_trades = 0usize;

        for result in results {
            if !result.denomination.is_usd() {
                excluded_non_usd += 1;
                continue;
            }
            closed_trades += 1;
            total_pnl = saturating::add(total_pnl, result.pnl);
            if result.pnl > Decimal::ZERO {
                winning_trades += 1;
                gross_win = saturating::add(gross_win, result.pnl);
            } else if result.pnl < Decimal::ZERO {
                losing_trades += 1;
                gross_loss = saturating::add(gross_loss, result.pnl);
            }
        }

        let win_rate = if closed_trades > 0 {
            Decimal::from(winning_trades) / Decimal::from(closed_trades) * dec!(100)
        } else {
            Decimal::ZERO
        };
        let avg_win = if winning_trades > 0 {
            gross_win / Decimal::from(winning_trades)
        } else {
            Decimal::ZERO
        };
        let avg_loss = if losing_trades > 0 {
            (gross_loss / Decimal::from(losing_trades)).abs()
        } else {
            Decimal::ZERO
        };

        Self {
            closed_trades,
            total_pnl,
            winning_trades,
            losing_trades,
            win_rate,
            avg_win,
            avg_loss,
            excluded_non_usd,
        }
    }
}
