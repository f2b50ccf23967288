use crate::domain::trading::contract_specs::{ContractSpecs, USD};
use crate::domain::trading::instrument::{CurrencyPair, Instrument, InstrumentClass};
use crate::domain::trading::saturating;
use crate::domain::trading::types::{Denomination, PnlResult, TradeInput};
use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::LazyLock;
use tracing::{debug, warn};

static DEFAULT_ENGINE: LazyLock<PnlEngine> = LazyLock::new(PnlEngine::default);

/// Realized P&L for a closed trade using the built-in contract tables.
pub fn compute_pnl(input: &TradeInput) -> PnlResult {
    DEFAULT_ENGINE.compute(input)
}

/// Realized P&L calculator for metals, FX pairs and unit-based instruments.
///
/// Holds only immutable tables, so one engine can be shared across threads.
/// Every intermediate value is a `Decimal`; results beyond the `Decimal`
/// range saturate at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct PnlEngine {
    specs: ContractSpecs,
}

impl PnlEngine {
    pub fn new(specs: ContractSpecs) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &ContractSpecs {
        &self.specs
    }

    /// Classify the symbol and apply the matching calculator.
    ///
    /// Metals are checked first, then FX (which always answers, falling back
    /// to quote-currency units), then the generic unit calculation.
    pub fn compute(&self, input: &TradeInput) -> PnlResult {
        let instrument = self.specs.classify(&input.symbol);
        let diff = input
            .direction
            .price_move(input.entry_price, input.exit_price);

        debug!(
            symbol = %instrument.symbol,
            class = %instrument.class,
            direction = %input.direction,
            %diff,
            "Computing realized P&L"
        );

        match (instrument.class, &instrument.pair) {
            (InstrumentClass::Metals, _) => {
                match self.specs.metal_contract_size(&instrument.symbol) {
                    Some(contract_size) => self.metals(input, diff, contract_size),
                    None => self.generic(input, diff, &instrument),
                }
            }
            (InstrumentClass::Forex, Some(pair)) => self.forex(input, diff, pair),
            _ => self.generic(input, diff, &instrument),
        }
    }

    /// Compute many independent trades in parallel, preserving input order.
    pub fn compute_batch(&self, inputs: &[TradeInput]) -> Vec<PnlResult> {
        inputs.par_iter().map(|input| self.compute(input)).collect()
    }

    fn metals(&self, input: &TradeInput, diff: Decimal, contract_size: Decimal) -> PnlResult {
        PnlResult {
            pnl: saturating::mul(saturating::mul(diff, contract_size), input.quantity),
            pnl_pct: percent_of_entry(diff, input.entry_price),
            denomination: Denomination::Usd,
            instrument_class: InstrumentClass::Metals,
        }
    }

    fn forex(&self, input: &TradeInput, diff: Decimal, pair: &CurrencyPair) -> PnlResult {
        let mid = saturating::div(saturating::add(input.entry_price, input.exit_price), dec!(2));
        let pip_size = self.specs.pip_size(&pair.quote);
        let pnl_pct = percent_of_entry(diff, input.entry_price);

        match self.specs.pip_value_usd(pair, mid) {
            Some(pip_value) => {
                let pips = saturating::div(diff, pip_size);
                PnlResult {
                    pnl: saturating::mul(saturating::mul(pips, pip_value), input.quantity),
                    pnl_pct,
                    denomination: Denomination::Usd,
                    instrument_class: InstrumentClass::Forex,
                }
            }
            None => {
                if pair.base == USD {
                    warn!(%pair, %mid, "Non-positive mid price, reporting P&L in quote currency");
                } else {
                    debug!(%pair, "Cross pair without USD leg, reporting P&L in quote currency");
                }
                PnlResult {
                    pnl: saturating::mul(
                        saturating::mul(diff, self.specs.lot_units),
                        input.quantity,
                    ),
                    pnl_pct,
                    denomination: Denomination::Quote(pair.quote.clone()),
                    instrument_class: InstrumentClass::Forex,
                }
            }
        }
    }

    /// Units times price move, in the currency the symbol is quoted in when
    /// its suffix names one, otherwise in the account's USD.
    fn generic(&self, input: &TradeInput, diff: Decimal, instrument: &Instrument) -> PnlResult {
        let denomination = match self.specs.price_currency(&instrument.symbol) {
            Some(code) if code != USD => Denomination::Quote(code),
            _ => Denomination::Usd,
        };
        PnlResult {
            pnl: saturating::mul(diff, input.quantity),
            pnl_pct: percent_of_entry(diff, input.entry_price),
            denomination,
            instrument_class: InstrumentClass::Generic,
        }
    }
}

/// `diff / entry * 100`, or zero when entry is zero.
fn percent_of_entry(diff: Decimal, entry: Decimal) -> Decimal {
    if entry.is_zero() {
        return Decimal::ZERO;
    }
    saturating::mul(saturating::div(diff, entry), dec!(100))
}
