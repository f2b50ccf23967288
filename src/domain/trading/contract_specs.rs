//! Contract Specification Tables
//!
//! Fixed lookup data the P&L engine relies on: the fiat currency set used to
//! recognise FX pairs, pip sizes, the standard lot size and metal contract
//! sizes. Tables can be extended from TOML without touching the dispatch.

use crate::domain::errors::ContractSpecsError;
use crate::domain::trading::instrument::{
    CurrencyPair, Instrument, InstrumentClass, normalize_symbol,
};
use crate::domain::trading::saturating;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const USD: &str = "USD";

const DEFAULT_FIAT_CURRENCIES: [&str; 8] = ["USD", "EUR", "GBP", "JPY", "CHF", "AUD", "CAD", "NZD"];

/// Contract specification value object
///
/// # Invariants
///
/// - Currency codes are three upper-case ASCII letters
/// - Lot units, pip sizes and contract sizes are strictly positive
/// - Metal symbols are stored normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSpecs {
    /// Base-currency units in one standard FX lot
    pub lot_units: Decimal,
    pub default_pip_size: Decimal,
    /// Pip size overrides keyed by quote currency
    pub pip_size_by_quote: BTreeMap<String, Decimal>,
    pub fiat_currencies: BTreeSet<String>,
    /// Units (troy oz) per lot, keyed by normalized symbol
    pub metal_contract_sizes: BTreeMap<String, Decimal>,
}

impl Default for ContractSpecs {
    fn default() -> Self {
        Self {
            lot_units: dec!(100000),
            default_pip_size: dec!(0.0001),
            pip_size_by_quote: BTreeMap::from([("JPY".to_string(), dec!(0.01))]),
            fiat_currencies: DEFAULT_FIAT_CURRENCIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            metal_contract_sizes: BTreeMap::from([
                ("XAUUSD".to_string(), dec!(100)),
                ("XAGUSD".to_string(), dec!(5000)),
            ]),
        }
    }
}

impl ContractSpecs {
    /// Normalize keys and check invariants.
    pub fn validated(self) -> Result<Self, ContractSpecsError> {
        if self.lot_units <= Decimal::ZERO {
            return Err(ContractSpecsError::NonPositiveLotUnits {
                value: self.lot_units.to_string(),
            });
        }
        if self.default_pip_size <= Decimal::ZERO {
            return Err(ContractSpecsError::NonPositivePipSize {
                currency: "default".to_string(),
                value: self.default_pip_size.to_string(),
            });
        }

        let mut fiat_currencies = BTreeSet::new();
        for code in &self.fiat_currencies {
            fiat_currencies.insert(currency_code(code)?);
        }

        let mut pip_size_by_quote = BTreeMap::new();
        for (code, size) in &self.pip_size_by_quote {
            let code = currency_code(code)?;
            if *size <= Decimal::ZERO {
                return Err(ContractSpecsError::NonPositivePipSize {
                    currency: code,
                    value: size.to_string(),
                });
            }
            pip_size_by_quote.insert(code, *size);
        }

        let mut metal_contract_sizes = BTreeMap::new();
        for (raw, size) in &self.metal_contract_sizes {
            let symbol = normalize_symbol(raw);
            if symbol.is_empty() {
                return Err(ContractSpecsError::InvalidMetalSymbol {
                    symbol: raw.clone(),
                });
            }
            if *size <= Decimal::ZERO {
                return Err(ContractSpecsError::NonPositiveContractSize {
                    symbol,
                    value: size.to_string(),
                });
            }
            if metal_contract_sizes.insert(symbol.clone(), *size).is_some() {
                return Err(ContractSpecsError::DuplicateMetalSymbol { symbol });
            }
        }

        Ok(Self {
            lot_units: self.lot_units,
            default_pip_size: self.default_pip_size,
            pip_size_by_quote,
            fiat_currencies,
            metal_contract_sizes,
        })
    }

    /// Classify a raw symbol. Metals win over FX; anything unmatched is Generic.
    pub fn classify(&self, raw_symbol: &str) -> Instrument {
        let symbol = normalize_symbol(raw_symbol);

        if self.metal_contract_sizes.contains_key(&symbol) {
            return Instrument {
                symbol,
                class: InstrumentClass::Metals,
                pair: None,
            };
        }

        if let Some(pair) = CurrencyPair::split(&symbol)
            && self.is_fiat(&pair.base)
            && self.is_fiat(&pair.quote)
        {
            return Instrument {
                symbol,
                class: InstrumentClass::Forex,
                pair: Some(pair),
            };
        }

        Instrument {
            symbol,
            class: InstrumentClass::Generic,
            pair: None,
        }
    }

    pub fn is_fiat(&self, code: &str) -> bool {
        self.fiat_currencies.contains(code)
    }

    pub fn metal_contract_size(&self, normalized_symbol: &str) -> Option<Decimal> {
        self.metal_contract_sizes.get(normalized_symbol).copied()
    }

    pub fn pip_size(&self, quote: &str) -> Decimal {
        self.pip_size_by_quote
            .get(quote)
            .copied()
            .unwrap_or(self.default_pip_size)
    }

    /// USD value of one pip on one standard lot, evaluated at `mid_price`.
    ///
    /// `None` for cross pairs and for USD-based pairs with a non-positive mid.
    pub fn pip_value_usd(&self, pair: &CurrencyPair, mid_price: Decimal) -> Option<Decimal> {
        let pip_value_quote = saturating::mul(self.pip_size(&pair.quote), self.lot_units);

        if pair.quote == USD {
            return Some(pip_value_quote);
        }
        if pair.base == USD {
            if mid_price <= Decimal::ZERO {
                return None;
            }
            return Some(saturating::div(pip_value_quote, mid_price));
        }
        None
    }

    /// Fiat currency a generic symbol is quoted in, read from its last three
    /// letters (`BTCEUR` -> `EUR`). `None` for symbols such as `APPLE` or `DE30`.
    pub fn price_currency(&self, normalized_symbol: &str) -> Option<String> {
        if normalized_symbol.len() <= 3 || !normalized_symbol.is_ascii() {
            return None;
        }
        let suffix = &normalized_symbol[normalized_symbol.len() - 3..];
        self.is_fiat(suffix).then(|| suffix.to_string())
    }
}

fn currency_code(raw: &str) -> Result<String, ContractSpecsError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ContractSpecsError::InvalidCurrencyCode {
            code: raw.to_string(),
        });
    }
    Ok(code)
}
