use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument category deciding which P&L formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentClass {
    Metals,
    Forex,
    Generic,
}

impl fmt::Display for InstrumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentClass::Metals => write!(f, "METALS"),
            InstrumentClass::Forex => write!(f, "FOREX"),
            InstrumentClass::Generic => write!(f, "GENERIC"),
        }
    }
}

/// Base/quote split of a six-letter FX symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    /// Split a normalized symbol into base and quote.
    ///
    /// Returns `None` unless the symbol is exactly six ASCII characters.
    pub fn split(normalized: &str) -> Option<Self> {
        if normalized.len() != 6 || !normalized.is_ascii() {
            return None;
        }
        let (base, quote) = normalized.split_at(3);
        Some(Self {
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A classified symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    /// Normalized symbol (upper-case, alphanumeric only)
    pub symbol: String,
    pub class: InstrumentClass,
    /// Present only for `InstrumentClass::Forex`
    pub pair: Option<CurrencyPair>,
}

/// Upper-case the symbol and drop every non-alphanumeric (ASCII) character.
///
/// `"eur/usd"` and `"EUR-USD"` both become `"EURUSD"`.
pub fn normalize_symbol(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
