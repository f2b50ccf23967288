use crate::domain::errors::PnlInputError;
use crate::domain::trading::instrument::InstrumentClass;
use crate::domain::trading::saturating;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    /// Signed price movement in the trader's favor.
    pub fn price_move(self, entry: Decimal, exit: Decimal) -> Decimal {
        match self {
            TradeDirection::Long => saturating::sub(exit, entry),
            TradeDirection::Short => saturating::sub(entry, exit),
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "long"),
            TradeDirection::Short => write!(f, "short"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = PnlInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(TradeDirection::Long),
            "short" => Ok(TradeDirection::Short),
            _ => Err(PnlInputError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// A closed trade as handed to the P&L engine.
///
/// `quantity` is in lots for FX and metals, in units for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    pub symbol: String,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub quantity: Decimal,
    pub direction: TradeDirection,
}

impl TradeInput {
    pub fn new(
        symbol: impl Into<String>,
        entry_price: Decimal,
        exit_price: Decimal,
        quantity: Decimal,
        direction: TradeDirection,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            entry_price,
            exit_price,
            quantity,
            direction,
        }
    }

    /// Build an input from raw text fields, as captured by a trade form.
    ///
    /// Accepts plain (`"1.1000"`) and scientific (`"1.1e0"`) notation.
    pub fn parse(
        symbol: &str,
        entry_price: &str,
        exit_price: &str,
        quantity: &str,
        direction: &str,
    ) -> Result<Self, PnlInputError> {
        Ok(Self {
            symbol: require_symbol(symbol)?,
            entry_price: parse_decimal("entry_price", entry_price)?,
            exit_price: parse_decimal("exit_price", exit_price)?,
            quantity: parse_decimal("quantity", quantity)?,
            direction: direction.parse()?,
        })
    }

    /// Build an input from floats.
    ///
    /// Each float goes through its shortest round-trip text form, so `0.1`
    /// becomes exactly `0.1` rather than its binary expansion.
    pub fn from_f64(
        symbol: &str,
        entry_price: f64,
        exit_price: f64,
        quantity: f64,
        direction: TradeDirection,
    ) -> Result<Self, PnlInputError> {
        Ok(Self {
            symbol: require_symbol(symbol)?,
            entry_price: decimal_from_f64("entry_price", entry_price)?,
            exit_price: decimal_from_f64("exit_price", exit_price)?,
            quantity: decimal_from_f64("quantity", quantity)?,
            direction,
        })
    }
}

fn require_symbol(symbol: &str) -> Result<String, PnlInputError> {
    if symbol.trim().is_empty() {
        return Err(PnlInputError::EmptySymbol);
    }
    Ok(symbol.to_string())
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, PnlInputError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PnlInputError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}

fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal, PnlInputError> {
    if !value.is_finite() {
        return Err(PnlInputError::NonFiniteNumber { field });
    }
    // f64 Display never uses exponent notation and is the shortest round-trip form
    parse_decimal(field, &value.to_string())
}

/// Currency a P&L figure is expressed in.
///
/// Serialized as its currency code (`"USD"`, `"GBP"`), same as `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Denomination {
    /// US dollars. Also the account-currency convention for generic symbols
    /// with no fiat suffix (`APPLE`, `DE30`), whose listing currency is unknown
    Usd,
    /// Units of the named non-USD currency: the quote leg of an FX pair whose
    /// USD pip value is unknown, or the fiat suffix of a generic symbol
    Quote(String),
}

impl Denomination {
    pub fn is_usd(&self) -> bool {
        matches!(self, Denomination::Usd)
    }
}

impl FromStr for Denomination {
    type Err = PnlInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PnlInputError::InvalidDenomination {
                value: s.to_string(),
            });
        }
        if code == "USD" {
            return Ok(Denomination::Usd);
        }
        Ok(Denomination::Quote(code))
    }
}

impl TryFrom<String> for Denomination {
    type Error = PnlInputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Denomination> for String {
    fn from(denomination: Denomination) -> Self {
        denomination.to_string()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denomination::Usd => write!(f, "USD"),
            Denomination::Quote(code) => write!(f, "{}", code),
        }
    }
}

/// Realized profit/loss of one trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlResult {
    pub pnl: Decimal,
    /// Percent of entry price, e.g. `0.5` for half a percent
    pub pnl_pct: Decimal,
    pub denomination: Denomination,
    pub instrument_class: InstrumentClass,
}

impl PnlResult {
    pub fn pnl_f64(&self) -> f64 {
        self.pnl.to_f64().unwrap_or(0.0)
    }

    pub fn pnl_pct_f64(&self) -> f64 {
        self.pnl_pct.to_f64().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_move_by_direction() {
        assert_eq!(TradeDirection::Long.price_move(dec!(100), dec!(105)), dec!(5));
        assert_eq!(TradeDirection::Short.price_move(dec!(100), dec!(105)), dec!(-5));
    }

    #[test]
    fn test_price_move_saturates_at_range_edges() {
        assert_eq!(
            TradeDirection::Long.price_move(Decimal::MIN, Decimal::MAX),
            Decimal::MAX
        );
        assert_eq!(
            TradeDirection::Short.price_move(Decimal::MIN, Decimal::MAX),
            Decimal::MIN
        );
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("long".parse::<TradeDirection>(), Ok(TradeDirection::Long));
        assert_eq!(" SHORT ".parse::<TradeDirection>(), Ok(TradeDirection::Short));
        assert_eq!(
            "buy".parse::<TradeDirection>(),
            Err(PnlInputError::InvalidDirection {
                value: "buy".to_string()
            })
        );
        assert_eq!(TradeDirection::Short.to_string(), "short");
    }

    #[test]
    fn test_parse_keeps_exact_digits() {
        let input = TradeInput::parse("eurusd", "1.1000", "1.1010", "1", "long").unwrap();
        assert_eq!(input.entry_price, dec!(1.1000));
        assert_eq!(input.exit_price, dec!(1.1010));
        assert_eq!(input.symbol, "eurusd");
    }

    #[test]
    fn test_parse_scientific_notation() {
        let input = TradeInput::parse("APPLE", "1.5e2", "160", "1e1", "short").unwrap();
        assert_eq!(input.entry_price, dec!(150));
        assert_eq!(input.quantity, dec!(10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = TradeInput::parse("APPLE", "abc", "160", "10", "long").unwrap_err();
        assert_eq!(
            err,
            PnlInputError::InvalidDecimal {
                field: "entry_price",
                value: "abc".to_string()
            }
        );

        let err = TradeInput::parse("  ", "150", "160", "10", "long").unwrap_err();
        assert_eq!(err, PnlInputError::EmptySymbol);
    }

    #[test]
    fn test_from_f64_uses_shortest_repr() {
        let input =
            TradeInput::from_f64("EURUSD", 1.1, 1.101, 0.1, TradeDirection::Long).unwrap();
        assert_eq!(input.entry_price, dec!(1.1));
        assert_eq!(input.exit_price, dec!(1.101));
        assert_eq!(input.quantity, dec!(0.1));
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        let err = TradeInput::from_f64("EURUSD", f64::NAN, 1.0, 1.0, TradeDirection::Long)
            .unwrap_err();
        assert_eq!(err, PnlInputError::NonFiniteNumber { field: "entry_price" });
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "symbol": "XAUUSD",
            "entry_price": "2000",
            "exit_price": "2010.5",
            "quantity": "0.1",
            "direction": "short"
        }"#;
        let input: TradeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.exit_price, dec!(2010.5));
        assert_eq!(input.direction, TradeDirection::Short);
    }

    #[test]
    fn test_denomination_serializes_as_code() {
        let gbp = Denomination::Quote("GBP".to_string());
        assert_eq!(serde_json::to_string(&Denomination::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&gbp).unwrap(), "\"GBP\"");

        let parsed: Denomination = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(parsed, gbp);
        let parsed: Denomination = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(parsed, Denomination::Usd);
        assert!(serde_json::from_str::<Denomination>("\"pounds\"").is_err());
    }

    #[test]
    fn test_pnl_result_json_matches_display() {
        let result = PnlResult {
            pnl: dec!(500),
            pnl_pct: dec!(0.5882),
            denomination: Denomination::Quote("GBP".to_string()),
            instrument_class: InstrumentClass::Forex,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["denomination"], result.denomination.to_string());

        let back: PnlResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_denomination_display() {
        assert_eq!(Denomination::Usd.to_string(), "USD");
        assert_eq!(Denomination::Quote("GBP".to_string()).to_string(), "GBP");
        assert!(!Denomination::Quote("GBP".to_string()).is_usd());
    }
}
