use thiserror::Error;

/// Errors raised while turning raw caller values into a `TradeInput`.
///
/// The engine itself never fails; these only exist at the boundary where
/// strings and floats become decimals.
#[derive(Debug, Error, PartialEq)]
pub enum PnlInputError {
    #[error("Symbol is empty")]
    EmptySymbol,

    #[error("Invalid decimal for {field}: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Non-finite number for {field}")]
    NonFiniteNumber { field: &'static str },

    #[error("Invalid direction: {value:?}. Must be 'long' or 'short'")]
    InvalidDirection { value: String },

    #[error("Invalid denomination: {value:?}. Must be a three-letter currency code")]
    InvalidDenomination { value: String },
}

/// Errors related to contract specification tables
#[derive(Debug, Error, PartialEq)]
pub enum ContractSpecsError {
    #[error("Invalid currency code: {code:?}")]
    InvalidCurrencyCode { code: String },

    #[error("Lot units must be positive, got {value}")]
    NonPositiveLotUnits { value: String },

    #[error("Pip size for {currency} must be positive, got {value}")]
    NonPositivePipSize { currency: String, value: String },

    #[error("Contract size for {symbol} must be positive, got {value}")]
    NonPositiveContractSize { symbol: String, value: String },

    #[error("Invalid metal symbol: {symbol:?}")]
    InvalidMetalSymbol { symbol: String },

    #[error("Duplicate metal symbol after normalization: {symbol}")]
    DuplicateMetalSymbol { symbol: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_formatting() {
        let error = PnlInputError::InvalidDecimal {
            field: "entry_price",
            value: "abc".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("entry_price"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_specs_error_formatting() {
        let error = ContractSpecsError::NonPositivePipSize {
            currency: "JPY".to_string(),
            value: "0".to_string(),
        };

        assert_eq!(error.to_string(), "Pip size for JPY must be positive, got 0");
    }
}
