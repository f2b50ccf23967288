// Core trading domain entities and value objects
pub mod contract_specs;
pub mod instrument;
pub mod saturating;
pub mod trade_record;
pub mod types;
