// Realized P&L calculation
pub mod pnl_engine;
