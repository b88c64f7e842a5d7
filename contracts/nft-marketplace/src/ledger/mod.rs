//! Internal NEAR balances: buyer credit, sale proceeds, withdrawals.

mod actions;
mod balances;

pub use balances::BalanceLedger;
