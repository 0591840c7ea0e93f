pub mod balance_calculator;
pub mod expense_breakdown;
pub mod settlement_calculator;

pub use balance_calculator::BalanceCalculator;
pub use expense_breakdown::{CategoryTotal, ExpenseBreakdown};
pub use settlement_calculator::SettlementCalculator;
