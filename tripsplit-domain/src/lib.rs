#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Category, CategoryId, Expense, ExpenseId, Money, NamedTransfer, Person, PersonBalances,
    PersonDirectory, PersonId, Transfer, Trip, TripId,
};
pub use services::{BalanceCalculator, CategoryTotal, ExpenseBreakdown, SettlementCalculator};
