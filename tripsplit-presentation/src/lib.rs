#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod expense_presenter;
pub mod roster_presenter;
pub mod summary_presenter;

pub use currency::CurrencyFormat;
pub use expense_presenter::ExpensePresenter;
pub use roster_presenter::RosterPresenter;
pub use summary_presenter::SummaryPresenter;
