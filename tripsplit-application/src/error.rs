use std::path::PathBuf;
use thiserror::Error;
use tripsplit_domain::{CategoryId, ExpenseId, Money, PersonId, TripId};

#[derive(Debug, Error)]
pub enum TripError {
    #[error("No trip selected; create one first")]
    NoCurrentTrip,
    #[error("Trip {0} does not exist")]
    TripNotFound(TripId),
    #[error("Person {0} does not exist")]
    PersonNotFound(PersonId),
    #[error("Category {0} does not exist")]
    CategoryNotFound(CategoryId),
    #[error("Expense {0} does not exist")]
    ExpenseNotFound(ExpenseId),
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(Money),
    #[error("Amount {0} exceeds the limit of {max}", max = Money::MAX_AMOUNT)]
    AmountTooLarge(Money),
    #[error("Select at least one person to split the expense with")]
    EmptySplit,
    #[error("An expense needs a payer")]
    MissingPayer,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to access trip store at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Trip store at {} is malformed", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
