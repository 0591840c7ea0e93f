#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod summary;
pub mod trip_book;

pub use error::{RepositoryError, TripError};
pub use model::{
    BalanceStatus, CategoryDraft, CategoryTotalRow, ExpenseDraft, PersonBalanceRow, PersonDraft,
    TripDraft, TripSnapshot, TripSummary,
};
pub use ports::{IdGenerator, TripRepository};
pub use summary::SummaryBuilder;
pub use trip_book::TripBook;
