use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripsplit_domain::{CategoryId, Money, NamedTransfer, PersonId, Trip, TripId};

/// Everything the repository persists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSnapshot {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub current_trip: Option<TripId>,
}

#[derive(Clone, Debug, Default)]
pub struct TripDraft {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default)]
pub struct PersonDraft {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: Option<CategoryId>,
    pub paid_by: Option<PersonId>,
    pub date: NaiveDate,
    pub split_between: Vec<PersonId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    GetsBack,
    Owes,
    Settled,
}

impl BalanceStatus {
    pub fn of(balance: Money) -> Self {
        if balance > Money::TOLERANCE {
            Self::GetsBack
        } else if balance < -Money::TOLERANCE {
            Self::Owes
        } else {
            Self::Settled
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonBalanceRow {
    pub id: PersonId,
    pub name: String,
    pub balance: Money,
    pub status: BalanceStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotalRow {
    /// `None` for uncategorized spending.
    pub name: Option<String>,
    pub icon: Option<String>,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripSummary {
    pub trip_name: String,
    pub total_expenses: Money,
    pub expense_count: usize,
    pub people_count: usize,
    pub balances: Vec<PersonBalanceRow>,
    pub settlements: Vec<NamedTransfer>,
    pub categories: Vec<CategoryTotalRow>,
}

impl TripSummary {
    /// True when the trip has no expenses to summarize.
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}
