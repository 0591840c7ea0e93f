use crate::model::{BalanceStatus, CategoryTotalRow, PersonBalanceRow, TripSummary};
use tripsplit_domain::{BalanceCalculator, ExpenseBreakdown, Money, SettlementCalculator, Trip};

/// Builds the summary view of a trip from a fresh balance computation.
pub struct SummaryBuilder;

impl SummaryBuilder {
    pub fn build(trip: &Trip) -> TripSummary {
        let balances = BalanceCalculator.calculate(trip.person_ids(), &trip.expenses);
        let settlements = SettlementCalculator.calculate_named(&balances, trip);

        let balance_rows = trip
            .people
            .iter()
            .map(|person| {
                let balance = balances.get(&person.id).copied().unwrap_or(Money::ZERO);
                PersonBalanceRow {
                    id: person.id.clone(),
                    name: person.name.clone(),
                    balance,
                    status: BalanceStatus::of(balance),
                }
            })
            .collect();

        let categories = ExpenseBreakdown
            .by_category(&trip.categories, &trip.expenses)
            .into_iter()
            .map(|total| CategoryTotalRow {
                name: total.category.map(|category| category.name.clone()),
                icon: total.category.map(|category| category.icon.clone()),
                amount: total.amount,
            })
            .collect();

        TripSummary {
            trip_name: trip.name.clone(),
            total_expenses: ExpenseBreakdown.total(&trip.expenses),
            expense_count: trip.expenses.len(),
            people_count: trip.people.len(),
            balances: balance_rows,
            settlements,
            categories,
        }
    }
}
