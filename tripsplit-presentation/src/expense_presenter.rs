use crate::currency::CurrencyFormat;
use std::fmt::Write as _;
use tripsplit_domain::{Expense, PersonDirectory, Trip};
use tripsplit_i18n as i18n;

pub struct ExpensePresenter;

impl ExpensePresenter {
    /// Render `expenses` in the given order, resolving names against `trip`.
    pub fn render(expenses: &[&Expense], trip: &Trip, currency: &CurrencyFormat) -> String {
        if expenses.is_empty() {
            return format!("{}\n", i18n::NO_EXPENSES);
        }

        let mut reply = String::with_capacity(expenses.len() * 128);
        for expense in expenses {
            let icon = expense
                .category
                .as_ref()
                .and_then(|id| trip.category(id))
                .map(|category| category.icon.as_str())
                .filter(|icon| !icon.is_empty())
                .unwrap_or("•");
            let payer = expense
                .paid_by
                .as_ref()
                .and_then(|id| trip.display_name(id))
                .unwrap_or(i18n::UNKNOWN);
            let participants = expense
                .split_between
                .iter()
                .filter_map(|id| trip.display_name(id))
                .collect::<Vec<_>>()
                .join(", ");

            let _ = writeln!(
                &mut reply,
                "{icon} {} [{}] {}",
                expense.description,
                expense.id,
                currency.format(expense.amount)
            );
            let _ = writeln!(
                &mut reply,
                "    {} | {}",
                expense.date.format("%d/%m/%Y"),
                i18n::paid_by(payer)
            );
            let _ = writeln!(&mut reply, "    {}", i18n::split_between(participants));
        }

        reply
    }
}
