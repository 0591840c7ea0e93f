use crate::model::{Expense, Money, PersonBalances, PersonId};

/// Net balance computation over a snapshot of people and expenses.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate the net balance of every person
    ///
    /// Every person in `people` gets an entry, starting at zero. Each expense
    /// credits its payer with the full amount and debits every participant
    /// an equal share.
    ///
    /// Expenses without a payer or without participants are skipped. Ids that
    /// are not in `people` are ignored.
    pub fn calculate<'a, I>(&self, people: I, expenses: &[Expense]) -> PersonBalances
    where
        I: IntoIterator<Item = &'a PersonId>,
    {
        let mut balances: PersonBalances = people
            .into_iter()
            .map(|id| (id.clone(), Money::ZERO))
            .collect();

        for expense in expenses {
            let Some(payer) = expense.paid_by.as_ref() else {
                tracing::debug!(expense_id = %expense.id, "Skipping expense without payer");
                continue;
            };
            let Some(share) = expense.amount.split_evenly(expense.split_between.len()) else {
                tracing::debug!(expense_id = %expense.id, "Skipping expense without participants");
                continue;
            };

            adjust(&mut balances, payer, expense.amount);
            for participant in &expense.split_between {
                adjust(&mut balances, participant, -share);
            }
        }

        balances
    }
}

fn adjust(balances: &mut PersonBalances, person: &PersonId, delta: Money) {
    match balances.get_mut(person) {
        Some(balance) => *balance += delta,
        None => tracing::debug!(person_id = %person, "Ignoring unknown person"),
    }
}
