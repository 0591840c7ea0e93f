use crate::model::{Category, Expense, Money};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal<'a> {
    /// `None` collects expenses without a category, or whose category was removed.
    pub category: Option<&'a Category>,
    pub amount: Money,
}

/// Spending totals across a trip's expenses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpenseBreakdown;

impl ExpenseBreakdown {
    pub fn total(&self, expenses: &[Expense]) -> Money {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Totals per category, in order of first appearance among `expenses`.
    pub fn by_category<'a>(
        &self,
        categories: &'a [Category],
        expenses: &[Expense],
    ) -> Vec<CategoryTotal<'a>> {
        let mut totals: Vec<CategoryTotal<'a>> = Vec::new();

        for expense in expenses {
            let category = expense
                .category
                .as_ref()
                .and_then(|id| categories.iter().find(|category| &category.id == id));

            match totals
                .iter_mut()
                .find(|total| total.category.map(|c| &c.id) == category.map(|c| &c.id))
            {
                Some(total) => total.amount += expense.amount,
                None => totals.push(CategoryTotal {
                    category,
                    amount: expense.amount,
                }),
            }
        }

        totals
    }
}
