use crate::currency::CurrencyFormat;
use std::fmt::Write as _;
use tripsplit_application::{BalanceStatus, PersonBalanceRow, TripSummary};
use tripsplit_domain::NamedTransfer;
use tripsplit_i18n as i18n;

pub struct SummaryPresenter;

impl SummaryPresenter {
    pub fn render(summary: &TripSummary, currency: &CurrencyFormat) -> String {
        if summary.is_empty() {
            return format!("{}\n", i18n::NO_EXPENSES_TO_SUMMARIZE);
        }

        let mut reply = String::with_capacity(1024);
        let _ = writeln!(&mut reply, "# {}", summary.trip_name);
        let _ = writeln!(&mut reply);
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            i18n::TOTAL_EXPENSES,
            currency.format(summary.total_expenses)
        );
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            i18n::NUMBER_OF_EXPENSES,
            summary.expense_count
        );
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            i18n::PEOPLE_INVOLVED,
            summary.people_count
        );

        let _ = writeln!(&mut reply);
        let _ = writeln!(&mut reply, "## {}", i18n::INDIVIDUAL_BALANCES);
        reply.push_str(&Self::render_balances(&summary.balances, currency));

        let _ = writeln!(&mut reply);
        let _ = writeln!(&mut reply, "## {}", i18n::SUGGESTED_SETTLEMENTS);
        reply.push_str(&Self::render_settlements(&summary.settlements, currency));

        let _ = writeln!(&mut reply);
        let _ = writeln!(&mut reply, "## {}", i18n::EXPENSES_BY_CATEGORY);
        for category in &summary.categories {
            let label = match (&category.icon, &category.name) {
                (Some(icon), Some(name)) if !icon.is_empty() => format!("{icon} {name}"),
                (_, Some(name)) => name.clone(),
                (_, None) => i18n::UNCATEGORIZED.to_owned(),
            };
            let _ = writeln!(
                &mut reply,
                "- {label}: {}",
                currency.format(category.amount)
            );
        }

        reply
    }

    pub fn render_balances(rows: &[PersonBalanceRow], currency: &CurrencyFormat) -> String {
        let width = rows
            .iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut reply = String::with_capacity(rows.len() * 32);
        for row in rows {
            let status = match row.status {
                BalanceStatus::GetsBack => i18n::gets_back(currency.format(row.balance)),
                BalanceStatus::Owes => i18n::owes(currency.format(row.balance.abs())),
                BalanceStatus::Settled => i18n::SETTLED.to_owned(),
            };
            let _ = writeln!(&mut reply, "- {:<width$}  {status}", row.name);
        }
        reply
    }

    pub fn render_settlements(transfers: &[NamedTransfer], currency: &CurrencyFormat) -> String {
        if transfers.is_empty() {
            return format!("{}\n", i18n::ALL_SETTLED);
        }

        let mut reply = String::with_capacity(transfers.len() * 48);
        for transfer in transfers {
            let _ = writeln!(
                &mut reply,
                "- {}",
                i18n::should_pay(&transfer.from, currency.format(transfer.amount), &transfer.to)
            );
        }
        reply
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tripsplit_application::CategoryTotalRow;
    use tripsplit_domain::{Money, PersonId};

    #[fixture]
    fn currency() -> CurrencyFormat {
        CurrencyFormat::new("$")
    }

    fn row(name: &str, balance: i64) -> PersonBalanceRow {
        let balance = Money::from_i64(balance);
        PersonBalanceRow {
            id: PersonId::from(name),
            name: name.to_owned(),
            balance,
            status: BalanceStatus::of(balance),
        }
    }

    #[fixture]
    fn summary() -> TripSummary {
        TripSummary {
            trip_name: "Goa".to_owned(),
            total_expenses: Money::from_i64(120),
            expense_count: 2,
            people_count: 3,
            balances: vec![row("Asha", 60), row("Bo", -60), row("Chen", 0)],
            settlements: vec![NamedTransfer {
                from: "Bo".to_owned(),
                to: "Asha".to_owned(),
                amount: Money::from_i64(60),
            }],
            categories: vec![
                CategoryTotalRow {
                    name: Some("Food".to_owned()),
                    icon: Some("🍽️".to_owned()),
                    amount: Money::from_i64(90),
                },
                CategoryTotalRow {
                    name: None,
                    icon: None,
                    amount: Money::from_i64(30),
                },
            ],
        }
    }

    #[rstest]
    fn renders_full_summary(summary: TripSummary, currency: CurrencyFormat) {
        let output = SummaryPresenter::render(&summary, &currency);

        let expected = "\
# Goa

Total Expenses: $120.00
Number of Expenses: 2
People Involved: 3

## Individual Balances
- Asha  Gets back $60.00
- Bo    Owes $60.00
- Chen  Settled

## Suggested Settlements
- Bo should pay $60.00 to Asha

## Expenses by Category
- 🍽️ Food: $90.00
- Uncategorized: $30.00
";
        assert_eq!(output, expected);
    }

    #[rstest]
    fn empty_summary_shows_hint(mut summary: TripSummary, currency: CurrencyFormat) {
        summary.expense_count = 0;

        let output = SummaryPresenter::render(&summary, &currency);

        assert_eq!(output, format!("{}\n", i18n::NO_EXPENSES_TO_SUMMARIZE));
    }

    #[rstest]
    fn no_settlements_reports_all_settled(currency: CurrencyFormat) {
        assert_eq!(
            SummaryPresenter::render_settlements(&[], &currency),
            "All expenses are settled!\n"
        );
    }
}
