use crate::{
    bootstrap::AppConfig,
    cli::{
        CategoryArgs, CategoryCommand, Command, ExpenseArgs, ExpenseCommand, PersonArgs,
        PersonCommand, TripArgs, TripCommand,
    },
};
use anyhow::Context as _;
use chrono::Local;
use tripsplit_application::{
    CategoryDraft, ExpenseDraft, IdGenerator, PersonDraft, TripBook, TripDraft, TripError,
    TripRepository,
};
use tripsplit_domain::{CategoryId, ExpenseId, PersonId, Trip, TripId};
use tripsplit_presentation::{
    CurrencyFormat, ExpensePresenter, RosterPresenter, SummaryPresenter,
};

/// Run one command against the store and return what should be printed.
///
/// Mutating commands reply with the refreshed listing they affect.
pub fn execute(
    repository: &dyn TripRepository,
    ids: &dyn IdGenerator,
    config: &AppConfig,
    command: Command,
) -> anyhow::Result<String> {
    let mut book = TripBook::load(repository, ids).context("Failed to load trips")?;
    let currency = CurrencyFormat::new(config.currency.as_str());

    let output = match command {
        Command::Trip(command) => trip(&mut book, command)?,
        Command::Person(command) => person(&mut book, command)?,
        Command::Category(command) => category(&mut book, command)?,
        Command::Expense(command) => expense(&mut book, command, &currency)?,
        Command::Balances => {
            let summary = book.summary()?;
            SummaryPresenter::render_balances(&summary.balances, &currency)
        }
        Command::Settle => SummaryPresenter::render_settlements(&book.settlements()?, &currency),
        Command::Summary => SummaryPresenter::render(&book.summary()?, &currency),
    };
    Ok(output)
}

fn trip(book: &mut TripBook<'_>, command: TripCommand) -> Result<String, TripError> {
    match command {
        TripCommand::New(args) => {
            book.create_trip(trip_draft(args))?;
        }
        TripCommand::Edit { id, trip } => book.update_trip(&TripId::new(id), trip_draft(trip))?,
        TripCommand::List => {}
        TripCommand::Switch { id } => book.switch_trip(&TripId::new(id))?,
    }
    let current = book.current_trip().map(|trip| &trip.id);
    Ok(RosterPresenter::render_trips(book.trips(), current))
}

fn person(book: &mut TripBook<'_>, command: PersonCommand) -> Result<String, TripError> {
    match command {
        PersonCommand::Add(args) => {
            book.add_person(person_draft(args))?;
        }
        PersonCommand::Edit { id, person } => {
            book.update_person(&PersonId::new(id), person_draft(person))?;
        }
        PersonCommand::Rm { id } => {
            book.remove_person(&PersonId::new(id))?;
        }
        PersonCommand::List => {}
    }
    Ok(RosterPresenter::render_people(active(book)?))
}

fn category(book: &mut TripBook<'_>, command: CategoryCommand) -> Result<String, TripError> {
    match command {
        CategoryCommand::Add(args) => {
            book.add_category(category_draft(args))?;
        }
        CategoryCommand::Edit { id, category } => {
            book.update_category(&CategoryId::new(id), category_draft(category))?;
        }
        CategoryCommand::Rm { id } => {
            book.remove_category(&CategoryId::new(id))?;
        }
        CategoryCommand::List => {}
    }
    Ok(RosterPresenter::render_categories(active(book)?))
}

fn expense(
    book: &mut TripBook<'_>,
    command: ExpenseCommand,
    currency: &CurrencyFormat,
) -> Result<String, TripError> {
    match command {
        ExpenseCommand::Add(args) => {
            let draft = expense_draft(active(book)?, args);
            book.add_expense(draft)?;
        }
        ExpenseCommand::Edit { id, expense } => {
            let draft = expense_draft(active(book)?, expense);
            book.update_expense(&ExpenseId::new(id), draft)?;
        }
        ExpenseCommand::Rm { id } => {
            book.remove_expense(&ExpenseId::new(id))?;
        }
        ExpenseCommand::List => {}
    }
    let expenses = book.expenses_by_date()?;
    Ok(ExpensePresenter::render(&expenses, active(book)?, currency))
}

fn active<'b>(book: &'b TripBook<'_>) -> Result<&'b Trip, TripError> {
    book.current_trip().ok_or(TripError::NoCurrentTrip)
}

fn trip_draft(args: TripArgs) -> TripDraft {
    TripDraft {
        name: args.name,
        description: args.description,
        start_date: args.start,
    }
}

fn person_draft(args: PersonArgs) -> PersonDraft {
    PersonDraft {
        name: args.name,
        email: args.email,
    }
}

fn category_draft(args: CategoryArgs) -> CategoryDraft {
    CategoryDraft {
        name: args.name,
        icon: args.icon,
    }
}

fn expense_draft(trip: &Trip, args: ExpenseArgs) -> ExpenseDraft {
    let split_between = if args.all {
        trip.person_ids().cloned().collect()
    } else {
        args.split.into_iter().map(PersonId::new).collect()
    };

    ExpenseDraft {
        description: args.description,
        amount: args.amount,
        category: args.category.map(CategoryId::new),
        paid_by: Some(PersonId::new(args.paid_by)),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        split_between,
    }
}
