use chrono::NaiveDate;
use rstest::{fixture, rstest};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tripsplit_application::{
    CategoryDraft, ExpenseDraft, IdGenerator, PersonDraft, RepositoryError, TripBook, TripDraft,
    TripError, TripRepository, TripSnapshot,
};
use tripsplit_domain::{CategoryId, ExpenseId, Money, NamedTransfer, PersonId, TripId};

#[derive(Default)]
struct RecordingRepository {
    stored: Mutex<TripSnapshot>,
    saves: AtomicUsize,
}

impl RecordingRepository {
    fn with(snapshot: TripSnapshot) -> Self {
        Self {
            stored: Mutex::new(snapshot),
            saves: AtomicUsize::new(0),
        }
    }

    fn stored(&self) -> TripSnapshot {
        self.stored.lock().expect("lock poisoned").clone()
    }

    fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl TripRepository for RecordingRepository {
    fn load(&self) -> Result<TripSnapshot, RepositoryError> {
        Ok(self.stored())
    }

    fn save(&self, snapshot: &TripSnapshot) -> Result<(), RepositoryError> {
        *self.stored.lock().expect("lock poisoned") = snapshot.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("id{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

struct Fixture {
    repository: RecordingRepository,
    ids: SequentialIds,
}

#[fixture]
fn fixture() -> Fixture {
    Fixture {
        repository: RecordingRepository::default(),
        ids: SequentialIds::default(),
    }
}

fn trip_draft(name: &str) -> TripDraft {
    TripDraft {
        name: name.to_owned(),
        ..TripDraft::default()
    }
}

fn person_draft(name: &str) -> PersonDraft {
    PersonDraft {
        name: name.to_owned(),
        email: None,
    }
}

fn expense_draft(amount: i64, paid_by: &PersonId, split: &[&PersonId]) -> ExpenseDraft {
    ExpenseDraft {
        description: "Dinner".to_owned(),
        amount: Money::from_i64(amount),
        category: None,
        paid_by: Some(paid_by.clone()),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        split_between: split.iter().map(|id| (*id).clone()).collect(),
    }
}

struct Group {
    a: PersonId,
    b: PersonId,
    c: PersonId,
}

fn seed_group(book: &mut TripBook<'_>) -> Group {
    book.create_trip(trip_draft("Goa")).expect("trip created");
    Group {
        a: book.add_person(person_draft("Asha")).expect("person added"),
        b: book.add_person(person_draft("Bilal")).expect("person added"),
        c: book.add_person(person_draft("Chen")).expect("person added"),
    }
}

#[rstest]
fn create_trip_seeds_default_categories(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let id = book.create_trip(trip_draft("  Goa  ")).expect("trip created");

    let trip = book.current_trip().expect("current trip");
    assert_eq!(trip.id, id);
    assert_eq!(trip.name, "Goa");
    assert_eq!(trip.categories.len(), 6);
    assert!(trip.people.is_empty());
    assert_eq!(fixture.repository.stored().current_trip, Some(id));
}

#[rstest]
fn operations_require_current_trip(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");

    assert!(matches!(
        book.add_person(person_draft("Asha")),
        Err(TripError::NoCurrentTrip)
    ));
    assert!(matches!(book.summary(), Err(TripError::NoCurrentTrip)));
}

#[rstest]
fn load_falls_back_to_first_trip(fixture: Fixture) {
    {
        let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
        book.create_trip(trip_draft("First")).expect("trip created");
        book.create_trip(trip_draft("Second")).expect("trip created");
    }
    let mut stored = fixture.repository.stored();
    let first = stored.trips[0].id.clone();
    stored.current_trip = Some(TripId::from("deleted"));
    let repository = RecordingRepository::with(stored);

    let book = TripBook::load(&repository, &fixture.ids).expect("load");

    assert_eq!(book.current_trip().map(|trip| &trip.id), Some(&first));
    assert_eq!(repository.stored().current_trip, Some(first));
}

#[rstest]
fn switch_trip_rejects_unknown_id(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let first = book.create_trip(trip_draft("First")).expect("trip created");
    book.create_trip(trip_draft("Second")).expect("trip created");

    book.switch_trip(&first).expect("switch");
    assert_eq!(book.current_trip().map(|trip| trip.name.as_str()), Some("First"));

    assert!(matches!(
        book.switch_trip(&TripId::from("missing")),
        Err(TripError::TripNotFound(_))
    ));
}

#[rstest]
fn every_mutation_is_saved(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    book.add_expense(expense_draft(90, &group.a, &[&group.a, &group.b, &group.c]))
        .expect("expense added");

    assert_eq!(fixture.repository.save_count(), 5);
    assert_eq!(fixture.repository.stored().trips[0].expenses.len(), 1);
}

#[rstest]
fn settlements_follow_balances(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    book.add_expense(expense_draft(90, &group.a, &[&group.a, &group.b, &group.c]))
        .expect("expense added");

    let balances = book.balances().expect("balances");
    assert_eq!(balances[&group.a], Money::from_i64(60));
    assert_eq!(balances[&group.b], Money::from_i64(-30));
    assert_eq!(balances[&group.c], Money::from_i64(-30));

    assert_eq!(
        book.settlements().expect("settlements"),
        vec![
            NamedTransfer {
                from: "Bilal".to_owned(),
                to: "Asha".to_owned(),
                amount: Money::from_i64(30),
            },
            NamedTransfer {
                from: "Chen".to_owned(),
                to: "Asha".to_owned(),
                amount: Money::from_i64(30),
            },
        ]
    );
}

#[rstest]
fn remove_person_clears_references(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    let paid_by_a = book
        .add_expense(expense_draft(90, &group.a, &[&group.a, &group.b, &group.c]))
        .expect("expense added");
    let paid_by_b = book
        .add_expense(expense_draft(40, &group.b, &[&group.a, &group.b]))
        .expect("expense added");

    let removed = book.remove_person(&group.a).expect("person removed");
    assert_eq!(removed.name, "Asha");

    let trip = book.current_trip().expect("current trip");
    let first = trip.expense(&paid_by_a).expect("expense kept");
    assert_eq!(first.paid_by, None);
    assert_eq!(first.split_between, vec![group.b.clone(), group.c.clone()]);
    let second = trip.expense(&paid_by_b).expect("expense kept");
    assert_eq!(second.paid_by, Some(group.b.clone()));
    assert_eq!(second.split_between, vec![group.b.clone()]);

    let balances = book.balances().expect("balances");
    assert!(!balances.contains_key(&group.a));
    assert!(balances.values().all(|balance| balance.is_zero()));
}

#[rstest]
fn remove_category_uncategorizes_expenses(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    let category = book
        .add_category(CategoryDraft {
            name: "Snacks".to_owned(),
            icon: "🍿".to_owned(),
        })
        .expect("category added");
    let mut draft = expense_draft(12, &group.a, &[&group.a]);
    draft.category = Some(category.clone());
    let expense = book.add_expense(draft).expect("expense added");

    book.remove_category(&category).expect("category removed");

    let trip = book.current_trip().expect("current trip");
    assert_eq!(trip.expense(&expense).and_then(|e| e.category.clone()), None);
    assert!(trip.category(&category).is_none());
}

#[rstest]
#[case::empty_split(vec![], TripErrorKind::EmptySplit)]
#[case::unknown_participant(vec!["ghost"], TripErrorKind::PersonNotFound)]
fn add_expense_validates_split(
    fixture: Fixture,
    #[case] split: Vec<&str>,
    #[case] expected: TripErrorKind,
) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    let mut draft = expense_draft(10, &group.a, &[]);
    draft.split_between = split.into_iter().map(PersonId::from).collect();

    let err = book.add_expense(draft).expect_err("draft must be rejected");
    assert_eq!(TripErrorKind::of(&err), expected);
}

#[rstest]
fn add_expense_rejects_invalid_amounts_and_missing_payer(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);

    let negative = expense_draft(-5, &group.a, &[&group.a]);
    assert!(matches!(
        book.add_expense(negative),
        Err(TripError::NegativeAmount(_))
    ));

    let mut oversized = expense_draft(5, &group.a, &[&group.a]);
    oversized.amount = Money::MAX_AMOUNT + Money::new(1, 2);
    assert!(matches!(
        book.add_expense(oversized),
        Err(TripError::AmountTooLarge(_))
    ));

    let mut at_limit = expense_draft(5, &group.a, &[&group.a]);
    at_limit.amount = Money::MAX_AMOUNT;
    let first = book.add_expense(at_limit.clone()).expect("limit is accepted");
    book.add_expense(at_limit).expect("limit is accepted");
    assert_eq!(book.balances().expect("balances")[&group.a], Money::ZERO);
    book.remove_expense(&first).expect("expense removed");

    let mut unpaid = expense_draft(5, &group.a, &[&group.a]);
    unpaid.paid_by = None;
    assert!(matches!(book.add_expense(unpaid), Err(TripError::MissingPayer)));

    let mut uncategorized = expense_draft(5, &group.a, &[&group.a]);
    uncategorized.category = Some(CategoryId::from("missing"));
    assert!(matches!(
        book.add_expense(uncategorized),
        Err(TripError::CategoryNotFound(_))
    ));
}

#[rstest]
fn add_expense_collapses_duplicate_participants(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);

    let id = book
        .add_expense(expense_draft(30, &group.a, &[&group.b, &group.a, &group.b]))
        .expect("expense added");

    let trip = book.current_trip().expect("current trip");
    assert_eq!(
        trip.expense(&id).map(|e| e.split_between.clone()),
        Some(vec![group.b.clone(), group.a.clone()])
    );
}

#[rstest]
fn update_and_remove_expense(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    let id = book
        .add_expense(expense_draft(30, &group.a, &[&group.a, &group.b]))
        .expect("expense added");

    book.update_expense(&id, expense_draft(60, &group.b, &[&group.a, &group.b]))
        .expect("expense updated");
    let balances = book.balances().expect("balances");
    assert_eq!(balances[&group.a], Money::from_i64(-30));
    assert_eq!(balances[&group.b], Money::from_i64(30));

    book.remove_expense(&id).expect("expense removed");
    assert!(matches!(
        book.remove_expense(&id),
        Err(TripError::ExpenseNotFound(_))
    ));
    assert!(matches!(
        book.update_expense(&ExpenseId::from("missing"), expense_draft(1, &group.a, &[&group.a])),
        Err(TripError::ExpenseNotFound(_))
    ));
}

#[rstest]
fn expenses_listed_newest_first(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    let group = seed_group(&mut book);
    for day in [3, 9, 1] {
        let mut draft = expense_draft(10, &group.a, &[&group.a]);
        draft.date = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
        book.add_expense(draft).expect("expense added");
    }

    let days: Vec<String> = book
        .expenses_by_date()
        .expect("expenses")
        .iter()
        .map(|expense| expense.date.to_string())
        .collect();
    assert_eq!(days, ["2024-03-09", "2024-03-03", "2024-03-01"]);
}

#[rstest]
fn blank_names_are_rejected(fixture: Fixture) {
    let mut book = TripBook::load(&fixture.repository, &fixture.ids).expect("load");
    assert!(matches!(
        book.create_trip(trip_draft("   ")),
        Err(TripError::BlankField { field: "Trip name" })
    ));

    seed_group(&mut book);
    assert!(matches!(
        book.add_person(person_draft("")),
        Err(TripError::BlankField { field: "Name" })
    ));
}

#[derive(Debug, PartialEq, Eq)]
enum TripErrorKind {
    EmptySplit,
    PersonNotFound,
    Other,
}

impl TripErrorKind {
    fn of(err: &TripError) -> Self {
        match err {
            TripError::EmptySplit => Self::EmptySplit,
            TripError::PersonNotFound(_) => Self::PersonNotFound,
            _ => Self::Other,
        }
    }
}
