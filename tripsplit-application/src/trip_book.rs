use crate::{
    error::TripError,
    model::{CategoryDraft, ExpenseDraft, PersonDraft, TripDraft, TripSnapshot, TripSummary},
    ports::{IdGenerator, TripRepository},
    summary::SummaryBuilder,
};
use chrono::Utc;
use fxhash::FxHashSet;
use tripsplit_domain::{
    BalanceCalculator, Category, CategoryId, Expense, ExpenseId, Money, NamedTransfer, Person,
    PersonBalances, PersonId, SettlementCalculator, Trip, TripId,
};

/// Single source of truth for all trips.
///
/// Every mutation is written back through the repository before returning.
/// When that save fails the in-memory state keeps the change and no longer
/// matches the store; reload before continuing.
pub struct TripBook<'a> {
    repository: &'a dyn TripRepository,
    ids: &'a dyn IdGenerator,
    state: TripSnapshot,
}

impl<'a> TripBook<'a> {
    /// Load all trips and resolve the current one.
    ///
    /// A stored current id that no longer matches a trip falls back to the
    /// first trip.
    pub fn load(
        repository: &'a dyn TripRepository,
        ids: &'a dyn IdGenerator,
    ) -> Result<Self, TripError> {
        let mut state = repository.load()?;

        let current_is_valid = state
            .current_trip
            .as_ref()
            .is_some_and(|id| state.trips.iter().any(|trip| &trip.id == id));
        if !current_is_valid {
            let fallback = state.trips.first().map(|trip| trip.id.clone());
            if state.current_trip != fallback {
                tracing::warn!(
                    stored = ?state.current_trip,
                    fallback = ?fallback,
                    "Current trip missing from store; falling back"
                );
                state.current_trip = fallback;
                repository.save(&state)?;
            }
        }

        tracing::debug!(
            trip_count = state.trips.len(),
            current_trip = ?state.current_trip,
            "Loaded trip book"
        );

        Ok(Self {
            repository,
            ids,
            state,
        })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.state.trips
    }

    pub fn current_trip(&self) -> Option<&Trip> {
        let id = self.state.current_trip.as_ref()?;
        self.state.trips.iter().find(|trip| &trip.id == id)
    }

    pub fn create_trip(&mut self, draft: TripDraft) -> Result<TripId, TripError> {
        let name = require_text(&draft.name, "Trip name")?;
        let id = TripId::new(self.ids.next_id());
        let categories = Category::default_set(|| CategoryId::new(self.ids.next_id()));

        self.state.trips.push(Trip {
            id: id.clone(),
            name,
            description: draft.description.trim().to_owned(),
            start_date: draft.start_date,
            people: Vec::new(),
            categories,
            expenses: Vec::new(),
            created_at: Utc::now(),
        });
        self.state.current_trip = Some(id.clone());
        self.save()?;

        tracing::info!(trip_id = %id, "Created trip");
        Ok(id)
    }

    pub fn update_trip(&mut self, id: &TripId, draft: TripDraft) -> Result<(), TripError> {
        let name = require_text(&draft.name, "Trip name")?;
        let trip = self
            .state
            .trips
            .iter_mut()
            .find(|trip| &trip.id == id)
            .ok_or_else(|| TripError::TripNotFound(id.clone()))?;

        trip.name = name;
        trip.description = draft.description.trim().to_owned();
        trip.start_date = draft.start_date;
        self.save()?;

        tracing::info!(trip_id = %id, "Updated trip");
        Ok(())
    }

    pub fn switch_trip(&mut self, id: &TripId) -> Result<(), TripError> {
        if !self.state.trips.iter().any(|trip| &trip.id == id) {
            return Err(TripError::TripNotFound(id.clone()));
        }
        self.state.current_trip = Some(id.clone());
        self.save()?;

        tracing::info!(trip_id = %id, "Switched trip");
        Ok(())
    }

    pub fn add_person(&mut self, draft: PersonDraft) -> Result<PersonId, TripError> {
        let name = require_text(&draft.name, "Name")?;
        let id = PersonId::new(self.ids.next_id());
        self.current_trip_mut()?.people.push(Person {
            id: id.clone(),
            name,
            email: normalize_email(draft.email),
        });
        self.save()?;

        tracing::info!(person_id = %id, "Added person");
        Ok(id)
    }

    pub fn update_person(&mut self, id: &PersonId, draft: PersonDraft) -> Result<(), TripError> {
        let name = require_text(&draft.name, "Name")?;
        let person = self
            .current_trip_mut()?
            .people
            .iter_mut()
            .find(|person| &person.id == id)
            .ok_or_else(|| TripError::PersonNotFound(id.clone()))?;

        person.name = name;
        person.email = normalize_email(draft.email);
        self.save()?;

        tracing::info!(person_id = %id, "Updated person");
        Ok(())
    }

    /// Remove a person and every reference to them.
    ///
    /// Expenses they paid become unassigned and they leave every split.
    pub fn remove_person(&mut self, id: &PersonId) -> Result<Person, TripError> {
        let trip = self.current_trip_mut()?;
        let index = trip
            .people
            .iter()
            .position(|person| &person.id == id)
            .ok_or_else(|| TripError::PersonNotFound(id.clone()))?;
        let removed = trip.people.remove(index);

        let mut touched = 0usize;
        for expense in &mut trip.expenses {
            let before = expense.split_between.len();
            expense.split_between.retain(|participant| participant != id);
            let mut changed = expense.split_between.len() != before;
            if expense.paid_by.as_ref() == Some(id) {
                expense.paid_by = None;
                changed = true;
            }
            if changed {
                touched += 1;
            }
        }
        self.save()?;

        tracing::info!(person_id = %id, expenses_touched = touched, "Removed person");
        Ok(removed)
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<CategoryId, TripError> {
        let name = require_text(&draft.name, "Category name")?;
        let id = CategoryId::new(self.ids.next_id());
        self.current_trip_mut()?.categories.push(Category {
            id: id.clone(),
            name,
            icon: draft.icon.trim().to_owned(),
        });
        self.save()?;

        tracing::info!(category_id = %id, "Added category");
        Ok(id)
    }

    pub fn update_category(
        &mut self,
        id: &CategoryId,
        draft: CategoryDraft,
    ) -> Result<(), TripError> {
        let name = require_text(&draft.name, "Category name")?;
        let category = self
            .current_trip_mut()?
            .categories
            .iter_mut()
            .find(|category| &category.id == id)
            .ok_or_else(|| TripError::CategoryNotFound(id.clone()))?;

        category.name = name;
        category.icon = draft.icon.trim().to_owned();
        self.save()?;

        tracing::info!(category_id = %id, "Updated category");
        Ok(())
    }

    /// Remove a category; expenses filed under it become uncategorized.
    pub fn remove_category(&mut self, id: &CategoryId) -> Result<Category, TripError> {
        let trip = self.current_trip_mut()?;
        let index = trip
            .categories
            .iter()
            .position(|category| &category.id == id)
            .ok_or_else(|| TripError::CategoryNotFound(id.clone()))?;
        let removed = trip.categories.remove(index);

        for expense in &mut trip.expenses {
            if expense.category.as_ref() == Some(id) {
                expense.category = None;
            }
        }
        self.save()?;

        tracing::info!(category_id = %id, "Removed category");
        Ok(removed)
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, TripError> {
        let trip = self.active_trip()?;
        let validated = validate_expense(trip, draft)?;
        let id = ExpenseId::new(self.ids.next_id());

        self.current_trip_mut()?.expenses.push(Expense {
            id: id.clone(),
            description: validated.description,
            amount: validated.amount,
            category: validated.category,
            paid_by: validated.paid_by,
            date: validated.date,
            split_between: validated.split_between,
        });
        self.save()?;

        tracing::info!(expense_id = %id, "Added expense");
        Ok(id)
    }

    pub fn update_expense(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> Result<(), TripError> {
        let trip = self.active_trip()?;
        if trip.expense(id).is_none() {
            return Err(TripError::ExpenseNotFound(id.clone()));
        }
        let validated = validate_expense(trip, draft)?;

        let expense = self
            .current_trip_mut()?
            .expenses
            .iter_mut()
            .find(|expense| &expense.id == id)
            .ok_or_else(|| TripError::ExpenseNotFound(id.clone()))?;
        expense.description = validated.description;
        expense.amount = validated.amount;
        expense.category = validated.category;
        expense.paid_by = validated.paid_by;
        expense.date = validated.date;
        expense.split_between = validated.split_between;
        self.save()?;

        tracing::info!(expense_id = %id, "Updated expense");
        Ok(())
    }

    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<Expense, TripError> {
        let trip = self.current_trip_mut()?;
        let index = trip
            .expenses
            .iter()
            .position(|expense| &expense.id == id)
            .ok_or_else(|| TripError::ExpenseNotFound(id.clone()))?;
        let removed = trip.expenses.remove(index);
        self.save()?;

        tracing::info!(expense_id = %id, "Removed expense");
        Ok(removed)
    }

    /// Expenses of the current trip, newest first.
    pub fn expenses_by_date(&self) -> Result<Vec<&Expense>, TripError> {
        let mut expenses: Vec<&Expense> = self.active_trip()?.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    pub fn balances(&self) -> Result<PersonBalances, TripError> {
        let trip = self.active_trip()?;
        Ok(BalanceCalculator.calculate(trip.person_ids(), &trip.expenses))
    }

    pub fn settlements(&self) -> Result<Vec<NamedTransfer>, TripError> {
        let trip = self.active_trip()?;
        let balances = BalanceCalculator.calculate(trip.person_ids(), &trip.expenses);
        Ok(SettlementCalculator.calculate_named(&balances, trip))
    }

    pub fn summary(&self) -> Result<TripSummary, TripError> {
        Ok(SummaryBuilder::build(self.active_trip()?))
    }

    fn active_trip(&self) -> Result<&Trip, TripError> {
        self.current_trip().ok_or(TripError::NoCurrentTrip)
    }

    fn current_trip_mut(&mut self) -> Result<&mut Trip, TripError> {
        let id = self
            .state
            .current_trip
            .as_ref()
            .ok_or(TripError::NoCurrentTrip)?;
        self.state
            .trips
            .iter_mut()
            .find(|trip| &trip.id == id)
            .ok_or(TripError::NoCurrentTrip)
    }

    fn save(&self) -> Result<(), TripError> {
        self.repository.save(&self.state)?;
        Ok(())
    }
}

fn require_text(value: &str, field: &'static str) -> Result<String, TripError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TripError::BlankField { field });
    }
    Ok(trimmed.to_owned())
}

fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|email| email.trim().to_owned())
        .filter(|email| !email.is_empty())
}

fn validate_expense(trip: &Trip, draft: ExpenseDraft) -> Result<ExpenseDraft, TripError> {
    let description = require_text(&draft.description, "Description")?;
    if draft.amount.is_negative() {
        return Err(TripError::NegativeAmount(draft.amount));
    }
    if draft.amount > Money::MAX_AMOUNT {
        return Err(TripError::AmountTooLarge(draft.amount));
    }

    let paid_by = draft.paid_by.ok_or(TripError::MissingPayer)?;
    if trip.person(&paid_by).is_none() {
        return Err(TripError::PersonNotFound(paid_by));
    }

    if let Some(category) = &draft.category
        && trip.category(category).is_none()
    {
        return Err(TripError::CategoryNotFound(category.clone()));
    }

    let mut seen = FxHashSet::default();
    let mut split_between = Vec::with_capacity(draft.split_between.len());
    for participant in draft.split_between {
        if trip.person(&participant).is_none() {
            return Err(TripError::PersonNotFound(participant));
        }
        if seen.insert(participant.clone()) {
            split_between.push(participant);
        }
    }
    if split_between.is_empty() {
        return Err(TripError::EmptySplit);
    }

    Ok(ExpenseDraft {
        description,
        amount: draft.amount,
        category: draft.category,
        paid_by: Some(paid_by),
        date: draft.date,
        split_between,
    })
}
