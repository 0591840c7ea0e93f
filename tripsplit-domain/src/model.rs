use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{
    collections::HashMap,
    convert::Infallible,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
}

string_id!(
    /// Identifier of a person taking part in a trip.
    PersonId
);
string_id!(CategoryId);
string_id!(ExpenseId);
string_id!(TripId);

/// Net balance per person, in the order people were registered.
///
/// Insertion order matters: the settlement matcher breaks magnitude ties by it.
pub type PersonBalances = IndexMap<PersonId, Money>;

/// Decimal currency amount.
///
/// Serialized as a decimal string; deserializes from either a string or a
/// JSON number.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One cent. Magnitudes below this are treated as settled.
    pub const TOLERANCE: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));

    /// Largest amount accepted for a single expense (one trillion).
    ///
    /// Keeps sums over many expenses far away from `Decimal` overflow.
    pub const MAX_AMOUNT: Self = Self(Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0));

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// True when the magnitude is below [`Money::TOLERANCE`].
    pub fn is_negligible(self) -> bool {
        self.abs() < Self::TOLERANCE
    }

    /// Equal share of this amount among `count` people.
    ///
    /// Returns `None` for an empty split.
    pub fn split_evenly(self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(count)).map(Self)
    }

    /// Rounded to cents, for display.
    pub fn to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_cents().0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Optional field that older stores write as `""` when left empty.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(de::Error::custom)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Food", "🍽️"),
    ("Transport", "🚗"),
    ("Accommodation", "🏨"),
    ("Entertainment", "🎭"),
    ("Shopping", "🛍️"),
    ("Other", "📦"),
];

impl Category {
    /// Seed categories for a freshly created trip.
    pub fn default_set(mut next_id: impl FnMut() -> CategoryId) -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|&(name, icon)| Self {
                id: next_id(),
                name: name.to_owned(),
                icon: icon.to_owned(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<CategoryId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub paid_by: Option<PersonId>,
    pub date: NaiveDate,
    #[serde(default)]
    pub split_between: Vec<PersonId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|person| &person.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| &expense.id == id)
    }

    pub fn person_ids(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.people.iter().map(|person| &person.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: PersonId,
    pub to: PersonId,
    pub amount: Money,
}

/// A transfer reported by display names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedTransfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

/// Looks up display names for person ids.
pub trait PersonDirectory {
    fn display_name(&self, id: &PersonId) -> Option<&str>;
}

impl PersonDirectory for Trip {
    fn display_name(&self, id: &PersonId) -> Option<&str> {
        self.person(id).map(|person| person.name.as_str())
    }
}

impl PersonDirectory for Vec<Person> {
    fn display_name(&self, id: &PersonId) -> Option<&str> {
        self.iter()
            .find(|person| &person.id == id)
            .map(|person| person.name.as_str())
    }
}

impl PersonDirectory for HashMap<PersonId, String> {
    fn display_name(&self, id: &PersonId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl PersonDirectory for IndexMap<PersonId, String> {
    fn display_name(&self, id: &PersonId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}
