use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tripsplit_domain::Money;

#[derive(Debug, Parser)]
#[command(name = "tripsplit", version, about = "Split group trip expenses")]
pub struct Cli {
    /// Path of the JSON trip store (overrides TRIPSPLIT_DATA)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Currency symbol used for display (overrides TRIPSPLIT_CURRENCY)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage trips
    #[command(subcommand)]
    Trip(TripCommand),
    /// Manage people in the current trip
    #[command(subcommand)]
    Person(PersonCommand),
    /// Manage spending categories in the current trip
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage expenses in the current trip
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Show each person's net balance
    Balances,
    /// Show suggested settlement payments
    Settle,
    /// Show the full trip summary
    Summary,
}

#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Create a trip and make it current
    New(TripArgs),
    /// Edit a trip
    Edit {
        id: String,
        #[command(flatten)]
        trip: TripArgs,
    },
    /// List all trips
    List,
    /// Make another trip current
    Switch { id: String },
}

#[derive(Debug, Args)]
pub struct TripArgs {
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum PersonCommand {
    Add(PersonArgs),
    Edit {
        id: String,
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Remove a person and their references in expenses
    Rm { id: String },
    List,
}

#[derive(Debug, Args)]
pub struct PersonArgs {
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    Add(CategoryArgs),
    Edit {
        id: String,
        #[command(flatten)]
        category: CategoryArgs,
    },
    /// Remove a category; its expenses become uncategorized
    Rm { id: String },
    List,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    pub name: String,
    #[arg(long, default_value = "")]
    pub icon: String,
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    Add(ExpenseArgs),
    Edit {
        id: String,
        #[command(flatten)]
        expense: ExpenseArgs,
    },
    Rm {
        id: String,
    },
    /// List expenses, newest first
    List,
}

#[derive(Debug, Args)]
pub struct ExpenseArgs {
    pub description: String,
    pub amount: Money,
    /// Id of the person who paid
    #[arg(long)]
    pub paid_by: String,
    /// Ids of the people sharing the cost
    #[arg(long, value_delimiter = ',', required_unless_present = "all")]
    pub split: Vec<String>,
    /// Split among everyone in the trip
    #[arg(long, conflicts_with = "split")]
    pub all: bool,
    #[arg(long)]
    pub category: Option<String>,
    /// Expense date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
