use std::fmt::Display;

#[cfg(feature = "ja")]
pub mod strings {
    pub const TOTAL_EXPENSES: &str = "支出合計";
    pub const NUMBER_OF_EXPENSES: &str = "支出件数";
    pub const PEOPLE_INVOLVED: &str = "参加人数";
    pub const INDIVIDUAL_BALANCES: &str = "個人別収支";
    pub const SUGGESTED_SETTLEMENTS: &str = "精算案";
    pub const EXPENSES_BY_CATEGORY: &str = "カテゴリ別支出";
    pub const SETTLED: &str = "精算済み";
    pub const ALL_SETTLED: &str = "すべて精算済みです！";
    pub const UNCATEGORIZED: &str = "未分類";
    pub const UNKNOWN: &str = "不明";
    pub const NO_EXPENSES: &str = "まだ支出が記録されていません。";
    pub const NO_EXPENSES_TO_SUMMARIZE: &str = "集計する支出がまだありません。";
    pub const NO_PEOPLE: &str = "まだメンバーがいません。";
    pub const NO_CATEGORIES: &str = "カテゴリがありません。";
    pub const NO_TRIPS: &str = "旅行がまだありません。作成してください！";
    pub const CURRENT_MARKER: &str = "(選択中)";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const TOTAL_EXPENSES: &str = "Total Expenses";
    pub const NUMBER_OF_EXPENSES: &str = "Number of Expenses";
    pub const PEOPLE_INVOLVED: &str = "People Involved";
    pub const INDIVIDUAL_BALANCES: &str = "Individual Balances";
    pub const SUGGESTED_SETTLEMENTS: &str = "Suggested Settlements";
    pub const EXPENSES_BY_CATEGORY: &str = "Expenses by Category";
    pub const SETTLED: &str = "Settled";
    pub const ALL_SETTLED: &str = "All expenses are settled!";
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const UNKNOWN: &str = "Unknown";
    pub const NO_EXPENSES: &str =
        "No expenses recorded yet. Start adding expenses to track your trip!";
    pub const NO_EXPENSES_TO_SUMMARIZE: &str =
        "No expenses to summarize yet. Add some expenses to see the summary!";
    pub const NO_PEOPLE: &str = "No people added yet.";
    pub const NO_CATEGORIES: &str = "No categories yet.";
    pub const NO_TRIPS: &str = "No trips yet - Create one!";
    pub const CURRENT_MARKER: &str = "(current)";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn gets_back(amount: impl Display) -> String {
    format!("{amount} 受け取り")
}

#[cfg(feature = "ja")]
pub fn owes(amount: impl Display) -> String {
    format!("{amount} 支払い")
}

#[cfg(feature = "ja")]
pub fn should_pay(from: impl Display, amount: impl Display, to: impl Display) -> String {
    format!("{from} → {to}: {amount}")
}

#[cfg(feature = "ja")]
pub fn paid_by(name: impl Display) -> String {
    format!("支払者: {name}")
}

#[cfg(feature = "ja")]
pub fn split_between(names: impl Display) -> String {
    format!("割り勘: {names}")
}

#[cfg(not(feature = "ja"))]
pub fn gets_back(amount: impl Display) -> String {
    format!("Gets back {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn owes(amount: impl Display) -> String {
    format!("Owes {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn should_pay(from: impl Display, amount: impl Display, to: impl Display) -> String {
    format!("{from} should pay {amount} to {to}")
}

#[cfg(not(feature = "ja"))]
pub fn paid_by(name: impl Display) -> String {
    format!("Paid by {name}")
}

#[cfg(not(feature = "ja"))]
pub fn split_between(names: impl Display) -> String {
    format!("Split between: {names}")
}
