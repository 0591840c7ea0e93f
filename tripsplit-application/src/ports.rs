use crate::{error::RepositoryError, model::TripSnapshot};

/// Load/save boundary for all trips.
pub trait TripRepository: Send + Sync {
    fn load(&self) -> Result<TripSnapshot, RepositoryError>;
    fn save(&self, snapshot: &TripSnapshot) -> Result<(), RepositoryError>;
}

/// Source of unique identifiers for trips, people, categories and expenses.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
