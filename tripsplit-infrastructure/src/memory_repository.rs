use std::sync::RwLock;
use tripsplit_application::{RepositoryError, TripRepository, TripSnapshot};

/// Keeps the snapshot in memory only; nothing survives the process.
#[derive(Default)]
pub struct InMemoryTripRepository {
    snapshot: RwLock<TripSnapshot>,
}

impl InMemoryTripRepository {
    pub fn new(snapshot: TripSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

impl TripRepository for InMemoryTripRepository {
    fn load(&self) -> Result<TripSnapshot, RepositoryError> {
        Ok(self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, snapshot: &TripSnapshot) -> Result<(), RepositoryError> {
        *self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = snapshot.clone();
        Ok(())
    }
}
