use std::{
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};
use tripsplit_application::{RepositoryError, TripRepository, TripSnapshot};

/// Stores every trip in one pretty-printed JSON file.
pub struct JsonFileTripRepository {
    path: PathBuf,
}

impl JsonFileTripRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TripRepository for JsonFileTripRepository {
    fn load(&self) -> Result<TripSnapshot, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No trip store yet; starting empty");
                return Ok(TripSnapshot::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        if content.trim().is_empty() {
            return Ok(TripSnapshot::default());
        }

        serde_json::from_str(&content).map_err(|err| RepositoryError::Malformed {
            path: self.path.clone(),
            source: Box::new(err),
        })
    }

    fn save(&self, snapshot: &TripSnapshot) -> Result<(), RepositoryError> {
        let mut encoded =
            serde_json::to_vec_pretty(snapshot).map_err(|err| RepositoryError::Malformed {
                path: self.path.clone(),
                source: Box::new(err),
            })?;
        encoded.push(b'\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        // Write beside the target and rename so a crash never leaves half a file.
        let staging = self.staging_path();
        let mut file = fs::File::create(&staging).map_err(|err| self.io_error(err))?;
        file.write_all(&encoded)
            .and_then(|()| file.sync_all())
            .map_err(|err| self.io_error(err))?;
        fs::rename(&staging, &self.path).map_err(|err| self.io_error(err))?;

        tracing::debug!(
            path = %self.path.display(),
            trip_count = snapshot.trips.len(),
            "Saved trip store"
        );
        Ok(())
    }
}
