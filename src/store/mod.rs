//! Trips file management with atomic writes.
//!
//! This module provides safe operations for the saved-trips file that
//! backs the viewer. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Symlink warnings**: Alerts user but allows symlinked trips files
//! - **Embedded demo content**: Ships a sample trips file for running
//!   the viewer without any saved trips
//!
//! # Example
//!
//! ```no_run
//! use trip_itinerary_viewer::store::TripStore;
//!
//! let store = TripStore::new("/home/user/.local/share/trip-itinerary-viewer/trips.toml".into())?;
//!
//! let mut trips = store.load()?;
//! trips.pop();
//! store.save(&trips)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Trip;

/// Errors that can occur while managing the trips file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Trips file does not exist.
    #[error("Trips file not found: {0}")]
    NotFound(PathBuf),

    /// Trips file exists but is not valid TOML / trip data.
    #[error("Failed to parse trips file: {0}")]
    ParseFailed(String),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// A trip index was out of range.
    #[error("Trip not found: no trip at index {0}")]
    TripNotFound(usize),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk shape of the trips file: an array of `[[trips]]` tables.
#[derive(Debug, Default, Deserialize, Serialize)]
struct TripsFile {
    #[serde(default)]
    trips: Vec<Trip>,
}

/// Manages the saved-trips file with safe atomic operations.
///
/// The TripStore provides read access and atomic whole-file writes.
/// Deleting a trip goes through `save` with the reduced list, so a
/// crash mid-write never leaves a corrupt trips file behind.
#[derive(Debug)]
pub struct TripStore {
    /// Path to the trips file.
    trips_path: PathBuf,
}

impl TripStore {
    /// Creates a new TripStore for the given trips file.
    ///
    /// This validates that the file exists. If it is a symlink, a
    /// warning is printed to stderr but the operation continues.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the trips file doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use trip_itinerary_viewer::store::TripStore;
    /// use std::path::PathBuf;
    ///
    /// let store = TripStore::new(PathBuf::from("trips.toml"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(trips_path: PathBuf) -> Result<Self, StoreError> {
        // Validate trips file exists
        if !trips_path.exists() {
            return Err(StoreError::NotFound(trips_path));
        }

        // Warn if the trips file is a symlink (but allow it)
        if trips_path.read_link().is_ok() {
            eprintln!("⚠ Warning: Trips file is a symlink: {}", trips_path.display());
            eprintln!("  This is allowed, but be aware of what it points to.");
        }

        Ok(Self { trips_path })
    }

    /// Path of the managed trips file.
    pub fn path(&self) -> &Path {
        &self.trips_path
    }

    /// Loads all saved trips from the trips file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read and
    /// `StoreError::ParseFailed` if its content is not valid trip data.
    pub fn load(&self) -> Result<Vec<Trip>, StoreError> {
        let content = fs::read_to_string(&self.trips_path)?;

        let file: TripsFile =
            toml::from_str(&content).map_err(|e| StoreError::ParseFailed(e.to_string()))?;

        Ok(file.trips)
    }

    /// Writes the given trips back to the trips file atomically.
    ///
    /// The content is staged in a temporary file and renamed over the
    /// original on commit, so readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if staging or committing the
    /// write fails.
    pub fn save(&self, trips: &[Trip]) -> Result<(), StoreError> {
        let file = TripsFile {
            trips: trips.to_vec(),
        };

        let content =
            toml::to_string_pretty(&file).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let mut out = AtomicWriteFile::open(&self.trips_path)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        out.write_all(content.as_bytes())
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        out.commit()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

/// Parses the embedded demo trips used when no trips file is given.
///
/// The demo content stands in for server-rendered page content so the
/// viewer always has cards to animate.
pub fn demo_trips() -> Result<Vec<Trip>, StoreError> {
    let file: TripsFile = toml::from_str(include_str!("demo_trips.toml"))
        .map_err(|e| StoreError::ParseFailed(e.to_string()))?;

    Ok(file.trips)
}
