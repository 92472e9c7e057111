//! MVC Controller - Mediates between Model (TripStore) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load saved trips from the TripStore (or the embedded demo content)
//! - Provide trips to the View in UI-friendly form
//! - Delete trips with bounds checking, persisting when file-backed
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets.
//! This keeps content handling separate from presentation and testable
//! without a display server.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::core::types::Trip;
use crate::store::{self, StoreError, TripStore};

/// MVC Controller coordinating Model and View
///
/// Holds the trips file store (if any) and the loaded trips, and
/// provides methods for the View to query/manipulate them.
pub struct Controller {
    /// Backing trips file; `None` when running on embedded demo content
    store: Option<TripStore>,
    /// Currently loaded trips
    trips: RefCell<Vec<Trip>>,
}

impl Controller {
    /// Creates a new Controller.
    ///
    /// # Arguments
    ///
    /// * `trips_path` - Path to the trips file, or `None` to use the
    ///   embedded demo content
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if a path is given but the file
    /// doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use trip_itinerary_viewer::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(Some(PathBuf::from("trips.toml")))?;
    /// # Ok::<(), trip_itinerary_viewer::store::StoreError>(())
    /// ```
    pub fn new(trips_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let store = match trips_path {
            Some(path) => Some(TripStore::new(path)?),
            None => None,
        };

        Ok(Self {
            store,
            trips: RefCell::new(Vec::new()),
        })
    }

    /// Loads trips from the store (or demo content) into the Controller.
    ///
    /// Call this on startup and whenever the trips file changes on disk.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of trips loaded
    /// * `Err(StoreError)` - Failed to read or parse the trips file
    pub fn load_trips(&self) -> Result<usize, StoreError> {
        let trips = match &self.store {
            Some(store) => store.load()?,
            None => store::demo_trips()?,
        };

        let count = trips.len();
        *self.trips.borrow_mut() = trips;

        Ok(count)
    }

    /// Reloads from the trips file if its content differs from the
    /// loaded trips.
    ///
    /// Used by the live-reload poll: the viewer's own atomic saves
    /// also wake the file watcher, and those must not count as a
    /// change.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Content differed; now loaded, with count
    /// * `Ok(None)` - No backing file, or content was identical
    /// * `Err(StoreError)` - Failed to read or parse the trips file
    pub fn reload_if_changed(&self) -> Result<Option<usize>, StoreError> {
        let fresh = match &self.store {
            Some(store) => store.load()?,
            None => return Ok(None),
        };

        if *self.trips.borrow() == fresh {
            return Ok(None);
        }

        let count = fresh.len();
        *self.trips.borrow_mut() = fresh;

        Ok(Some(count))
    }

    /// Returns all loaded trips.
    pub fn trips(&self) -> Vec<Trip> {
        self.trips.borrow().clone()
    }

    /// Returns the trip at `index`, if it exists.
    pub fn trip_at(&self, index: usize) -> Option<Trip> {
        self.trips.borrow().get(index).cloned()
    }

    /// Number of loaded trips.
    pub fn trip_count(&self) -> usize {
        self.trips.borrow().len()
    }

    /// Deletes the trip at `index` and returns it.
    ///
    /// When the Controller is file-backed the reduced list is persisted
    /// atomically; if persisting fails the trip is put back so the view
    /// stays consistent with the file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TripNotFound` if `index` is out of range
    /// and `StoreError::WriteFailed` if the trips file can't be updated.
    pub fn delete_trip(&self, index: usize) -> Result<Trip, StoreError> {
        let mut trips = self.trips.borrow_mut();

        if index >= trips.len() {
            return Err(StoreError::TripNotFound(index));
        }

        let removed = trips.remove(index);

        if let Some(store) = &self.store {
            if let Err(e) = store.save(&trips) {
                trips.insert(index, removed);
                return Err(e);
            }
        }

        Ok(removed)
    }

    /// Path of the backing trips file, if any.
    pub fn trips_path(&self) -> Option<&Path> {
        self.store.as_ref().map(|store| store.path())
    }
}
