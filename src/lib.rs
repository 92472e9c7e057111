// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Trip Itinerary Viewer
//!
//! A GTK4 viewer for saved travel itineraries with the page behaviours
//! of the trip planner site: a collapsible navigation menu, flash
//! notices with timed dismissal, scroll-triggered card reveal, and
//! confirmed deletes.
//!
//! # Features
//!
//! - **Trip Browsing:** Cards with per-day itinerary blocks
//! - **Flash Notices:** Success/error banners, closable and auto-dismissing
//! - **Scroll Reveal:** Content animates in as it enters the viewport
//! - **Confirmed Deletes:** Destructive actions guarded by a dialog
//! - **Live Reload:** External edits to the trips file refresh the page
//! - **Atomic Saves:** Deletions never leave a corrupt trips file
//!
//! # Architecture
//!
//! - **`core`:** Behaviour logic (types, menu state, reveal geometry)
//! - **`store`:** Trips file operations (reading, atomic writes, demo content)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! Behaviour components own their widgets and timers and expose
//! `dispose()`; the window's close handler cancels everything pending,
//! so no timer ever fires against a dead page.
//!
//! # Examples
//!
//! ## Loading trips from a file
//!
//! ```no_run
//! use trip_itinerary_viewer::store::TripStore;
//! use std::path::PathBuf;
//!
//! let store = TripStore::new(PathBuf::from("trips.toml"))?;
//! let trips = store.load()?;
//! println!("Found {} saved trips", trips.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use trip_itinerary_viewer::ui::App;
//! use std::path::PathBuf;
//!
//! let app = App::new(Some(PathBuf::from("trips.toml")))?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), String>(())
//! ```

pub mod core;
pub mod store;
pub mod ui;

// Re-export commonly used types for convenience
pub use self::core::{FlashKind, FlashNotice, MenuState, Trip};
