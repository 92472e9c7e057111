//! UI builder modules
//!
//! Contains modular builders for constructing the main page UI:
//! - Layout construction
//! - Event handler wiring

pub mod handlers;
pub mod layout;

pub use handlers::{refresh_trip_cards, wire_up_handlers};
pub use layout::{build_page, PageWidgets};
