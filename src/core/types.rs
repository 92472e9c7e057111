//! src/core/types.rs
//!
//! Core type definitions for the itinerary viewer
//!
//! This module defines the fundamental types used throughout the application:
//! - `Trip`: A saved trip itinerary with destination, schedule and metadata
//! - `FlashKind`: Category of a flash notice (success, error)
//! - `FlashNotice`: A transient notification shown in the flash area
//!
//! All types implement serialization for trips-file persistence. Timestamps
//! are displayed in the `%Y-%m-%d %H:%M` format the rest of the application
//! uses consistently.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display format for trip timestamps (e.g., "2026-07-01 09:30")
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Category of a flash notice
///
/// Determines the banner styling. Maps one-to-one onto the
/// `flash-success` / `flash-error` CSS classes in `ui/style.css`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FlashKind {
    /// Confirmation of a completed action
    Success,
    /// A failed or rejected action
    Error,
}

impl FlashKind {
    /// Returns the CSS class applied to banners of this kind
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashKind::Success => "flash-success",
            FlashKind::Error => "flash-error",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashKind::Success => write!(f, "success"),
            FlashKind::Error => write!(f, "error"),
        }
    }
}

impl FromStr for FlashKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashKind::Success),
            "error" => Ok(FlashKind::Error),
            other => Err(format!("Unknown flash category: {}", other)),
        }
    }
}

/// A transient notification banner
///
/// Notices are pushed into the flash area after user actions (trip
/// deleted, reload failed, ...) and dismissed by the user or by the
/// auto-dismiss timer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashNotice {
    /// Banner category, controls styling
    pub kind: FlashKind,
    /// Message text shown in the banner
    pub text: String,
}

impl FlashNotice {
    /// Creates a success notice
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    /// Creates an error notice
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

/// A saved trip itinerary
///
/// Carries everything the viewer renders for one trip: the destination
/// and planning parameters, the per-day itinerary entries, and the
/// save/update timestamps.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Trip {
    /// Destination city
    pub city: String,

    /// Planned trip length in days
    pub days: u32,

    /// Traveller interests (e.g., "food", "museums")
    #[serde(default)]
    pub interests: Vec<String>,

    /// Main mode of transportation
    pub transport: String,

    /// Budget tier (e.g., "low", "medium", "luxury")
    pub budget: String,

    /// Travelling group (e.g., "solo", "family", "couple")
    pub group_type: String,

    /// One itinerary entry per day, rendered as day blocks
    #[serde(default)]
    pub itinerary: Vec<String>,

    /// When the trip was saved
    pub created_at: NaiveDateTime,

    /// When the trip was last edited, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Trip {
    /// Formatted save timestamp for display
    pub fn created_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Formatted edit timestamp for display, if the trip was edited
    pub fn updated_display(&self) -> Option<String> {
        self.updated_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Checks the trip for consistency problems
    ///
    /// Returns a human-readable description per problem found. Used by
    /// the CLI `check` command; an empty Vec means the trip is clean.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.city.trim().is_empty() {
            issues.push("destination city is empty".to_string());
        }

        if self.days == 0 {
            issues.push("trip length is zero days".to_string());
        }

        if !self.itinerary.is_empty() && self.itinerary.len() != self.days as usize {
            issues.push(format!(
                "itinerary has {} day entries but the trip is {} days long",
                self.itinerary.len(),
                self.days
            ));
        }

        issues
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 1 {
            write!(f, "{} (1 day)", self.city)
        } else {
            write!(f, "{} ({} days)", self.city, self.days)
        }
    }
}
