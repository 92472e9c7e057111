//! UI Components
//!
//! Reusable GTK4 widgets and behaviours for the itinerary viewer.
//!
//! # Components
//!
//! - `nav_bar.rs` - Navigation bar with collapsible links panel
//! - `flash_banner.rs` - Flash notice banners with timed dismissal
//! - `scroll_reveal.rs` - Reveal-on-scroll behaviour for content cards
//! - `trip_card.rs` - Trip card and feature card widget builders

mod flash_banner;
mod nav_bar;
mod scroll_reveal;
mod trip_card;

pub use flash_banner::{FlashArea, FlashBanner, AUTO_DISMISS_DELAY, FADE_OUT_DELAY};
pub use nav_bar::NavBar;
pub use scroll_reveal::ScrollReveal;
pub use trip_card::{build_feature_card, TripCard};
