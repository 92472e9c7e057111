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

//! src/core/mod.rs
//!
//! Core page-behaviour logic
//!
//! This module contains the fundamental data structures and rules
//! behind the viewer's page behaviours, including:
//! - Type definitions for trips and flash notices
//! - The navigation menu open/closed state machine
//! - Scroll-reveal threshold geometry and monotone reveal tracking
//!
//! All behaviour logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod menu;
pub mod reveal;
pub mod types;

pub use menu::MenuState;
pub use reveal::{should_reveal, RevealTracker};
pub use types::{FlashKind, FlashNotice, Trip};

#[cfg(test)]
mod tests;
