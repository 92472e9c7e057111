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

//! Navigation menu state machine
//!
//! The nav bar's toggle button flips the links panel between two
//! mutually exclusive states. The state itself lives here, outside the
//! widget layer, so the round-trip behaviour (an even number of toggles
//! restores the original state) is testable without a display server.

/// CSS class carried by the links panel while the menu is open
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the navigation links panel
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MenuState {
    /// Links panel hidden, toggle shows the menu icon
    #[default]
    Closed,
    /// Links panel revealed, toggle shows the close icon
    Open,
}

impl MenuState {
    /// Returns the opposite state
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Whether the links panel is revealed in this state
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Icon name shown on the toggle button in this state
    ///
    /// The two icons are mutually exclusive: the menu icon while
    /// closed, the close icon while open.
    pub fn icon_name(self) -> &'static str {
        match self {
            MenuState::Closed => "open-menu-symbolic",
            MenuState::Open => "window-close-symbolic",
        }
    }
}
