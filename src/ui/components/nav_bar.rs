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

//! Navigation bar component
//!
//! A top bar with the app brand and a menu toggle button, plus a
//! collapsible links panel underneath. The toggle flips the panel
//! between open and closed: open reveals the panel, marks it with the
//! `active` CSS class and swaps the button icon to a close icon;
//! closed reverses all three. The open/closed state machine lives in
//! [`crate::core::menu::MenuState`].
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ✈ Trip Planner                          ☰  │
//! ├─────────────────────────────────────────────┤
//! │ Home / Generate / My Trips / About / Contact│  ← revealed when open
//! └─────────────────────────────────────────────┘
//! ```

use gtk4::{prelude::*, Box as GtkBox, Button, Label, Orientation, Revealer};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::menu::{MenuState, ACTIVE_CLASS};

/// Navigation links, matching the site's pages
const NAV_LINKS: [&str; 5] = ["Home", "Generate", "My Trips", "About", "Contact"];

/// Top navigation bar with a collapsible links panel
pub struct NavBar {
    /// Root widget (bar + revealer column)
    widget: GtkBox,
    /// Menu toggle button
    toggle_button: Button,
    /// Revealer wrapping the links panel
    links_panel: Revealer,
    /// The links panel itself; carries the `active` class while open
    links_box: GtkBox,
    /// Current open/closed state
    state: Cell<MenuState>,
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBar {
    /// Creates the navigation bar with the links panel closed
    pub fn new() -> Self {
        let bar = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .build();
        bar.add_css_class("navbar");

        let brand = Label::builder()
            .label("✈ Trip Planner")
            .xalign(0.0)
            .hexpand(true)
            .build();
        brand.add_css_class("nav-brand");

        let state = MenuState::default();

        let toggle_button = Button::from_icon_name(state.icon_name());
        toggle_button.add_css_class("menu-toggle");
        toggle_button.set_tooltip_text(Some("Toggle navigation"));

        bar.append(&brand);
        bar.append(&toggle_button);

        // Links panel, revealed when the menu is open
        let links_box = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(2)
            .build();
        links_box.add_css_class("nav-links");

        for link in NAV_LINKS {
            let label = Label::builder().label(link).xalign(0.0).build();
            label.add_css_class("nav-link");
            links_box.append(&label);
        }

        let links_panel = Revealer::builder()
            .transition_type(gtk4::RevealerTransitionType::SlideDown)
            .transition_duration(300)
            .reveal_child(false)
            .build();
        links_panel.set_child(Some(&links_box));

        let widget = GtkBox::new(Orientation::Vertical, 0);
        widget.append(&bar);
        widget.append(&links_panel);

        Self {
            widget,
            toggle_button,
            links_panel,
            links_box,
            state: Cell::new(state),
        }
    }

    /// Flips the links panel between open and closed
    ///
    /// Updates the `active` class, the revealer, and the toggle icon
    /// together so the three can never disagree.
    pub fn toggle(&self) {
        let state = self.state.get().toggled();
        self.state.set(state);

        if state.is_open() {
            self.links_box.add_css_class(ACTIVE_CLASS);
        } else {
            self.links_box.remove_css_class(ACTIVE_CLASS);
        }

        self.links_panel.set_reveal_child(state.is_open());
        self.toggle_button.set_icon_name(state.icon_name());
    }

    /// Connects the toggle button's click to [`NavBar::toggle`]
    pub fn connect_toggle(self: &Rc<Self>) {
        let nav = Rc::downgrade(self);

        self.toggle_button.connect_clicked(move |_| {
            if let Some(nav) = nav.upgrade() {
                nav.toggle();
            }
        });
    }

    /// Current open/closed state
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Returns the root widget for adding to a container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
