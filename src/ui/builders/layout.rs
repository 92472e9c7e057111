// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Layout builder
//!
//! Creates the main page structure: navigation bar, flash area, and
//! the scrollable content column with the feature cards and the trips
//! section.

use gtk4::{prelude::*, Box as GtkBox, Label, Orientation, ScrolledWindow};
use std::rc::Rc;

use crate::ui::components::{build_feature_card, FlashArea, NavBar};

/// The intro section's feature blurbs
const FEATURES: [(&str, &str); 3] = [
    (
        "Day-by-day plans",
        "Every trip broken into morning, afternoon and evening activities.",
    ),
    (
        "Food & hidden gems",
        "Local dishes worth seeking out, and the places guidebooks skip.",
    ),
    (
        "Cost breakdown",
        "Accommodation, food, activities and transport estimated up front.",
    ),
];

/// Widgets making up the page, shared between builders and handlers
///
/// The nav bar is optional: a page built without one simply has no
/// menu behaviour to wire.
#[derive(Clone)]
pub struct PageWidgets {
    /// Root column added to the window
    pub root: GtkBox,
    /// Navigation bar, if the page has one
    pub nav_bar: Option<Rc<NavBar>>,
    /// Flash notice container under the nav bar
    pub flash_area: Rc<FlashArea>,
    /// Scrollable viewport for the page content
    pub scroller: ScrolledWindow,
    /// Static feature cards in the intro section
    pub feature_cards: Vec<GtkBox>,
    /// Container the trip cards are (re)built into
    pub trips_section: GtkBox,
}

/// Builds the main page layout
///
/// Creates a vertical column containing:
/// - Navigation bar at the top
/// - Flash area for notices
/// - Scrollable content: intro heading, feature cards, trips section
pub fn build_page() -> PageWidgets {
    let root = GtkBox::new(Orientation::Vertical, 0);

    // Navigation bar at top
    let nav_bar = Rc::new(NavBar::new());
    root.append(nav_bar.widget());

    // Flash notices directly underneath
    let flash_area = Rc::new(FlashArea::new());
    root.append(flash_area.widget());

    // Scrollable page content
    let scroller = ScrolledWindow::builder().hexpand(true).vexpand(true).build();

    let content = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(16)
        .margin_start(16)
        .margin_end(16)
        .margin_top(16)
        .margin_bottom(16)
        .build();
    content.add_css_class("page-content");

    let intro = Label::builder()
        .label("Plan less, travel more")
        .xalign(0.0)
        .build();
    intro.add_css_class("section-title");
    content.append(&intro);

    let features_row = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(12)
        .homogeneous(true)
        .build();

    let mut feature_cards = Vec::with_capacity(FEATURES.len());
    for (title, blurb) in FEATURES {
        let card = build_feature_card(title, blurb);
        features_row.append(&card);
        feature_cards.push(card);
    }
    content.append(&features_row);

    let trips_heading = Label::builder().label("My Trips").xalign(0.0).build();
    trips_heading.add_css_class("section-title");
    content.append(&trips_heading);

    let trips_section = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(12)
        .build();
    content.append(&trips_section);

    scroller.set_child(Some(&content));
    root.append(&scroller);

    PageWidgets {
        root,
        nav_bar: Some(nav_bar),
        flash_area,
        scroller,
        feature_cards,
        trips_section,
    }
}
