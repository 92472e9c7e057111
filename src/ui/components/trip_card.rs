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

//! Trip card component
//!
//! Builds the widget tree for one saved trip: a `card`-classed frame
//! with the destination and metadata, one `itinerary-day` block per
//! day entry, and the delete button the confirmation handler wires up.
//! Also provides the static `feature-card` builder for the intro
//! section.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, Orientation};

use crate::core::types::Trip;

/// Card widget for a single saved trip
pub struct TripCard {
    /// Root widget (the `card` box)
    widget: GtkBox,
    /// Per-day itinerary blocks, registered for scroll reveal
    day_blocks: Vec<GtkBox>,
    /// Delete button; the parent wires up the confirmation dialog
    delete_button: Button,
}

impl TripCard {
    /// Builds the card for a trip
    pub fn new(trip: &Trip) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .build();
        widget.add_css_class("card");

        // Destination headline, e.g. "Kyoto (4 days)"
        let title = Label::builder()
            .label(trip.to_string())
            .xalign(0.0)
            .build();
        title.add_css_class("card-title");
        widget.append(&title);

        let meta = Label::builder()
            .label(Self::format_meta(trip))
            .xalign(0.0)
            .wrap(true)
            .build();
        meta.add_css_class("card-meta");
        widget.append(&meta);

        if !trip.interests.is_empty() {
            let interests = Label::builder()
                .label(format!("Interests: {}", trip.interests.join(", ")))
                .xalign(0.0)
                .wrap(true)
                .build();
            interests.add_css_class("card-meta");
            widget.append(&interests);
        }

        // One block per itinerary day
        let mut day_blocks = Vec::with_capacity(trip.itinerary.len());
        for (day, entry) in trip.itinerary.iter().enumerate() {
            let block = Self::build_day_block(day + 1, entry);
            widget.append(&block);
            day_blocks.push(block);
        }

        let delete_button = Button::builder().label("🗑 Delete Trip").build();
        delete_button.add_css_class("btn-delete");
        delete_button.add_css_class("delete-trip");
        delete_button.add_css_class("destructive-action");
        delete_button.set_halign(gtk4::Align::End);
        widget.append(&delete_button);

        Self {
            widget,
            day_blocks,
            delete_button,
        }
    }

    /// One metadata line: save time, transport, budget, group
    fn format_meta(trip: &Trip) -> String {
        let mut meta = format!(
            "Saved {} · {} · {} budget · {}",
            trip.created_display(),
            trip.transport,
            trip.budget,
            trip.group_type
        );

        if let Some(updated) = trip.updated_display() {
            meta.push_str(&format!(" · edited {}", updated));
        }

        meta
    }

    /// Builds one `itinerary-day` block
    fn build_day_block(day: usize, entry: &str) -> GtkBox {
        let block = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(2)
            .build();
        block.add_css_class("itinerary-day");

        let header = Label::builder()
            .label(format!("Day {}", day))
            .xalign(0.0)
            .build();
        header.add_css_class("day-header");
        block.append(&header);

        let text = Label::builder().label(entry).xalign(0.0).wrap(true).build();
        block.append(&text);

        block
    }

    /// Returns the root widget for adding to the trips section
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// The per-day blocks, for scroll-reveal registration
    pub fn day_blocks(&self) -> &[GtkBox] {
        &self.day_blocks
    }

    /// The delete button, for the confirmation handler
    pub fn delete_button(&self) -> &Button {
        &self.delete_button
    }
}

/// Builds one `feature-card` for the intro section
pub fn build_feature_card(title: &str, blurb: &str) -> GtkBox {
    let card = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(4)
        .build();
    card.add_css_class("feature-card");

    let title_label = Label::builder().label(title).xalign(0.0).build();
    title_label.add_css_class("card-title");
    card.append(&title_label);

    let blurb_label = Label::builder().label(blurb).xalign(0.0).wrap(true).build();
    card.append(&blurb_label);

    card
}
