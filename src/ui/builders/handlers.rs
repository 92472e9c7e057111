//! Event handler setup
//!
//! Wires up the page behaviours:
//! - Menu toggle on the nav bar
//! - Trip card building with delete confirmation
//! - Scroll-reveal registration for cards and day blocks

use gtk4::{gio, prelude::*, ApplicationWindow, Label};
use std::rc::Rc;

use crate::core::types::FlashNotice;
use crate::ui::builders::layout::PageWidgets;
use crate::ui::components::{ScrollReveal, TripCard};
use crate::ui::Controller;

/// Wires up all page behaviours and builds the initial trip cards
///
/// Sets up:
/// - Nav menu toggle (skipped when the page has no nav bar)
/// - Delete buttons with confirmation dialogs
/// - Scroll-reveal targets
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    page: &PageWidgets,
    reveal: &Rc<ScrollReveal>,
    controller: &Rc<Controller>,
) {
    // ============================================================================
    // Menu toggle
    // ============================================================================
    // A page without a toggle or links panel gets no menu behaviour
    if let Some(nav_bar) = &page.nav_bar {
        nav_bar.connect_toggle();
    }

    // ============================================================================
    // Trip cards (delete confirmation + reveal targets)
    // ============================================================================
    refresh_trip_cards(window, page, reveal, controller);
}

/// Rebuilds the trips section from the Controller's current trips
///
/// Clears the section, resets the reveal targets (the rebuilt content
/// animates in again, like a fresh page load), creates one card per
/// trip, and wires each delete button to a confirmation dialog.
pub fn refresh_trip_cards(
    window: &ApplicationWindow,
    page: &PageWidgets,
    reveal: &Rc<ScrollReveal>,
    controller: &Rc<Controller>,
) {
    // Clear existing cards
    while let Some(child) = page.trips_section.first_child() {
        page.trips_section.remove(&child);
    }

    reveal.reset();
    for card in &page.feature_cards {
        reveal.register(card);
    }

    let trips = controller.trips();

    if trips.is_empty() {
        let empty = Label::builder()
            .label("No saved trips yet. Generate one to get started!")
            .xalign(0.0)
            .build();
        empty.add_css_class("empty-state");
        page.trips_section.append(&empty);
    }

    for (index, trip) in trips.into_iter().enumerate() {
        let card = TripCard::new(&trip);

        reveal.register(card.widget());
        for block in card.day_blocks() {
            reveal.register(block);
        }

        // ============================================================================
        // Delete button handler
        // ============================================================================
        let window_for_delete = window.clone();
        let page_for_delete = page.clone();
        let reveal_for_delete = reveal.clone();
        let controller_for_delete = controller.clone();

        card.delete_button().connect_clicked(move |_| {
            eprintln!("🗑️  Delete clicked for: {}", trip);

            let window_clone = window_for_delete.clone();
            let page_clone = page_for_delete.clone();
            let reveal_clone = reveal_for_delete.clone();
            let controller_clone = controller_for_delete.clone();
            let trip_clone = trip.clone();

            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("Delete Trip Itinerary?")
                .detail(format!(
                    "Are you sure you want to delete this trip itinerary?\n\n{}, saved {}",
                    trip, trip.created_display()
                ))
                .buttons(vec!["Cancel", "Delete"])
                .cancel_button(0)
                .default_button(0)
                .build();

            let window_for_inner = window_clone.clone();

            dialog.choose(
                Some(&window_clone),
                None::<&gio::Cancellable>,
                move |response| {
                    match response {
                        Ok(1) => {
                            // The list may have changed while the dialog
                            // was open (live reload); delete only if this
                            // card still describes the trip at its index
                            let still_current = controller_clone
                                .trip_at(index)
                                .is_some_and(|current| current == trip_clone);

                            if !still_current {
                                eprintln!("❌ Trip not found at index {}", index);
                                page_clone
                                    .flash_area
                                    .push(&FlashNotice::error("Trip not found"));
                                return;
                            }

                            match controller_clone.delete_trip(index) {
                                Ok(deleted) => {
                                    eprintln!("✅ Deleted trip: {}", deleted);
                                    page_clone.flash_area.push(&FlashNotice::success(
                                        "Trip deleted successfully",
                                    ));
                                    refresh_trip_cards(
                                        &window_for_inner,
                                        &page_clone,
                                        &reveal_clone,
                                        &controller_clone,
                                    );
                                }
                                Err(e) => {
                                    eprintln!("❌ Failed to delete: {}", e);
                                    page_clone.flash_area.push(&FlashNotice::error(format!(
                                        "Failed to delete trip: {}",
                                        e
                                    )));
                                }
                            }
                        }
                        Ok(0) => {
                            eprintln!("🚫 Delete cancelled");
                        }
                        Ok(_other) => {
                            eprintln!("? Unexpected button index");
                        }
                        Err(_e) => {
                            eprintln!("❌ Delete dialog error");
                        }
                    }
                },
            );
        });

        page.trips_section.append(card.widget());
    }

    // Run the reveal pass once the rebuilt content has been laid out
    let reveal_for_idle = Rc::downgrade(reveal);
    glib::idle_add_local_once(move || {
        if let Some(reveal) = reveal_for_idle.upgrade() {
            reveal.recompute();
        }
    });
}
