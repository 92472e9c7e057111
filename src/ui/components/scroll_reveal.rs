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

//! Scroll-triggered reveal behaviour
//!
//! Registered targets start hidden (the `reveal-hidden` class sets
//! opacity 0 and a downward offset; the transition back is declared in
//! `style.css`). A recompute pass measures each still-hidden target's
//! top edge against the threshold from [`crate::core::reveal`] and
//! reveals those in range by dropping the class. The pass runs once
//! after the first layout and again on every scroll-position change.
//!
//! The scroll handler is unthrottled. Recompute skips targets that
//! are already revealed, so the steady-state pass is one bounds check
//! per still-hidden target.

use gtk4::{prelude::*, ScrolledWindow, Widget};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::reveal::{should_reveal, RevealTracker, HIDDEN_CLASS};

/// Reveals registered targets as they scroll into view
pub struct ScrollReveal {
    /// The scrolled window acting as the viewport
    viewport: ScrolledWindow,
    /// Registered targets, in registration order
    targets: RefCell<Vec<Widget>>,
    /// Which targets have been revealed
    tracker: RefCell<RevealTracker>,
    /// Handlers connected to the viewport's vertical adjustment
    handlers: RefCell<Vec<glib::SignalHandlerId>>,
}

impl ScrollReveal {
    /// Creates the behaviour for the given viewport
    ///
    /// Call [`ScrollReveal::register`] for each target, then
    /// [`ScrollReveal::attach`] once to start responding to scrolling.
    pub fn new(viewport: &ScrolledWindow) -> Self {
        Self {
            viewport: viewport.clone(),
            targets: RefCell::new(Vec::new()),
            tracker: RefCell::new(RevealTracker::new()),
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Registers a target and hides it until it scrolls into range
    pub fn register(&self, target: &impl IsA<Widget>) {
        let widget = target.clone().upcast::<Widget>();
        widget.add_css_class(HIDDEN_CLASS);

        self.tracker.borrow_mut().register();
        self.targets.borrow_mut().push(widget);
    }

    /// Forgets all targets and their reveal state
    ///
    /// Used when the page content is rebuilt; the new content
    /// re-registers and animates in again, like a fresh page load.
    pub fn reset(&self) {
        self.targets.borrow_mut().clear();
        *self.tracker.borrow_mut() = RevealTracker::new();
    }

    /// Connects the recompute pass to the viewport's scroll position
    ///
    /// Also schedules one initial pass for after the first layout,
    /// when target positions become meaningful.
    pub fn attach(self: &Rc<Self>) {
        let adjustment = self.viewport.vadjustment();

        // Scroll position changes
        let for_scroll = Rc::downgrade(self);
        let scroll_id = adjustment.connect_value_changed(move |_| {
            if let Some(reveal) = for_scroll.upgrade() {
                reveal.recompute();
            }
        });

        // Content/viewport size changes (fires after layout passes)
        let for_resize = Rc::downgrade(self);
        let resize_id = adjustment.connect_changed(move |_| {
            if let Some(reveal) = for_resize.upgrade() {
                reveal.recompute();
            }
        });

        self.handlers
            .borrow_mut()
            .extend([scroll_id, resize_id]);

        // Initial pass once the main loop has laid the page out
        let for_idle = Rc::downgrade(self);
        glib::idle_add_local_once(move || {
            if let Some(reveal) = for_idle.upgrade() {
                reveal.recompute();
            }
        });
    }

    /// Reveals every still-hidden target whose top edge is in range
    pub fn recompute(&self) {
        let viewport_height = self.viewport.height() as f64;
        if viewport_height <= 0.0 {
            // Not laid out yet; the adjustment signals will call again
            return;
        }

        let targets = self.targets.borrow();
        let mut tracker = self.tracker.borrow_mut();

        for (index, target) in targets.iter().enumerate() {
            if tracker.is_revealed(index) {
                continue;
            }

            // No bounds: the target is not (or no longer) in this
            // viewport's widget tree, so there is nothing to reveal
            let Some(bounds) = target.compute_bounds(&self.viewport) else {
                continue;
            };

            if should_reveal(bounds.y() as f64, viewport_height) {
                target.remove_css_class(HIDDEN_CLASS);
                tracker.mark_revealed(index);
            }
        }
    }

    /// Number of targets still hidden
    pub fn hidden_count(&self) -> usize {
        self.tracker.borrow().hidden_count()
    }

    /// Disconnects the scroll handlers
    pub fn dispose(&self) {
        let adjustment = self.viewport.vadjustment();
        for id in self.handlers.borrow_mut().drain(..) {
            adjustment.disconnect(id);
        }
    }
}
