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

//! Flash notice banners
//!
//! Transient notification banners shown at the top of the page, one
//! per notice. A banner goes away in two stages: the `flash-out` CSS
//! class starts the fade (opacity to zero, slight upward shift), then
//! a 300 ms timer removes the widget once the transition has finished.
//! Every banner also auto-dismisses after 5 seconds; the auto timer
//! checks that the banner is still attached first, so a banner the
//! user already closed is left alone.
//!
//! Both timers are owned by the banner and cancelled by `dispose()`,
//! so a closing window never leaves callbacks pending. The timer
//! slots are cleared by the callbacks themselves on firing; dispose
//! only removes sources that are still live.

use glib::SourceId;
use gtk4::{prelude::*, Box as GtkBox, Button, Label, Orientation};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::types::FlashNotice;

/// Delay between starting the fade and removing the banner widget,
/// matching the CSS transition length
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(300);

/// Delay before a banner dismisses itself
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(5000);

/// A single flash notice banner
///
/// Carries the `flash-message` class plus the notice kind's class
/// (`flash-success` / `flash-error`), a message label and a close
/// button.
pub struct FlashBanner {
    /// Root widget
    widget: GtkBox,
    /// Pending fade-out removal timer, if a dismissal is under way
    fade_timer: Rc<RefCell<Option<SourceId>>>,
    /// Pending auto-dismiss timer
    auto_timer: Rc<RefCell<Option<SourceId>>>,
}

impl FlashBanner {
    /// Creates a banner for the notice and schedules its auto-dismissal
    pub fn new(notice: &FlashNotice) -> Rc<Self> {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .build();
        widget.add_css_class("flash-message");
        widget.add_css_class(notice.kind.css_class());

        let message = Label::builder()
            .label(&notice.text)
            .xalign(0.0)
            .hexpand(true)
            .wrap(true)
            .build();
        widget.append(&message);

        let close_button = Button::from_icon_name("window-close-symbolic");
        close_button.add_css_class("flash-close");
        close_button.set_has_frame(false);
        widget.append(&close_button);

        let banner = Rc::new(Self {
            widget,
            fade_timer: Rc::new(RefCell::new(None)),
            auto_timer: Rc::new(RefCell::new(None)),
        });

        // Close button → manual dismissal
        let for_close = Rc::downgrade(&banner);
        close_button.connect_clicked(move |_| {
            if let Some(banner) = for_close.upgrade() {
                banner.dismiss();
            }
        });

        // Auto-dismiss after 5 seconds, unless already gone
        let auto_slot = banner.auto_timer.clone();
        let for_auto = Rc::downgrade(&banner);
        let id = glib::timeout_add_local_once(AUTO_DISMISS_DELAY, move || {
            auto_slot.borrow_mut().take();

            let Some(banner) = for_auto.upgrade() else {
                return;
            };
            if banner.is_attached() {
                banner.dismiss();
            }
        });
        *banner.auto_timer.borrow_mut() = Some(id);

        banner
    }

    /// Whether the banner is still in the flash container
    pub fn is_attached(&self) -> bool {
        self.widget.parent().is_some()
    }

    /// Fades the banner out and removes it after [`FADE_OUT_DELAY`]
    ///
    /// Idempotent: a second call while the fade is pending, or after
    /// the banner has been removed, does nothing.
    pub fn dismiss(&self) {
        if self.fade_timer.borrow().is_some() || !self.is_attached() {
            return;
        }

        self.widget.add_css_class("flash-out");

        let widget = self.widget.clone();
        let fade_slot = self.fade_timer.clone();
        let id = glib::timeout_add_local_once(FADE_OUT_DELAY, move || {
            fade_slot.borrow_mut().take();

            // The banner may already have left the container
            if let Some(parent) = widget.parent() {
                if let Some(container) = parent.downcast_ref::<GtkBox>() {
                    container.remove(&widget);
                }
            }
        });
        *self.fade_timer.borrow_mut() = Some(id);
    }

    /// Cancels any pending timers
    ///
    /// Call before dropping the banner's container, e.g. on window
    /// close. Timers that already fired have cleared their own slots.
    pub fn dispose(&self) {
        if let Some(id) = self.fade_timer.borrow_mut().take() {
            id.remove();
        }
        if let Some(id) = self.auto_timer.borrow_mut().take() {
            id.remove();
        }
    }

    /// Returns the root widget for adding to the flash container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}

/// The flash container at the top of the page
///
/// Owns the banners it shows so their timers can be disposed together
/// when the window closes.
pub struct FlashArea {
    /// Root widget (vertical column of banners)
    widget: GtkBox,
    /// Banners pushed so far, dismissed or not
    banners: RefCell<Vec<Rc<FlashBanner>>>,
}

impl Default for FlashArea {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashArea {
    /// Creates an empty flash container
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .build();
        widget.add_css_class("flash-container");

        Self {
            widget,
            banners: RefCell::new(Vec::new()),
        }
    }

    /// Shows a notice as a new banner
    pub fn push(&self, notice: &FlashNotice) {
        let banner = FlashBanner::new(notice);
        self.widget.append(banner.widget());
        self.banners.borrow_mut().push(banner);
    }

    /// Number of banners currently attached (not yet dismissed)
    pub fn attached_count(&self) -> usize {
        self.banners
            .borrow()
            .iter()
            .filter(|banner| banner.is_attached())
            .count()
    }

    /// Cancels pending timers on every banner
    pub fn dispose(&self) {
        for banner in self.banners.borrow_mut().drain(..) {
            banner.dispose();
        }
    }

    /// Returns the root widget for adding to a container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
