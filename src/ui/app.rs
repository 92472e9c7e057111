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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates the
//! main window. It uses the Controller to load and display trips.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds the page (nav, flash area, content)
//!   ├─ Wires behaviours (menu toggle, delete confirm, scroll reveal)
//!   └─ Disposes pending timers/handlers on window close
//! ```

use glib::SourceId;
use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crate::core::types::FlashNotice;
use crate::ui::builders::{build_page, refresh_trip_cards, wire_up_handlers};
use crate::ui::components::ScrollReveal;
use crate::ui::file_watcher::FileWatcher;
use crate::ui::Controller;

/// How often the trips-file watcher is polled for changes
const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for browsing saved trips
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App.
    ///
    /// # Arguments
    ///
    /// * `trips_path` - Path to the trips file, or `None` to browse
    ///   the embedded demo content
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Successfully initialised
    /// * `Err(String)` - Failed to create the Controller
    ///
    /// # Example
    ///
    /// ```no_run
    /// use trip_itinerary_viewer::ui::App;
    ///
    /// let app = App::new(None)?;
    /// app.run(); // Blocks until the window closes
    /// # Ok::<(), String>(())
    /// ```
    pub fn new(trips_path: Option<PathBuf>) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("com.tidynest.trip-itinerary-viewer")
            .build();

        let controller = Controller::new(trips_path)
            .map_err(|e| format!("Failed to create controller: {}", e))?;

        let controller = Rc::new(controller);

        Ok(Self { app, controller })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits.
    pub fn run(self) {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads the embedded page styling
    ///
    /// Applies the CSS from `style.css` to the default display at
    /// APPLICATION priority level. The flash fade and scroll-reveal
    /// transitions live there.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        gtk4::style_context_add_provider_for_display(
            &gdk::Display::default().expect("Could not connect to a display"),
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        // Load trips before showing anything
        match controller.load_trips() {
            Ok(count) => eprintln!("🧳 Loaded {} saved trips", count),
            Err(e) => {
                eprintln!("Failed to load trips: {}", e);
                return;
            }
        }

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Trip Planner")
            .default_width(960)
            .default_height(760)
            .build();

        let page = build_page();
        let reveal = Rc::new(ScrollReveal::new(&page.scroller));

        wire_up_handlers(&window, &page, &reveal, &controller);
        reveal.attach();

        window.set_child(Some(&page.root));

        // ============================================================================
        // Live reload when the trips file changes on disk
        // ============================================================================
        let watch_source: Rc<RefCell<Option<SourceId>>> = Rc::new(RefCell::new(None));

        if let Some(path) = controller.trips_path() {
            match FileWatcher::new(path.to_path_buf()) {
                Ok(watcher) => {
                    let window_for_watch = window.clone();
                    let page_for_watch = page.clone();
                    let reveal_for_watch = reveal.clone();
                    let controller_for_watch = controller.clone();

                    let id = glib::timeout_add_local(WATCH_POLL_INTERVAL, move || {
                        if watcher.check_for_changes() {
                            match controller_for_watch.reload_if_changed() {
                                Ok(Some(count)) => {
                                    eprintln!("🔄 Trips file changed, reloaded {} trips", count);
                                    refresh_trip_cards(
                                        &window_for_watch,
                                        &page_for_watch,
                                        &reveal_for_watch,
                                        &controller_for_watch,
                                    );
                                }
                                // Our own atomic saves also trip the
                                // watcher; identical content is skipped
                                Ok(None) => {}
                                Err(e) => {
                                    eprintln!("❌ Reload failed: {}", e);
                                    page_for_watch.flash_area.push(&FlashNotice::error(
                                        format!("Failed to reload trips: {}", e),
                                    ));
                                }
                            }
                        }
                        glib::ControlFlow::Continue
                    });

                    *watch_source.borrow_mut() = Some(id);
                }
                Err(e) => eprintln!("⚠ Could not watch trips file: {}", e),
            }
        }

        // ============================================================================
        // Dispose pending timers and handlers on window close
        // ============================================================================
        let page_for_close = page.clone();
        let reveal_for_close = reveal.clone();
        let watch_for_close = watch_source.clone();

        window.connect_close_request(move |_| {
            page_for_close.flash_area.dispose();
            reveal_for_close.dispose();
            if let Some(id) = watch_for_close.borrow_mut().take() {
                id.remove();
            }
            glib::Propagation::Proceed
        });

        window.present();
    }
}
