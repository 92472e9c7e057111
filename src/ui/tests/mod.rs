//! UI module tests
//!
//! Contains test suites for the non-widget parts of the UI layer:
//! - Controller tests (trip loading, deletion, live reload)

#[cfg(test)]
mod controller_tests;
