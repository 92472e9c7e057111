//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Menu state machine tests
//! - Scroll-reveal geometry tests
//! - Type tests (Trip, FlashKind, FlashNotice)

#[cfg(test)]
mod menu_tests;
#[cfg(test)]
mod reveal_tests;
#[cfg(test)]
mod types_tests;
