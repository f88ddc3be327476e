//! Browser layer for TweetHub.
//!
//! This crate owns everything WebDriver: connecting a session with the right
//! capabilities, the per-session wall-clock deadline, and the [`browser::UiSurface`]
//! trait the action sequences are written against.
//!
//! - [`browser::WebDriverFactory`]: opens one isolated session per call
//! - [`browser::Session`]: client handle + deadline + idempotent close
//! - [`browser::UiSurface`]: the navigate/wait/click/type/press seam
//! - [`browser::BrowserSurface`]: the fantoccini-backed implementation
pub mod browser;
