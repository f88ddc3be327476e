//! Common types shared across TweetHub crates.
//!
//! This crate defines the shared error taxonomy and the centralised
//! tracing/logging initialisation. It is intentionally lightweight so that
//! every other crate can depend on it without heavy transitive costs.
//!
//! - [`TweethubError`] and [`Result`]: shared error handling
//! - [`observability`]: rolling-file `tracing` setup

use std::time::Duration;

pub mod observability;

/// Error types used across the TweetHub workspace.
///
/// Only configuration errors are fatal to the process; everything else is
/// logged per action and execution continues to the next step or account.
#[derive(thiserror::Error, Debug)]
pub enum TweethubError {
    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The WebDriver layer reported an error.
    #[error("driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// An element never became visible within the session's remaining budget.
    #[error("timed out waiting for element: {0}")]
    WaitTimeout(String),

    /// The session deadline elapsed before the step could start.
    #[error("session deadline of {0:?} elapsed")]
    SessionExpired(Duration),

    /// A step was attempted on a session that has already been released.
    #[error("browser session is already closed")]
    SessionClosed,
}

/// Convenient alias for results that use [`TweethubError`].
pub type Result<T> = std::result::Result<T, TweethubError>;
