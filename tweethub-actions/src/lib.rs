//! Action layer: login, the per-kind UI sequences, and the multi-account loop.
//!
//! Everything here is written against the [`tweethub_driver::browser::UiSurface`]
//! seam, so the same sequences run under a live WebDriver session in
//! production and an in-memory fake in the integration tests.
//!
//! - [`request`]: the immutable [`request::ActionRequest`] value built once at
//!   the CLI boundary
//! - [`auth`]: the login sequence
//! - [`executor`]: scoped session acquisition + one method per action kind
//! - [`accounts`]: strict sequential iteration over every configured account
//! - [`messages`]: predefined/random message selection

pub mod accounts;
pub mod auth;
pub mod executor;
pub mod messages;
pub mod request;

pub use accounts::run_for_accounts;
pub use executor::{Executor, SurfaceFactory};
pub use messages::resolve_message;
pub use request::{ActionKind, ActionOutcome, ActionRequest, Target};
