//! Message selection for the `--use-messages` / `--random` modes.

use rand::rngs::OsRng;
use rand::Rng;
use tweethub_common::{Result, TweethubError};

/// Decide which message a tweet/quote should carry.
///
/// With `use_messages` the text comes from the configured list — the first
/// entry, or a uniformly random one when `random` is also set; the
/// flag-supplied message is ignored entirely in that mode. Without it, the
/// explicit message is required.
pub fn resolve_message(
    explicit: Option<&str>,
    use_messages: bool,
    random: bool,
    configured: &[String],
) -> Result<String> {
    if use_messages {
        if configured.is_empty() {
            return Err(TweethubError::Config(
                "`--use-messages` requires a non-empty `messages` list in the configuration".into(),
            ));
        }
        let index = if random {
            OsRng.gen_range(0..configured.len())
        } else {
            0
        };
        return Ok(configured[index].clone());
    }

    match explicit {
        Some(message) if !message.is_empty() => Ok(message.to_string()),
        _ => Err(TweethubError::Config(
            "a message is required: pass --message or enable --use-messages".into(),
        )),
    }
}
