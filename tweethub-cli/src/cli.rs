//! Command surface: flags in, one immutable [`ActionRequest`] out.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tweethub_actions::{resolve_message, ActionRequest};
use tweethub_common::{Result, TweethubError};
use url::Url;

#[derive(Debug, Parser)]
#[command(
    name = "tweethub",
    version,
    about = "Automate a Twitter/X account from the command line",
    long_about = "Drives the Twitter/X web UI over WebDriver to tweet, delete, like, \
repost, quote, and follow — optionally once per configured account."
)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "tweethub.yaml")]
    pub config: PathBuf,

    /// Run the browser without a visible window (overrides the config).
    #[arg(long, global = true)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Post a tweet, or delete one with --undo.
    Tweet {
        /// Content of the tweet.
        #[arg(short, long)]
        message: Option<String>,
        /// Delete the tweet at --url instead of posting.
        #[arg(long)]
        undo: bool,
        /// URL of the tweet to delete (with --undo).
        #[arg(long)]
        url: Option<Url>,
        /// Repeat the action under every configured account.
        #[arg(long)]
        all_accounts: bool,
        /// Take the message from the configured `messages` list.
        #[arg(long)]
        use_messages: bool,
        /// With --use-messages, pick a random entry instead of the first.
        #[arg(long)]
        random: bool,
    },

    /// Like a tweet, or unlike it with --undo.
    Like {
        /// URL of the tweet.
        #[arg(long)]
        url: Url,
        /// Undo the like (unlike).
        #[arg(long)]
        undo: bool,
        /// Repeat the action under every configured account.
        #[arg(long)]
        all_accounts: bool,
    },

    /// Repost a tweet, or unrepost it with --undo.
    Repost {
        /// URL of the tweet.
        #[arg(long)]
        url: Url,
        /// Undo the repost (unrepost).
        #[arg(long)]
        undo: bool,
        /// Repeat the action under every configured account.
        #[arg(long)]
        all_accounts: bool,
    },

    /// Quote a tweet with a message.
    Quote {
        /// URL of the tweet to quote.
        #[arg(long)]
        url: Url,
        /// Message to attach to the quote.
        #[arg(short, long)]
        message: Option<String>,
        /// Take the message from the configured `messages` list.
        #[arg(long)]
        use_messages: bool,
        /// With --use-messages, pick a random entry instead of the first.
        #[arg(long)]
        random: bool,
        /// Repeat the action under every configured account.
        #[arg(long)]
        all_accounts: bool,
    },

    /// Follow a user, or unfollow with --undo.
    Follow {
        /// Target profile name.
        #[arg(short, long)]
        username: String,
        /// Undo the follow (unfollow).
        #[arg(long)]
        undo: bool,
        /// Repeat the action under every configured account.
        #[arg(long)]
        all_accounts: bool,
    },
}

/// Turn the parsed command into an [`ActionRequest`] plus the all-accounts
/// flag. Message selection happens here so the request carries its final
/// text.
pub fn build_request(
    command: Command,
    configured_messages: &[String],
) -> Result<(ActionRequest, bool)> {
    match command {
        Command::Tweet {
            message,
            undo,
            url,
            all_accounts,
            use_messages,
            random,
        } => {
            if undo {
                let url = url.ok_or_else(|| {
                    TweethubError::Config("`tweet --undo` requires --url".into())
                })?;
                // A tweet belongs to exactly one account, so deletion never
                // fans out; --all-accounts is ignored on this path.
                Ok((ActionRequest::untweet(url), false))
            } else {
                let message =
                    resolve_message(message.as_deref(), use_messages, random, configured_messages)?;
                Ok((ActionRequest::tweet(message), all_accounts))
            }
        }

        Command::Like {
            url,
            undo,
            all_accounts,
        } => {
            let request = if undo {
                ActionRequest::unlike(url)
            } else {
                ActionRequest::like(url)
            };
            Ok((request, all_accounts))
        }

        Command::Repost {
            url,
            undo,
            all_accounts,
        } => {
            let request = if undo {
                ActionRequest::unrepost(url)
            } else {
                ActionRequest::repost(url)
            };
            Ok((request, all_accounts))
        }

        Command::Quote {
            url,
            message,
            use_messages,
            random,
            all_accounts,
        } => {
            let message =
                resolve_message(message.as_deref(), use_messages, random, configured_messages)?;
            Ok((ActionRequest::quote(url, message), all_accounts))
        }

        Command::Follow {
            username,
            undo,
            all_accounts,
        } => {
            let request = if undo {
                ActionRequest::unfollow(username)
            } else {
                ActionRequest::follow(username)
            };
            Ok((request, all_accounts))
        }
    }
}
