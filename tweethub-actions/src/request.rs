use std::fmt;

use url::Url;

/// Every operation the tool can perform against the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Tweet,
    UnTweet,
    Like,
    UnLike,
    Repost,
    UnRepost,
    Quote,
    Follow,
    UnFollow,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Tweet => "tweet",
            ActionKind::UnTweet => "untweet",
            ActionKind::Like => "like",
            ActionKind::UnLike => "unlike",
            ActionKind::Repost => "repost",
            ActionKind::UnRepost => "unrepost",
            ActionKind::Quote => "quote",
            ActionKind::Follow => "follow",
            ActionKind::UnFollow => "unfollow",
        };
        f.write_str(name)
    }
}

/// What the action is addressed at: a tweet URL, a profile name, or nothing
/// (posting a new tweet happens from the home timeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    None,
    Url(Url),
    Profile(String),
}

/// The immutable description of one requested operation.
///
/// Built exactly once at the CLI boundary and passed down by parameter; no
/// part of the execution path mutates it or stashes it in shared state.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub target: Target,
    pub message: Option<String>,
}

impl ActionRequest {
    pub fn tweet(message: String) -> Self {
        Self {
            kind: ActionKind::Tweet,
            target: Target::None,
            message: Some(message),
        }
    }

    pub fn untweet(url: Url) -> Self {
        Self {
            kind: ActionKind::UnTweet,
            target: Target::Url(url),
            message: None,
        }
    }

    pub fn like(url: Url) -> Self {
        Self {
            kind: ActionKind::Like,
            target: Target::Url(url),
            message: None,
        }
    }

    pub fn unlike(url: Url) -> Self {
        Self {
            kind: ActionKind::UnLike,
            target: Target::Url(url),
            message: None,
        }
    }

    pub fn repost(url: Url) -> Self {
        Self {
            kind: ActionKind::Repost,
            target: Target::Url(url),
            message: None,
        }
    }

    pub fn unrepost(url: Url) -> Self {
        Self {
            kind: ActionKind::UnRepost,
            target: Target::Url(url),
            message: None,
        }
    }

    pub fn quote(url: Url, message: String) -> Self {
        Self {
            kind: ActionKind::Quote,
            target: Target::Url(url),
            message: Some(message),
        }
    }

    pub fn follow(username: String) -> Self {
        Self {
            kind: ActionKind::Follow,
            target: Target::Profile(username),
            message: None,
        }
    }

    pub fn unfollow(username: String) -> Self {
        Self {
            kind: ActionKind::UnFollow,
            target: Target::Profile(username),
            message: None,
        }
    }
}

/// Success flag plus a human-readable line; there is no richer error code to
/// preserve, and callers never branch on it beyond logging.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub ok: bool,
    pub detail: String,
}

impl ActionOutcome {
    pub fn success(detail: impl Into<String>) -> Self {
        Self {
            ok: true,
            detail: detail.into(),
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            detail: detail.into(),
        }
    }
}
