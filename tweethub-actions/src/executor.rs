//! One session per action: open, authenticate, drive the UI, always close.
//!
//! The executor owns the whole session lifecycle internally and returns only
//! an [`ActionOutcome`], so call sites can neither leak a session nor overlap
//! two of them — the release handle never escapes this module.

use async_trait::async_trait;
use tracing::{info, warn};
use tweethub_common::{Result, TweethubError};
use tweethub_config::{Account, Selectors};
use tweethub_driver::browser::{BrowserSurface, Key, UiSurface, WebDriverFactory};
use url::Url;

use crate::auth;
use crate::request::{ActionKind, ActionOutcome, ActionRequest, Target};

/// Produces one independent [`UiSurface`] per call.
///
/// The production implementation is [`WebDriverFactory`]; tests substitute an
/// in-memory fake to observe the sequences.
#[async_trait]
pub trait SurfaceFactory: Send + Sync {
    type Surface: UiSurface + Send;

    async fn open(&self) -> Result<Self::Surface>;
}

#[async_trait]
impl SurfaceFactory for WebDriverFactory {
    type Surface = BrowserSurface;

    async fn open(&self) -> Result<BrowserSurface> {
        self.connect().await
    }
}

/// Runs one [`ActionRequest`] under one credential pair.
pub struct Executor<'a, F> {
    factory: &'a F,
    base_url: &'a Url,
    selectors: &'a Selectors,
}

impl<'a, F: SurfaceFactory> Executor<'a, F> {
    pub fn new(factory: &'a F, base_url: &'a Url, selectors: &'a Selectors) -> Self {
        Self {
            factory,
            base_url,
            selectors,
        }
    }

    /// Execute the request: fresh session, login, per-kind sequence, close.
    ///
    /// A session-allocation failure is reported without touching the UI at
    /// all. A login failure is logged and the action still runs (best-effort
    /// continue). The session is released on every path.
    pub async fn run(&self, account: &Account, request: &ActionRequest) -> ActionOutcome {
        let mut ui = match self.factory.open().await {
            Ok(ui) => ui,
            Err(e) => {
                warn!(username = %account.username, error = %e, "could not open a browser session");
                return ActionOutcome::failure(format!("could not open a browser session: {e}"));
            }
        };

        match auth::authenticate(&mut ui, self.base_url, self.selectors, account).await {
            Ok(()) => info!(username = %account.username, "login succeeded"),
            Err(e) => {
                warn!(
                    username = %account.username,
                    error = %e,
                    "login failed; attempting the action anyway"
                );
            }
        }

        let outcome = match self.drive(&mut ui, request).await {
            Ok(detail) => {
                info!(kind = %request.kind, username = %account.username, "{detail}");
                ActionOutcome::success(detail)
            }
            Err(e) => {
                warn!(kind = %request.kind, username = %account.username, error = %e, "action failed");
                ActionOutcome::failure(e.to_string())
            }
        };

        if let Err(e) = ui.close().await {
            warn!(username = %account.username, error = %e, "failed to release browser session");
        }

        outcome
    }

    async fn drive(&self, ui: &mut F::Surface, request: &ActionRequest) -> Result<String> {
        let s = self.selectors;
        match (request.kind, &request.target) {
            (ActionKind::Tweet, Target::None) => {
                let message = request.message.as_deref().unwrap_or_default();
                ui.wait_visible(&s.tweet_textarea).await?;
                ui.type_text(&s.tweet_textarea, message).await?;
                // The compose dialog has no stable post-button path from the
                // home timeline; tabbing to it and confirming is what works.
                let mut chord = vec![Key::Tab; 8];
                chord.push(Key::Enter);
                ui.press(&chord).await?;
                ui.wait_visible(&s.alert).await?;
                Ok("tweet posted".to_string())
            }

            (ActionKind::UnTweet, Target::Url(url)) => {
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.tweet_more_menu).await?;
                ui.click(&s.tweet_more_menu).await?;
                // Delete is the first menu entry, then a confirmation dialog.
                ui.press(&[Key::Enter]).await?;
                ui.press(&[Key::Enter]).await?;
                ui.wait_visible(&s.alert).await?;
                Ok(format!("deleted tweet at {url}"))
            }

            (ActionKind::Like, Target::Url(url)) => {
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.like_button).await?;
                ui.click(&s.like_button).await?;
                // The toggle flipping to its inverse is the completion proof.
                ui.wait_visible(&s.unlike_button).await?;
                Ok(format!("liked {url}"))
            }

            (ActionKind::UnLike, Target::Url(url)) => {
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.unlike_button).await?;
                ui.click(&s.unlike_button).await?;
                ui.wait_visible(&s.like_button).await?;
                Ok(format!("unliked {url}"))
            }

            (ActionKind::Repost, Target::Url(url)) => {
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.retweet_button).await?;
                ui.click(&s.retweet_button).await?;
                ui.wait_visible(&s.retweet_confirm).await?;
                ui.click(&s.retweet_confirm).await?;
                ui.wait_visible(&s.unretweet_button).await?;
                Ok(format!("reposted {url}"))
            }

            (ActionKind::UnRepost, Target::Url(url)) => {
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.unretweet_button).await?;
                ui.click(&s.unretweet_button).await?;
                ui.wait_visible(&s.unretweet_confirm).await?;
                ui.click(&s.unretweet_confirm).await?;
                ui.wait_visible(&s.retweet_button).await?;
                Ok(format!("unreposted {url}"))
            }

            (ActionKind::Quote, Target::Url(url)) => {
                let message = request.message.as_deref().unwrap_or_default();
                ui.goto(url.as_str()).await?;
                ui.wait_visible(&s.retweet_button).await?;
                ui.click(&s.retweet_button).await?;
                // Second entry of the repost menu is "Quote".
                ui.press(&[Key::ArrowDown]).await?;
                ui.press(&[Key::Enter]).await?;
                ui.wait_visible(&s.quote_textarea).await?;
                ui.type_text(&s.quote_textarea, message).await?;
                ui.click(&s.quote_post_button).await?;
                ui.wait_visible(&s.alert).await?;
                Ok(format!("quoted {url}"))
            }

            (ActionKind::Follow, Target::Profile(username)) => {
                let profile = self.profile_url(username)?;
                let follow = s.follow_button_for(username);
                let following = s.following_button_for(username);
                ui.goto(profile.as_str()).await?;
                ui.wait_visible(&follow).await?;
                ui.click(&follow).await?;
                ui.wait_visible(&following).await?;
                Ok(format!("followed @{username}"))
            }

            (ActionKind::UnFollow, Target::Profile(username)) => {
                let profile = self.profile_url(username)?;
                let follow = s.follow_button_for(username);
                let following = s.following_button_for(username);
                ui.goto(profile.as_str()).await?;
                ui.wait_visible(&following).await?;
                ui.click(&following).await?;
                // Unfollowing pops a confirmation dialog.
                ui.press(&[Key::Enter]).await?;
                ui.wait_visible(&follow).await?;
                Ok(format!("unfollowed @{username}"))
            }

            (kind, _) => Err(TweethubError::Config(format!(
                "`{kind}` request is missing its target"
            ))),
        }
    }

    fn profile_url(&self, username: &str) -> Result<Url> {
        self.base_url
            .join(username)
            .map_err(|e| TweethubError::Config(format!("bad profile URL for @{username}: {e}")))
    }
}
