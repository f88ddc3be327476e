//! The UI contract: every element the automation touches, as data.
//!
//! These identifiers are the actual wire format of the tool — they break
//! whenever the target site ships new markup. They are therefore plain
//! configuration with working defaults, overridable per field under the
//! `selectors:` key, never a hardcoded API.

use serde::Deserialize;

/// XPath selectors (plus two `aria-label` templates) for every UI element
/// the action sequences rely on.
///
/// The follow/unfollow entries contain a `{username}` placeholder that is
/// substituted per target profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Username input on the login page.
    pub login_username_input: String,
    /// Password input on the second login step.
    pub login_password_input: String,
    /// First timeline cell; its visibility is the proof of a completed login.
    pub timeline_cell: String,
    /// Compose textarea on the home timeline.
    pub tweet_textarea: String,
    /// Toast/alert banner confirming a post or deletion.
    pub alert: String,
    /// "More" options menu on a tweet's detail page (delete lives behind it).
    pub tweet_more_menu: String,
    pub like_button: String,
    pub unlike_button: String,
    pub retweet_button: String,
    pub unretweet_button: String,
    /// Confirmation entry inside the repost menu.
    pub retweet_confirm: String,
    /// Confirmation entry inside the undo-repost menu.
    pub unretweet_confirm: String,
    /// Compose textarea inside the quote dialog.
    pub quote_textarea: String,
    /// Post button inside the quote dialog.
    pub quote_post_button: String,
    /// `aria-label` template for the follow toggle (`{username}` placeholder).
    pub follow_button: String,
    /// `aria-label` template for the unfollow toggle (`{username}` placeholder).
    pub following_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            login_username_input: r#"//div/div/div/div/div/div/div[2]/div[2]/div/div/div[2]/div[2]/div/div/div/div[5]/label/div/div[2]/div/input[@autocomplete="username"]"#.into(),
            login_password_input: r#"//div/div/div/div/div/div/div[2]/div[2]/div/div/div[2]/div[2]/div[1]/div/div/div[3]/div/label/div/div[2]/div[1]/input[@name="password"]"#.into(),
            timeline_cell: r#"//div/div/div[2]/main/div/div/div/div/div/div[5]/div/section/div/div/div[@data-testid="cellInnerDiv"]"#.into(),
            tweet_textarea: r#"//div/div/div[2]/main/div/div/div/div/div/div[3]/div/div[2]/div[1]/div/div/div/div[2]/div[1]/div/div/div/div/div/div/div/div/div/div/label/div[1]/div/div/div/div/div/div[2]/div[@data-testid="tweetTextarea_0"]"#.into(),
            alert: r#"//div[2]/div/div/div/div[@role="alert"]"#.into(),
            tweet_more_menu: r#"//div/div/div[2]/main/div/div/div/div/div/section/div/div/div[1]/div/div/article/div/div/div[2]/div[2]/div/div/div[2]/div/div/div/div/div[@aria-label="More"]"#.into(),
            like_button: r#"//div[3]/div[@data-testid="like"]"#.into(),
            unlike_button: r#"//div[3]/div[@data-testid="unlike"]"#.into(),
            retweet_button: r#"//div[2]/div[@data-testid="retweet"]"#.into(),
            unretweet_button: r#"//div[2]/div[@data-testid="unretweet"]"#.into(),
            retweet_confirm: r#"//div[2]/div/div/div/div[2]/div/div[3]/div/div/div/div[@data-testid="retweetConfirm"]"#.into(),
            unretweet_confirm: r#"//div[2]/div/div/div/div[2]/div/div[3]/div/div/div/div[@data-testid="unretweetConfirm"]"#.into(),
            quote_textarea: r#"//div[2]/div/div/div/div/div/div[2]/div[2]/div/div/div/div[3]/div[2]/div[1]/div/div/div/div[1]/div[2]/div/div/div/div/div/div/div/div/div/div/div[1]/label/div[1]/div/div/div/div/div/div[2]/div[@data-testid="tweetTextarea_0"]"#.into(),
            quote_post_button: r#"//div[2]/div/div/div/div/div/div[2]/div[2]/div/div/div/div[3]/div[2]/div[1]/div/div/div/div[2]/div[2]/div/div/div/div[@data-testid="tweetButton"]"#.into(),
            follow_button: r#"//div/div/div[2]/main/div/div/div/div/div/div[3]/div/div/div/div/div[1]/div[2]/div[2]/div[1]/div[@aria-label="Follow @{username}"]"#.into(),
            following_button: r#"//div/div/div[2]/main/div/div/div/div/div/div[3]/div/div/div/div/div[1]/div[2]/div[3]/div[1]/div[@aria-label="Following @{username}"]"#.into(),
        }
    }
}

impl Selectors {
    /// Follow toggle for a concrete profile.
    pub fn follow_button_for(&self, username: &str) -> String {
        self.follow_button.replace("{username}", username)
    }

    /// Unfollow toggle for a concrete profile.
    pub fn following_button_for(&self, username: &str) -> String {
        self.following_button.replace("{username}", username)
    }
}
