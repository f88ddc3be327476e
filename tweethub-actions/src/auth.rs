//! The login sequence.
//!
//! Each step blocks until its element is displayed or the session deadline
//! runs out. The final wait on the timeline cell is the proof that
//! authentication actually landed; nothing before it is trusted.

use tweethub_common::{Result, TweethubError};
use tweethub_config::{Account, Selectors};
use tweethub_driver::browser::{Key, UiSurface};
use url::Url;

/// Drive the login page with one credential pair.
///
/// Callers treat a failure as advisory: the policy is best-effort continue,
/// so the action that follows is attempted either way and fails naturally if
/// the session never authenticated.
pub async fn authenticate<S: UiSurface>(
    ui: &mut S,
    base_url: &Url,
    selectors: &Selectors,
    account: &Account,
) -> Result<()> {
    let login_url = base_url
        .join("login")
        .map_err(|e| TweethubError::Config(format!("bad base URL: {e}")))?;

    ui.goto(login_url.as_str()).await?;

    ui.wait_visible(&selectors.login_username_input).await?;
    ui.type_text(&selectors.login_username_input, &account.username)
        .await?;
    ui.press(&[Key::Enter]).await?;

    ui.wait_visible(&selectors.login_password_input).await?;
    ui.type_text(&selectors.login_password_input, &account.password)
        .await?;
    ui.press(&[Key::Enter]).await?;

    // Landing on a populated timeline is the only confirmation we get.
    ui.wait_visible(&selectors.timeline_cell).await?;

    Ok(())
}
