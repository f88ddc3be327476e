use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use fantoccini::actions::{InputSource, KeyAction, KeyActions};
use fantoccini::elements::Element;
use fantoccini::Locator;
use tracing::trace;
use tweethub_common::{Result, TweethubError};

use crate::browser::keys::Key;
use crate::browser::session::{Deadline, Session};

/// The page-interaction seam every action sequence is written against.
///
/// The production implementation is [`BrowserSurface`]; tests drive the same
/// sequences through an in-memory fake.
#[async_trait]
pub trait UiSurface: Send {
    /// Navigate the session to `url`.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Block until an element matching `selector` is displayed, bounded by
    /// the session deadline.
    async fn wait_visible(&mut self, selector: &str) -> Result<()>;

    /// Click the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<()>;

    /// Send `text` to the element matching `selector`.
    async fn type_text(&mut self, selector: &str, text: &str) -> Result<()>;

    /// Dispatch a page-level key chord (each key pressed and released in
    /// order), targeting whatever currently holds focus.
    async fn press(&mut self, keys: &[Key]) -> Result<()>;

    /// Release the underlying session. Must be idempotent.
    async fn close(&mut self) -> Result<()>;
}

/// [`UiSurface`] backed by a live fantoccini client.
pub struct BrowserSurface {
    session: Session,
}

impl BrowserSurface {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn find(&self, selector: &str) -> Result<Element> {
        let deadline = *self.session.deadline();
        within_budget(&deadline, self.session.client()?.find(Locator::XPath(selector))).await
    }
}

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run one WebDriver call inside the session's remaining budget.
///
/// Every call a surface makes goes through here, so a hung driver cannot
/// keep a session alive past its deadline. An already-spent budget fails
/// without dispatching the call at all.
async fn within_budget<T, E, F>(deadline: &Deadline, call: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<anyhow::Error>,
{
    let rest = deadline
        .remaining()
        .ok_or(TweethubError::SessionExpired(deadline.budget()))?;
    match tokio::time::timeout(rest, call).await {
        Ok(result) => result.map_err(|e| TweethubError::Driver(e.into())),
        Err(_) => Err(TweethubError::SessionExpired(deadline.budget())),
    }
}

#[async_trait]
impl UiSurface for BrowserSurface {
    async fn goto(&mut self, url: &str) -> Result<()> {
        trace!(%url, "navigate");
        let deadline = *self.session.deadline();
        within_budget(&deadline, self.session.client()?.goto(url)).await
    }

    async fn wait_visible(&mut self, selector: &str) -> Result<()> {
        loop {
            let deadline = *self.session.deadline();
            let elements = match within_budget(
                &deadline,
                self.session.client()?.find_all(Locator::XPath(selector)),
            )
            .await
            {
                Ok(elements) => elements,
                // In a wait, running out of budget is the element timeout.
                Err(TweethubError::SessionExpired(_)) => {
                    return Err(TweethubError::WaitTimeout(selector.to_string()))
                }
                Err(e) => return Err(e),
            };

            for element in elements {
                if within_budget(&deadline, element.is_displayed())
                    .await
                    .unwrap_or(false)
                {
                    return Ok(());
                }
            }

            match self.session.deadline().remaining() {
                Some(rest) => tokio::time::sleep(POLL_INTERVAL.min(rest)).await,
                None => return Err(TweethubError::WaitTimeout(selector.to_string())),
            }
        }
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        let element = self.find(selector).await?;
        let deadline = *self.session.deadline();
        within_budget(&deadline, element.click()).await?;
        Ok(())
    }

    async fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let element = self.find(selector).await?;
        let deadline = *self.session.deadline();
        within_budget(&deadline, element.send_keys(text)).await
    }

    async fn press(&mut self, keys: &[Key]) -> Result<()> {
        let mut actions = KeyActions::new("keyboard".to_string());
        for key in keys {
            let value = key.code();
            actions = actions
                .then(KeyAction::Down { value })
                .then(KeyAction::Up { value });
        }
        let deadline = *self.session.deadline();
        within_budget(&deadline, self.session.client()?.perform_actions(actions)).await
    }

    // Teardown stays unbounded: the context must be released even when the
    // budget is already spent.
    async fn close(&mut self) -> Result<()> {
        self.session.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn calls_are_cut_off_when_the_budget_runs_out() {
        let deadline = Deadline::new(Duration::from_millis(20));
        let result: Result<()> = within_budget(
            &deadline,
            std::future::pending::<std::result::Result<(), std::io::Error>>(),
        )
        .await;
        assert!(matches!(result, Err(TweethubError::SessionExpired(_))));
    }

    #[tokio::test]
    async fn an_expired_session_rejects_calls_without_dispatching_them() {
        let deadline = Deadline::new(Duration::ZERO);
        let result: Result<()> = within_budget(
            &deadline,
            std::future::pending::<std::result::Result<(), std::io::Error>>(),
        )
        .await;
        assert!(matches!(result, Err(TweethubError::SessionExpired(_))));
    }

    #[tokio::test]
    async fn quick_calls_pass_through_untouched() {
        let deadline = Deadline::new(Duration::from_secs(5));
        let value = within_budget(&deadline, async { Ok::<_, std::io::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}
