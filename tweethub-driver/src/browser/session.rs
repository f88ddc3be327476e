use std::collections::HashMap;
use std::time::{Duration, Instant};

use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;
use tweethub_common::{Result, TweethubError};
use webdriver::capabilities::Capabilities;

use crate::browser::surface::BrowserSurface;

/// Wall-clock budget attached to a whole session, not to individual steps.
///
/// Every wait-for-visible poll draws from the same budget, so a slow login
/// eats into the time left for the action that follows it.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Time left before the session expires, or `None` once it has.
    pub fn remaining(&self) -> Option<Duration> {
        self.budget.checked_sub(self.started.elapsed()).filter(|d| !d.is_zero())
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

/// One isolated browser automation context.
///
/// The client is held as an `Option` so that [`Session::close`] can consume
/// it exactly once; further closes are no-ops. A session is owned by a
/// single authenticate-then-act cycle and is never shared or pooled.
pub struct Session {
    client: Option<Client>,
    deadline: Deadline,
}

impl Session {
    pub(crate) fn new(client: Client, budget: Duration) -> Self {
        Self {
            client: Some(client),
            deadline: Deadline::new(budget),
        }
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub(crate) fn client(&self) -> Result<&Client> {
        self.client.as_ref().ok_or(TweethubError::SessionClosed)
    }

    /// Release the browser context. Safe to call any number of times.
    pub async fn close(&mut self) -> Result<()> {
        if let Some(client) = self.client.take() {
            client
                .close()
                .await
                .map_err(|e| TweethubError::Driver(e.into()))?;
        }
        Ok(())
    }
}

/// Opens fresh WebDriver sessions against a running Chromedriver-compatible
/// service. Each [`WebDriverFactory::connect`] call yields an independent
/// session with its own deadline; a connection failure propagates before any
/// action step is attempted.
#[derive(Debug, Clone)]
pub struct WebDriverFactory {
    pub webdriver_url: String,
    pub headless: bool,
    pub session_budget: Duration,
}

impl WebDriverFactory {
    pub fn new(webdriver_url: impl Into<String>, headless: bool, session_budget: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            headless,
            session_budget,
        }
    }

    /// Allocate a new browser context and wrap it as a [`BrowserSurface`].
    pub async fn connect(&self) -> Result<BrowserSurface> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();

        let mut args: Vec<String> = vec!["--window-size=1366,768".into()];
        if self.headless {
            args.push("--headless=new".into());
            args.push("--disable-gpu".into());
        }
        chrome_opts.insert("args".to_string(), json!(args));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        debug!(endpoint = %self.webdriver_url, headless = self.headless, "opening browser session");

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| TweethubError::Driver(e.into()))?;

        Ok(BrowserSurface::new(Session::new(client, self.session_budget)))
    }
}
