//! In-memory stand-in for the browser: records every surface call and keeps
//! a tiny per-user model of the page state (like/repost/follow toggles), so
//! the action sequences can be exercised without a WebDriver service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use tweethub_actions::executor::SurfaceFactory;
use tweethub_common::{Result, TweethubError};
use tweethub_config::Selectors;
use tweethub_driver::browser::{Key, UiSurface};

/// One recorded surface call; the first field is the session id.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Opened(usize),
    Goto(usize, String),
    Wait(usize, String),
    Click(usize, String),
    Type(usize, String, String),
    Press(usize, Vec<Key>),
    Closed(usize),
}

/// Toggle state the fake site tracks per logged-in username.
#[derive(Debug, Default, Clone)]
pub struct PageState {
    pub liked: bool,
    pub reposted: bool,
    pub following: bool,
}

pub struct FakeSite {
    selectors: Selectors,
    events: Arc<Mutex<Vec<Event>>>,
    users: Arc<Mutex<HashMap<String, PageState>>>,
    next_session: Arc<AtomicUsize>,
    never_visible: Option<String>,
    fail_open: bool,
}

impl FakeSite {
    pub fn new() -> Self {
        Self {
            selectors: Selectors::default(),
            events: Arc::new(Mutex::new(Vec::new())),
            users: Arc::new(Mutex::new(HashMap::new())),
            next_session: Arc::new(AtomicUsize::new(0)),
            never_visible: None,
            fail_open: false,
        }
    }

    /// Make one selector never become visible, simulating a dead wait.
    pub fn with_never_visible(mut self, selector: &str) -> Self {
        self.never_visible = Some(selector.to_string());
        self
    }

    /// Make session allocation itself fail.
    pub fn with_fail_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn state_for(&self, username: &str) -> PageState {
        self.users
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SurfaceFactory for FakeSite {
    type Surface = FakeSurface;

    async fn open(&self) -> Result<FakeSurface> {
        if self.fail_open {
            return Err(TweethubError::Driver(anyhow!("webdriver unavailable")));
        }
        let id = self.next_session.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(Event::Opened(id));
        Ok(FakeSurface {
            id,
            selectors: self.selectors.clone(),
            events: Arc::clone(&self.events),
            users: Arc::clone(&self.users),
            never_visible: self.never_visible.clone(),
            current_user: String::new(),
            closed: false,
        })
    }
}

pub struct FakeSurface {
    id: usize,
    selectors: Selectors,
    events: Arc<Mutex<Vec<Event>>>,
    users: Arc<Mutex<HashMap<String, PageState>>>,
    never_visible: Option<String>,
    current_user: String,
    closed: bool,
}

impl FakeSurface {
    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn visible(&self, selector: &str) -> bool {
        let s = &self.selectors;
        let mut users = self.users.lock().unwrap();
        let state = users.entry(self.current_user.clone()).or_default();

        if selector == s.like_button {
            !state.liked
        } else if selector == s.unlike_button {
            state.liked
        } else if selector == s.retweet_button {
            !state.reposted
        } else if selector == s.unretweet_button {
            state.reposted
        } else if selector.contains(r#"aria-label="Following @"#) {
            state.following
        } else if selector.contains(r#"aria-label="Follow @"#) {
            !state.following
        } else {
            true
        }
    }
}

#[async_trait]
impl UiSurface for FakeSurface {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.record(Event::Goto(self.id, url.to_string()));
        Ok(())
    }

    async fn wait_visible(&mut self, selector: &str) -> Result<()> {
        self.record(Event::Wait(self.id, selector.to_string()));
        if self.never_visible.as_deref() == Some(selector) {
            return Err(TweethubError::WaitTimeout(selector.to_string()));
        }
        if self.visible(selector) {
            Ok(())
        } else {
            Err(TweethubError::WaitTimeout(selector.to_string()))
        }
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        self.record(Event::Click(self.id, selector.to_string()));
        let s = &self.selectors;
        let mut users = self.users.lock().unwrap();
        let state = users.entry(self.current_user.clone()).or_default();

        if selector == s.like_button {
            state.liked = true;
        } else if selector == s.unlike_button {
            state.liked = false;
        } else if selector == s.retweet_confirm {
            state.reposted = true;
        } else if selector == s.unretweet_confirm {
            state.reposted = false;
        } else if selector.contains(r#"aria-label="Following @"#) {
            state.following = false;
        } else if selector.contains(r#"aria-label="Follow @"#) {
            state.following = true;
        }
        Ok(())
    }

    async fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        self.record(Event::Type(self.id, selector.to_string(), text.to_string()));
        if selector == self.selectors.login_username_input {
            self.current_user = text.to_string();
        }
        Ok(())
    }

    async fn press(&mut self, keys: &[Key]) -> Result<()> {
        self.record(Event::Press(self.id, keys.to_vec()));
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.record(Event::Closed(self.id));
        }
        Ok(())
    }
}
