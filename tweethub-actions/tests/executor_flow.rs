mod support;

use support::{Event, FakeSite};
use tweethub_actions::{run_for_accounts, ActionRequest, Executor};
use tweethub_config::{Account, Selectors};
use tweethub_driver::browser::Key;
use url::Url;

fn account(username: &str, password: &str) -> Account {
    Account {
        username: username.into(),
        password: password.into(),
    }
}

fn base_url() -> Url {
    Url::parse("https://twitter.com").unwrap()
}

fn tweet_url() -> Url {
    Url::parse("https://twitter.com/someone/status/12345").unwrap()
}

#[tokio::test]
async fn all_accounts_mode_authenticates_each_account_in_list_order() {
    let site = FakeSite::new();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);
    let accounts = [account("a", "pw1"), account("b", "pw2")];
    let request = ActionRequest::like(tweet_url());

    let outcomes = run_for_accounts(&executor, &accounts, &request).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|(_, o)| o.ok));
    assert_eq!(outcomes[0].0.username, "a");
    assert_eq!(outcomes[1].0.username, "b");

    let events = site.events();

    // Usernames entered into the login form, in configured order.
    let typed: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Type(_, sel, text) if sel == &selectors.login_username_input => {
                Some(text.clone())
            }
            _ => None,
        })
        .collect();
    assert_eq!(typed, vec!["a", "b"]);

    // Two independent sessions, the first fully released before the second
    // opens, and none leaked at the end.
    let pos = |wanted: &Event| events.iter().position(|e| e == wanted).unwrap();
    assert!(pos(&Event::Closed(0)) < pos(&Event::Opened(1)));
    let closes = events
        .iter()
        .filter(|e| matches!(e, Event::Closed(_)))
        .count();
    assert_eq!(closes, 2);

    // Within each session, login happens before the action navigation.
    for id in [0usize, 1] {
        let login = events
            .iter()
            .position(|e| matches!(e, Event::Goto(sid, u) if *sid == id && u.ends_with("/login")))
            .unwrap();
        let action = events
            .iter()
            .position(|e| matches!(e, Event::Goto(sid, u) if *sid == id && u.contains("/status/")))
            .unwrap();
        assert!(login < action, "session {id} acted before logging in");
    }
}

#[tokio::test]
async fn unlike_reverses_like() {
    let site = FakeSite::new();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);
    let acct = account("a", "pw1");

    let liked = executor.run(&acct, &ActionRequest::like(tweet_url())).await;
    assert!(liked.ok, "{}", liked.detail);
    assert!(site.state_for("a").liked);

    let unliked = executor
        .run(&acct, &ActionRequest::unlike(tweet_url()))
        .await;
    assert!(unliked.ok, "{}", unliked.detail);
    assert!(!site.state_for("a").liked, "toggle did not return to origin");
}

#[tokio::test]
async fn unrepost_reverses_repost() {
    let site = FakeSite::new();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);
    let acct = account("a", "pw1");

    assert!(executor.run(&acct, &ActionRequest::repost(tweet_url())).await.ok);
    assert!(site.state_for("a").reposted);

    assert!(executor.run(&acct, &ActionRequest::unrepost(tweet_url())).await.ok);
    assert!(!site.state_for("a").reposted);
}

#[tokio::test]
async fn a_dead_wait_reports_failure_and_still_releases_the_session() {
    let selectors = Selectors::default();
    let site = FakeSite::new().with_never_visible(&selectors.like_button);
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);

    let outcome = executor
        .run(&account("a", "pw1"), &ActionRequest::like(tweet_url()))
        .await;

    assert!(!outcome.ok);
    assert!(outcome.detail.contains("timed out"), "{}", outcome.detail);
    let events = site.events();
    assert!(events.contains(&Event::Closed(0)), "session was leaked");
}

#[tokio::test]
async fn a_failed_login_still_attempts_the_action() {
    let selectors = Selectors::default();
    // The post-login timeline landmark never shows up, so authentication
    // fails; the like sequence must run regardless.
    let site = FakeSite::new().with_never_visible(&selectors.timeline_cell);
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);

    let outcome = executor
        .run(&account("a", "pw1"), &ActionRequest::like(tweet_url()))
        .await;

    assert!(outcome.ok, "{}", outcome.detail);
    let events = site.events();
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::Goto(_, u) if u.contains("/status/"))));
    assert!(events.contains(&Event::Click(0, selectors.like_button.clone())));
}

#[tokio::test]
async fn quote_types_the_message_and_posts_it() {
    let site = FakeSite::new();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);

    let request = ActionRequest::quote(tweet_url(), "a fine take".into());
    let outcome = executor.run(&account("a", "pw1"), &request).await;

    assert!(outcome.ok, "{}", outcome.detail);
    let events = site.events();
    assert!(events.contains(&Event::Type(
        0,
        selectors.quote_textarea.clone(),
        "a fine take".into()
    )));
    assert!(events.contains(&Event::Click(0, selectors.quote_post_button.clone())));
    // The quote entry is reached by keyboard from the repost menu.
    assert!(events.contains(&Event::Press(0, vec![Key::ArrowDown])));
}

#[tokio::test]
async fn a_session_allocation_failure_surfaces_before_any_step() {
    let site = FakeSite::new().with_fail_open();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);

    let outcome = executor
        .run(&account("a", "pw1"), &ActionRequest::like(tweet_url()))
        .await;

    assert!(!outcome.ok);
    assert!(site.events().is_empty(), "steps ran without a session");
}

#[tokio::test]
async fn unfollow_confirms_and_reverses_follow() {
    let site = FakeSite::new();
    let selectors = Selectors::default();
    let base = base_url();
    let executor = Executor::new(&site, &base, &selectors);
    let acct = account("a", "pw1");

    let followed = executor
        .run(&acct, &ActionRequest::follow("rustlang".into()))
        .await;
    assert!(followed.ok, "{}", followed.detail);
    assert!(site.state_for("a").following);

    let unfollowed = executor
        .run(&acct, &ActionRequest::unfollow("rustlang".into()))
        .await;
    assert!(unfollowed.ok, "{}", unfollowed.detail);
    assert!(!site.state_for("a").following);

    // The unfollow click is followed by the confirmation key-press.
    let events = site.events();
    let click = events
        .iter()
        .position(|e| {
            matches!(e, Event::Click(1, sel) if sel == &selectors.following_button_for("rustlang"))
        })
        .expect("unfollow click missing");
    let confirm = events
        .iter()
        .skip(click)
        .position(|e| matches!(e, Event::Press(1, keys) if keys == &vec![Key::Enter]))
        .expect("confirmation key-press missing");
    assert!(confirm > 0);
}
