//! Integration test: build a form from a route payload, submit it through the
//! curl fetcher against a local instance, and check what was requested.

mod common;

use std::sync::Arc;

use feedform_core::config::{FeedformConfig, FetchConfig};
use feedform_core::fetch::{CurlFetcher, FeedFetcher, FetchError};
use feedform_core::form::{FormModel, FormSession, SubmitError, SubmitState};
use feedform_core::route::RouteRequest;

const ISSUE_ROUTE: &str = r#"{
    "path": "/issue/:user/:repo/:state?/:labels?/:routeParams?",
    "name": "Repo Issues",
    "example": "/github/issue/DIYgod/RSSHub/open",
    "maintainers": ["HenryQW"],
    "parameters": {
        "user": "GitHub username",
        "repo": "GitHub repo name",
        "state": { "description": "the state of the issues", "default": "open" }
    }
}"#;

fn fetch_config() -> FetchConfig {
    FetchConfig {
        connect_timeout_secs: 2,
        timeout_secs: 5,
        user_agent: Some("feedform-test".to_string()),
    }
}

fn session(prefix: &str) -> FormSession {
    let req = RouteRequest::parse(Some(ISSUE_ROUTE), Some(prefix), Some("GitHub")).expect("request");
    let model = FormModel::build(req.route, &req.route_prefix, &FeedformConfig::default()).unwrap();
    FormSession::new(Arc::new(model))
}

#[test]
fn submit_fetches_assembled_route() {
    let server = common::feed_server::start("github");
    let fetcher = CurlFetcher::new(&server.base_url, &fetch_config()).unwrap();

    let mut form = session("github");
    form.set("user", "DIYgod");
    form.set("repo", "RSSHub");
    form.set("route-params-lang", "en");

    let feed = form.submit_with(&fetcher).expect("submit");
    assert_eq!(feed.url, "rsshub://github/issue/DIYgod/RSSHub/open/lang=en");
    assert_eq!(
        feed.source_url,
        format!("{}/github/issue/DIYgod/RSSHub/open/lang=en", server.base_url)
    );
    assert_eq!(
        feed.title.as_deref(),
        Some("Feed for /github/issue/DIYgod/RSSHub/open/lang=en")
    );
    assert!(feed.id.as_deref().is_some_and(|id| id.starts_with("feed-")));
    assert!(matches!(form.state(), SubmitState::Succeeded(_)));

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.as_slice(), ["/github/issue/DIYgod/RSSHub/open/lang=en"]);
}

#[test]
fn http_failure_surfaces_and_clears_pending() {
    let server = common::feed_server::start("other");
    let fetcher = CurlFetcher::new(&server.base_url, &fetch_config()).unwrap();

    let mut form = session("github");
    form.set("user", "DIYgod");
    form.set("repo", "RSSHub");

    let err = form.submit_with(&fetcher).unwrap_err();
    assert!(matches!(err, SubmitError::Fetch(FetchError::Http { status: 404 })));
    assert!(!form.is_submitting());
    assert!(form.can_submit());
}

#[test]
fn invalid_form_sends_no_request() {
    let server = common::feed_server::start("github");
    let fetcher = CurlFetcher::new(&server.base_url, &fetch_config()).unwrap();

    let mut form = session("github");
    form.set("user", "DIYgod");

    assert!(matches!(form.submit_with(&fetcher), Err(SubmitError::Invalid(_))));
    assert!(server.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_from_async_context() {
    let server = common::feed_server::start("github");
    let fetcher = CurlFetcher::new(&server.base_url, &fetch_config()).unwrap();

    let mut form = session("github");
    form.set("user", "a");
    form.set("repo", "b");
    form.set("state", "closed");

    let url = form.begin_submit().unwrap();
    let result = tokio::task::spawn_blocking(move || fetcher.fetch_feed(&url))
        .await
        .unwrap();
    let feed = form.settle(result).unwrap();
    assert_eq!(feed.url, "rsshub://github/issue/a/b/closed");
}
