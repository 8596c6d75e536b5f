//! Shared wiremock setup for the integration tests

#![allow(dead_code, reason = "not every test binary uses every helper")]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "owner";
pub const REPO: &str = "widget";
pub const REPO_URL: &str = "https://github.com/owner/widget";

pub fn repo_path(suffix: &str) -> String {
    format!("/repos/{OWNER}/{REPO}{suffix}")
}

pub fn repo_record() -> Value {
    json!({
        "full_name": "owner/widget",
        "description": "A small library of reusable widgets",
        "stargazers_count": 1234,
        "forks_count": 56,
        "watchers_count": 1234,
        "pushed_at": "2024-01-15T10:30:00Z",
        "has_wiki": true,
        "default_branch": "main",
        "open_issues_count": 2
    })
}

pub async fn mount_json(server: &MockServer, suffix: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(repo_path(suffix)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, suffix: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(repo_path(suffix)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount every endpoint the fetcher queries with a plausible repository.
pub async fn mount_full_repository(server: &MockServer) {
    mount_json(server, "", repo_record()).await;

    mount_json(
        server,
        "/contents",
        json!([
            { "name": "README.md", "type": "file", "size": 6000 },
            { "name": "LICENSE", "type": "file", "size": 1070 },
            { "name": "src", "type": "dir", "size": 0 }
        ]),
    )
    .await;

    mount_json(
        server,
        "/issues",
        json!([
            { "state": "closed", "created_at": "2024-01-02T00:00:00Z" },
            { "state": "closed", "created_at": "2024-01-03T00:00:00Z" },
            { "state": "open", "created_at": "2024-01-04T00:00:00Z" },
            { "state": "open", "created_at": "2024-01-05T00:00:00Z", "pull_request": { "merged_at": null } }
        ]),
    )
    .await;

    mount_json(
        server,
        "/pulls",
        json!([
            { "state": "closed", "created_at": "2024-01-01T00:00:00Z", "merged_at": "2024-01-02T00:00:00Z" },
            { "state": "open", "created_at": "2024-01-05T00:00:00Z", "merged_at": null }
        ]),
    )
    .await;

    mount_json(
        server,
        "/commits",
        json!([
            { "sha": "a", "commit": { "author": { "name": "Ann", "date": "2024-01-15T10:30:00Z" } } },
            { "sha": "b", "commit": { "author": { "name": "Bob", "date": "2024-01-10T08:00:00Z" } } }
        ]),
    )
    .await;

    mount_json(server, "/contributors", json!([{ "login": "ann" }, { "login": "bob" }])).await;

    mount_json(server, "/community/profile", json!({ "health_percentage": 71 })).await;
}
