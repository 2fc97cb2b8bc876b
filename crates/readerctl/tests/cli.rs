//! CLI tests against a mock Reader API.
//!
//! Each test runs the built binary with an isolated HOME and points it at a
//! wiremock server through `READERCTL_BASE_URL`.

mod common;

use std::io::Write;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli, run_cli_async, stderr, stdout};

fn list_body(ids: &[&str], next: &str) -> serde_json::Value {
    json!({
        "count": 2,
        "nextPageCursor": next,
        "results": ids
            .iter()
            .map(|id| json!({"id": id, "title": format!("Title {id}")}))
            .collect::<Vec<_>>()
    })
}

async fn mount_two_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("pageCursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["b"], "")))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["a"], "c1")))
        .with_priority(10)
        .mount(server)
        .await;
}

#[test]
fn test_no_command_prints_help() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(&[], home.path(), &[]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_help_flag_succeeds() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(&["--help"], home.path(), &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("list"));
}

#[test]
fn test_usage_error_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(&["save"], home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Commands:"), "stderr: {err}");
    assert!(err.contains("delete"), "stderr: {err}");
}

#[test]
fn test_missing_token_is_error() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(&["list"], home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: "), "stderr: {err}");
    assert!(err.contains("api token is required"));
    assert!(err.contains("Commands:"), "stderr: {err}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_first_page_only() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli_async(
        &["list", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Article a:\nTitle a\n\n");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_paginate_prints_every_page() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli_async(
        &["list", "--paginate", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Article a:\nTitle a\n\nArticle b:\nTitle b\n\n"
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli_async(
        &["list", "--json", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let line = stdout(&output);
    let doc: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(doc["id"], "a");
    assert_eq!(doc["title"], "Title a");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_partial_output_then_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("pageCursor", "c1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["a"], "c1")))
        .with_priority(10)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["list", "-p", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Article a:\nTitle a\n\n");
    let err = stderr(&output);
    assert!(err.contains("error: "));
    assert!(err.contains("unexpected status code: 503"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_from_config_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .and(header("authorization", "Token file-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["a"], "")))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "# readerctl config").unwrap();
    writeln!(config, "api-token file-token").unwrap();
    writeln!(config, "base-url {}", server.uri()).unwrap();
    let config_path = config.path().to_str().unwrap().to_string();

    let output = run_cli_async(&["-c", &config_path, "list"], home.path(), &[]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Article a:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_flag_token_beats_env_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .and(header("authorization", "Token flag-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["a"], "")))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["list", "--api-token", "flag-token"],
        home.path(),
        &[
            ("READERCTL_BASE_URL", server.uri().as_str()),
            ("READERCTL_API_TOKEN", "env-token"),
        ],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_token_used() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .and(header("authorization", "Token env-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["a"], "")))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["list"],
        home.path(),
        &[
            ("READERCTL_BASE_URL", server.uri().as_str()),
            ("READERCTL_API_TOKEN", "env-token"),
        ],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_debug_dumps_exchange_to_stderr() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli_async(
        &["list", "--debug", "-t", "secret-tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("GET /list HTTP/1.1"));
    assert!(err.contains("HTTP/1.1 200 OK"));
    assert!(!err.contains("secret-tok"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_save_prints_saved_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "doc1",
            "url": "https://read.readwise.io/new/read/doc1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["save", "https://example.com/post", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Saved document doc1: https://read.readwise.io/new/read/doc1\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_prints_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/delete/doc1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["delete", "doc1", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Deleted article doc1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_not_found_fails() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/delete/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_cli_async(
        &["delete", "gone", "-t", "tok"],
        home.path(),
        &[("READERCTL_BASE_URL", server.uri().as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unexpected status code: 404"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unknown_config_option_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "colour blue").unwrap();
    let config_path = config.path().to_str().unwrap().to_string();

    let output = run_cli(&["-c", &config_path, "list", "-t", "tok"], home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown option"));
}
