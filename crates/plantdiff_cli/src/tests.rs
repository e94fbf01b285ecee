//! Unit tests for the `pdiff` CLI entrypoint module.

use super::{
    api_url, error_message_for_response, fit_cell, format_diff_output, format_side_by_side,
    local_diff, normalize_server, read_source, remote_diff, validate_sources,
};
use super::{Cli, Commands};
use clap::Parser;
use plantdiff_core::env::ScopedEnv;
use plantdiff_core::{DiffRequest, DiffResponse, DEFAULT_CLI_SERVER_URL, DEFAULT_MAX_DIFF_LINES};
use plantdiff_server::{serve_router, AppState, Config};
use std::io::Write;
use tokio::sync::oneshot;

fn request(old: &str, new: &str) -> DiffRequest {
    DiffRequest {
        old: old.to_string(),
        new: new.to_string(),
    }
}

fn substitution_response() -> DiffResponse {
    local_diff(&request("a\nb\nc", "a\nx\nc"), DEFAULT_MAX_DIFF_LINES).expect("local diff")
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pdiff").chain(args.iter().copied())).expect("parse")
}

struct RunningServer {
    url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    async fn start(max_lines: usize) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let url = format!("http://{}", listener.local_addr().expect("listener addr"));
        let state = AppState::new(Config {
            max_lines,
            ..Config::default()
        });
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_router(listener, state, false, async move {
            let _ = rx.await;
        }));
        Self {
            url,
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("server task")
            .expect("server exit");
    }
}

#[test]
fn diff_command_parses_sources_and_flags() {
    let _env = ScopedEnv::lock()
        .remove("MAX_DIFF_LINES")
        .remove("PD_SERVER");
    let cli = parse(&["diff", "old.puml", "-", "--reduced", "--json"]);
    assert!(cli.json);
    assert!(cli.server.is_none());
    match cli.command {
        Commands::Diff {
            old,
            new,
            reduced,
            max_lines,
            width,
        } => {
            assert_eq!(old, "old.puml");
            assert_eq!(new, "-");
            assert!(reduced);
            assert_eq!(max_lines, DEFAULT_MAX_DIFF_LINES);
            assert_eq!(width, 120);
        }
        Commands::Completions { .. } => panic!("expected diff command"),
    }
}

#[test]
fn max_lines_falls_back_to_env() {
    let _env = ScopedEnv::lock()
        .set("MAX_DIFF_LINES", "7")
        .remove("PD_SERVER");
    match parse(&["diff", "a", "b"]).command {
        Commands::Diff { max_lines, .. } => assert_eq!(max_lines, 7),
        Commands::Completions { .. } => panic!("expected diff command"),
    }
}

#[test]
fn bare_server_flag_targets_default_url() {
    let _env = ScopedEnv::lock().remove("PD_SERVER");
    let cli = parse(&["diff", "a", "b", "--server"]);
    assert_eq!(cli.server.as_deref(), Some(DEFAULT_CLI_SERVER_URL));

    let cli = parse(&["diff", "a", "b", "--server=http://127.0.0.1:9000", "-t", "5"]);
    assert_eq!(cli.server.as_deref(), Some("http://127.0.0.1:9000"));
    assert_eq!(cli.timeout, 5);
}

#[test]
fn validate_sources_rejects_two_stdin_sides() {
    assert!(validate_sources("-", "new.puml").is_ok());
    assert!(validate_sources("old.puml", "-").is_ok());
    let err = validate_sources("-", "-").expect_err("both stdin");
    assert!(err.contains("stdin"));
}

#[test]
fn read_source_reads_files_and_reports_missing_paths() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "@startuml\r\nA -> B\r\n@enduml").expect("write");
    let path = file.path().to_string_lossy().to_string();
    assert_eq!(
        read_source(&path).expect("read"),
        "@startuml\r\nA -> B\r\n@enduml"
    );

    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.puml");
    let missing = missing.to_string_lossy().to_string();
    let err = read_source(&missing).expect_err("missing file");
    assert!(err.contains("missing.puml"));
}

#[test]
fn local_diff_reports_oversized_input() {
    let err = local_diff(&request("a\nb\nc", "a"), 2).expect_err("too large");
    assert!(err.contains("old side has 3 lines (limit 2)"), "{}", err);
    assert!(local_diff(&request("a\nb\nc", "a"), 0).is_ok());
}

#[test]
fn fit_cell_pads_and_truncates() {
    assert_eq!(fit_cell("ab", 4), "ab  ");
    assert_eq!(fit_cell("abcdef", 4), "abc~");
    assert_eq!(fit_cell("abc", 0), "");
}

#[test]
fn side_by_side_output_pairs_columns_per_row() {
    let response = substitution_response();
    let output = format_side_by_side(&response.rows, 23);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{:<10} | {}", "  a", "  a"),
            format!("{:<10} |", "- b"),
            format!("{:<10} | {}", " ", "+ x"),
            format!("{:<10} | {}", "  c", "  c"),
        ]
    );
}

#[test]
fn format_diff_output_honors_json_and_reduced_modes() {
    let response = substitution_response();

    let reduced = format_diff_output(&response, false, true, 80).expect("reduced");
    assert_eq!(reduced, "a\n\nx\nc");

    let json = format_diff_output(&response, true, true, 80).expect("json");
    let decoded: DiffResponse = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded, response);

    let text = format_diff_output(&response, false, false, 80).expect("text");
    assert!(text.ends_with("distance 2: 1 deleted, 1 inserted, 2 unchanged"));
}

#[test]
fn api_url_and_normalize_server_build_endpoints() {
    assert_eq!(
        normalize_server(" http://localhost:38420/ ").as_deref(),
        Some("http://127.0.0.1:38420")
    );
    assert_eq!(normalize_server("   "), None);

    let url = api_url("http://127.0.0.1:38420/base/", &["api", "diff"]).expect("url");
    assert_eq!(url.as_str(), "http://127.0.0.1:38420/base/api/diff");
    assert!(api_url("not a url", &["api"]).is_err());
}

#[test]
fn error_message_for_response_prefers_json_error_field() {
    let status = reqwest::StatusCode::PAYLOAD_TOO_LARGE;
    assert_eq!(
        error_message_for_response(status, r#"{"error":"Input too large"}"#),
        "Input too large"
    );
    assert_eq!(error_message_for_response(status, "plain body"), "plain body");
    assert_eq!(error_message_for_response(status, "  "), "Payload Too Large");
}

#[tokio::test]
async fn remote_diff_matches_local_diff() {
    let server = RunningServer::start(DEFAULT_MAX_DIFF_LINES).await;
    let remote = remote_diff(&server.url, 5, &request("a\nb\nc", "a\nx\nc"))
        .await
        .expect("remote diff");
    assert_eq!(remote, substitution_response());
    server.stop().await;
}

#[tokio::test]
async fn remote_diff_surfaces_server_errors() {
    let server = RunningServer::start(2).await;
    let err = remote_diff(&server.url, 5, &request("a\nb\nc", "a"))
        .await
        .expect_err("too large");
    assert!(err.contains("old side has 3 lines"), "{}", err);
    assert!(err.contains("413"), "{}", err);
    server.stop().await;
}
