//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use plantdiff_server::{create_app, AppState, Config};

pub(crate) fn test_config(max_lines: usize) -> Config {
    Config {
        port: 0,
        max_lines,
        max_body_size: 1_000_000,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let app = create_app(AppState::new(config), false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server() -> TestServer {
    test_server_for_config(test_config(100))
}
