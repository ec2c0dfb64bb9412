// tests/binary_exit_tests.rs
use chrono::Utc;
use mockito::{Server, ServerGuard};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn write_config(health_url: &str, stop_url: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"health_url":"{}","stop_url":"{}"}}"#,
        health_url, stop_url
    )
    .unwrap();
    file
}

fn config_for(server: &ServerGuard) -> NamedTempFile {
    write_config(
        &format!("{}/healthz", server.url()),
        &format!("{}/self/stop", server.url()),
    )
}

fn run_watchdog(config: &NamedTempFile) -> Output {
    Command::new(env!("CARGO_BIN_EXE_idle-watchdog"))
        .arg(config.path())
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .output()
        .unwrap()
}

fn heartbeat_body(age_secs: i64) -> String {
    format!(
        r#"{{"status":"ok","lastHeartbeat":{}}}"#,
        Utc::now().timestamp() - age_secs
    )
}

#[test]
fn test_recent_heartbeat_exits_zero() {
    let mut server = Server::new();
    let _health = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body(heartbeat_body(60))
        .create();
    let stop = server.mock("GET", "/self/stop").expect(0).create();
    let config = config_for(&server);

    let output = run_watchdog(&config);

    assert_eq!(output.status.code(), Some(0));
    stop.assert();
}

#[test]
fn test_acknowledged_stop_exits_zero() {
    let mut server = Server::new();
    let _health = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body(heartbeat_body(7200))
        .create();
    let stop = server
        .mock("GET", "/self/stop")
        .with_status(200)
        .expect(1)
        .create();
    let config = config_for(&server);

    let output = run_watchdog(&config);

    assert_eq!(output.status.code(), Some(0));
    stop.assert();
}

#[test]
fn test_rejected_stop_exits_one_with_body() {
    let mut server = Server::new();
    let _health = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body(heartbeat_body(7200))
        .create();
    let stop = server
        .mock("GET", "/self/stop")
        .with_status(503)
        .with_body("overloaded")
        .expect(1)
        .create();
    let config = config_for(&server);

    let output = run_watchdog(&config);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"));
    assert!(stderr.contains("overloaded"));
    stop.assert();
}

#[test]
fn test_malformed_health_body_exits_one_without_stop() {
    let mut server = Server::new();
    let _health = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body("not json")
        .create();
    let stop = server.mock("GET", "/self/stop").expect(0).create();
    let config = config_for(&server);

    let output = run_watchdog(&config);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed health response"));
    stop.assert();
}

#[test]
fn test_unreachable_stop_exits_one() {
    let mut server = Server::new();
    let _health = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body(heartbeat_body(7200))
        .create();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = write_config(
        &format!("{}/healthz", server.url()),
        &format!("http://127.0.0.1:{}/self/stop", port),
    );

    let output = run_watchdog(&config);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Stop request failed"));
}

#[test]
fn test_invalid_config_exits_one() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"idle_threshold_secs": 0}}"#).unwrap();

    let output = run_watchdog(&file);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("idle_threshold_secs"));
}
