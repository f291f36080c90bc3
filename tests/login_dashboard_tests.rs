use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::process::Output;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task;
use warp::Filter;
use warp::http::StatusCode;

fn dashboard_payload() -> serde_json::Value {
    serde_json::json!({
        "current": {
            "month": "March",
            "year": 2024,
            "data": {
                "found": true,
                "progress": 37,
                "stage1": {"start": "2024-03-01", "end": "2024-03-10", "locality": true, "gps": true},
                "stage2": {"start": null, "end": null, "locality": true, "gps": false},
                "stage3": {"start": null, "end": null, "locality": false, "gps": false},
                "final": {"mis_status": false, "bill_approval": false}
            }
        },
        "previous": {
            "month": "February",
            "year": 2024,
            "data": {"found": false, "progress": 0}
        }
    })
}

struct MockServer {
    addr: SocketAddr,
    login_calls: Arc<AtomicUsize>,
    dashboard_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

fn start_server() -> MockServer {
    let login_calls = Arc::new(AtomicUsize::new(0));
    let dashboard_queries = Arc::new(Mutex::new(Vec::new()));

    let counter = login_calls.clone();
    let login_route = warp::path("api")
        .and(warp::path("login"))
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: serde_json::Value| {
            counter.fetch_add(1, Ordering::SeqCst);
            if body["username"] == "admin" && body["password"] == "secret" {
                warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({
                        "success": true,
                        "message": "Welcome Back!",
                        "username": "admin"
                    })),
                    StatusCode::OK,
                )
            } else {
                warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({
                        "success": false,
                        "message": "Invalid credentials"
                    })),
                    StatusCode::UNAUTHORIZED,
                )
            }
        });

    let queries = dashboard_queries.clone();
    let dashboard_route = warp::path("api")
        .and(warp::path("dashboard-data"))
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            queries.lock().unwrap().push(query);
            warp::reply::json(&dashboard_payload())
        });

    let (addr, server) =
        warp::serve(login_route.or(dashboard_route)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    MockServer {
        addr,
        login_calls,
        dashboard_queries,
    }
}

async fn run_console(addr: SocketAddr, args: &[&str]) -> Output {
    let base_url = format!("http://{addr}");
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("mis-console");
        cmd.args(&args)
            .args(["--base-url", &base_url])
            .env_remove("MIS_USERNAME")
            .env_remove("MIS_PASSWORD");
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn login_success_posts_once_and_shows_dashboard() {
    let server = start_server();

    let output = run_console(server.addr, &["login", "-u", "admin", "-p", "secret"]).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome Back!"))
        .stdout(predicate::str::contains("MIS Control Center"))
        .stdout(predicate::str::contains("March 2024  [Live Tracking]"));
    assert_eq!(server.login_calls.load(Ordering::SeqCst), 1);
    assert_eq!(server.dashboard_queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn login_failure_shows_message_and_skips_dashboard() {
    let server = start_server();

    let output = run_console(server.addr, &["login", "-u", "admin", "-p", "wrong"]).await;

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid credentials"))
        .stdout(predicate::str::contains("MIS Control Center").not());
    assert_eq!(server.login_calls.load(Ordering::SeqCst), 1);
    assert!(server.dashboard_queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn login_without_credentials_sends_nothing() {
    let server = start_server();

    let output = run_console(server.addr, &["login"]).await;

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username and password are required."));
    assert_eq!(server.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dashboard_requests_selected_month() {
    let server = start_server();

    let output = run_console(server.addr, &["dashboard", "--month", "2024-03"]).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Period: 2024-03"))
        .stdout(predicate::str::contains("37%"))
        .stdout(predicate::str::contains("[x] 1st - 10th"))
        .stdout(predicate::str::contains("[ ] 11th - 20th"))
        .stdout(predicate::str::contains("February 2024  [Not Started]"));

    let queries = server.dashboard_queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get("year").map(String::as_str), Some("2024"));
    assert_eq!(queries[0].get("month").map(String::as_str), Some("03"));
}
