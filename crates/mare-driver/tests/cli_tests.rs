// SPDX-License-Identifier: MIT OR Apache-2.0
use assert_cmd::Command;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use mare_worker::{build_app, AppState, WordCountMapper, WordCountReducer};
use predicates::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_worker() -> String {
    let (url, _counter) = spawn_worker_with_reduce_batch_counter().await;
    url
}

/// Spawns a worker whose `/reduce-batch` hits are independently observable,
/// so end-to-end tests can assert the driver issued exactly `n_reducers`
/// `ReduceBatch` RPCs rather than inferring the count from the final payload.
async fn spawn_worker_with_reduce_batch_counter() -> (String, Arc<AtomicUsize>) {
    let state = Arc::new(AppState::new(
        WordCountMapper,
        WordCountReducer,
        mare_core::Codec::TabLine,
    ));
    let counter = Arc::new(AtomicUsize::new(0));
    let app = build_app(state).layer(middleware::from_fn_with_state(
        counter.clone(),
        count_reduce_batch_hits,
    ));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), counter)
}

async fn count_reduce_batch_hits(
    State(counter): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == "/reduce-batch" {
        counter.fetch_add(1, Ordering::SeqCst);
    }
    next.run(request).await
}

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_word_count_with_two_reducers() {
    let worker_url = spawn_worker().await;
    let dir = tempfile::tempdir().unwrap();

    let input_path = dir.path().join("input.tsv");
    tokio::fs::write(
        &input_path,
        "line\tthe quick brown fox\nline\tthe lazy dog\n",
    )
    .await
    .unwrap();

    let inter_dir = dir.path().join("inter");
    tokio::fs::create_dir_all(&inter_dir).await.unwrap();
    let out_dir = dir.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();

    let mut cmd = Command::cargo_bin("mare-driver").unwrap();
    cmd.arg("--worker-url")
        .arg(&worker_url)
        .arg("--inter-hint")
        .arg(inter_dir.to_str().unwrap())
        .arg("--output-hint")
        .arg(out_dir.to_str().unwrap())
        .arg("--n-reducers")
        .arg("2")
        .arg(input_path.to_str().unwrap());

    let assert = cmd.assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let (backend, locator) = output.trim().split_once(' ').unwrap();
    assert_eq!(backend, "FILE");

    let payload = std::fs::read_to_string(locator).unwrap();
    let mut counts: Vec<(&str, &str)> = payload
        .lines()
        .map(|l| l.split_once('\t').unwrap())
        .collect();
    counts.sort();

    let mut expected = vec![
        ("the", "2"),
        ("quick", "1"),
        ("brown", "1"),
        ("fox", "1"),
        ("lazy", "1"),
        ("dog", "1"),
    ];
    expected.sort();
    assert_eq!(counts, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_input_slice_runs_exact_reducer_count_and_produces_empty_output() {
    let (worker_url, reduce_batch_hits) = spawn_worker_with_reduce_batch_counter().await;
    let dir = tempfile::tempdir().unwrap();

    let input_path = dir.path().join("empty.tsv");
    tokio::fs::write(&input_path, "").await.unwrap();

    let inter_dir = dir.path().join("inter");
    tokio::fs::create_dir_all(&inter_dir).await.unwrap();
    let out_dir = dir.path().join("out");
    tokio::fs::create_dir_all(&out_dir).await.unwrap();

    let mut cmd = Command::cargo_bin("mare-driver").unwrap();
    cmd.arg("--worker-url")
        .arg(&worker_url)
        .arg("--inter-hint")
        .arg(inter_dir.to_str().unwrap())
        .arg("--output-hint")
        .arg(out_dir.to_str().unwrap())
        .arg("--n-reducers")
        .arg("3")
        .arg(input_path.to_str().unwrap());

    let assert = cmd.assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let (_, locator) = output.trim().split_once(' ').unwrap();
    let payload = std::fs::read_to_string(locator).unwrap();
    assert_eq!(payload, "");
    assert_eq!(reduce_batch_hits.load(Ordering::SeqCst), 3);
}

#[test]
fn rejects_zero_reducers_before_dispatching_any_rpc() {
    let mut cmd = Command::cargo_bin("mare-driver").unwrap();
    cmd.arg("--worker-url")
        .arg("http://127.0.0.1:1")
        .arg("--inter-hint")
        .arg("/tmp")
        .arg("--output-hint")
        .arg("/tmp")
        .arg("--n-reducers")
        .arg("0")
        .arg("/tmp/whatever.tsv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("n_reducers"));
}
