// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;

use agent_core::{DeleteOptions, Entry, Operation, Scope, Service};
use agent_protocol::{read_response, write_request, Request};
use tempfile::tempdir;
use tokio::io::BufReader;
use tokio::net::UnixStream;
use tokio::sync::Notify;

use super::Runner;
use crate::socket_path;

fn entry() -> Entry {
    Entry::try_new(Operation::Create, Some("v1".into()), None, None, 1, None).unwrap()
}

#[tokio::test]
async fn cancellation_stops_the_run_and_destroys_the_handler() {
    let dir = tempdir().unwrap();
    std::env::set_var("XDG_RUNTIME_DIR", dir.path());

    let scope = Scope::new("111111111111", "us-east-1");
    let runner = Runner::new(false);
    let handler = runner.handler();
    let cancel = Arc::new(Notify::new());

    let run_cancel = Arc::clone(&cancel);
    let scope_for_run = scope.clone();
    let run_task = tokio::spawn(async move { runner.run(&scope_for_run, run_cancel).await });

    // Let the listener bind before we exercise it.
    let path = socket_path::socket_path(&scope);
    for _ in 0..50 {
        if socket_path::probe(&path) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let mut stream = UnixStream::connect(&path).await.unwrap();
    write_request(
        &mut stream,
        &Request::StageEntry {
            scope: scope.clone(),
            service: Service::Param,
            name: "/app/cfg".into(),
            entry: entry(),
        },
        Duration::from_secs(1),
    )
    .await
    .unwrap();
    let mut reader = BufReader::new(stream);
    read_response(&mut reader, Duration::from_secs(1)).await.unwrap();
    assert!(!handler.is_empty());

    cancel.notify_one();
    tokio::time::timeout(Duration::from_secs(1), run_task)
        .await
        .expect("run should return promptly after cancellation")
        .unwrap()
        .unwrap();

    assert!(handler.is_empty());
    std::env::remove_var("XDG_RUNTIME_DIR");
}
