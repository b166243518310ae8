// Copyright 2026 The Confstore Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HttpStoreClient against a single-shot local responder

use std::io::Write;

use confstore_client::ClientConfig;
use confstore_client::ClusterStoreClient;
use confstore_client::HttpStoreClient;
use confstore_client::QueryOptions;
use confstore_client::WriteOptions;
use confstore_error::ConfStoreError;
use confstore_error::NetworkError;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, and hands back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (addr, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_complete(buf: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buf).to_lowercase();
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let body_len = buf.len() - (header_end + 4);
    if text.contains("transfer-encoding: chunked") {
        return text.ends_with("0\r\n\r\n");
    }
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body_len >= content_length
}

fn client_for(addr: String) -> HttpStoreClient {
    HttpStoreClient::new(ClientConfig {
        address: addr,
        token: Some("s3cr3t".to_string()),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn list_sends_recurse_and_decodes_pairs() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"[{"Key":"a","Flags":0,"Value":"eA=="},{"Key":"a/b","Flags":0,"Value":"eQ=="}]"#,
    )
    .await;
    let client = client_for(addr);

    let options = QueryOptions::default()
        .datacenter(Some("dc2".to_string()))
        .allow_stale(true);
    let pairs = client.list("a", &options).await.unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].key, "a");
    assert_eq!(&pairs[0].value[..], b"x");
    assert_eq!(pairs[1].key, "a/b");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /v1/kv/a?recurse&dc=dc2&stale HTTP/1.1"), "{request}");
    assert!(request.to_lowercase().contains("authorization: bearer s3cr3t"));
}

#[tokio::test]
async fn list_not_found_is_empty() {
    let (addr, server) = serve_once("404 Not Found", "").await;
    let client = client_for(addr);

    let pairs = client.list("missing/", &QueryOptions::default()).await.unwrap();
    assert!(pairs.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let (addr, server) = serve_once("500 Internal Server Error", "No cluster leader").await;
    let client = client_for(addr);

    let err = client.delete("a", &WriteOptions::default()).await.unwrap_err();
    assert!(matches!(err, ConfStoreError::UnexpectedResponse { status: 500, .. }));
    assert_eq!(err.to_string(), "Unexpected response code: 500 (No cluster leader)");

    let request = server.await.unwrap();
    assert!(request.starts_with("DELETE /v1/kv/a HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn delete_tree_sends_recurse() {
    let (addr, server) = serve_once("200 OK", "true").await;
    let client = client_for(addr);

    client.delete_tree("app/", &WriteOptions::default()).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("DELETE /v1/kv/app/?recurse HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn delete_cas_reports_refusal() {
    let (addr, server) = serve_once("200 OK", "false").await;
    let client = client_for(addr);

    let deleted = client
        .delete_cas("lock", 17, &WriteOptions::default().datacenter(Some("dc1".to_string())))
        .await
        .unwrap();
    assert!(!deleted);

    let request = server.await.unwrap();
    assert!(request.starts_with("DELETE /v1/kv/lock?cas=17&dc=dc1 HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn delete_cas_reports_success() {
    let (addr, server) = serve_once("200 OK", "true\n").await;
    let client = client_for(addr);

    assert!(client.delete_cas("lock", 3, &WriteOptions::default()).await.unwrap());
    server.await.unwrap();
}

#[tokio::test]
async fn restore_streams_file_contents() {
    let (addr, server) = serve_once("200 OK", "").await;
    let client = HttpStoreClient::new(ClientConfig {
        address: addr,
        datacenter: Some("dc9".to_string()),
        ..Default::default()
    })
    .unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"SNAPSHOT-PAYLOAD-0123456789").unwrap();
    let snapshot = tokio::fs::File::open(file.path()).await.unwrap();

    client.restore(snapshot, &WriteOptions::default()).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /v1/snapshot?dc=dc9 HTTP/1.1"), "{request}");
    assert!(request.contains("SNAPSHOT-PAYLOAD-0123456789"));
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = client_for(addr);
    let err = client.delete("a", &WriteOptions::default()).await.unwrap_err();
    assert!(matches!(err, ConfStoreError::Network(NetworkError::ConnectionFailed { .. })), "{err}");
}

#[tokio::test]
async fn dot_segment_key_is_rejected_without_a_request() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let client = client_for(listener.local_addr().unwrap().to_string());

    let err = client.delete_tree("a/..", &WriteOptions::default()).await.unwrap_err();
    assert!(matches!(err, ConfStoreError::IllegalArgument(_)), "{err}");

    let accepted = tokio::time::timeout(std::time::Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "no connection may reach the agent");
}
