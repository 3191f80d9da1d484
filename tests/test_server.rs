//! Tests against the real TCP accept loop

use filestash::server::listener::serve;
use filestash::storage::FileStore;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

async fn start(store: FileStore) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, store, 4096));
    addr
}

async fn request(addr: SocketAddr, raw: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut out = Vec::new();
    timeout(Duration::from_secs(5), stream.read_to_end(&mut out))
        .await
        .expect("server did not close the connection")
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_server_lists_and_serves() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi").unwrap();
    fs::write(dir.path().join("index.html"), "<p>x</p>").unwrap();
    let addr = start(FileStore::new(dir.path())).await;

    let listing = request(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    assert!(listing.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(listing.ends_with("\r\n\r\na.txt index.html"));

    let page = request(addr, b"GET /index.html HTTP/1.1\r\n\r\n").await;
    assert_eq!(
        page,
        "HTTP/1.1 200 OK\r\nContent-Length: 8\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n<p>x</p>"
    );
}

#[tokio::test]
async fn test_stalled_client_does_not_block_others() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi").unwrap();
    let addr = start(FileStore::new(dir.path())).await;

    // Sends half a head and then goes quiet.
    let mut stalled = TcpStream::connect(addr).await.unwrap();
    stalled.write_all(b"GET /a.txt HTTP/1.1\r\n").await.unwrap();

    let response = request(addr, b"GET /a.txt HTTP/1.1\r\n\r\n").await;
    assert!(response.ends_with("\r\n\r\nhi"));

    drop(stalled);
}

#[tokio::test]
async fn test_server_concurrent_clients() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi").unwrap();
    let addr = start(FileStore::new(dir.path())).await;

    let clients: Vec<_> = (0..8)
        .map(|_| tokio::spawn(request(addr, b"GET /a.txt HTTP/1.1\r\n\r\n")))
        .collect();

    for client in clients {
        let response = client.await.unwrap();
        assert!(response.contains("Content-Length: 2\r\n"));
    }
}
