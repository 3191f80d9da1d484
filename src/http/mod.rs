//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! request bodies, every response ends with `Connection: close`.
//!
//! # Architecture
//!
//! - **`reader`**: Reads the request head byte by byte into a bounded buffer
//! - **`parser`**: Extracts the request line and header fields from the head
//! - **`request`**: Parsed request and its routing target
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes a response, writes it and flushes
//! - **`mime`**: Content-Type lookup by file extension
//! - **`connection`**: The per-connection state machine tying these together
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌────────────────┐
//!        │ ReadingHeaders │ ── TooLarge → 413, ReadFailure → 400 ──┐
//!        └───────┬────────┘                                        │
//!                │ head received                                   │
//!                ▼                                                 │
//!        ┌────────────────┐                                        │
//!        │    Parsing     │ ── malformed request line ──────┐      │
//!        └───────┬────────┘                                 │      │
//!                │ target extracted                         │      │
//!                ▼                                          │      │
//!        ┌────────────────┐                                 │      │
//!        │    Routing     │ ← "/" lists, anything else reads│      │
//!        └───────┬────────┘                                 │      │
//!                ▼                                          │      │
//!        ┌────────────────┐                                 │      │
//!        │   Responding   │ ◄───────────────────────────────┼──────┘
//!        └───────┬────────┘                                 │
//!                ▼                                          │
//!        ┌────────────────┐                                 │
//!        │     Closed     │ ◄───────────────────────────────┘
//!        └────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use filestash::http::connection::Connection;
//! use filestash::storage::FileStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:9998").await?;
//!     let store = FileStore::new("serverdata");
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let store = store.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, store, 4096);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod reader;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
