use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::http::mime::content_type_for;
use crate::http::parser::parse_request_head;
use crate::http::reader::{HeaderError, read_header_block};
use crate::http::request::{Request, Target};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::storage::FileStore;

/// One client connection, serving exactly one request.
pub struct Connection<S> {
    stream: S,
    store: FileStore,
    max_header_size: usize,
    state: ConnectionState,
}

enum ConnectionState {
    ReadingHeaders,
    Parsing(Vec<u8>),
    Routing(Request),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, store: FileStore, max_header_size: usize) -> Self {
        Self {
            stream,
            store,
            max_header_size,
            state: ConnectionState::ReadingHeaders,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// Protocol failures are answered (or not) here and never returned; only a
    /// failure to write the response comes back as an error, after which the
    /// stream is dropped and so closed anyway.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::ReadingHeaders => {
                    let head = read_header_block(&mut self.stream, self.max_header_size).await;
                    self.state = match head {
                        Ok(block) => ConnectionState::Parsing(block),
                        Err(HeaderError::TooLarge) => {
                            tracing::warn!(max = self.max_header_size, "too long request header");
                            let response = Response::payload_too_large();
                            ConnectionState::Responding(ResponseWriter::new(&response))
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            let response = Response::bad_request();
                            ConnectionState::Responding(ResponseWriter::new(&response))
                        }
                    };
                }

                ConnectionState::Parsing(block) => {
                    self.state = match parse_request_head(block) {
                        Ok(req) => {
                            tracing::debug!(
                                method = %req.method,
                                target = %req.target,
                                "request line parsed"
                            );
                            ConnectionState::Routing(req)
                        }
                        Err(e) => {
                            // Deliberate: a head without a usable request line
                            // gets no response at all, the peer only sees the
                            // connection close.
                            tracing::warn!("{}, closing without response", e);
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Routing(req) => {
                    let response = Self::handle_request(&self.store, req).await;
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(writer) => {
                    tracing::debug!(
                        status = writer.status().as_u16(),
                        bytes = writer.wire_len(),
                        "sending response"
                    );
                    let written = writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("can't write response");
                    self.state = ConnectionState::Closed;
                    written?;
                }

                ConnectionState::Closed => {
                    // Best effort; the stream is dropped right after either way.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Routes a parsed request to a listing or a file read.
    pub async fn handle_request(store: &FileStore, req: &Request) -> Response {
        match req.route() {
            Target::Root => Response::ok(store.listing_body().await),
            Target::Resource(name) => match store.read(&name).await {
                Ok(contents) => {
                    let mut builder = ResponseBuilder::new(StatusCode::Ok);
                    if let Some(mime) = content_type_for(&name) {
                        builder = builder.header("Content-Type", mime);
                    }
                    builder.body(contents).build()
                }
                Err(e) => {
                    // Deliberate: an unreadable or missing file is answered
                    // with 200 and an empty body, not 404.
                    tracing::warn!(name = %name, "can't read file: {}", e);
                    Response::ok(Vec::new())
                }
            },
        }
    }
}
