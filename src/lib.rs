//! Filestash - minimal file-serving daemon
//!
//! Lists and serves the files of one storage directory over a hand-written
//! HTTP/1.1 subset on raw TCP.

pub mod config;
pub mod http;
pub mod server;
pub mod storage;
