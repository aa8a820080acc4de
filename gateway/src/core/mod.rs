//! Core - path engine, payload translation, and the HTTP chat client

mod client;
mod path;
mod read;
mod translate;
mod write;

pub use client::HttpChatClient;
pub use translate::{build_request_body, extract_result};
