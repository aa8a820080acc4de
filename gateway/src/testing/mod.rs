//! Test doubles for the gateway
//!
//! Available to downstream crates via the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! llm-gateway = { version = "0.1", features = ["testing"] }
//! ```

mod mock_transport;

pub use mock_transport::{MockTransport, SentRequest};
