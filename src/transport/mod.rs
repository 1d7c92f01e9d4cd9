//! The `transport` module is responsible for the network side of the
//! simulator: delivering encoded packets to the ingestion server over HTTP
//! and handing back its status and body.

pub mod http;

pub use http::{HttpSender, Response};
