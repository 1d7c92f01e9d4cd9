//! The `error` module defines the error types used within `mock-sensors`.
//!
//! Only a rejected response from the receiving server is recoverable, and that
//! is not an error at all: it is reported and the loop moves on. Everything
//! represented here ends the send loop.

use thiserror::Error;

/// Failures while encoding, decoding or inspecting a telemetry packet.
#[derive(Debug, Error)]
pub enum PacketError {
    /// A reading cannot be represented on the wire.
    #[error("{field} is not a finite reading: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("telemetry packet must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    /// A timestamp does not map to a calendar time.
    #[error("invalid {field} in packet: {value}")]
    Timestamp { field: &'static str, value: u64 },
}

/// Failures talking to the receiving server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid target url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("POST {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fatal outcome of a simulator iteration.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Packet(#[from] PacketError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
