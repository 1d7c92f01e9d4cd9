//! The `simulator` module ties the pieces together into the send loop that
//! feeds the ingestion server, and reports what the server made of each
//! packet.

pub mod engine;
pub mod report;
pub mod signal;

pub use engine::{RunStats, Simulator};
pub use report::{Report, SUCCESS_MESSAGE, report};
pub use signal::shutdown_signal;
