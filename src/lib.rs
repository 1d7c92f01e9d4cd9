//! # mock-sensors
//!
//! `mock-sensors` fabricates water-quality telemetry (pH and total dissolved
//! solids) and posts it, once every 1.4 seconds by default, to the ingestion
//! server's `/water` endpoint as the same 40-byte packed record the field
//! probes send. It exists to exercise that server during development.
//!
//! ## Core Modules
//!
//! - `telemetry`: the packet, its wire layout and the reading generator.
//! - `transport`: posts encoded packets over HTTP.
//! - `simulator`: the cancellable send loop and outcome reporting.
//! - `config`: layered settings (defaults, `config/default.toml`, environment).
//! - `utils`: error types and logging setup.

pub mod config;
pub mod simulator;
pub mod telemetry;
pub mod transport;
pub mod utils;
