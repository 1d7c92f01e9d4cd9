//! The `telemetry` module defines the water-quality packet the simulator
//! emits: its in-memory form, the fixed 40-byte wire layout the ingestion
//! server expects, and the generator that fabricates readings.

pub mod generator;
pub mod packet;

pub use generator::ReadingGenerator;
pub use packet::{PACKET_SIZE, SampledTimes, TelemetryPacket};
