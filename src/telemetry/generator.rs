use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::config::SensorSettings;
use crate::telemetry::packet::TelemetryPacket;

/// Produces fake probe readings.
///
/// Each reading is `center + uniform(-spread, spread)`: a flat spread, not a
/// noise model, and successive readings are independent of each other.
#[derive(Debug)]
pub struct ReadingGenerator<R = StdRng> {
    sensor: SensorSettings,
    rng: R,
}

impl ReadingGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new(sensor: SensorSettings) -> Self {
        Self::with_rng(sensor, StdRng::from_entropy())
    }
}

impl<R: Rng> ReadingGenerator<R> {
    pub fn with_rng(sensor: SensorSettings, rng: R) -> Self {
        Self { sensor, rng }
    }

    /// Draws a fresh packet. Every timestamp is taken right after its value,
    /// so they never decrease from ph to tds to packet.
    pub fn generate_reading(&mut self) -> TelemetryPacket {
        let ph = self.sensor.ph_center + draw(&mut self.rng, self.sensor.ph_spread);
        let ph_timestamp = unix_now();

        let tds = self.sensor.tds_center + draw(&mut self.rng, self.sensor.tds_spread);
        let tds_timestamp = unix_now();

        TelemetryPacket {
            ph,
            ph_timestamp,
            tds,
            tds_timestamp,
            packet_timestamp: unix_now(),
        }
    }
}

fn draw<R: Rng>(rng: &mut R, spread: f64) -> f64 {
    let spread = spread.abs();
    rng.gen_range(-spread..=spread)
}

/// Current Unix time in whole seconds. A clock set before 1970 stamps 0.
pub fn unix_now() -> u64 {
    let now = Utc::now().timestamp();
    u64::try_from(now).unwrap_or_else(|_| {
        warn!(now, "System clock is before the Unix epoch; stamping 0");
        0
    })
}
