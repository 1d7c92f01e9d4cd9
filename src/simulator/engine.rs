use std::future::Future;
use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use reqwest::Url;
use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::simulator::report::{Report, report};
use crate::telemetry::{ReadingGenerator, TelemetryPacket};
use crate::transport::HttpSender;
use crate::utils::error::{SimulatorError, TransportError};

/// Counts of what the server did with the packets sent during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub delivered: u64,
    pub rejected: u64,
}

impl RunStats {
    pub fn sent(&self) -> u64 {
        self.delivered + self.rejected
    }

    fn record(&mut self, report: &Report) {
        if report.is_delivered() {
            self.delivered += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// The send loop: generate a reading, pack it, POST it, report, sleep.
///
/// Strictly sequential, so at most one request is ever in flight. Rejected
/// packets are logged and forgotten; transport and encoding failures end
/// the loop.
#[derive(Debug)]
pub struct Simulator<R = StdRng> {
    generator: ReadingGenerator<R>,
    sender: HttpSender,
    interval: Duration,
}

impl Simulator<StdRng> {
    /// Builds a simulator from loaded settings, with an entropy-seeded generator.
    pub fn from_settings(settings: &Settings) -> Result<Self, SimulatorError> {
        let url = Url::parse(&settings.target.url).map_err(|e| TransportError::InvalidUrl {
            url: settings.target.url.clone(),
            reason: e.to_string(),
        })?;
        let sender = HttpSender::new(url, settings.target.timeout())?;
        let generator = ReadingGenerator::new(settings.sensor.clone());

        Ok(Self::new(generator, sender, settings.sensor.interval()))
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(generator: ReadingGenerator<R>, sender: HttpSender, interval: Duration) -> Self {
        Self {
            generator,
            sender,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One iteration without the trailing sleep.
    pub async fn tick(&mut self) -> Result<Report, SimulatorError> {
        let packet = self.generator.generate_reading();
        let bytes = packet.to_bytes()?;
        log_packet(&packet);

        let response = self.sender.send(&bytes).await?;
        Ok(report(&response))
    }

    /// Runs until `shutdown` resolves or an iteration fails.
    ///
    /// Shutdown is honoured both mid-request and mid-sleep; a request that
    /// is interrupted is simply dropped.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<RunStats, SimulatorError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut stats = RunStats::default();

        info!(
            url = %self.sender.url(),
            interval_ms = self.interval.as_millis() as u64,
            "Sending simulated water telemetry"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                result = self.tick() => stats.record(&result?),
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(
            delivered = stats.delivered,
            rejected = stats.rejected,
            "Shutdown signal received. Exiting gracefully."
        );
        Ok(stats)
    }
}

fn log_packet(packet: &TelemetryPacket) {
    match packet.sampled_times() {
        Ok(times) => debug!(
            ph = packet.ph,
            tds = packet.tds,
            assembled_at = %times.packet.to_rfc3339(),
            "Packet assembled"
        ),
        Err(e) => warn!("Sending packet with unreadable timestamps: {}", e),
    }

    if let Ok(json) = serde_json::to_string(packet) {
        trace!(packet = %json);
    }
}
