use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::utils::error::PacketError;

/// Size in bytes of a packed telemetry record on the wire.
pub const PACKET_SIZE: usize = 40;

const PH_OFFSET: usize = 0;
const PH_TIMESTAMP_OFFSET: usize = 8;
const TDS_OFFSET: usize = 16;
const TDS_TIMESTAMP_OFFSET: usize = 24;
const PACKET_TIMESTAMP_OFFSET: usize = 32;

/// One water-quality sample as the probes send it.
///
/// On the wire this is the `#[repr(C, packed)]` layout the ingestion server
/// reads straight into memory: five 8-byte little-endian fields in
/// declaration order, no padding.
///
/// | offset | field              | type |
/// |--------|--------------------|------|
/// | 0      | `ph`               | f64  |
/// | 8      | `ph_timestamp`     | u64  |
/// | 16     | `tds`              | f64  |
/// | 24     | `tds_timestamp`    | u64  |
/// | 32     | `packet_timestamp` | u64  |
///
/// All timestamps are Unix epoch seconds. `packet_timestamp` records when
/// the packet was fully formed, after both readings were taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryPacket {
    pub ph: f64,
    pub ph_timestamp: u64,

    pub tds: f64,
    pub tds_timestamp: u64,

    pub packet_timestamp: u64,
}

/// The packet timestamps as calendar times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledTimes {
    pub ph: DateTime<Utc>,
    pub tds: DateTime<Utc>,
    pub packet: DateTime<Utc>,
}

impl TelemetryPacket {
    /// Packs the record into its 40-byte wire form.
    ///
    /// NaN and infinite readings are refused; the receiver has no way to
    /// tell them apart from a broken probe.
    pub fn to_bytes(&self) -> Result<[u8; PACKET_SIZE], PacketError> {
        check_finite("ph", self.ph)?;
        check_finite("tds", self.tds)?;

        let mut buf = [0u8; PACKET_SIZE];
        buf[PH_OFFSET..PH_TIMESTAMP_OFFSET].copy_from_slice(&self.ph.to_le_bytes());
        buf[PH_TIMESTAMP_OFFSET..TDS_OFFSET].copy_from_slice(&self.ph_timestamp.to_le_bytes());
        buf[TDS_OFFSET..TDS_TIMESTAMP_OFFSET].copy_from_slice(&self.tds.to_le_bytes());
        buf[TDS_TIMESTAMP_OFFSET..PACKET_TIMESTAMP_OFFSET]
            .copy_from_slice(&self.tds_timestamp.to_le_bytes());
        buf[PACKET_TIMESTAMP_OFFSET..PACKET_SIZE]
            .copy_from_slice(&self.packet_timestamp.to_le_bytes());
        Ok(buf)
    }

    /// Unpacks a record the way the ingestion server does. The slice must be
    /// exactly `PACKET_SIZE` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        let raw: &[u8; PACKET_SIZE] = bytes.try_into().map_err(|_| PacketError::Length {
            expected: PACKET_SIZE,
            actual: bytes.len(),
        })?;

        Ok(Self {
            ph: f64::from_le_bytes(word(raw, PH_OFFSET)),
            ph_timestamp: u64::from_le_bytes(word(raw, PH_TIMESTAMP_OFFSET)),
            tds: f64::from_le_bytes(word(raw, TDS_OFFSET)),
            tds_timestamp: u64::from_le_bytes(word(raw, TDS_TIMESTAMP_OFFSET)),
            packet_timestamp: u64::from_le_bytes(word(raw, PACKET_TIMESTAMP_OFFSET)),
        })
    }

    /// Converts the three timestamps to UTC, failing on the first one (in
    /// ph, tds, packet order) that is not a valid time.
    pub fn sampled_times(&self) -> Result<SampledTimes, PacketError> {
        Ok(SampledTimes {
            ph: to_datetime("ph_timestamp", self.ph_timestamp)?,
            tds: to_datetime("tds_timestamp", self.tds_timestamp)?,
            packet: to_datetime("packet_timestamp", self.packet_timestamp)?,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), PacketError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PacketError::NonFinite { field, value })
    }
}

fn word(raw: &[u8; PACKET_SIZE], offset: usize) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&raw[offset..offset + 8]);
    out
}

fn to_datetime(field: &'static str, value: u64) -> Result<DateTime<Utc>, PacketError> {
    i64::try_from(value)
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .ok_or(PacketError::Timestamp { field, value })
}
