use serde::Deserialize;
use std::time::Duration;

/// Top-level configuration settings for the simulator.
///
/// Includes the destination endpoint, the sensor model and logging.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub target: TargetSettings,
    pub sensor: SensorSettings,
    pub log: LogSettings,
}

/// Where packets are sent and how long a single request may take.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TargetSettings {
    pub url: String,
    pub timeout_secs: f64,
}

/// Send cadence and the uniform distributions readings are drawn from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SensorSettings {
    pub interval_seconds: f64,
    pub ph_center: f64,
    pub ph_spread: f64,
    pub tds_center: f64,
    pub tds_spread: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogSettings {
    pub level: String,
}

impl TargetSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }
}

impl SensorSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_seconds)
    }
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values are filled from defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub target: Option<PartialTargetSettings>,
    pub sensor: Option<PartialSensorSettings>,
    pub log: Option<PartialLogSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialTargetSettings {
    pub url: Option<String>,
    pub timeout_secs: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSensorSettings {
    pub interval_seconds: Option<f64>,
    pub ph_center: Option<f64>,
    pub ph_spread: Option<f64>,
    pub tds_center: Option<f64>,
    pub tds_spread: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: TargetSettings::default(),
            sensor: SensorSettings::default(),
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            url: "http://0.0.0.0:3000/water".to_string(),
            timeout_secs: 5.0,
        }
    }
}

/// The readings the field probes report: pH 7.0 ± 0.6, TDS 500 ± 60 ppm,
/// one packet every 1.4 seconds.
impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            interval_seconds: 1.4,
            ph_center: 7.0,
            ph_spread: 0.6,
            tds_center: 500.0,
            tds_spread: 60.0,
        }
    }
}

impl PartialSettings {
    /// Fills every missing value from `Settings::default()`.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();
        let target = self.target;
        let sensor = self.sensor;

        Settings {
            target: TargetSettings {
                url: target
                    .as_ref()
                    .and_then(|t| t.url.clone())
                    .unwrap_or(default.target.url),
                timeout_secs: target
                    .as_ref()
                    .and_then(|t| t.timeout_secs)
                    .unwrap_or(default.target.timeout_secs),
            },
            sensor: SensorSettings {
                interval_seconds: sensor
                    .as_ref()
                    .and_then(|s| s.interval_seconds)
                    .unwrap_or(default.sensor.interval_seconds),
                ph_center: sensor
                    .as_ref()
                    .and_then(|s| s.ph_center)
                    .unwrap_or(default.sensor.ph_center),
                ph_spread: sensor
                    .as_ref()
                    .and_then(|s| s.ph_spread)
                    .unwrap_or(default.sensor.ph_spread),
                tds_center: sensor
                    .as_ref()
                    .and_then(|s| s.tds_center)
                    .unwrap_or(default.sensor.tds_center),
                tds_spread: sensor
                    .as_ref()
                    .and_then(|s| s.tds_spread)
                    .unwrap_or(default.sensor.tds_spread),
            },
            log: LogSettings {
                level: self
                    .log
                    .and_then(|l| l.level)
                    .unwrap_or(default.log.level),
            },
        }
    }
}
