mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};
use std::time::Duration;

pub use settings::{LogSettings, SensorSettings, Settings, TargetSettings};

#[cfg(test)]
mod tests;

/// Default location of the optional config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Prefix for environment overrides, e.g. `MOCK_SENSORS_TARGET__URL`.
pub const ENV_PREFIX: &str = "MOCK_SENSORS";

/// Loads the configuration from the default file and environment variables.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Loads `path` (any format the `config` crate recognises, extension optional)
/// and the `MOCK_SENSORS_` environment, merges them over the defaults and
/// validates the result.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    let settings = partial.merge_with_defaults();
    validate(&settings)?;
    Ok(settings)
}

/// Rejects settings the simulator cannot run with.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(&settings.target.url).map_err(|e| {
        ConfigError::Message(format!("target.url {:?} is invalid: {}", settings.target.url, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Message(format!(
            "target.url must be http or https, got {}",
            url.scheme()
        )));
    }

    let target = &settings.target;
    if Duration::try_from_secs_f64(target.timeout_secs).is_err() || target.timeout_secs <= 0.0 {
        return Err(ConfigError::Message(format!(
            "target.timeout_secs must be a positive duration, got {}",
            target.timeout_secs
        )));
    }

    let sensor = &settings.sensor;
    if Duration::try_from_secs_f64(sensor.interval_seconds).is_err() {
        return Err(ConfigError::Message(format!(
            "sensor.interval_seconds must be a zero or positive duration, got {}",
            sensor.interval_seconds
        )));
    }

    for (key, center) in [
        ("sensor.ph_center", sensor.ph_center),
        ("sensor.tds_center", sensor.tds_center),
    ] {
        if !center.is_finite() {
            return Err(ConfigError::Message(format!(
                "{key} must be finite, got {center}"
            )));
        }
    }

    for (key, spread) in [
        ("sensor.ph_spread", sensor.ph_spread),
        ("sensor.tds_spread", sensor.tds_spread),
    ] {
        if !spread.is_finite() || spread < 0.0 {
            return Err(ConfigError::Message(format!(
                "{key} must be zero or positive, got {spread}"
            )));
        }
    }

    Ok(())
}
