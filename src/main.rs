use std::process::ExitCode;

use mock_sensors::config::load_config;
use mock_sensors::simulator::{Simulator, shutdown_signal};
use mock_sensors::utils::logging;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log.level);

    let mut simulator = match Simulator::from_settings(&config) {
        Ok(simulator) => simulator,
        Err(e) => {
            error!("Failed to start simulator: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let shutdown = match shutdown_signal() {
        Ok(shutdown) => shutdown,
        Err(e) => {
            error!("Failed to install signal handlers: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match simulator.run(shutdown).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Simulator stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
