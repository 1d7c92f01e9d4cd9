use reqwest::StatusCode;
use tracing::{info, warn};

use crate::transport::Response;

/// Logged for every packet the server accepts.
pub const SUCCESS_MESSAGE: &str = "Packet sent successfully!";

/// How the ingestion server handled one packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Delivered,
    /// Any status other than 200. The body is kept as the diagnostic.
    Rejected { status: StatusCode, body: String },
}

impl Report {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Report::Delivered)
    }

    /// The server's explanation for a rejected packet.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Report::Delivered => None,
            Report::Rejected { body, .. } => Some(body),
        }
    }
}

/// Logs the outcome of a send. Only an exact 200 counts as delivered.
pub fn report(response: &Response) -> Report {
    if response.status == StatusCode::OK {
        info!("{}", SUCCESS_MESSAGE);
        Report::Delivered
    } else {
        warn!(status = %response.status, "Response: {}", response.body);
        Report::Rejected {
            status: response.status,
            body: response.body.clone(),
        }
    }
}
