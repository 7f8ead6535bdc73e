//! Tracing setup for the analysis service.
//!
//! `RUST_LOG` wins when present; otherwise the configured level string seeds
//! the filter. Initialization is fallible so a malformed filter surfaces at
//! startup instead of the process silently logging nothing.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter {
        directives: String,
        source: ParseError,
    },
    InitFailed(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directives, .. } => {
                write!(f, "log filter '{directives}' did not parse")
            }
            TelemetryError::InitFailed(err) => {
                write!(f, "tracing subscriber failed to initialize: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::InitFailed(err) => Some(&**err),
        }
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::InitFailed)
}

fn configured_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        directives: directives.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directive_lists() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter("debug,hyper=warn").is_ok());
    }

    #[test]
    fn malformed_directives_report_the_offending_string() {
        let err = configured_filter("not==valid").expect_err("directive cannot parse");
        assert!(matches!(
            &err,
            TelemetryError::InvalidFilter { directives, .. } if directives == "not==valid"
        ));
        assert!(err.to_string().contains("not==valid"));
    }
}
