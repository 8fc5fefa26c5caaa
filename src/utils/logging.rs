//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the QuoteFlow application.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{QuoteFlowError, Result};

/// Initialize logging based on configuration.
///
/// Returns the file writer's worker guard; the caller must hold it for the
/// lifetime of the program or the file sink stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("quoteflow")
        .filename_suffix("log")
        .max_log_files(config.max_files as usize)
        .build(&config.file_path)
        .map_err(|e| QuoteFlowError::Config(format!("Failed to create log appender: {}", e)))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a conversation step advancement
pub fn log_step_advanced(session_id: &str, step_id: &str, cursor: usize) {
    debug!(
        session_id = session_id,
        step_id = step_id,
        cursor = cursor,
        "Conversation advanced to step"
    );
}

/// Log a dropped user response (received while the engine was busy)
pub fn log_response_dropped(session_id: &str, cursor: usize) {
    debug!(
        session_id = session_id,
        cursor = cursor,
        "User response dropped: engine is processing"
    );
}

/// Log the submission pipeline outcome for a session
pub fn log_submission_result(session_id: &str, success: bool) {
    if success {
        info!(session_id = session_id, "Quote submission completed");
    } else {
        error!(session_id = session_id, "Quote submission failed");
    }
}

/// Log final action routing
pub fn log_final_action(session_id: &str, action: &str, recognized: bool) {
    if recognized {
        info!(
            session_id = session_id,
            action = action,
            "Final action routed to navigation"
        );
    } else {
        warn!(
            session_id = session_id,
            action = action,
            "Unrecognized final action ignored"
        );
    }
}
