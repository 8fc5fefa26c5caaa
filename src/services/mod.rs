//! Services module
//!
//! This module contains business logic services

pub mod api;
pub mod navigation;
pub mod submission;

// Re-export commonly used services
pub use api::QuoteApiClient;
pub use navigation::{FinalAction, LoggingNavigator, Navigator, DASHBOARD_ROUTE};
pub use submission::{QuoteBackend, SubmissionPipeline, SUBMISSION_FAILURE_MESSAGE};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub pipeline: Arc<SubmissionPipeline>,
    pub navigator: Arc<dyn Navigator>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = QuoteApiClient::new(&settings.api)?;
        let pipeline = Arc::new(SubmissionPipeline::new(
            Arc::new(client),
            &settings.api.coverage_type,
        ));
        let navigator: Arc<dyn Navigator> = Arc::new(LoggingNavigator);

        Ok(Self { pipeline, navigator })
    }
}
