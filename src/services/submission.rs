//! Submission pipeline
//!
//! Orchestrates the three dependent backend operations that turn a
//! completed profile into a quote: register the user, create the property
//! against the returned user id, create the quote against both ids. The
//! calls run strictly in sequence; any failure aborts the remaining chain
//! and the outcome, success or failure, becomes exactly one timeline entry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::models::{
    PropertyCreateRequest, QuoteCreateRequest, QuoteResponse, QuoteSummary,
    RegisterUserRequest, RegisteredUser,
};
use crate::models::api::CreatedProperty;
use crate::state::profile::ProfileStore;
use crate::state::timeline::{AuthorRole, MessageContent, Timeline};
use crate::utils::errors::{ApiResult, QuoteFlowError, Result};

/// User-visible message when the submission chain fails
pub const SUBMISSION_FAILURE_MESSAGE: &str =
    "Sorry, I could not generate a quote right now. Please try again.";

/// The three remote operations, treated as opaque asynchronous functions
#[async_trait]
pub trait QuoteBackend: Send + Sync {
    async fn register_user(&self, request: RegisterUserRequest) -> ApiResult<RegisteredUser>;

    async fn create_property(
        &self,
        user_id: &str,
        request: PropertyCreateRequest,
    ) -> ApiResult<CreatedProperty>;

    async fn create_quote(
        &self,
        user_id: &str,
        request: QuoteCreateRequest,
    ) -> ApiResult<QuoteResponse>;
}

/// Submission pipeline over a quote backend
pub struct SubmissionPipeline {
    backend: Arc<dyn QuoteBackend>,
    coverage_type: String,
}

impl SubmissionPipeline {
    pub fn new(backend: Arc<dyn QuoteBackend>, coverage_type: &str) -> Self {
        Self {
            backend,
            coverage_type: coverage_type.to_string(),
        }
    }

    /// Run the submission chain and append its single outcome entry.
    ///
    /// Returns whether the chain succeeded. Failures are logged here and
    /// surfaced as an apologetic assistant message with no quote payload
    /// and no step reference.
    pub async fn submit(
        &self,
        profile: &ProfileStore,
        timeline: &mut Timeline,
        step_id: &str,
    ) -> bool {
        match self.run(profile).await {
            Ok(summary) => {
                info!(step_id = step_id, "Quote created");
                timeline.push(
                    AuthorRole::Assistant,
                    MessageContent::QuoteResult,
                    Some(step_id),
                    Some(summary),
                );
                true
            }
            Err(e) => {
                error!(error = %e, step_id = step_id, "Failed to create quote via API");
                timeline.push_assistant(SUBMISSION_FAILURE_MESSAGE, None);
                false
            }
        }
    }

    /// The dependent call chain, aborting on the first failure
    async fn run(&self, profile: &ProfileStore) -> Result<QuoteSummary> {
        let register_request = RegisterUserRequest {
            name: required_text(profile, "full_name")?,
            email: required_text(profile, "email")?,
            phone: required_text(profile, "phone")?,
        };

        let property_request = PropertyCreateRequest {
            address: required_text(profile, "address")?,
            state: required_text(profile, "state")?,
            zip_code: required_text(profile, "zip_code")?,
            dwelling_limit: required_number(profile, "dwelling_limit")?,
            year_built: required_number(profile, "year_built")? as i32,
        };

        let user = self.backend.register_user(register_request).await?;
        debug!(user_id = %user.id, "User registered");

        let property = self.backend.create_property(&user.id, property_request).await?;
        debug!(user_id = %user.id, property_id = %property.id, "Property created");

        let quote_request = QuoteCreateRequest {
            user_id: user.id.clone(),
            property_id: property.id.clone(),
            coverage_type: self.coverage_type.clone(),
        };
        let quote = self.backend.create_quote(&user.id, quote_request).await?;

        Ok(QuoteSummary::from(quote))
    }
}

/// Look up a required text field
fn required_text(profile: &ProfileStore, field: &str) -> Result<String> {
    profile
        .text(field)
        .map(str::to_string)
        .ok_or_else(|| QuoteFlowError::MissingField {
            field: field.to_string(),
        })
}

/// Look up a required numeric field, rejecting non-numeric input.
///
/// A collected answer that does not parse to a finite number is rejected
/// here, before any remote call fires, instead of being forwarded as a
/// sentinel invalid value.
fn required_number(profile: &ProfileStore, field: &str) -> Result<f64> {
    if !profile.contains(field) {
        return Err(QuoteFlowError::MissingField {
            field: field.to_string(),
        });
    }

    match profile.number(field) {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(QuoteFlowError::InvalidInput(format!(
            "Field {} is not a valid number",
            field
        ))),
    }
}
