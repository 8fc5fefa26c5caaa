//! Shared test helpers
//!
//! Mock backend, recording navigator, and engine builders used across the
//! integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quoteflow::models::api::CreatedProperty;
use quoteflow::models::{
    PropertyCreateRequest, QuoteCreateRequest, QuoteResponse, RegisterUserRequest, RegisteredUser,
};
use quoteflow::services::submission::{QuoteBackend, SubmissionPipeline};
use quoteflow::services::Navigator;
use quoteflow::state::{default_script, ConversationEngine, Pacing, UserAnswer};
use quoteflow::utils::errors::{ApiError, ApiResult};

/// Pipeline stage at which [`MockBackend`] fails, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Register,
    Property,
    Quote,
}

/// In-memory quote backend with canned responses and call recording
pub struct MockBackend {
    pub fail_at: Option<FailAt>,
    pub quote: QuoteResponse,
    pub requests: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn happy() -> Self {
        Self {
            fail_at: None,
            quote: full_quote(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(stage: FailAt) -> Self {
        Self {
            fail_at: Some(stage),
            ..Self::happy()
        }
    }

    pub fn with_quote(quote: QuoteResponse) -> Self {
        Self {
            quote,
            ..Self::happy()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, call: &str, stage: FailAt) -> ApiResult<()> {
        self.requests.lock().unwrap().push(call.to_string());
        if self.fail_at == Some(stage) {
            return Err(ApiError::ServiceUnavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteBackend for MockBackend {
    async fn register_user(&self, request: RegisterUserRequest) -> ApiResult<RegisteredUser> {
        self.record(&format!("register:{}", request.email), FailAt::Register)?;
        Ok(RegisteredUser {
            id: "u1".to_string(),
            name: Some(request.name),
            email: Some(request.email),
        })
    }

    async fn create_property(
        &self,
        user_id: &str,
        request: PropertyCreateRequest,
    ) -> ApiResult<CreatedProperty> {
        self.record(
            &format!("property:{}:{}", user_id, request.address),
            FailAt::Property,
        )?;
        Ok(CreatedProperty {
            id: "p1".to_string(),
            address: Some(request.address),
        })
    }

    async fn create_quote(
        &self,
        user_id: &str,
        request: QuoteCreateRequest,
    ) -> ApiResult<QuoteResponse> {
        self.record(
            &format!(
                "quote:{}:{}:{}",
                user_id, request.property_id, request.coverage_type
            ),
            FailAt::Quote,
        )?;
        Ok(self.quote.clone())
    }
}

/// Navigator that records every requested route
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// The canonical quote response fixture
pub fn full_quote() -> QuoteResponse {
    QuoteResponse {
        premium_monthly: Some(120.0),
        premium_annual: Some(1400.0),
        dwelling_limit: Some(300000.0),
        coverage: Some("homeowners".to_string()),
    }
}

/// Build an engine over the default script with zero pacing
pub fn test_engine(
    backend: Arc<MockBackend>,
    navigator: Arc<RecordingNavigator>,
) -> ConversationEngine {
    let pipeline = Arc::new(SubmissionPipeline::new(backend, "homeowners"));
    ConversationEngine::new(default_script(), pipeline, navigator, Pacing::none())
}

/// The answers to the default script's eight questions, in order
pub fn default_answers() -> Vec<&'static str> {
    vec![
        "Jane Doe",
        "jane@example.com",
        "+1 555-123-4567",
        "12 Main St",
        "CA",
        "94107",
        "300000",
        "1987",
    ]
}

/// Start the engine and answer every question in the default script
pub async fn run_full_conversation(engine: &mut ConversationEngine) {
    engine.start().await;
    for answer in default_answers() {
        assert!(engine.is_awaiting_user(), "engine should await answer");
        engine.handle_user_response(UserAnswer::plain(answer)).await;
    }
}
