//! Conversation engine
//!
//! The state machine that walks the step script: it renders each step's
//! prompt into the timeline, waits for user input, records answers into
//! the profile, and hands the terminal step to the submission pipeline.
//! Advancement is driven by cursor changes with at most one advancement in
//! flight at a time; user responses that arrive while the engine is busy
//! are dropped, not queued.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::config::settings::ConversationConfig;
use crate::services::navigation::{FinalAction, Navigator};
use crate::services::submission::SubmissionPipeline;
use crate::state::profile::{ProfileStore, ProfileValue};
use crate::state::script::{StepDescriptor, StepKind, StepScript};
use crate::state::timeline::{Timeline, TimelineEntry};
use crate::utils::helpers::{friendly_name, FALLBACK_FRIENDLY_NAME};
use crate::utils::logging;

/// Position within the step script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Index of the current step
    At(usize),
    /// The script has been walked to the end
    Exhausted,
}

/// A user response at the input boundary.
///
/// Selections carry both the text shown in the timeline and the underlying
/// value bound to the profile; plain answers bind their literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAnswer {
    PlainText(String),
    Selection { text: String, value: ProfileValue },
}

impl UserAnswer {
    pub fn plain(text: &str) -> Self {
        UserAnswer::PlainText(text.to_string())
    }

    pub fn selection(text: &str, value: ProfileValue) -> Self {
        UserAnswer::Selection {
            text: text.to_string(),
            value,
        }
    }

    /// Text recorded in the timeline for this answer
    fn display_text(&self) -> &str {
        match self {
            UserAnswer::PlainText(text) => text,
            UserAnswer::Selection { text, .. } => text,
        }
    }

    /// Value bound to the profile when the step declares a field
    fn bound_value(&self) -> ProfileValue {
        match self {
            UserAnswer::PlainText(text) => ProfileValue::Text(text.clone()),
            UserAnswer::Selection { value, .. } => value.clone(),
        }
    }
}

/// Delay strategy pacing the conversational UI.
///
/// The delays only sequence the presentation; correctness never depends on
/// them and tests run with [`Pacing::none`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pacing {
    /// Pause before revealing an assistant message
    pub typing: Duration,
    /// Pause between recording a user response and advancing
    pub advance: Duration,
    /// Pause after the submission result before re-enabling input
    pub settle: Duration,
}

impl Pacing {
    /// Zero delays, for deterministic tests
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConversationConfig) -> Self {
        Self {
            typing: Duration::from_millis(config.typing_delay_ms),
            advance: Duration::from_millis(config.advance_delay_ms),
            settle: Duration::from_millis(config.settle_delay_ms),
        }
    }

    async fn pause(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Read-mostly projection of the conversation for the rendering collaborator
#[derive(Debug)]
pub struct ConversationView<'a> {
    pub messages: &'a [TimelineEntry],
    pub cursor: Cursor,
    pub profile: &'a ProfileStore,
    pub awaiting_user: bool,
    pub show_typing: bool,
}

/// The conversation state machine
pub struct ConversationEngine {
    session_id: Uuid,
    script: StepScript,
    profile: ProfileStore,
    timeline: Timeline,
    cursor: Cursor,
    awaiting_user: bool,
    processing: bool,
    started: bool,
    pipeline: Arc<SubmissionPipeline>,
    navigator: Arc<dyn Navigator>,
    pacing: Pacing,
}

impl ConversationEngine {
    pub fn new(
        script: StepScript,
        pipeline: Arc<SubmissionPipeline>,
        navigator: Arc<dyn Navigator>,
        pacing: Pacing,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            script,
            profile: ProfileStore::new(),
            timeline: Timeline::new(),
            cursor: Cursor::At(0),
            awaiting_user: false,
            processing: false,
            started: false,
            pipeline,
            navigator,
            pacing,
        }
    }

    /// Start the conversation at the first step
    pub async fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.cursor = Cursor::At(0);
        self.advance().await;
    }

    /// Handle a user response to the current step.
    ///
    /// Responses delivered while the engine is busy are silently dropped;
    /// otherwise the answer is recorded, bound to the step's field if one
    /// is declared, and the cursor advances.
    pub async fn handle_user_response(&mut self, answer: UserAnswer) {
        if self.processing {
            let cursor = self.cursor_index().unwrap_or(self.script.len());
            logging::log_response_dropped(&self.session_id.to_string(), cursor);
            return;
        }

        let step = self.current_step().cloned();

        self.timeline.push_user(answer.display_text());

        if let Some(field) = step.as_ref().and_then(|s| s.field.as_deref()) {
            self.profile.set(field, answer.bound_value());
        }

        Pacing::pause(self.pacing.advance).await;

        if let Cursor::At(index) = self.cursor {
            self.cursor = Cursor::At(index + 1);
        }
        self.advance().await;
    }

    /// Handle the final routing decision once the conversation is complete.
    ///
    /// Recognized actions are forwarded to the navigation collaborator;
    /// anything else is a logged no-op.
    pub fn handle_final_action(&self, action: &str) {
        match FinalAction::parse(action) {
            Some(final_action) => {
                logging::log_final_action(&self.session_id.to_string(), action, true);
                self.navigator.navigate_to(final_action.route());
            }
            None => {
                logging::log_final_action(&self.session_id.to_string(), action, false);
            }
        }
    }

    /// Run one advancement cycle for the step under the cursor
    async fn advance(&mut self) {
        if self.processing {
            return;
        }
        self.processing = true;
        self.awaiting_user = false;

        let step = match self.current_step().cloned() {
            Some(step) => step,
            None => {
                // Script exhausted: open the gate without emitting a message
                self.cursor = Cursor::Exhausted;
                self.open_gate();
                return;
            }
        };

        let prompt = step.prompt.resolve(&self.friendly_name());
        Pacing::pause(self.pacing.typing).await;
        self.timeline.push_assistant(&prompt, Some(&step.id));
        logging::log_step_advanced(
            &self.session_id.to_string(),
            &step.id,
            self.cursor_index().unwrap_or_default(),
        );

        match step.kind {
            StepKind::Question => {
                self.awaiting_user = true;
                self.processing = false;
            }
            StepKind::Terminal => {
                let success = self
                    .pipeline
                    .submit(&self.profile, &mut self.timeline, &step.id)
                    .await;
                logging::log_submission_result(&self.session_id.to_string(), success);

                Pacing::pause(self.pacing.settle).await;
                self.cursor = Cursor::Exhausted;
                self.open_gate();
            }
        }
    }

    /// Enter the terminal gate-open state
    fn open_gate(&mut self) {
        self.awaiting_user = true;
        self.processing = false;
    }

    /// Friendly first name derived from the collected profile
    fn friendly_name(&self) -> String {
        let raw = self
            .profile
            .text("full_name")
            .or_else(|| self.profile.text("name"));
        match raw {
            Some(name) => friendly_name(name),
            None => FALLBACK_FRIENDLY_NAME.to_string(),
        }
    }

    fn current_step(&self) -> Option<&StepDescriptor> {
        match self.cursor {
            Cursor::At(index) => self.script.get(index),
            Cursor::Exhausted => None,
        }
    }

    fn cursor_index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::At(index) => Some(index),
            Cursor::Exhausted => None,
        }
    }

    /// Projection consumed by the rendering collaborator
    pub fn view(&self) -> ConversationView<'_> {
        ConversationView {
            messages: self.timeline.entries(),
            cursor: self.cursor,
            profile: &self.profile,
            awaiting_user: self.awaiting_user,
            show_typing: self.processing,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_awaiting_user(&self) -> bool {
        self.awaiting_user
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Whether the conversation has reached its terminal state
    pub fn is_gate_open(&self) -> bool {
        self.cursor == Cursor::Exhausted && self.awaiting_user
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }
}
