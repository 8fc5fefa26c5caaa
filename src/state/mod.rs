//! Conversation state management
//!
//! This module contains the conversation state machine and the data it
//! walks over: the step script, the collected profile, and the timeline.

pub mod engine;
pub mod profile;
pub mod script;
pub mod timeline;

// Re-export commonly used types
pub use engine::{ConversationEngine, ConversationView, Cursor, Pacing, UserAnswer};
pub use profile::{ProfileStore, ProfileValue};
pub use script::{default_script, Prompt, StepDescriptor, StepKind, StepScript};
pub use timeline::{AuthorRole, MessageContent, Timeline, TimelineEntry};
