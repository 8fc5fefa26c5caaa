//! Conversation timeline
//!
//! This module defines the append-only, ordered log of conversation entries
//! shown to the user. Entries are created by the conversation engine (user
//! turns and prompts) and the submission pipeline (result and error turns)
//! and are never mutated after insertion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::QuoteSummary;

/// Author of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorRole {
    Assistant,
    User,
}

/// Display content of a timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageContent {
    /// Rendered text
    Text(String),
    /// Sentinel for a structured quote result; the payload lives in
    /// [`TimelineEntry::quote`] and rendering decides presentation
    QuoteResult,
}

/// A single conversation entry.
///
/// The id is a per-timeline sequence counter, so entries created within
/// the same tick still get distinct, strictly increasing ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: u64,
    pub author: AuthorRole,
    pub content: MessageContent,
    /// Originating step, absent for synthetic entries such as failures
    pub step_id: Option<String>,
    /// Structured quote payload for `QuoteResult` entries
    pub quote: Option<QuoteSummary>,
    pub created_at: DateTime<Utc>,
}

/// Append-only ordered log of conversation entries
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assistant text entry, returning its id
    pub fn push_assistant(&mut self, content: &str, step_id: Option<&str>) -> u64 {
        self.push(
            AuthorRole::Assistant,
            MessageContent::Text(content.to_string()),
            step_id,
            None,
        )
    }

    /// Append a user text entry, returning its id
    pub fn push_user(&mut self, content: &str) -> u64 {
        self.push(
            AuthorRole::User,
            MessageContent::Text(content.to_string()),
            None,
            None,
        )
    }

    /// Append an entry, returning its id
    pub fn push(
        &mut self,
        author: AuthorRole,
        content: MessageContent,
        step_id: Option<&str>,
        quote: Option<QuoteSummary>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimelineEntry {
            id,
            author,
            content,
            step_id: step_id.map(str::to_string),
            quote,
            created_at: Utc::now(),
        });
        id
    }

    /// All entries in creation order
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The most recently appended entry
    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_creation_order() {
        let mut timeline = Timeline::new();
        timeline.push_assistant("Hi there!", Some("greeting"));
        timeline.push_user("Hello");
        timeline.push_assistant("What is your name?", Some("full_name"));

        let entries = timeline.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].author, AuthorRole::Assistant);
        assert_eq!(entries[1].author, AuthorRole::User);
        assert_eq!(entries[1].content, MessageContent::Text("Hello".to_string()));
        assert_eq!(entries[2].step_id.as_deref(), Some("full_name"));
    }

    #[test]
    fn test_ids_strictly_increase_within_one_tick() {
        let mut timeline = Timeline::new();
        for _ in 0..100 {
            timeline.push_user("x");
        }

        let ids: Vec<u64> = timeline.entries().iter().map(|e| e.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must strictly increase");
        }
    }

    #[test]
    fn test_quote_result_entry_carries_payload() {
        let mut timeline = Timeline::new();
        let summary = QuoteSummary {
            monthly: Some(120.0),
            annual: Some(1400.0),
            dwelling_limit: Some(300000.0),
            coverage: Some("homeowners".to_string()),
        };
        timeline.push(
            AuthorRole::Assistant,
            MessageContent::QuoteResult,
            Some("generate_quote"),
            Some(summary.clone()),
        );

        let entry = timeline.last().unwrap();
        assert_eq!(entry.content, MessageContent::QuoteResult);
        assert_eq!(entry.quote.as_ref(), Some(&summary));
    }

    #[test]
    fn test_user_entries_have_no_step_reference() {
        let mut timeline = Timeline::new();
        timeline.push_user("Jane Doe");
        assert!(timeline.last().unwrap().step_id.is_none());
    }
}
