//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::state::{Document, SharedState, Speaker, Transcript};

/// A fixed document for assertions that need stable field values.
pub fn sample_document() -> Document {
    Document {
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
        name: "report.pdf".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

/// A state handle mid-conversation: connected, document loaded, two
/// transcript lines.
pub fn populated_state() -> SharedState {
    let state = SharedState::new();
    state.set_connected(true);
    state.set_document(Some(sample_document()));
    state.set_document_loaded(true);
    state.push_transcript(Transcript::new(Speaker::User, "what is this document?"));
    state.push_transcript(Transcript::new(Speaker::Bot, "a quarterly report"));
    state
}
