//! # Shared UI State
//!
//! The process-wide record of UI-observable flags for Codex. This module
//! contains domain state only - it knows nothing about HTTP or any UI
//! technology. The backend client lives in the `api` module.
//!
//! ```text
//! UiState
//! ├── connected: bool              // last reachability probe outcome
//! ├── document_loaded: bool        // a document has been loaded
//! ├── document: Option<Document>   // the loaded document, absent by default
//! ├── bot_speaking: bool           // speaking indicator
//! └── transcripts: Vec<Transcript> // conversation lines, append-only
//! ```
//!
//! There is exactly one record per process, owned behind a [`SharedState`]
//! handle that every consumer clones. Reads and writes go through the
//! handle's accessors, never through ambient globals. No field validates
//! another; last writer wins.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

/// A single line of the conversation, appended as it is transcribed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transcript {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Transcript {
    /// Creates a transcript line stamped with the current time.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The document currently loaded into the assistant, as reported by the
/// backend after an upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// UI-observable flags and values. All defaults are "nothing yet":
/// disconnected, no document, silent, empty transcript list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Whether the most recent reachability probe succeeded. The probe is
    /// not re-run periodically, so this can go stale.
    pub connected: bool,
    /// Maintained by whoever loads documents, not by the backend client.
    pub document_loaded: bool,
    pub document: Option<Document>,
    /// Speaking indicator. Unrelated to network state.
    pub bot_speaking: bool,
    /// Insertion order is display order; grows by append only.
    pub transcripts: Vec<Transcript>,
}

/// Cloneable handle to the one [`UiState`] record.
///
/// The lock is held for the duration of a single accessor call and never
/// across an await, so a read can never observe a half-applied write.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<UiState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, UiState> {
        self.inner.lock().expect("ui state lock poisoned")
    }

    pub fn connected(&self) -> bool {
        self.lock().connected
    }

    pub fn set_connected(&self, connected: bool) {
        self.lock().connected = connected;
    }

    pub fn document_loaded(&self) -> bool {
        self.lock().document_loaded
    }

    pub fn set_document_loaded(&self, loaded: bool) {
        self.lock().document_loaded = loaded;
    }

    pub fn document(&self) -> Option<Document> {
        self.lock().document.clone()
    }

    /// `None` clears the document; loaded/unloaded is tracked separately
    /// via [`SharedState::set_document_loaded`].
    pub fn set_document(&self, document: Option<Document>) {
        self.lock().document = document;
    }

    pub fn bot_speaking(&self) -> bool {
        self.lock().bot_speaking
    }

    pub fn set_bot_speaking(&self, speaking: bool) {
        self.lock().bot_speaking = speaking;
    }

    /// Copies the transcript list out in insertion order.
    pub fn transcripts(&self) -> Vec<Transcript> {
        self.lock().transcripts.clone()
    }

    pub fn push_transcript(&self, entry: Transcript) {
        self.lock().transcripts.push(entry);
    }

    /// Copies the whole record out at once, for consumers that render it.
    pub fn snapshot(&self) -> UiState {
        self.lock().clone()
    }
}
