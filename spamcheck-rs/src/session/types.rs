use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, Label};

/// The most recent check a session performed.
#[derive(Debug, Clone)]
pub struct LastChecked {
    /// Raw message text exactly as the user submitted it.
    pub message: String,
    /// Verdict produced for that message.
    pub result: Classification,
}

/// Caller-owned conversation state.
///
/// Empty at session start. Each successful check overwrites the single
/// last-checked slot; follow-up questions read it. The context never stores
/// more than one message.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    last: Option<LastChecked>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed check, replacing any previous one.
    pub fn record_check(&mut self, message: impl Into<String>, result: Classification) {
        self.last = Some(LastChecked {
            message: message.into(),
            result,
        });
    }

    pub fn last(&self) -> Option<&LastChecked> {
        self.last.as_ref()
    }

    pub fn has_checked(&self) -> bool {
        self.last.is_some()
    }
}

/// Canonical history record: a checked message and its verdict label.
///
/// The core emits these after each check; whatever the caller does with them
/// (append to a store, render a panel) is its own concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub label: Label,
}
