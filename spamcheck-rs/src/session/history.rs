//! Legacy history migration
//!
//! Older persisted history files mixed shapes in one list: `[text, label]`
//! pairs, bare strings, the occasional stray scalar. The storage boundary
//! repairs all of them into canonical entries once, so everything above it
//! only ever sees [`HistoryEntry`].

use serde_json::Value;
use tracing::debug;

use crate::artifacts::ModelBundle;
use crate::classifier::Label;

use super::types::HistoryEntry;

/// Normalize a list of legacy history values into canonical entries.
///
/// `[text, label]` pairs keep their stored label when it parses; everything
/// else falls back to re-classifying the text with the current model. Order
/// is preserved and no value is dropped.
pub fn migrate_history(values: &[Value], bundle: &ModelBundle) -> Vec<HistoryEntry> {
    values
        .iter()
        .map(|value| migrate_one(value, bundle))
        .collect()
}

fn migrate_one(value: &Value, bundle: &ModelBundle) -> HistoryEntry {
    if let Value::Array(items) = value {
        // trailing elements beyond (text, label) are dropped
        if items.len() >= 2 {
            if let (Some(message), Some(raw_label)) = (items[0].as_str(), items[1].as_str()) {
                if let Some(label) = Label::parse(raw_label) {
                    return HistoryEntry {
                        message: message.to_string(),
                        label,
                    };
                }
                debug!(
                    "🧹 History entry has unknown label '{}', re-classifying",
                    raw_label
                );
                return reclassify(message, bundle);
            }
        }
    }

    if let Some(message) = value.as_str() {
        debug!("🧹 Migrating bare-string history entry");
        return reclassify(message, bundle);
    }

    let message = value.to_string();
    debug!("🧹 Migrating non-string history entry: {}", message);
    reclassify(&message, bundle)
}

fn reclassify(message: &str, bundle: &ModelBundle) -> HistoryEntry {
    HistoryEntry {
        message: message.to_string(),
        label: bundle.classify_text(message).label,
    }
}
