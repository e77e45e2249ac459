//! Conversation responder
//!
//! Drives the two-step assistant flow: a check submits a message for a
//! verdict, follow-up questions ask about that verdict. Answers are
//! re-derived from the stored message on every call rather than read back
//! from the context, so a model swap is reflected immediately.

use std::sync::Arc;

use crate::artifacts::ArtifactStore;
use crate::classifier::{Classification, Label};
use crate::error::Result;
use crate::scam::{advice_for, categorize};
use crate::session::{HistoryEntry, SessionContext};

use super::types::{
    Answer, AnswerKind, CheckOutcome, CheckReport, EMPTY_QUESTION_NOTICE, NO_CONTEXT_NOTICE,
};

/// Checks messages and answers follow-up questions about the last check.
///
/// Holds only a shared [`ArtifactStore`] handle; per-session state lives in
/// the caller's [`SessionContext`], so one assistant serves any number of
/// sessions.
pub struct Assistant {
    store: Arc<ArtifactStore>,
}

impl Assistant {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ArtifactStore> {
        &self.store
    }

    /// Classify a submitted message and record it in the session context.
    ///
    /// Blank input yields [`CheckOutcome::EmptyInput`] and leaves the
    /// context untouched; no history entry is produced.
    pub fn check(&self, ctx: &mut SessionContext, input: &str) -> Result<CheckOutcome> {
        let message = input.trim();
        if message.is_empty() {
            return Ok(CheckOutcome::EmptyInput);
        }

        let bundle = self.store.load()?;
        let classification = bundle.classify_text(message);
        ctx.record_check(message, classification);

        Ok(CheckOutcome::Classified(CheckReport {
            classification,
            reply_html: render_verdict(&classification),
            entry: HistoryEntry {
                message: message.to_string(),
                label: classification.label,
            },
        }))
    }

    /// Answer a follow-up question about the last checked message.
    ///
    /// Intent is keyword-based over the lowercased question, first match
    /// wins: verdict, then category, then tips, then the full summary.
    pub fn answer(&self, ctx: &SessionContext, question: &str) -> Result<Answer> {
        let Some(last) = ctx.last() else {
            return Ok(Answer {
                kind: AnswerKind::NoContext,
                html: NO_CONTEXT_NOTICE.to_string(),
            });
        };

        let question = question.trim();
        if question.is_empty() {
            return Ok(Answer {
                kind: AnswerKind::EmptyQuestion,
                html: EMPTY_QUESTION_NOTICE.to_string(),
            });
        }

        let bundle = self.store.load()?;
        let label = bundle.classify_text(&last.message).label;
        let category = categorize(&last.message);
        let tips = advice_for(category);

        let lowered = question.to_lowercase();
        let (kind, answer) = if lowered.contains("safe") || lowered.contains("spam") {
            (
                AnswerKind::Verdict,
                format!("This message is classified as <b>{}</b>.", label),
            )
        } else if lowered.contains("type") || lowered.contains("category") {
            let answer = if label.is_spam() {
                format!("This message is a <b>{}</b>.", category)
            } else {
                "This message is safe; no scam type applicable.".to_string()
            };
            (AnswerKind::Category, answer)
        } else if lowered.contains("tip") || lowered.contains("advice") {
            let answer = if label.is_spam() {
                format!("Here are some tips:<br>{}", format_tips(tips))
            } else {
                "This message is safe; no tips needed.".to_string()
            };
            (AnswerKind::Advice, answer)
        } else {
            let answer = if label.is_spam() {
                format!(
                    "The message is <b>Spam</b>. It's categorized as <b>{}</b>.<br>Tips:<br>{}",
                    category,
                    format_tips(tips)
                )
            } else {
                "The message is <b>Ham</b>.".to_string()
            };
            (AnswerKind::Summary, answer)
        };

        Ok(Answer {
            kind,
            html: wrap_colored(label, &answer),
        })
    }
}

/// Render the check verdict reply with its confidence line.
fn render_verdict(result: &Classification) -> String {
    match result.label {
        Label::Ham => format!(
            "<p style=\"color:green !important;\">✅ This message seems <b>safe (Ham)</b>.<br>Confidence: {:.2}%</p>",
            result.ham_probability * 100.0
        ),
        Label::Spam => format!(
            "<p style=\"color:red !important;\">🚨 This message seems <b>Spam</b>.<br>Confidence: {:.2}%</p>",
            result.spam_probability * 100.0
        ),
    }
}

fn format_tips(tips: &[&str]) -> String {
    tips.iter()
        .map(|tip| format!("- {}", tip))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Inline color carries `!important` so surrounding theme CSS cannot
/// override the verdict color.
fn wrap_colored(label: Label, answer: &str) -> String {
    let color = if label.is_spam() { "red" } else { "green" };
    format!("<p style=\"color:{} !important;\">{}</p>", color, answer)
}
