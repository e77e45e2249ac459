use serde::Serialize;

use crate::classifier::Classification;
use crate::session::HistoryEntry;

/// Warning shown when the check input is blank.
pub const EMPTY_INPUT_NOTICE: &str = "⚠ Please enter a message.";

/// Notice shown when a question arrives before any message was checked.
pub const NO_CONTEXT_NOTICE: &str = "⚠ Start by checking a suspicious message above.";

/// Notice shown when the follow-up question is blank.
pub const EMPTY_QUESTION_NOTICE: &str = "⚠ Please enter a question for the bot.";

/// Outcome of submitting a message for checking.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// Input was blank after trimming; nothing was classified.
    EmptyInput,
    Classified(CheckReport),
}

/// Everything a successful check produces.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub classification: Classification,
    /// Rendered verdict reply, colored and ready to display.
    pub reply_html: String,
    /// Canonical history record for the caller to append.
    pub entry: HistoryEntry,
}

/// Which branch of the responder produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// No message has been checked in this session yet.
    NoContext,
    /// The follow-up question was blank.
    EmptyQuestion,
    /// Safe-or-spam verdict question.
    Verdict,
    /// Scam type / category question.
    Category,
    /// Tips / advice question.
    Advice,
    /// Anything else: the full verdict-category-tips summary.
    Summary,
}

/// A rendered chatbot answer.
///
/// Notices (`NoContext`, `EmptyQuestion`) carry their plain text; the other
/// kinds carry HTML wrapped in the verdict color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub kind: AnswerKind,
    pub html: String,
}
