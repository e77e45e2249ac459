//! Check/ask conversation assistant

pub mod responder;
pub mod types;

pub use responder::Assistant;
pub use types::{
    Answer, AnswerKind, CheckOutcome, CheckReport, EMPTY_INPUT_NOTICE, EMPTY_QUESTION_NOTICE,
    NO_CONTEXT_NOTICE,
};
