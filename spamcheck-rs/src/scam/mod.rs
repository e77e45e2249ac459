//! Scam taxonomy
//!
//! Keyword-driven category inference for spam messages and the static
//! per-category awareness tips.

pub mod advice;
pub mod rules;
pub mod types;

pub use advice::advice_for;
pub use rules::{categorize, CATEGORY_RULES};
pub use types::ScamCategory;
