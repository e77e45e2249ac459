//! Scam category enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse social-engineering taxonomy for spam messages.
///
/// Only meaningful for messages classified as spam; ham messages have no
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamCategory {
    LotteryReward,
    BankPhishing,
    FakeJob,
    Romance,
    InvestmentFraud,
    GeneralUnknown,
}

impl ScamCategory {
    /// Human-facing category name as shown in replies.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScamCategory::LotteryReward => "🎁 Lottery / Reward Scam",
            ScamCategory::BankPhishing => "🏦 Bank / Phishing Scam",
            ScamCategory::FakeJob => "💼 Fake Job Offer",
            ScamCategory::Romance => "💔 Romance Scam",
            ScamCategory::InvestmentFraud => "💰 Investment Fraud",
            ScamCategory::GeneralUnknown => "⚠ General Scam / Unknown Category",
        }
    }
}

impl fmt::Display for ScamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
