//! Keyword rule engine for scam category inference

use super::types::ScamCategory;

/// Priority-ordered dispatch table; the first category whose keyword set
/// matches wins. The ordering is part of the contract: category choice is
/// order-sensitive, not score-based.
pub const CATEGORY_RULES: &[(ScamCategory, &[&str])] = &[
    (
        ScamCategory::LotteryReward,
        &["win", "prize", "lottery", "reward", "free gift"],
    ),
    (
        ScamCategory::BankPhishing,
        &["bank", "account", "verify", "password", "login", "otp"],
    ),
    (
        ScamCategory::FakeJob,
        &["job", "hiring", "vacancy", "work from home"],
    ),
    (
        ScamCategory::Romance,
        &["love", "relationship", "dating", "marriage"],
    ),
    (
        ScamCategory::InvestmentFraud,
        &["investment", "bitcoin", "crypto", "trading"],
    ),
];

/// Infer the scam category of a message.
///
/// Lowercases the raw input (punctuation preserved, independent of the
/// classifier's normalization) and scans the table in priority order with
/// case-insensitive substring matching. A message matching several
/// categories gets the earliest; a message matching none is
/// `GeneralUnknown`.
pub fn categorize(raw_text: &str) -> ScamCategory {
    let text = raw_text.to_lowercase();

    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *category;
        }
    }

    ScamCategory::GeneralUnknown
}
