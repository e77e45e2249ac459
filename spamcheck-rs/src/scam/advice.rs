//! Static scam-awareness tips

use super::types::ScamCategory;

/// Ordered safety tips for a scam category.
///
/// Pure static lookup over process-lifetime constants; every category has at
/// least one tip and there is no failure path.
pub fn advice_for(category: ScamCategory) -> &'static [&'static str] {
    match category {
        ScamCategory::LotteryReward => &[
            "Never click links claiming you've won prizes.",
            "Legit companies don’t ask for money to claim rewards.",
            "Be cautious of emails with 'Congratulations!' in the subject.",
        ],
        ScamCategory::BankPhishing => &[
            "Banks never ask for OTP or passwords through email/SMS.",
            "Avoid clicking links asking to 'verify your account'.",
            "Always log in via official bank websites.",
        ],
        ScamCategory::FakeJob => &[
            "Avoid job offers that ask for money.",
            "Check company websites before responding.",
            "Be careful of 'work-from-home' jobs with huge pay.",
        ],
        ScamCategory::Romance => &[
            "Don’t share personal or financial details online.",
            "Scammers often pretend to fall in love quickly.",
            "Never send money to someone you haven’t met.",
        ],
        ScamCategory::InvestmentFraud => &[
            "Avoid schemes promising 'guaranteed returns'.",
            "Research companies before investing.",
            "Be careful of random crypto or trading offers.",
        ],
        ScamCategory::GeneralUnknown => &[
            "Avoid clicking suspicious links.",
            "Check sender email before replying.",
        ],
    }
}
