// ABOUTME: Hard-coded content of the SmartCart pitch deck
// ABOUTME: Title, problem and solution slides in presentation order

use crate::model::{Deck, PageSize, SlideSpec};

pub const HEADLINE: &str = "SmartCart";

pub const SUBTITLE: &str =
    "Intelligent Grocery Shopping Agent\nPowered by AI & Blockchain - BNB Chain Testnet";

pub const PROBLEM_TITLE: &str = "The Problem";
pub const PROBLEM_LEAD_IN: &str = "Grocery Shopping is Broken";
pub const PROBLEM_LEAD_IN_SIZE: f64 = 32.0;
pub const PROBLEM_BULLET_SIZE: f64 = 18.0;

pub const PROBLEM_BULLETS: [&str; 5] = [
    "🛒 Waste: $218B wasted annually on expired groceries",
    "💰 Overspending: No budget tracking or price comparison",
    "⏰ Time-consuming: Manual inventory management",
    "📊 No Insights: No forecasting or smart recommendations",
    "🏪 Vendor Confusion: Hard to compare prices across platforms",
];

pub const SOLUTION_TITLE: &str = "The Solution";
pub const SOLUTION_LEAD_IN: &str = "SmartCart - Your AI-Powered Grocery Assistant";
pub const SOLUTION_LEAD_IN_SIZE: f64 = 28.0;
pub const SOLUTION_BULLET_SIZE: f64 = 16.0;

pub const SOLUTION_BULLETS: [&str; 6] = [
    "📦 Tracks inventory automatically with expiration alerts",
    "🤖 Predicts run-out dates using ML linear regression",
    "💵 Manages budgets and prevents overspending",
    "🛍️ Compares prices across Amazon & Walmart",
    "✅ Approves transactions with risk assessment",
    "📝 Maintains audit logs for compliance",
];

/// The SmartCart deck on a 10in x 7.5in page
pub fn smartcart_deck() -> Deck {
    let mut deck = Deck::new(PageSize::default());
    deck.push(SlideSpec::title_slide(HEADLINE, SUBTITLE))
        .push(
            SlideSpec::content_slide(PROBLEM_TITLE, PROBLEM_LEAD_IN, PROBLEM_LEAD_IN_SIZE)
                .with_bullets(&PROBLEM_BULLETS, PROBLEM_BULLET_SIZE),
        )
        .push(
            SlideSpec::content_slide(SOLUTION_TITLE, SOLUTION_LEAD_IN, SOLUTION_LEAD_IN_SIZE)
                .with_bullets(&SOLUTION_BULLETS, SOLUTION_BULLET_SIZE),
        );
    deck
}
