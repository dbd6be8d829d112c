//! Reduction tips, grouped by category.

use serde::Serialize;

use crate::category::Category;
use crate::result::EmissionsResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub difficulty: Difficulty,
    /// Typical annual saving in kg CO₂.
    pub savings_kg: u32,
}

const fn tip(
    category: Category,
    title: &'static str,
    description: &'static str,
    impact: Impact,
    difficulty: Difficulty,
    savings_kg: u32,
) -> Tip {
    Tip {
        category,
        title,
        description,
        impact,
        difficulty,
        savings_kg,
    }
}

pub const TIPS: [Tip; 16] = [
    // Transport
    tip(Category::Transport, "Switch to Public Transportation", "Use buses, trains, or subways instead of driving alone", Impact::High, Difficulty::Easy, 2_300),
    tip(Category::Transport, "Work from Home", "Reduce commuting by working remotely 2-3 days per week", Impact::High, Difficulty::Medium, 1_600),
    tip(Category::Transport, "Bike or Walk Short Distances", "Use active transportation for trips under 3 miles", Impact::Medium, Difficulty::Easy, 800),
    tip(Category::Transport, "Combine Errands", "Plan multiple stops in one trip to reduce total driving", Impact::Medium, Difficulty::Easy, 400),
    // Home
    tip(Category::Home, "Switch to LED Bulbs", "Replace all incandescent bulbs with energy-efficient LEDs", Impact::Medium, Difficulty::Easy, 300),
    tip(Category::Home, "Adjust Thermostat", "Lower heating by 2°F in winter, raise cooling by 2°F in summer", Impact::High, Difficulty::Easy, 900),
    tip(Category::Home, "Unplug Electronics", "Unplug devices when not in use to eliminate phantom loads", Impact::Low, Difficulty::Easy, 200),
    tip(Category::Home, "Improve Insulation", "Add insulation to attic, walls, and basement", Impact::High, Difficulty::Hard, 1_200),
    // Food
    tip(Category::Food, "Reduce Meat Consumption", "Try Meatless Monday or reduce meat portions", Impact::High, Difficulty::Medium, 1_100),
    tip(Category::Food, "Buy Local and Seasonal", "Choose locally grown, seasonal produce", Impact::Medium, Difficulty::Easy, 500),
    tip(Category::Food, "Reduce Food Waste", "Plan meals, store food properly, and compost scraps", Impact::Medium, Difficulty::Easy, 600),
    tip(Category::Food, "Grow Your Own Food", "Start a small garden or herb collection", Impact::Low, Difficulty::Medium, 200),
    // Shopping
    tip(Category::Shopping, "Buy Second-Hand", "Shop at thrift stores, consignment shops, or online marketplaces", Impact::Medium, Difficulty::Easy, 400),
    tip(Category::Shopping, "Choose Quality Over Quantity", "Invest in durable, long-lasting products", Impact::Medium, Difficulty::Easy, 300),
    tip(Category::Shopping, "Repair Instead of Replace", "Fix broken items instead of buying new ones", Impact::Medium, Difficulty::Medium, 250),
    tip(Category::Shopping, "Minimize Packaging", "Choose products with minimal or recyclable packaging", Impact::Low, Difficulty::Easy, 150),
];

pub fn tips_for(category: Category) -> impl Iterator<Item = &'static Tip> {
    TIPS.iter().filter(move |tip| tip.category == category)
}

/// The category contributing the most emissions. Ties go to the earlier
/// category; `None` when there is nothing to reduce.
pub fn focus_category(result: &EmissionsResult) -> Option<Category> {
    if result.total <= 0 {
        return None;
    }
    let mut focus = Category::Transport;
    for category in Category::ALL {
        if result.breakdown.get(category) > result.breakdown.get(focus) {
            focus = category;
        }
    }
    Some(focus)
}

/// Tips for the focus category, highest impact first.
pub fn recommended(result: &EmissionsResult) -> Vec<&'static Tip> {
    let Some(category) = focus_category(result) else {
        return Vec::new();
    };
    let mut tips: Vec<&'static Tip> = tips_for(category).collect();
    tips.sort_by_key(|tip| (tip.impact, tip.difficulty));
    tips
}
