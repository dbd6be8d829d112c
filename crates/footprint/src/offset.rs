//! Carbon offset pricing.

use serde::Serialize;

use crate::config::{DEFAULT_OFFSET_PRICE_PER_TON, KG_PER_TON};
use crate::result::round_half_up;

/// A verified offset registry the user can buy credits from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffsetProgram {
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_ton_usd: f64,
    pub rating: f64,
    pub projects: &'static str,
    pub verification: &'static str,
    pub url: &'static str,
}

pub const OFFSET_PROGRAMS: [OffsetProgram; 4] = [
    OffsetProgram {
        name: "Gold Standard",
        description: "High-quality carbon credits from renewable energy and forestry projects",
        price_per_ton_usd: 25.0,
        rating: 4.8,
        projects: "Renewable Energy, Forest Protection",
        verification: "Third-party verified",
        url: "https://www.goldstandard.org",
    },
    OffsetProgram {
        name: "Verified Carbon Standard",
        description: "World's most used voluntary GHG program with rigorous standards",
        price_per_ton_usd: 22.0,
        rating: 4.7,
        projects: "REDD+, Clean Energy, Waste Management",
        verification: "VCS verified",
        url: "https://verra.org",
    },
    OffsetProgram {
        name: "Climate Action Reserve",
        description: "North American carbon offset registry with transparent protocols",
        price_per_ton_usd: 28.0,
        rating: 4.6,
        projects: "Forest Carbon, Methane Capture",
        verification: "CAR verified",
        url: "https://www.climateactionreserve.org",
    },
    OffsetProgram {
        name: "American Carbon Registry",
        description: "First private voluntary greenhouse gas registry in the world",
        price_per_ton_usd: 24.0,
        rating: 4.5,
        projects: "Forestry, Agriculture, Renewable Energy",
        verification: "ACR verified",
        url: "https://americancarbonregistry.org",
    },
];

/// Whole dollars to offset `total_kg` at `price_per_ton`.
pub fn offset_cost_usd(total_kg: i64, price_per_ton: f64) -> i64 {
    round_half_up(total_kg as f64 / KG_PER_TON * price_per_ton)
}

/// Headline cost at the default price.
pub fn default_offset_cost_usd(total_kg: i64) -> i64 {
    offset_cost_usd(total_kg, DEFAULT_OFFSET_PRICE_PER_TON)
}

/// One program priced for a given footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffsetQuote {
    pub program: OffsetProgram,
    pub cost_usd: i64,
}

pub fn quotes(total_kg: i64) -> Vec<OffsetQuote> {
    OFFSET_PROGRAMS
        .iter()
        .map(|program| OffsetQuote {
            program: *program,
            cost_usd: offset_cost_usd(total_kg, program.price_per_ton_usd),
        })
        .collect()
}

/// The cheapest program for a footprint; first listed wins a tie.
pub fn cheapest_quote(total_kg: i64) -> Option<OffsetQuote> {
    quotes(total_kg)
        .into_iter()
        .reduce(|best, quote| if quote.cost_usd < best.cost_usd { quote } else { best })
}
