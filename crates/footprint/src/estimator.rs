//! The emissions estimator.
//!
//! A weighted linear model: each answer is annualized and multiplied by a
//! static factor from [`crate::emission_factors`]. The estimator is a pure
//! function of the snapshot. It never fails: malformed numbers already read
//! as 0, unknown options skip their adjustment, and an empty category
//! contributes nothing.
//!
//! ## Formulas (kg CO₂/year)
//!
//! - Transport: `car_miles × car_days × 52 × vehicle + transit_miles × 52 ×
//!   transit + flight_miles × 0.21`
//! - Home: `(bill × 12 × factor) / residents` for electricity, heating and
//!   water
//! - Food: `diet_base × meat × dairy × local × organic × waste × dining × 52`
//! - Shopping: `(clothing × 12 × 0.021 + electronics × 0.015 + general × 12 ×
//!   0.012) × second_hand`

use crate::choice::Choice;
use crate::config::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::emission_factors::{
    HeatingFuel, CLOTHING_KG_PER_DOLLAR, ELECTRICITY_KG_PER_DOLLAR, ELECTRONICS_KG_PER_DOLLAR,
    FALLBACK_DIET_WEEKLY_KG, FLIGHT_KG_PER_MILE, GENERAL_KG_PER_DOLLAR, WATER_KG_PER_DOLLAR,
};
use crate::result::{CategoryTotals, EmissionsResult};
use crate::snapshot::{FoodAnswers, HomeAnswers, LifestyleSnapshot, ShoppingAnswers, TransportAnswers};

/// Estimate the annual footprint for a snapshot.
pub fn estimate(snapshot: &LifestyleSnapshot) -> EmissionsResult {
    EmissionsResult::from_totals(category_totals(snapshot))
}

/// [`estimate`], or `None` when the answers are too large for the result to
/// mean anything. Snapshots that skipped step validation go through here.
pub fn checked_estimate(snapshot: &LifestyleSnapshot) -> Option<EmissionsResult> {
    EmissionsResult::checked_from_totals(category_totals(snapshot))
}

/// Unrounded subtotals for all four categories.
pub fn category_totals(snapshot: &LifestyleSnapshot) -> CategoryTotals {
    CategoryTotals {
        transport: transport_emissions(&snapshot.transport),
        home: home_emissions(&snapshot.home),
        food: food_emissions(&snapshot.food),
        shopping: shopping_emissions(&snapshot.shopping),
    }
}

pub fn transport_emissions(answers: &TransportAnswers) -> f64 {
    let mut kg = 0.0;

    // Car leg needs the vehicle, the daily distance and the days per week.
    if let (Some(car), Some(miles), Some(days)) =
        (&answers.car_type, answers.car_miles, answers.car_days)
    {
        if let Some(factor) = car.known().and_then(|vehicle| vehicle.kg_per_mile()) {
            let weekly_miles = miles.value() * days.value();
            kg += weekly_miles * WEEKS_PER_YEAR * factor;
        }
    }

    if let (Some(transit), Some(miles)) = (&answers.public_transport, answers.public_miles) {
        if let Some(factor) = transit.known().and_then(|mode| mode.kg_per_mile()) {
            kg += miles.value() * WEEKS_PER_YEAR * factor;
        }
    }

    if let Some(bucket) = answers.flights.as_ref().and_then(Choice::known) {
        kg += bucket.annual_miles() * FLIGHT_KG_PER_MILE;
    }

    kg
}

pub fn home_emissions(answers: &HomeAnswers) -> f64 {
    let residents = answers.resident_count();
    let mut kg = 0.0;

    if let Some(bill) = answers.electricity_bill {
        kg += (bill.value() * MONTHS_PER_YEAR * ELECTRICITY_KG_PER_DOLLAR) / residents;
    }

    if let (Some(fuel), Some(bill)) = (&answers.heating_type, answers.heating_bill) {
        let factor = fuel.known().unwrap_or(HeatingFuel::Other).kg_per_dollar();
        kg += (bill.value() * MONTHS_PER_YEAR * factor) / residents;
    }

    if let Some(bill) = answers.water_bill {
        kg += (bill.value() * MONTHS_PER_YEAR * WATER_KG_PER_DOLLAR) / residents;
    }

    kg
}

pub fn food_emissions(answers: &FoodAnswers) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let diet = answers.diet();
    let mut weekly = diet.map_or(FALLBACK_DIET_WEEKLY_KG, |d| d.weekly_kg());

    // Applied in a fixed order so accumulated rounding stays reproducible.
    if diet.is_some_and(|d| d.eats_meat()) {
        if let Some(meat) = answers.meat_frequency.as_ref().and_then(Choice::known) {
            weekly *= meat.multiplier();
        }
    }
    if diet.is_some_and(|d| d.eats_dairy()) {
        if let Some(dairy) = answers.dairy_frequency.as_ref().and_then(Choice::known) {
            weekly *= dairy.multiplier();
        }
    }
    if let Some(local) = answers.local_food.as_ref().and_then(Choice::known) {
        weekly *= local.multiplier();
    }
    if let Some(organic) = answers.organic_food.as_ref().and_then(Choice::known) {
        weekly *= organic.multiplier();
    }
    if let Some(waste) = answers.food_waste.as_ref().and_then(Choice::known) {
        weekly *= waste.multiplier();
    }
    if let Some(dining) = answers.dining_out.as_ref().and_then(Choice::known) {
        weekly *= dining.multiplier();
    }

    weekly * WEEKS_PER_YEAR
}

pub fn shopping_emissions(answers: &ShoppingAnswers) -> f64 {
    let mut kg = 0.0;

    if let Some(monthly) = answers.clothing_spending {
        kg += monthly.value() * MONTHS_PER_YEAR * CLOTHING_KG_PER_DOLLAR;
    }
    // Electronics spend is already annual.
    if let Some(annual) = answers.electronics_spending {
        kg += annual.value() * ELECTRONICS_KG_PER_DOLLAR;
    }
    if let Some(monthly) = answers.general_shopping {
        kg += monthly.value() * MONTHS_PER_YEAR * GENERAL_KG_PER_DOLLAR;
    }

    // Second-hand scales the whole subtotal, not each term.
    if let Some(second_hand) = answers.second_hand.as_ref().and_then(Choice::known) {
        kg *= second_hand.multiplier();
    }

    kg
}

#[cfg(test)]
mod tests;
