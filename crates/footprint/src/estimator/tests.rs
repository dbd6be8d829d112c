use super::*;
use crate::choice::Categorical;
use crate::emission_factors::{
    DairyFrequency, Diet, DiningOut, FlightBucket, FoodWaste, LocalFood, MeatFrequency,
    OrganicFood, SecondHand, Transit, Vehicle,
};
use crate::quantity::Quantity;
use crate::result::round_half_up;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected ~{expected}, got {actual}"
    );
}

fn commuter() -> TransportAnswers {
    TransportAnswers {
        car_type: Some(Vehicle::Medium.into()),
        car_miles: Some(Quantity::parse("30")),
        car_days: Some(Quantity::parse("5")),
        ..Default::default()
    }
}

fn full_snapshot() -> LifestyleSnapshot {
    LifestyleSnapshot {
        transport: TransportAnswers {
            car_type: Some(Vehicle::Small.into()),
            car_miles: Some(Quantity::parse("20")),
            car_days: Some(Quantity::parse("5")),
            public_transport: Some(Transit::Bus.into()),
            public_miles: Some(Quantity::parse("50")),
            flights: Some(FlightBucket::OneToTwo.into()),
        },
        home: HomeAnswers {
            electricity_bill: Some(Quantity::parse("100")),
            heating_type: Some(HeatingFuel::NaturalGas.into()),
            heating_bill: Some(Quantity::parse("60")),
            water_bill: Some(Quantity::parse("40")),
            residents: Some(Quantity::parse("2")),
            ..Default::default()
        },
        food: FoodAnswers {
            diet_type: Some(Diet::Omnivore.into()),
            meat_frequency: Some(MeatFrequency::Daily.into()),
            dairy_frequency: Some(DairyFrequency::Moderate.into()),
            local_food: Some(LocalFood::Moderate.into()),
            organic_food: Some(OrganicFood::Low.into()),
            food_waste: Some(FoodWaste::Moderate.into()),
            dining_out: Some(DiningOut::Occasional.into()),
        },
        shopping: ShoppingAnswers {
            clothing_spending: Some(Quantity::parse("100")),
            electronics_spending: Some(Quantity::parse("500")),
            general_shopping: Some(Quantity::parse("200")),
            second_hand: Some(SecondHand::Sometimes.into()),
            ..Default::default()
        },
    }
}

// -----------------------------------------------------------------------------
// Whole-snapshot properties
// -----------------------------------------------------------------------------

#[test]
fn test_empty_snapshot_is_zero() {
    let result = estimate(&LifestyleSnapshot::default());
    assert_eq!(result.total, 0);
    assert_eq!(result.breakdown.transport, 0);
    assert_eq!(result.breakdown.home, 0);
    assert_eq!(result.breakdown.food, 0);
    assert_eq!(result.breakdown.shopping, 0);
    assert_eq!(result.daily_average, 0);
    assert_eq!(result.monthly_average, 0);
    assert_eq!(result.compared_to_average, 0);
}

#[test]
fn test_commuter_scenario() {
    let snapshot = LifestyleSnapshot {
        transport: commuter(),
        ..Default::default()
    };
    assert_close(transport_emissions(&snapshot.transport), 3_042.0);
    let result = estimate(&snapshot);
    assert_eq!(result.breakdown.transport, 3_042);
    assert_eq!(result.total, 3_042);
}

#[test]
fn test_full_snapshot_subtotals() {
    let totals = category_totals(&full_snapshot());
    // 5200 mi × 0.31 + 2600 mi × 0.14 + 2500 mi × 0.21
    assert_close(totals.transport, 2_501.0);
    // (1020 + 381.6 + 206.4) / 2
    assert_close(totals.home, 804.0);
    // 70 × 1.5 × 0.9 × 52
    assert_close(totals.food, 4_914.0);
    // (25.2 + 7.5 + 28.8) × 0.85
    assert_close(totals.shopping, 52.275);
}

#[test]
fn test_full_snapshot_derived_metrics() {
    let result = estimate(&full_snapshot());
    assert_eq!(result.total, 8_271);
    assert_eq!(result.breakdown.shopping, 52);
    assert_eq!(result.daily_average, 23);
    assert_eq!(result.monthly_average, 689);
    assert_eq!(result.compared_to_average, 52);
}

#[test]
fn test_total_rounds_unrounded_sum() {
    let snapshot = full_snapshot();
    let totals = category_totals(&snapshot);
    let result = estimate(&snapshot);
    assert_eq!(result.total, round_half_up(totals.sum()));
    assert_eq!(result.daily_average, round_half_up(totals.sum() / 365.0));
}

#[test]
fn test_estimate_is_idempotent() {
    let snapshot = full_snapshot();
    let first = estimate(&snapshot);
    let second = estimate(&snapshot);
    assert_eq!(first, second);
    assert_eq!(
        category_totals(&snapshot).sum().to_bits(),
        category_totals(&snapshot).sum().to_bits()
    );
}

#[test]
fn test_estimate_does_not_touch_input() {
    let snapshot = full_snapshot();
    let before = snapshot.clone();
    let _ = estimate(&snapshot);
    assert_eq!(snapshot, before);
}

#[test]
fn test_subtotals_never_negative() {
    for vehicle in Vehicle::ALL {
        for diet in Diet::ALL {
            for second_hand in SecondHand::ALL {
                let mut snapshot = full_snapshot();
                snapshot.transport.car_type = Some((*vehicle).into());
                snapshot.food.diet_type = Some((*diet).into());
                snapshot.shopping.second_hand = Some((*second_hand).into());
                snapshot.home.residents = Some(Quantity::parse("-4"));
                snapshot.shopping.general_shopping = Some(Quantity::parse("-200"));

                let totals = category_totals(&snapshot);
                for category in crate::category::Category::ALL {
                    assert!(totals.get(category) >= 0.0, "{category:?} negative");
                }
                assert!(estimate(&snapshot).total >= 0);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Transport
// -----------------------------------------------------------------------------

#[test]
fn test_car_leg_needs_all_fields() {
    let mut transport = commuter();
    transport.car_days = None;
    assert_eq!(transport_emissions(&transport), 0.0);

    let mut transport = commuter();
    transport.car_type = None;
    assert_eq!(transport_emissions(&transport), 0.0);
}

#[test]
fn test_no_car_and_unknown_car_contribute_nothing() {
    let mut transport = commuter();
    transport.car_type = Some(Vehicle::NoCar.into());
    assert_eq!(transport_emissions(&transport), 0.0);

    transport.car_type = Some(Choice::parse("spaceship"));
    assert_eq!(transport_emissions(&transport), 0.0);
}

#[test]
fn test_malformed_miles_read_as_zero() {
    let mut transport = commuter();
    transport.car_miles = Some(Quantity::parse("lots"));
    assert_eq!(transport_emissions(&transport), 0.0);
}

#[test]
fn test_transit_leg() {
    let transport = TransportAnswers {
        public_transport: Some(Transit::Train.into()),
        public_miles: Some(Quantity::parse("100")),
        ..Default::default()
    };
    assert_close(transport_emissions(&transport), 100.0 * 52.0 * 0.09);
}

#[test]
fn test_transit_none_is_skipped() {
    let transport = TransportAnswers {
        public_transport: Some(Transit::NoTransit.into()),
        public_miles: Some(Quantity::parse("100")),
        ..Default::default()
    };
    assert_eq!(transport_emissions(&transport), 0.0);
}

#[test]
fn test_flight_buckets() {
    let mut transport = TransportAnswers {
        flights: Some(FlightBucket::MoreThanTen.into()),
        ..Default::default()
    };
    assert_close(transport_emissions(&transport), 20_000.0 * 0.21);

    transport.flights = Some(FlightBucket::NoFlights.into());
    assert_eq!(transport_emissions(&transport), 0.0);

    transport.flights = Some(Choice::parse("weekly"));
    assert_eq!(transport_emissions(&transport), 0.0);
}

// -----------------------------------------------------------------------------
// Home
// -----------------------------------------------------------------------------

#[test]
fn test_doubling_residents_halves_home() {
    let mut home = full_snapshot().home;
    home.residents = Some(Quantity::parse("1"));
    let single = home_emissions(&home);
    home.residents = Some(Quantity::parse("2"));
    let shared = home_emissions(&home);
    assert_close(shared * 2.0, single);
}

#[test]
fn test_unknown_heating_fuel_uses_other_factor() {
    let home = HomeAnswers {
        heating_type: Some(Choice::parse("geothermal")),
        heating_bill: Some(Quantity::parse("100")),
        ..Default::default()
    };
    assert_close(home_emissions(&home), 1_200.0 * 0.60);
}

#[test]
fn test_heating_needs_fuel_and_bill() {
    let home = HomeAnswers {
        heating_bill: Some(Quantity::parse("100")),
        ..Default::default()
    };
    assert_eq!(home_emissions(&home), 0.0);
}

#[test]
fn test_missing_residents_means_one() {
    let home = HomeAnswers {
        electricity_bill: Some(Quantity::parse("50")),
        ..Default::default()
    };
    assert_close(home_emissions(&home), 50.0 * 12.0 * 0.85);
}

// -----------------------------------------------------------------------------
// Food
// -----------------------------------------------------------------------------

#[test]
fn test_empty_food_is_zero() {
    assert_eq!(food_emissions(&FoodAnswers::default()), 0.0);
}

#[test]
fn test_vegan_ignores_meat_and_dairy() {
    let food = FoodAnswers {
        diet_type: Some(Diet::Vegan.into()),
        meat_frequency: Some(MeatFrequency::Daily.into()),
        dairy_frequency: Some(DairyFrequency::High.into()),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 30.0 * 52.0);
}

#[test]
fn test_meat_multiplier_only_for_omnivores() {
    let mut food = FoodAnswers {
        diet_type: Some(Diet::Pescatarian.into()),
        meat_frequency: Some(MeatFrequency::Daily.into()),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 46.0 * 52.0);

    food.diet_type = Some(Diet::Omnivore.into());
    assert_close(food_emissions(&food), 70.0 * 1.5 * 52.0);
}

#[test]
fn test_dairy_multiplier_for_vegetarians() {
    let food = FoodAnswers {
        diet_type: Some(Diet::Vegetarian.into()),
        dairy_frequency: Some(DairyFrequency::Low.into()),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 42.0 * 0.6 * 52.0);
}

#[test]
fn test_unknown_diet_uses_fallback_base_and_no_gated_multipliers() {
    let food = FoodAnswers {
        diet_type: Some(Choice::parse("fruitarian")),
        meat_frequency: Some(MeatFrequency::Daily.into()),
        dairy_frequency: Some(DairyFrequency::High.into()),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 50.0 * 52.0);
}

#[test]
fn test_ungated_multipliers_apply_without_diet() {
    let food = FoodAnswers {
        local_food: Some(LocalFood::High.into()),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 50.0 * 0.8 * 52.0);
}

#[test]
fn test_unknown_multiplier_is_a_no_op() {
    let food = FoodAnswers {
        diet_type: Some(Diet::Vegan.into()),
        food_waste: Some(Choice::parse("none")),
        ..Default::default()
    };
    assert_close(food_emissions(&food), 30.0 * 52.0);
}

#[test]
fn test_full_multiplier_chain() {
    let food = FoodAnswers {
        diet_type: Some(Diet::Omnivore.into()),
        meat_frequency: Some(MeatFrequency::Rare.into()),
        dairy_frequency: Some(DairyFrequency::VeryLow.into()),
        local_food: Some(LocalFood::NoLocal.into()),
        organic_food: Some(OrganicFood::High.into()),
        food_waste: Some(FoodWaste::High.into()),
        dining_out: Some(DiningOut::Daily.into()),
    };
    let expected = 70.0 * 0.4 * 0.3 * 1.1 * 0.9 * 1.3 * 1.4 * 52.0;
    assert_close(food_emissions(&food), expected);
}

// -----------------------------------------------------------------------------
// Shopping
// -----------------------------------------------------------------------------

#[test]
fn test_second_hand_scales_combined_subtotal() {
    let mut shopping = ShoppingAnswers {
        clothing_spending: Some(Quantity::parse("100")),
        electronics_spending: Some(Quantity::parse("1000")),
        general_shopping: Some(Quantity::parse("300")),
        ..Default::default()
    };
    let base = shopping_emissions(&shopping);
    assert_close(base, 1_200.0 * 0.021 + 1_000.0 * 0.015 + 3_600.0 * 0.012);

    shopping.second_hand = Some(SecondHand::Frequently.into());
    assert_close(shopping_emissions(&shopping), base * 0.7);
}

#[test]
fn test_electronics_spend_is_not_annualized() {
    let shopping = ShoppingAnswers {
        electronics_spending: Some(Quantity::parse("1200")),
        ..Default::default()
    };
    assert_close(shopping_emissions(&shopping), 18.0);
}

#[test]
fn test_second_hand_alone_is_zero() {
    let shopping = ShoppingAnswers {
        second_hand: Some(SecondHand::Never.into()),
        ..Default::default()
    };
    assert_eq!(shopping_emissions(&shopping), 0.0);
}
