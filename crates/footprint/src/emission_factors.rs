//! Emission factor tables.
//!
//! Every factor is a static, non-negative constant. Distances are in miles,
//! spend in US dollars, food in kg CO₂ per person per week.
//!
//! ### Transport (kg CO₂ per mile)
//!
//! | Mode        | Factor |
//! |-------------|--------|
//! | Small car   | 0.31   |
//! | Medium car  | 0.39   |
//! | Large car   | 0.53   |
//! | Hybrid      | 0.20   |
//! | Electric    | 0.05   |
//! | Bus         | 0.14   |
//! | Train       | 0.09   |
//! | Mixed       | 0.12   |
//! | Flight      | 0.21   |
//!
//! ### Home (kg CO₂ per dollar)
//!
//! | Source      | Factor |
//! |-------------|--------|
//! | Electricity | 0.85   |
//! | Natural gas | 0.53   |
//! | Electric    | 0.85   |
//! | Oil         | 0.74   |
//! | Propane     | 0.63   |
//! | Wood        | 0.38   |
//! | Other       | 0.60   |
//! | Water       | 0.43   |

use crate::choice::Categorical;

// =============================================================================
// Transport
// =============================================================================

pub const FLIGHT_KG_PER_MILE: f64 = 0.21;

/// Personal vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vehicle {
    Small,
    Medium,
    Large,
    Hybrid,
    Electric,
    NoCar,
}

impl Vehicle {
    /// Emissions per mile driven. `None` when there is no car to drive.
    pub fn kg_per_mile(self) -> Option<f64> {
        match self {
            Vehicle::Small => Some(0.31),
            Vehicle::Medium => Some(0.39),
            Vehicle::Large => Some(0.53),
            Vehicle::Hybrid => Some(0.20),
            Vehicle::Electric => Some(0.05),
            Vehicle::NoCar => None,
        }
    }
}

impl Categorical for Vehicle {
    const ALL: &'static [Self] = &[
        Vehicle::Small,
        Vehicle::Medium,
        Vehicle::Large,
        Vehicle::Hybrid,
        Vehicle::Electric,
        Vehicle::NoCar,
    ];

    fn key(self) -> &'static str {
        match self {
            Vehicle::Small => "small",
            Vehicle::Medium => "medium",
            Vehicle::Large => "large",
            Vehicle::Hybrid => "hybrid",
            Vehicle::Electric => "electric",
            Vehicle::NoCar => "none",
        }
    }
}

/// Public transit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transit {
    Bus,
    Train,
    Mixed,
    NoTransit,
}

impl Transit {
    /// Emissions per passenger mile. `None` when transit is not used.
    pub fn kg_per_mile(self) -> Option<f64> {
        match self {
            Transit::Bus => Some(0.14),
            Transit::Train => Some(0.09),
            Transit::Mixed => Some(0.12),
            Transit::NoTransit => None,
        }
    }
}

impl Categorical for Transit {
    const ALL: &'static [Self] = &[
        Transit::Bus,
        Transit::Train,
        Transit::Mixed,
        Transit::NoTransit,
    ];

    fn key(self) -> &'static str {
        match self {
            Transit::Bus => "bus",
            Transit::Train => "train",
            Transit::Mixed => "mixed",
            Transit::NoTransit => "none",
        }
    }
}

/// Flights per year, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightBucket {
    NoFlights,
    OneToTwo,
    ThreeToFive,
    SixToTen,
    MoreThanTen,
}

impl FlightBucket {
    /// Representative annual flight distance for the bucket.
    pub fn annual_miles(self) -> f64 {
        match self {
            FlightBucket::NoFlights => 0.0,
            FlightBucket::OneToTwo => 2_500.0,
            FlightBucket::ThreeToFive => 6_000.0,
            FlightBucket::SixToTen => 12_000.0,
            FlightBucket::MoreThanTen => 20_000.0,
        }
    }
}

impl Categorical for FlightBucket {
    const ALL: &'static [Self] = &[
        FlightBucket::NoFlights,
        FlightBucket::OneToTwo,
        FlightBucket::ThreeToFive,
        FlightBucket::SixToTen,
        FlightBucket::MoreThanTen,
    ];

    fn key(self) -> &'static str {
        match self {
            FlightBucket::NoFlights => "0",
            FlightBucket::OneToTwo => "1-2",
            FlightBucket::ThreeToFive => "3-5",
            FlightBucket::SixToTen => "6-10",
            FlightBucket::MoreThanTen => "10+",
        }
    }
}

// =============================================================================
// Home
// =============================================================================

pub const ELECTRICITY_KG_PER_DOLLAR: f64 = 0.85;
pub const WATER_KG_PER_DOLLAR: f64 = 0.43;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatingFuel {
    NaturalGas,
    Electric,
    Oil,
    Propane,
    Wood,
    Other,
}

impl HeatingFuel {
    pub fn kg_per_dollar(self) -> f64 {
        match self {
            HeatingFuel::NaturalGas => 0.53,
            HeatingFuel::Electric => 0.85,
            HeatingFuel::Oil => 0.74,
            HeatingFuel::Propane => 0.63,
            HeatingFuel::Wood => 0.38,
            HeatingFuel::Other => 0.60,
        }
    }
}

impl Categorical for HeatingFuel {
    const ALL: &'static [Self] = &[
        HeatingFuel::NaturalGas,
        HeatingFuel::Electric,
        HeatingFuel::Oil,
        HeatingFuel::Propane,
        HeatingFuel::Wood,
        HeatingFuel::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            HeatingFuel::NaturalGas => "natural-gas",
            HeatingFuel::Electric => "electric",
            HeatingFuel::Oil => "oil",
            HeatingFuel::Propane => "propane",
            HeatingFuel::Wood => "wood",
            HeatingFuel::Other => "other",
        }
    }
}

// =============================================================================
// Food
// =============================================================================

/// Weekly base when the diet is missing or unrecognized.
pub const FALLBACK_DIET_WEEKLY_KG: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    Omnivore,
    Pescatarian,
    Vegetarian,
    Vegan,
}

impl Diet {
    /// Base emissions per person per week.
    pub fn weekly_kg(self) -> f64 {
        match self {
            Diet::Omnivore => 70.0,
            Diet::Pescatarian => 46.0,
            Diet::Vegetarian => 42.0,
            Diet::Vegan => 30.0,
        }
    }

    /// Only omnivores get the meat-frequency adjustment.
    pub fn eats_meat(self) -> bool {
        self == Diet::Omnivore
    }

    /// Everyone except vegans gets the dairy-frequency adjustment.
    pub fn eats_dairy(self) -> bool {
        self != Diet::Vegan
    }
}

impl Categorical for Diet {
    const ALL: &'static [Self] = &[Diet::Omnivore, Diet::Pescatarian, Diet::Vegetarian, Diet::Vegan];

    fn key(self) -> &'static str {
        match self {
            Diet::Omnivore => "omnivore",
            Diet::Pescatarian => "pescatarian",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeatFrequency {
    Daily,
    Frequent,
    Moderate,
    Occasional,
    Rare,
}

impl MeatFrequency {
    pub fn multiplier(self) -> f64 {
        match self {
            MeatFrequency::Daily => 1.5,
            MeatFrequency::Frequent => 1.3,
            MeatFrequency::Moderate => 1.0,
            MeatFrequency::Occasional => 0.7,
            MeatFrequency::Rare => 0.4,
        }
    }
}

impl Categorical for MeatFrequency {
    const ALL: &'static [Self] = &[
        MeatFrequency::Daily,
        MeatFrequency::Frequent,
        MeatFrequency::Moderate,
        MeatFrequency::Occasional,
        MeatFrequency::Rare,
    ];

    fn key(self) -> &'static str {
        match self {
            MeatFrequency::Daily => "daily",
            MeatFrequency::Frequent => "frequent",
            MeatFrequency::Moderate => "moderate",
            MeatFrequency::Occasional => "occasional",
            MeatFrequency::Rare => "rare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DairyFrequency {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl DairyFrequency {
    pub fn multiplier(self) -> f64 {
        match self {
            DairyFrequency::High => 1.4,
            DairyFrequency::Moderate => 1.0,
            DairyFrequency::Low => 0.6,
            DairyFrequency::VeryLow => 0.3,
        }
    }
}

impl Categorical for DairyFrequency {
    const ALL: &'static [Self] = &[
        DairyFrequency::High,
        DairyFrequency::Moderate,
        DairyFrequency::Low,
        DairyFrequency::VeryLow,
    ];

    fn key(self) -> &'static str {
        match self {
            DairyFrequency::High => "high",
            DairyFrequency::Moderate => "moderate",
            DairyFrequency::Low => "low",
            DairyFrequency::VeryLow => "very-low",
        }
    }
}

/// Share of locally sourced food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalFood {
    High,
    Moderate,
    Low,
    NoLocal,
}

impl LocalFood {
    pub fn multiplier(self) -> f64 {
        match self {
            LocalFood::High => 0.8,
            LocalFood::Moderate => 0.9,
            LocalFood::Low => 1.0,
            LocalFood::NoLocal => 1.1,
        }
    }
}

impl Categorical for LocalFood {
    const ALL: &'static [Self] = &[
        LocalFood::High,
        LocalFood::Moderate,
        LocalFood::Low,
        LocalFood::NoLocal,
    ];

    fn key(self) -> &'static str {
        match self {
            LocalFood::High => "high",
            LocalFood::Moderate => "moderate",
            LocalFood::Low => "low",
            LocalFood::NoLocal => "none",
        }
    }
}

/// Share of organic food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganicFood {
    High,
    Moderate,
    Low,
    NoOrganic,
}

impl OrganicFood {
    pub fn multiplier(self) -> f64 {
        match self {
            OrganicFood::High => 0.9,
            OrganicFood::Moderate => 0.95,
            OrganicFood::Low => 1.0,
            OrganicFood::NoOrganic => 1.0,
        }
    }
}

impl Categorical for OrganicFood {
    const ALL: &'static [Self] = &[
        OrganicFood::High,
        OrganicFood::Moderate,
        OrganicFood::Low,
        OrganicFood::NoOrganic,
    ];

    fn key(self) -> &'static str {
        match self {
            OrganicFood::High => "high",
            OrganicFood::Moderate => "moderate",
            OrganicFood::Low => "low",
            OrganicFood::NoOrganic => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodWaste {
    Low,
    Moderate,
    High,
}

impl FoodWaste {
    pub fn multiplier(self) -> f64 {
        match self {
            FoodWaste::Low => 0.9,
            FoodWaste::Moderate => 1.0,
            FoodWaste::High => 1.3,
        }
    }
}

impl Categorical for FoodWaste {
    const ALL: &'static [Self] = &[FoodWaste::Low, FoodWaste::Moderate, FoodWaste::High];

    fn key(self) -> &'static str {
        match self {
            FoodWaste::Low => "low",
            FoodWaste::Moderate => "moderate",
            FoodWaste::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiningOut {
    Daily,
    Frequent,
    Moderate,
    Occasional,
    Rare,
}

impl DiningOut {
    pub fn multiplier(self) -> f64 {
        match self {
            DiningOut::Daily => 1.4,
            DiningOut::Frequent => 1.3,
            DiningOut::Moderate => 1.1,
            DiningOut::Occasional => 1.0,
            DiningOut::Rare => 0.95,
        }
    }
}

impl Categorical for DiningOut {
    const ALL: &'static [Self] = &[
        DiningOut::Daily,
        DiningOut::Frequent,
        DiningOut::Moderate,
        DiningOut::Occasional,
        DiningOut::Rare,
    ];

    fn key(self) -> &'static str {
        match self {
            DiningOut::Daily => "daily",
            DiningOut::Frequent => "frequent",
            DiningOut::Moderate => "moderate",
            DiningOut::Occasional => "occasional",
            DiningOut::Rare => "rare",
        }
    }
}

// =============================================================================
// Shopping
// =============================================================================

pub const CLOTHING_KG_PER_DOLLAR: f64 = 0.021;
pub const ELECTRONICS_KG_PER_DOLLAR: f64 = 0.015;
pub const GENERAL_KG_PER_DOLLAR: f64 = 0.012;

/// How often the household buys second-hand. Scales the whole shopping
/// subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondHand {
    Frequently,
    Sometimes,
    Rarely,
    Never,
}

impl SecondHand {
    pub fn multiplier(self) -> f64 {
        match self {
            SecondHand::Frequently => 0.7,
            SecondHand::Sometimes => 0.85,
            SecondHand::Rarely => 0.95,
            SecondHand::Never => 1.0,
        }
    }
}

impl Categorical for SecondHand {
    const ALL: &'static [Self] = &[
        SecondHand::Frequently,
        SecondHand::Sometimes,
        SecondHand::Rarely,
        SecondHand::Never,
    ];

    fn key(self) -> &'static str {
        match self {
            SecondHand::Frequently => "frequently",
            SecondHand::Sometimes => "sometimes",
            SecondHand::Rarely => "rarely",
            SecondHand::Never => "never",
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_are_unique<T: Categorical>() {
        for (i, a) in T::ALL.iter().enumerate() {
            for b in &T::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "duplicate key {}", a.key());
            }
        }
    }

    #[test]
    fn test_keys_unique_and_roundtrip() {
        keys_are_unique::<Vehicle>();
        keys_are_unique::<Transit>();
        keys_are_unique::<FlightBucket>();
        keys_are_unique::<HeatingFuel>();
        keys_are_unique::<Diet>();
        keys_are_unique::<SecondHand>();
        for fuel in HeatingFuel::ALL {
            assert_eq!(HeatingFuel::from_key(fuel.key()), Some(*fuel));
        }
    }

    #[test]
    fn test_vehicle_factors() {
        assert_eq!(Vehicle::Medium.kg_per_mile(), Some(0.39));
        assert_eq!(Vehicle::Electric.kg_per_mile(), Some(0.05));
        assert_eq!(Vehicle::NoCar.kg_per_mile(), None);
    }

    #[test]
    fn test_large_car_emits_most() {
        let large = Vehicle::Large.kg_per_mile().unwrap();
        for vehicle in Vehicle::ALL {
            if let Some(factor) = vehicle.kg_per_mile() {
                assert!(factor <= large, "{:?} should not exceed large car", vehicle);
            }
        }
    }

    #[test]
    fn test_transit_none_has_no_factor() {
        assert_eq!(Transit::from_key("none"), Some(Transit::NoTransit));
        assert_eq!(Transit::NoTransit.kg_per_mile(), None);
        assert_eq!(Transit::Train.kg_per_mile(), Some(0.09));
    }

    #[test]
    fn test_flight_buckets() {
        assert_eq!(FlightBucket::from_key("0"), Some(FlightBucket::NoFlights));
        assert_eq!(FlightBucket::from_key("10+"), Some(FlightBucket::MoreThanTen));
        assert_eq!(FlightBucket::ThreeToFive.annual_miles(), 6_000.0);
        assert_eq!(FlightBucket::NoFlights.annual_miles(), 0.0);
    }

    #[test]
    fn test_heating_fuel_factors() {
        assert_eq!(HeatingFuel::NaturalGas.kg_per_dollar(), 0.53);
        assert_eq!(HeatingFuel::Other.kg_per_dollar(), 0.60);
        assert_eq!(HeatingFuel::from_key("coal"), None);
    }

    #[test]
    fn test_diet_gates() {
        assert!(Diet::Omnivore.eats_meat());
        assert!(!Diet::Pescatarian.eats_meat());
        assert!(!Diet::Vegan.eats_meat());
        assert!(Diet::Vegetarian.eats_dairy());
        assert!(!Diet::Vegan.eats_dairy());
    }

    #[test]
    fn test_all_multipliers_non_negative() {
        let multipliers = MeatFrequency::ALL
            .iter()
            .map(|m| m.multiplier())
            .chain(DairyFrequency::ALL.iter().map(|m| m.multiplier()))
            .chain(LocalFood::ALL.iter().map(|m| m.multiplier()))
            .chain(OrganicFood::ALL.iter().map(|m| m.multiplier()))
            .chain(FoodWaste::ALL.iter().map(|m| m.multiplier()))
            .chain(DiningOut::ALL.iter().map(|m| m.multiplier()))
            .chain(SecondHand::ALL.iter().map(|m| m.multiplier()));
        for m in multipliers {
            assert!(m >= 0.0, "multiplier {m} is negative");
        }
    }

    #[test]
    fn test_dairy_key_with_hyphen() {
        assert_eq!(DairyFrequency::from_key("very-low"), Some(DairyFrequency::VeryLow));
        assert_eq!(DairyFrequency::VeryLow.multiplier(), 0.3);
    }
}
