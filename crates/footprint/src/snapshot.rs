//! The lifestyle snapshot: one record of answers per category.
//!
//! Field names serialize in camelCase to match the keys the form flow has
//! always stored (`carType`, `electricityBill`, `dietType`, ...). Every field
//! is optional; an absent field contributes nothing to the estimate.

use serde::{Deserialize, Serialize};

use crate::choice::{self, Categorical, Choice};
use crate::emission_factors::{
    DairyFrequency, Diet, DiningOut, FlightBucket, FoodWaste, HeatingFuel, LocalFood,
    MeatFrequency, OrganicFood, SecondHand, Transit, Vehicle,
};
use crate::quantity::{self, Quantity};

// =============================================================================
// Options captured by the forms but not used by the estimator
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeType {
    Apartment,
    House,
    Condo,
    Townhouse,
}

impl Categorical for HomeType {
    const ALL: &'static [Self] = &[
        HomeType::Apartment,
        HomeType::House,
        HomeType::Condo,
        HomeType::Townhouse,
    ];

    fn key(self) -> &'static str {
        match self {
            HomeType::Apartment => "apartment",
            HomeType::House => "house",
            HomeType::Condo => "condo",
            HomeType::Townhouse => "townhouse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSize {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl Categorical for HomeSize {
    const ALL: &'static [Self] = &[
        HomeSize::Small,
        HomeSize::Medium,
        HomeSize::Large,
        HomeSize::VeryLarge,
    ];

    fn key(self) -> &'static str {
        match self {
            HomeSize::Small => "small",
            HomeSize::Medium => "medium",
            HomeSize::Large => "large",
            HomeSize::VeryLarge => "very-large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
    Rarely,
}

impl Categorical for ClothingFrequency {
    const ALL: &'static [Self] = &[
        ClothingFrequency::Weekly,
        ClothingFrequency::BiWeekly,
        ClothingFrequency::Monthly,
        ClothingFrequency::Quarterly,
        ClothingFrequency::Yearly,
        ClothingFrequency::Rarely,
    ];

    fn key(self) -> &'static str {
        match self {
            ClothingFrequency::Weekly => "weekly",
            ClothingFrequency::BiWeekly => "bi-weekly",
            ClothingFrequency::Monthly => "monthly",
            ClothingFrequency::Quarterly => "quarterly",
            ClothingFrequency::Yearly => "yearly",
            ClothingFrequency::Rarely => "rarely",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectronicsFrequency {
    Yearly,
    TwoToThreeYears,
    ThreeToFiveYears,
    FivePlusYears,
    WhenBroken,
}

impl Categorical for ElectronicsFrequency {
    const ALL: &'static [Self] = &[
        ElectronicsFrequency::Yearly,
        ElectronicsFrequency::TwoToThreeYears,
        ElectronicsFrequency::ThreeToFiveYears,
        ElectronicsFrequency::FivePlusYears,
        ElectronicsFrequency::WhenBroken,
    ];

    fn key(self) -> &'static str {
        match self {
            ElectronicsFrequency::Yearly => "yearly",
            ElectronicsFrequency::TwoToThreeYears => "2-3-years",
            ElectronicsFrequency::ThreeToFiveYears => "3-5-years",
            ElectronicsFrequency::FivePlusYears => "5-plus-years",
            ElectronicsFrequency::WhenBroken => "when-broken",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShoppingHabits {
    Online,
    InStore,
    Mixed,
}

impl Categorical for ShoppingHabits {
    const ALL: &'static [Self] = &[
        ShoppingHabits::Online,
        ShoppingHabits::InStore,
        ShoppingHabits::Mixed,
    ];

    fn key(self) -> &'static str {
        match self {
            ShoppingHabits::Online => "online",
            ShoppingHabits::InStore => "in-store",
            ShoppingHabits::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packaging {
    Minimal,
    EcoFriendly,
    Standard,
    NoPreference,
}

impl Categorical for Packaging {
    const ALL: &'static [Self] = &[
        Packaging::Minimal,
        Packaging::EcoFriendly,
        Packaging::Standard,
        Packaging::NoPreference,
    ];

    fn key(self) -> &'static str {
        match self {
            Packaging::Minimal => "minimal",
            Packaging::EcoFriendly => "eco-friendly",
            Packaging::Standard => "standard",
            Packaging::NoPreference => "no-preference",
        }
    }
}

// =============================================================================
// Per-category answer records
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportAnswers {
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub car_type: Option<Choice<Vehicle>>,
    /// Miles driven per day.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub car_miles: Option<Quantity>,
    /// Days driven per week.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub car_days: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub public_transport: Option<Choice<Transit>>,
    /// Transit miles per week.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub public_miles: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub flights: Option<Choice<FlightBucket>>,
}

impl TransportAnswers {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAnswers {
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub home_type: Option<Choice<HomeType>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub home_size: Option<Choice<HomeSize>>,
    /// Monthly electricity spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub electricity_bill: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub heating_type: Option<Choice<HeatingFuel>>,
    /// Monthly heating spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub heating_bill: Option<Quantity>,
    /// Monthly water spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub water_bill: Option<Quantity>,
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub residents: Option<Quantity>,
}

impl HomeAnswers {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Household size used for per-capita allocation. Missing, zero or
    /// malformed counts fall back to a single resident.
    pub fn resident_count(&self) -> f64 {
        self.residents
            .map(Quantity::value)
            .filter(|&count| count > 0.0)
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnswers {
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<Choice<Diet>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub meat_frequency: Option<Choice<MeatFrequency>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub dairy_frequency: Option<Choice<DairyFrequency>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub local_food: Option<Choice<LocalFood>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub organic_food: Option<Choice<OrganicFood>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub food_waste: Option<Choice<FoodWaste>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub dining_out: Option<Choice<DiningOut>>,
}

impl FoodAnswers {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The diet, if one was selected and recognized.
    pub fn diet(&self) -> Option<Diet> {
        self.diet_type.as_ref().and_then(Choice::known)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingAnswers {
    /// Monthly clothing spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub clothing_spending: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub clothing_frequency: Option<Choice<ClothingFrequency>>,
    /// Annual electronics spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub electronics_spending: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub electronics_frequency: Option<Choice<ElectronicsFrequency>>,
    /// Monthly general and household spend.
    #[serde(default, deserialize_with = "quantity::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub general_shopping: Option<Quantity>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub shopping_habits: Option<Choice<ShoppingHabits>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub second_hand: Option<Choice<SecondHand>>,
    #[serde(default, deserialize_with = "choice::deserialize_optional", skip_serializing_if = "Option::is_none")]
    pub packaging: Option<Choice<Packaging>>,
}

impl ShoppingAnswers {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// All answers for one estimation. A missing category deserializes to an
/// empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleSnapshot {
    #[serde(default)]
    pub transport: TransportAnswers,
    #[serde(default)]
    pub home: HomeAnswers,
    #[serde(default)]
    pub food: FoodAnswers,
    #[serde(default)]
    pub shopping: ShoppingAnswers,
}

impl LifestyleSnapshot {
    pub fn is_empty(&self) -> bool {
        self.transport.is_empty()
            && self.home.is_empty()
            && self.food.is_empty()
            && self.shopping.is_empty()
    }
}

// =============================================================================
// Unit tests
// =============================================================================
