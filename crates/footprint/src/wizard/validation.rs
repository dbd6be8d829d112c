//! Per-stage form validation.
//!
//! Integer fields are checked on their truncated value, the way the form
//! reads them (`"7.9"` days passes, `"8"` does not).

use serde::Serialize;

use crate::quantity::Quantity;
use crate::snapshot::{FoodAnswers, HomeAnswers, ShoppingAnswers, TransportAnswers};

use super::StageAnswers;

pub const MAX_DAYS_PER_WEEK: f64 = 7.0;
pub const MAX_CAR_MILES_PER_DAY: f64 = 1000.0;
pub const MIN_RESIDENTS: f64 = 1.0;
pub const MAX_RESIDENTS: f64 = 20.0;

/// One rejected form field, keyed by its camelCase form name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn whole(quantity: Quantity) -> f64 {
    quantity.parsed().trunc()
}

fn outside(quantity: Quantity, min: f64, max: f64) -> bool {
    let value = whole(quantity);
    value < min || value > max
}

/// Every field error for the stage. Empty when the stage is acceptable.
pub fn validate(answers: &StageAnswers) -> Vec<FieldError> {
    match answers {
        StageAnswers::Transport(transport) => validate_transport(transport),
        StageAnswers::Home(home) => validate_home(home),
        StageAnswers::Food(food) => validate_food(food),
        StageAnswers::Shopping(shopping) => validate_shopping(shopping),
    }
}

pub fn validate_transport(answers: &TransportAnswers) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Days and vehicle are only required once a daily distance is given.
    let Some(miles) = answers.car_miles else {
        return errors;
    };

    if answers.car_type.is_none() {
        errors.push(FieldError::new("carType", "Please select car type"));
    }

    let days_invalid = match answers.car_days {
        None => true,
        Some(days) => outside(days, 0.0, MAX_DAYS_PER_WEEK),
    };
    if days_invalid {
        errors.push(FieldError::new(
            "carDays",
            "Please enter valid days per week (0-7)",
        ));
    }

    if outside(miles, 0.0, MAX_CAR_MILES_PER_DAY) {
        errors.push(FieldError::new(
            "carMiles",
            "Please enter valid miles per day (0-1000)",
        ));
    }

    errors
}

pub fn validate_home(answers: &HomeAnswers) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if answers.home_type.is_none() {
        errors.push(FieldError::new("homeType", "Please select home type"));
    }
    if answers.home_size.is_none() {
        errors.push(FieldError::new("homeSize", "Please select home size"));
    }

    let residents_invalid = match answers.residents {
        None => true,
        Some(count) => outside(count, MIN_RESIDENTS, MAX_RESIDENTS),
    };
    if residents_invalid {
        errors.push(FieldError::new(
            "residents",
            "Please enter valid number of residents (1-20)",
        ));
    }

    errors
}

pub fn validate_food(answers: &FoodAnswers) -> Vec<FieldError> {
    if answers.diet_type.is_none() {
        return vec![FieldError::new("dietType", "Please select your diet type")];
    }
    Vec::new()
}

/// Every shopping field is optional.
pub fn validate_shopping(_answers: &ShoppingAnswers) -> Vec<FieldError> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;
    use crate::emission_factors::{Diet, Vehicle};
    use crate::snapshot::{HomeSize, HomeType};

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_blank_transport_is_valid() {
        assert!(validate_transport(&TransportAnswers::default()).is_empty());
    }

    #[test]
    fn test_car_miles_require_type_and_days() {
        let answers = TransportAnswers {
            car_miles: Some(Quantity::parse("30")),
            ..Default::default()
        };
        let errors = validate_transport(&answers);
        assert_eq!(fields(&errors), vec!["carType", "carDays"]);
        assert_eq!(errors[0].message, "Please select car type");
    }

    #[test]
    fn test_days_range() {
        let mut answers = TransportAnswers {
            car_type: Some(Vehicle::Small.into()),
            car_miles: Some(Quantity::parse("30")),
            car_days: Some(Quantity::parse("8")),
            ..Default::default()
        };
        assert_eq!(fields(&validate_transport(&answers)), vec!["carDays"]);

        answers.car_days = Some(Quantity::parse("7.9"));
        assert!(validate_transport(&answers).is_empty());

        answers.car_days = Some(Quantity::parse("-1"));
        assert_eq!(fields(&validate_transport(&answers)), vec!["carDays"]);
    }

    #[test]
    fn test_miles_range() {
        let answers = TransportAnswers {
            car_type: Some(Vehicle::Small.into()),
            car_miles: Some(Quantity::parse("1001")),
            car_days: Some(Quantity::parse("5")),
            ..Default::default()
        };
        let errors = validate_transport(&answers);
        assert_eq!(fields(&errors), vec!["carMiles"]);
        assert_eq!(errors[0].message, "Please enter valid miles per day (0-1000)");
    }

    #[test]
    fn test_unrecognized_car_type_counts_as_selected() {
        let answers = TransportAnswers {
            car_type: Some(Choice::parse("spaceship")),
            car_miles: Some(Quantity::parse("10")),
            car_days: Some(Quantity::parse("2")),
            ..Default::default()
        };
        assert!(validate_transport(&answers).is_empty());
    }

    #[test]
    fn test_home_requires_type_size_and_residents() {
        let errors = validate_home(&HomeAnswers::default());
        assert_eq!(fields(&errors), vec!["homeType", "homeSize", "residents"]);
    }

    #[test]
    fn test_residents_range() {
        let mut answers = HomeAnswers {
            home_type: Some(HomeType::House.into()),
            home_size: Some(HomeSize::Medium.into()),
            residents: Some(Quantity::parse("21")),
            ..Default::default()
        };
        assert_eq!(fields(&validate_home(&answers)), vec!["residents"]);

        answers.residents = Some(Quantity::parse("0"));
        assert_eq!(fields(&validate_home(&answers)), vec!["residents"]);

        answers.residents = Some(Quantity::parse("20"));
        assert!(validate_home(&answers).is_empty());
    }

    #[test]
    fn test_food_requires_diet() {
        let errors = validate_food(&FoodAnswers::default());
        assert_eq!(errors[0].message, "Please select your diet type");

        let answers = FoodAnswers {
            diet_type: Some(Diet::Vegan.into()),
            ..Default::default()
        };
        assert!(validate_food(&answers).is_empty());
    }

    #[test]
    fn test_shopping_always_valid() {
        assert!(validate_shopping(&ShoppingAnswers::default()).is_empty());
    }
}
