use super::*;
use crate::emission_factors::{Diet, SecondHand, Vehicle};
use crate::quantity::Quantity;
use crate::snapshot::{HomeSize, HomeType};

fn transport() -> StageAnswers {
    StageAnswers::Transport(TransportAnswers {
        car_type: Some(Vehicle::Medium.into()),
        car_miles: Some(Quantity::parse("30")),
        car_days: Some(Quantity::parse("5")),
        ..Default::default()
    })
}

fn home() -> StageAnswers {
    StageAnswers::Home(HomeAnswers {
        home_type: Some(HomeType::Apartment.into()),
        home_size: Some(HomeSize::Small.into()),
        residents: Some(Quantity::parse("2")),
        ..Default::default()
    })
}

fn food() -> StageAnswers {
    StageAnswers::Food(FoodAnswers {
        diet_type: Some(Diet::Vegetarian.into()),
        ..Default::default()
    })
}

fn shopping() -> StageAnswers {
    StageAnswers::Shopping(ShoppingAnswers {
        second_hand: Some(SecondHand::Rarely.into()),
        ..Default::default()
    })
}

fn completed_wizard() -> TrackerWizard {
    let mut wizard = TrackerWizard::default();
    for stage in [transport(), home(), food(), shopping()] {
        wizard.submit(stage).unwrap();
    }
    wizard
}

#[test]
fn test_starts_on_transport() {
    let wizard = TrackerWizard::default();
    assert_eq!(wizard.current_step(), Category::Transport);
    assert_eq!(wizard.progress_percent(), 0);
    assert!(!wizard.all_completed());
}

#[test]
fn test_submit_advances_and_stores() {
    let mut wizard = TrackerWizard::default();
    assert_eq!(wizard.submit(transport()), Ok(Category::Home));
    assert!(wizard.is_completed(Category::Transport));
    assert_eq!(wizard.answers().transport.car_days, Some(Quantity::parse("5")));
    assert_eq!(wizard.progress_percent(), 25);
}

#[test]
fn test_submit_last_step_stays_on_last() {
    let mut wizard = TrackerWizard::default();
    wizard.go_to(Category::Shopping);
    assert_eq!(wizard.submit(shopping()), Ok(Category::Shopping));
    assert_eq!(wizard.progress_percent(), 75);
}

#[test]
fn test_rejected_submission_stores_nothing() {
    let mut wizard = TrackerWizard::default();
    wizard.go_to(Category::Home);
    let result = wizard.submit(StageAnswers::Home(HomeAnswers::default()));

    match result {
        Err(WizardError::Rejected { stage, errors }) => {
            assert_eq!(stage, Category::Home);
            assert_eq!(errors.len(), 3);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(!wizard.is_completed(Category::Home));
    assert_eq!(wizard.current_step(), Category::Home);
}

#[test]
fn test_blank_transport_still_completes_step() {
    let mut wizard = TrackerWizard::default();
    wizard
        .submit(StageAnswers::Transport(TransportAnswers::default()))
        .unwrap();
    assert!(wizard.is_completed(Category::Transport));
}

#[test]
fn test_resubmission_replaces_answers() {
    let mut wizard = TrackerWizard::default();
    wizard.submit(transport()).unwrap();
    wizard
        .submit(StageAnswers::Transport(TransportAnswers::default()))
        .unwrap();
    assert!(wizard.answers().transport.is_empty());
}

#[test]
fn test_next_requires_completed_step() {
    let mut wizard = TrackerWizard::default();
    assert_eq!(wizard.next(), None);
    assert_eq!(wizard.current_step(), Category::Transport);

    wizard.submit(transport()).unwrap();
    wizard.go_to(Category::Transport);
    assert_eq!(wizard.next(), Some(Category::Home));
}

#[test]
fn test_previous_saturates() {
    let mut wizard = TrackerWizard::default();
    assert_eq!(wizard.previous(), Category::Transport);
    wizard.go_to(Category::Food);
    assert_eq!(wizard.previous(), Category::Home);
}

#[test]
fn test_finalize_names_first_incomplete_step() {
    let mut wizard = TrackerWizard::default();
    wizard.submit(transport()).unwrap();
    wizard.go_to(Category::Food);
    wizard.submit(food()).unwrap();

    assert_eq!(
        wizard.finalize(),
        Err(WizardError::Incomplete(Category::Home))
    );
}

#[test]
fn test_finalize_returns_snapshot() {
    let wizard = completed_wizard();
    let snapshot = wizard.finalize().unwrap();
    assert_eq!(snapshot.food.diet(), Some(Diet::Vegetarian));
    assert_eq!(snapshot.home.resident_count(), 2.0);
}

#[test]
fn test_reset_restarts_flow() {
    let mut wizard = completed_wizard();
    wizard.reset();
    assert_eq!(wizard.current_step(), Category::Transport);
    assert!(wizard.answers().is_empty());
    assert!(Category::ALL.iter().all(|s| !wizard.is_completed(*s)));
}

#[test]
fn test_steps_view() {
    let mut wizard = TrackerWizard::default();
    wizard.submit(transport()).unwrap();
    let steps = wizard.steps();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].title, "Transportation");
    assert!(steps[0].completed);
    assert_eq!(steps[3].description, "Track consumption and purchasing habits");
    assert!(!steps[3].completed);
}

#[test]
fn test_stage_answers_from_value() {
    let value = serde_json::json!({"carType": "hybrid", "carMiles": "12", "carDays": 3});
    let stage = StageAnswers::from_value(Category::Transport, value).unwrap();
    assert_eq!(stage.category(), Category::Transport);
    match stage {
        StageAnswers::Transport(answers) => {
            assert!(answers.car_type.unwrap().is(Vehicle::Hybrid));
            assert_eq!(answers.car_days.map(Quantity::value), Some(3.0));
        }
        other => panic!("unexpected stage {other:?}"),
    }
}

#[test]
fn test_rejection_display_lists_messages() {
    let error = WizardError::Rejected {
        stage: Category::Food,
        errors: validate_food(&FoodAnswers::default()),
    };
    assert_eq!(
        error.to_string(),
        "Food & Diet answers rejected: Please select your diet type."
    );
}
