use jiff::civil;
use mindlens_booking::catalog;
use mindlens_booking::error::BookingError;
use mindlens_booking::wizard::{BookingStep, BookingWizard, ProcessingStage, DEFAULT_CATEGORY};

const TODAY: fn() -> civil::Date = || civil::date(2026, 3, 2);

fn wizard_at_schedule() -> BookingWizard {
    let mut wizard = BookingWizard::new();
    wizard.select_service("individual").unwrap();
    wizard.advance().unwrap();
    wizard
}

fn wizard_at_details() -> BookingWizard {
    let mut wizard = wizard_at_schedule();
    wizard.set_date(civil::date(2026, 3, 14), TODAY()).unwrap();
    wizard.set_slot(catalog::time_slots()[0]).unwrap();
    wizard.advance().unwrap();
    wizard
}

#[test]
fn new_wizard_opens_on_service_step() {
    let wizard = BookingWizard::new();
    assert_eq!(wizard.step(), BookingStep::Service);
    assert!(wizard.service_id().is_none());
    assert!(!wizard.can_advance());
}

#[test]
fn cannot_advance_without_a_service() {
    let mut wizard = BookingWizard::new();
    let err = wizard.advance().unwrap_err();
    assert!(matches!(
        err,
        BookingError::StepIncomplete {
            step: BookingStep::Service
        }
    ));
    assert_eq!(wizard.step(), BookingStep::Service);
}

#[test]
fn unknown_service_is_rejected() {
    let mut wizard = BookingWizard::new();
    let err = wizard.select_service("hypnotherapy").unwrap_err();
    assert!(matches!(err, BookingError::UnknownService(id) if id == "hypnotherapy"));
    assert!(wizard.service_id().is_none());
}

#[test]
fn schedule_step_needs_both_date_and_slot() {
    let mut wizard = wizard_at_schedule();
    assert!(!wizard.can_advance());

    wizard.set_date(civil::date(2026, 3, 14), TODAY()).unwrap();
    assert!(!wizard.can_advance());
    assert!(wizard.advance().is_err());

    wizard.set_slot(catalog::time_slots()[2]).unwrap();
    assert!(wizard.can_advance());
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), BookingStep::Details);
}

#[test]
fn past_dates_are_rejected() {
    let mut wizard = wizard_at_schedule();
    let err = wizard.set_date(civil::date(2026, 3, 1), TODAY()).unwrap_err();
    assert!(matches!(err, BookingError::DateInPast { .. }));
    assert!(wizard.date().is_none());
}

#[test]
fn same_day_booking_is_allowed() {
    let mut wizard = wizard_at_schedule();
    wizard.set_date(TODAY(), TODAY()).unwrap();
    assert_eq!(wizard.date(), Some(TODAY()));
}

#[test]
fn off_grid_times_are_rejected() {
    let mut wizard = wizard_at_schedule();
    let err = wizard.set_slot(civil::time(11, 0, 0, 0)).unwrap_err();
    assert!(matches!(err, BookingError::UnknownSlot(_)));
    assert!(wizard.slot().is_none());
}

#[test]
fn details_step_needs_name_and_email() {
    let mut wizard = wizard_at_details();

    wizard.contact("Jane Doe", "", "");
    assert!(!wizard.can_advance());
    assert!(wizard.advance().is_err());

    wizard.contact("", "jane@example.com", "");
    assert!(!wizard.can_advance());

    wizard.contact("Jane Doe", "jane@example.com", "");
    assert!(wizard.can_advance());
}

#[test]
fn full_flow_issues_a_confirmation() {
    let mut wizard = wizard_at_details();
    wizard.contact("Jane Doe", "jane@example.com", "First session.");

    let confirmation = wizard.advance().unwrap().unwrap();
    assert_eq!(wizard.step(), BookingStep::Success);

    assert!(confirmation.confirmation_id.starts_with("ML-"));
    assert_eq!(confirmation.confirmation_id.len(), 9);
    assert_eq!(confirmation.service_id, "individual");
    assert_eq!(confirmation.counselor_id, "nidhi-gadoya");
    assert_eq!(confirmation.date, civil::date(2026, 3, 14));
    assert_eq!(confirmation.slot, civil::time(9, 0, 0, 0));
    assert_eq!(confirmation.client_name, "Jane Doe");
    assert_eq!(confirmation.category, DEFAULT_CATEGORY);
    assert_eq!(confirmation.note, "First session.");
    assert_eq!(confirmation.fee_usd, 80);

    // The wizard keeps the receipt for the success screen.
    assert_eq!(
        wizard.confirmation().map(|c| c.confirmation_id.as_str()),
        Some(confirmation.confirmation_id.as_str())
    );
}

#[test]
fn advance_on_success_screen_is_a_noop() {
    let mut wizard = wizard_at_details();
    wizard.contact("Jane Doe", "jane@example.com", "");
    wizard.advance().unwrap();

    assert!(wizard.advance().unwrap().is_none());
    assert_eq!(wizard.step(), BookingStep::Success);
}

#[test]
fn back_walks_to_service_and_stops() {
    let mut wizard = wizard_at_details();
    wizard.back();
    assert_eq!(wizard.step(), BookingStep::Schedule);
    wizard.back();
    assert_eq!(wizard.step(), BookingStep::Service);
    wizard.back();
    assert_eq!(wizard.step(), BookingStep::Service);
}

#[test]
fn back_is_a_noop_on_the_success_screen() {
    let mut wizard = wizard_at_details();
    wizard.contact("Jane Doe", "jane@example.com", "");
    wizard.advance().unwrap();

    wizard.back();
    assert_eq!(wizard.step(), BookingStep::Success);
}

#[test]
fn selections_survive_going_back() {
    let mut wizard = wizard_at_details();
    wizard.back();
    wizard.back();
    assert_eq!(wizard.service_id(), Some("individual"));
    assert_eq!(wizard.date(), Some(civil::date(2026, 3, 14)));
    assert_eq!(wizard.slot(), Some(civil::time(9, 0, 0, 0)));
}

#[test]
fn category_defaults_and_can_be_overridden() {
    let mut wizard = BookingWizard::new();
    assert_eq!(wizard.details().category, "Anxiety & Stress");

    wizard.set_category("Sleep & Rest");
    assert_eq!(wizard.details().category, "Sleep & Rest");
}

#[test]
fn processing_runs_four_stages_in_order() {
    let lines: Vec<&str> = ProcessingStage::ALL
        .iter()
        .map(|s| s.status_line())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Securing session link...",
            "Syncing clinical intake...",
            "Scheduling 24h reminder...",
            "Sending confirmation...",
        ]
    );
}
