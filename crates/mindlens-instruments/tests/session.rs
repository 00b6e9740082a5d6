use mindlens_instruments::error::ScreenerError;
use mindlens_instruments::instruments::phq9::Phq9;
use mindlens_instruments::scoring::Severity;
use mindlens_instruments::session::ScreenerSession;

fn completed_session(values: &[u8]) -> ScreenerSession {
    let mut session = ScreenerSession::new(&Phq9);
    for &v in values {
        session.submit_answer(v).unwrap();
    }
    session
}

#[test]
fn fresh_session_starts_blank() {
    let session = ScreenerSession::new(&Phq9);
    assert_eq!(session.instrument_id(), "phq9");
    assert_eq!(session.item_count(), 9);
    assert_eq!(session.current_index(), 0);
    assert!(!session.completed());
    assert!(session.answers().iter().all(|a| a.is_none()));
}

#[test]
fn out_of_scale_values_are_rejected_without_mutation() {
    let mut session = ScreenerSession::new(&Phq9);
    session.submit_answer(2).unwrap();

    for bad in [4u8, 7, 100, 255] {
        let before = session.clone();
        let err = session.submit_answer(bad).unwrap_err();
        assert!(matches!(err, ScreenerError::InvalidAnswerValue(v) if v == bad));
        assert_eq!(session.answers(), before.answers());
        assert_eq!(session.current_index(), before.current_index());
        assert_eq!(session.completed(), before.completed());
    }
}

#[test]
fn nine_valid_submits_complete_the_session() {
    let mut session = ScreenerSession::new(&Phq9);
    for i in 0..9 {
        assert!(!session.completed());
        assert_eq!(session.current_index(), i);
        session.submit_answer(1).unwrap();
    }
    assert!(session.completed());
    assert_eq!(session.current_index(), 8);
}

#[test]
fn go_back_on_first_item_is_a_noop() {
    let mut session = ScreenerSession::new(&Phq9);
    session.go_back();
    assert_eq!(session.current_index(), 0);
    assert!(!session.completed());
}

#[test]
fn go_back_keeps_the_earlier_answer_until_resubmitted() {
    let mut session = ScreenerSession::new(&Phq9);
    session.submit_answer(3).unwrap();
    session.go_back();

    assert_eq!(session.current_index(), 0);
    assert_eq!(session.answers()[0], Some(3));

    session.submit_answer(1).unwrap();
    assert_eq!(session.answers()[0], Some(1));
    assert_eq!(session.current_index(), 1);
}

#[test]
fn submit_after_completion_overwrites_the_last_answer() {
    let mut session = completed_session(&[0; 9]);
    assert!(session.completed());

    session.submit_answer(3).unwrap();
    assert!(session.completed());
    assert_eq!(session.current_index(), 8);
    assert_eq!(session.answers()[8], Some(3));
    assert_eq!(session.compute_score().unwrap().total, 3);
}

#[test]
fn all_zeros_scores_zero_minimal() {
    let result = completed_session(&[0; 9]).compute_score().unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.band, Severity::Minimal);
}

#[test]
fn all_threes_scores_twenty_seven_top_band() {
    let result = completed_session(&[3; 9]).compute_score().unwrap();
    assert_eq!(result.total, 27);
    assert_eq!(result.band, Severity::ModeratelySevereToSevere);
    assert_eq!(result.label, "Moderately Severe to Severe");
}

#[test]
fn five_ones_scores_five_mild() {
    let result = completed_session(&[1, 1, 1, 1, 1, 0, 0, 0, 0])
        .compute_score()
        .unwrap();
    assert_eq!(result.total, 5);
    assert_eq!(result.band, Severity::Mild);
}

#[test]
fn score_before_completion_is_incomplete() {
    let mut session = ScreenerSession::new(&Phq9);
    for _ in 0..8 {
        session.submit_answer(3).unwrap();
    }
    assert!(!session.completed());
    let err = session.compute_score().unwrap_err();
    assert!(matches!(err, ScreenerError::IncompleteSession));
}

#[test]
fn compute_score_is_pure_and_idempotent() {
    let session = completed_session(&[2, 0, 1, 3, 2, 1, 0, 3, 2]);
    let first = session.compute_score().unwrap();
    let second = session.compute_score().unwrap();

    assert_eq!(first.total, second.total);
    assert_eq!(first.band, second.band);
    assert_eq!(first.label, second.label);
    assert_eq!(first.guidance, second.guidance);
    assert_eq!(session.answers(), completed_session(&[2, 0, 1, 3, 2, 1, 0, 3, 2]).answers());
}

#[test]
fn self_harm_item_scores_like_any_other() {
    // Only the ninth item nonzero: a plain low-band result, no special
    // handling anywhere in the engine.
    let result = completed_session(&[0, 0, 0, 0, 0, 0, 0, 0, 3])
        .compute_score()
        .unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.band, Severity::Minimal);
}

#[test]
fn deserialized_session_with_a_hole_is_incomplete() {
    let json = r#"{
        "instrument_id": "phq9",
        "answers": [0, 1, 2, null, 0, 0, 0, 0, 0],
        "current_index": 8,
        "completed": true
    }"#;
    let session: ScreenerSession = serde_json::from_str(json).unwrap();
    let err = session.compute_score().unwrap_err();
    assert!(matches!(err, ScreenerError::IncompleteSession));
}

#[test]
fn deserialized_session_with_retired_instrument_fails_lookup() {
    let json = r#"{
        "instrument_id": "mmpi2",
        "answers": [0, 0, 0, 0, 0, 0, 0, 0, 0],
        "current_index": 8,
        "completed": true
    }"#;
    let session: ScreenerSession = serde_json::from_str(json).unwrap();
    let err = session.compute_score().unwrap_err();
    assert!(matches!(err, ScreenerError::UnknownInstrument(id) if id == "mmpi2"));
}

#[test]
fn deserialized_session_with_off_scale_answer_fails_scoring() {
    let json = r#"{
        "instrument_id": "phq9",
        "answers": [9, 0, 0, 0, 0, 0, 0, 0, 0],
        "current_index": 8,
        "completed": true
    }"#;
    let session: ScreenerSession = serde_json::from_str(json).unwrap();
    let err = session.compute_score().unwrap_err();
    assert!(matches!(err, ScreenerError::InvalidAnswerValue(9)));
}

#[test]
fn two_sessions_do_not_share_state() {
    let mut a = ScreenerSession::new(&Phq9);
    let b = ScreenerSession::new(&Phq9);
    a.submit_answer(3).unwrap();

    assert_eq!(a.current_index(), 1);
    assert_eq!(b.current_index(), 0);
    assert!(b.answers().iter().all(|slot| slot.is_none()));
}
