use super::*;
use crate::state::auth::LoginForm;

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_state_default_is_idle() {
    let state = FormState::<LoginForm>::default();
    assert_eq!(state.fields, LoginForm::default());
    assert!(state.feedback.is_none());
    assert!(!state.submitting);
}

// =============================================================
// Edits
// =============================================================

#[test]
fn edit_applies_the_field_change() {
    let mut state = FormState::<LoginForm>::default();
    state.edit(|f| f.email = "user@example.com".to_owned());
    assert_eq!(state.fields.email, "user@example.com");
}

#[test]
fn edit_clears_feedback_regardless_of_field() {
    let mut state = FormState::<LoginForm>::default();
    state.feedback = Some(Feedback::error("Email is required"));
    state.edit(|f| f.password = "x".to_owned());
    assert!(state.feedback.is_none());

    state.feedback = Some(Feedback::success("done"));
    state.edit(|f| f.email = "y".to_owned());
    assert!(state.feedback.is_none());
}

#[test]
fn edit_does_not_touch_submitting() {
    let mut state = FormState::<LoginForm>::default();
    state.submitting = true;
    state.edit(|f| f.email = "typed-mid-flight".to_owned());
    assert!(state.submitting);
}

// =============================================================
// Submission phases
// =============================================================

#[test]
fn begin_submit_raises_flag_and_clears_feedback() {
    let mut state = FormState::<LoginForm>::default();
    state.feedback = Some(Feedback::error("old"));
    state.begin_submit();
    assert!(state.submitting);
    assert!(state.feedback.is_none());
}

#[test]
fn reject_records_error_without_starting_submission() {
    let mut state = FormState::<LoginForm>::default();
    state.reject("Email is required");
    assert!(!state.submitting);
    let feedback = state.feedback.expect("feedback");
    assert_eq!(feedback.kind, FeedbackKind::Error);
    assert_eq!(feedback.text, "Email is required");
}

// =============================================================
// Feedback constructors
// =============================================================

#[test]
fn feedback_constructors_tag_kind() {
    assert_eq!(Feedback::success("ok").kind, FeedbackKind::Success);
    assert_eq!(Feedback::error("no").kind, FeedbackKind::Error);
}
