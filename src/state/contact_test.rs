use futures::executor::block_on;

use super::*;
use crate::net::contact::ContactTransport;

fn filled() -> ContactMessage {
    ContactMessage {
        name: "Grace".to_owned(),
        email: "grace@example.com".to_owned(),
        subject: "Collaboration".to_owned(),
        message: "Let's talk.".to_owned(),
    }
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_switches_button_to_sending_and_disables_it() {
    let mut form = ContactFormMachine::default();
    let payload = form.begin(&filled());
    assert_eq!(payload, Some(filled()));
    assert_eq!(form.phase(), SubmitPhase::Submitting);
    assert_eq!(form.button().label, SENDING_LABEL);
    assert!(form.button().disabled);
}

#[test]
fn begin_while_submitting_is_rejected() {
    let mut form = ContactFormMachine::default();
    form.begin(&filled());
    assert_eq!(form.begin(&filled()), None);
    assert_eq!(form.phase(), SubmitPhase::Submitting);
}

// =============================================================
// finish
// =============================================================

#[test]
fn success_clears_fields_and_restores_button_label() {
    let mut form = ContactFormMachine::default();
    let mut fields = filled();
    form.begin(&fields);

    let outcome = form.finish(&Ok(()));
    if outcome.clear_fields {
        fields.clear();
    }

    assert_eq!(outcome.kind, ToastKind::Success);
    assert_eq!(outcome.notice, SUCCESS_MESSAGE);
    assert_eq!(fields, ContactMessage::default());
    assert_eq!(outcome.settled, SubmitPhase::Succeeded);
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.button(), &SubmitButton { label: SUBMIT_LABEL.to_owned(), disabled: false });
}

#[test]
fn failure_keeps_fields_and_still_restores_button() {
    let mut form = ContactFormMachine::default();
    form.begin(&filled());

    let outcome = form.finish(&Err(ContactError::Rejected { status: 503 }));

    assert_eq!(outcome.settled, SubmitPhase::Failed);
    assert_eq!(outcome.kind, ToastKind::Error);
    assert_eq!(outcome.notice, FAILURE_MESSAGE);
    assert!(!outcome.clear_fields);
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.button(), &SubmitButton::default());
}

#[test]
fn repeated_submissions_leave_machine_at_rest() {
    let mut form = ContactFormMachine::default();
    for _ in 0..50 {
        form.begin(&filled());
        form.finish(&Ok(()));
    }
    assert_eq!(form, ContactFormMachine::default());
}

#[test]
fn form_can_resubmit_after_failure() {
    let mut form = ContactFormMachine::default();
    form.begin(&filled());
    form.finish(&Err(ContactError::Transport("offline".to_owned())));
    assert!(form.begin(&filled()).is_some());
}

#[test]
fn simulated_submit_walks_idle_submitting_succeeded_idle() {
    let mut form = ContactFormMachine::default();
    let transport = ContactTransport::default();

    assert_eq!(form.phase(), SubmitPhase::Idle);
    let payload = form.begin(&filled()).expect("idle form accepts submit");
    assert_eq!(form.phase(), SubmitPhase::Submitting);
    let result = block_on(transport.send(&payload));
    let outcome = form.finish(&result);

    assert_eq!(outcome.settled, SubmitPhase::Succeeded);
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert_eq!(form.button(), &SubmitButton::default());
}
