use futures::executor::block_on;

use super::*;
use crate::state::contact::SubmitButton;
use crate::state::toast::{ToastKind, ToastPhase};

fn filled() -> ContactMessage {
    ContactMessage {
        name: "Linus".to_owned(),
        email: "linus@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Saw your projects.".to_owned(),
    }
}

#[test]
fn simulated_submit_clears_fields_and_raises_success_toast() {
    let fields = RwSignal::new(filled());
    let machine = RwSignal::new(ContactFormMachine::default());
    let toasts = RwSignal::new(ToastStack::default());

    block_on(submit(fields, machine, toasts, ContactTransport::default()));

    assert_eq!(fields.get_untracked(), ContactMessage::default());
    machine.with_untracked(|m| {
        assert_eq!(m.phase(), SubmitPhase::Idle);
        assert_eq!(m.button(), &SubmitButton::default());
    });
    toasts.with_untracked(|stack| {
        assert_eq!(stack.len(), 1);
        let toast = &stack.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.phase, ToastPhase::Entering);
        assert_eq!(toast.message, "Message sent successfully!");
    });
}

#[test]
fn failed_submit_keeps_fields_and_raises_error_toast() {
    let fields = RwSignal::new(filled());
    let machine = RwSignal::new(ContactFormMachine::default());
    let toasts = RwSignal::new(ToastStack::default());
    let transport = ContactTransport::Http { endpoint: "/api/contact".to_owned() };

    block_on(submit(fields, machine, toasts, transport));

    assert_eq!(fields.get_untracked(), filled());
    assert_eq!(machine.with_untracked(ContactFormMachine::phase), SubmitPhase::Idle);
    toasts.with_untracked(|stack| {
        assert_eq!(stack.toasts()[0].kind, ToastKind::Error);
        assert_eq!(stack.toasts()[0].message, "Failed to send message. Please try again.");
    });
}
