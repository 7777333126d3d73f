//! Contact form submission lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. The machine decides
//! what the form shows; the component performs the send and renders the
//! outcome. Button restoration happens on every `finish`, whatever the result.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::net::contact::ContactError;
use crate::state::toast::ToastKind;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Snapshot of the four form fields at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the form should do once a send settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// `Succeeded` or `Failed`; the machine itself is back to `Idle`.
    pub settled: SubmitPhase,
    pub kind: ToastKind,
    pub notice: &'static str,
    pub clear_fields: bool,
}

/// Submit button presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self { label: SUBMIT_LABEL.to_owned(), disabled: false }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormMachine {
    phase: SubmitPhase,
    button: SubmitButton,
    original_label: Option<String>,
}

impl ContactFormMachine {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Start a submission from the current field values.
    ///
    /// Returns the payload to send, or `None` if a submission is already in
    /// flight.
    pub fn begin(&mut self, fields: &ContactMessage) -> Option<ContactMessage> {
        if self.phase != SubmitPhase::Idle {
            log::warn!("contact form submit ignored while {:?}", self.phase);
            return None;
        }
        self.original_label = Some(std::mem::replace(&mut self.button.label, SENDING_LABEL.to_owned()));
        self.button.disabled = true;
        self.phase = SubmitPhase::Submitting;
        Some(fields.clone())
    }

    /// Settle the in-flight submission and restore the submit button.
    pub fn finish(&mut self, result: &Result<(), ContactError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => SubmitOutcome {
                settled: SubmitPhase::Succeeded,
                kind: ToastKind::Success,
                notice: SUCCESS_MESSAGE,
                clear_fields: true,
            },
            Err(e) => {
                log::warn!("contact form send failed: {e}");
                SubmitOutcome {
                    settled: SubmitPhase::Failed,
                    kind: ToastKind::Error,
                    notice: FAILURE_MESSAGE,
                    clear_fields: false,
                }
            }
        };
        if let Some(label) = self.original_label.take() {
            self.button.label = label;
        }
        self.button.disabled = false;
        self.phase = SubmitPhase::Idle;
        outcome
    }
}
