//! Outbound delivery for the contact form.

pub mod contact;
