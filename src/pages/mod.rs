//! Page-level composition.

pub mod home;
