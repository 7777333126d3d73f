//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page markup (ids, classes and `data-*` attributes the
//! stylesheet targets) and read/write shared state from Leptos context.

pub mod contact_form;
pub mod hero;
pub mod navbar;
pub mod profile;
pub mod project_grid;
pub mod resume_section;
pub mod theme_toggle;
pub mod toast_host;
pub mod typed_title;
