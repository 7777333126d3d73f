//! Browser-facing helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from component logic. Without the
//! `csr` feature they compile to inert stubs so the crate tests on the host.

pub mod dark_mode;
pub mod dom;
