//! Page state models and the pure logic behind each interaction.
//!
//! DESIGN
//! ======
//! Every decision the page makes lives here as plain data plus functions so
//! it can be tested on the host. Components own the signals and the timers;
//! these modules own the rules.

pub mod contact;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod typing;
