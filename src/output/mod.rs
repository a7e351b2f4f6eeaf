//! Terminal output formatting
//!
//! The pick trace goes to the diagnostic stream, the passphrase to standard output.

pub mod display;

pub use display::{format_pick, print_passphrase, print_pick_trace};
