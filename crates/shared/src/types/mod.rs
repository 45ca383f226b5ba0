//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{CENT_TOLERANCE, format_usd, or_zero};
