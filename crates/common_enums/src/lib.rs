#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Enums shared across the offsite payments workspace.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

pub mod enums;

pub use enums::{CountryAlpha2, Currency, NotificationStatus};
