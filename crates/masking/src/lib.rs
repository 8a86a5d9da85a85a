#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types and traits for secret management which help ensure secrets
//! are not accidentally copied, logged, or otherwise exposed.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

mod strategy;

pub use strategy::{Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, PeekInterface};

mod secret;
pub use secret::Secret;

mod serde_impl;

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, PeekInterface};
}
