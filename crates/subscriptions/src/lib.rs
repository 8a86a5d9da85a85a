//! Subscription management crate for Hyperswitch
//!
//! This crate provides functionality for managing subscriptions, including:
//! - Subscription creation and management
//! - Invoice handling
//! - Billing processor integration
//! - Payment processing for subscriptions

#[cfg(feature = "v1")]
pub mod core;
pub mod helpers;
pub mod state;
pub mod types;
#[cfg(feature = "v1")]
pub mod workflows;

pub mod webhooks;

pub use core::*;

pub use types::*;
