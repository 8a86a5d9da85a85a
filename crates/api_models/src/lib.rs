#![forbid(unsafe_code)]
pub mod admin;
pub mod bank_accounts;
pub mod cards;
pub mod customers;
pub mod disputes;
pub mod enums;
pub mod files;
pub mod mandates;
pub mod payment_methods;
pub mod payments;
pub mod payouts;
pub mod refunds;
pub mod webhooks;
