#![allow(unused)]

pub mod business_profile;
pub mod customers;
pub mod disputes;
pub mod gsm;
pub mod mandates;
pub mod merchant_account;
pub mod merchant_connector_account;
pub mod payment_method;
pub mod payments;
pub mod refunds;
pub mod routing;

pub use customers::*;
pub use mandates::*;
pub use merchant_account::*;
pub use merchant_connector_account::*;
pub use payment_method::*;
pub use payments::*;
pub use refunds::*;
pub use routing::*;
