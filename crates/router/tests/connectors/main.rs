#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod aci;
mod adyen;
mod airwallex;
mod authorizedotnet;
mod bambora;
mod bluesnap;
mod checkout;
mod coinbase;
mod connector_auth;
mod cybersource;
mod dlocal;
#[cfg(feature = "dummy_connector")]
mod dummyconnector;
mod fiserv;
mod forte;
mod globalpay;
mod mollie;
mod multisafepay;
mod nexinets;
mod nuvei;
mod nuvei_ui;
mod opennode;
mod payeezy;
mod paypal;
mod payu;
mod rapyd;
mod selenium;
mod shift4;
mod stripe;
mod stripe_ui;
mod trustpay;
mod utils;
mod worldline;
mod worldpay;
mod zen;
