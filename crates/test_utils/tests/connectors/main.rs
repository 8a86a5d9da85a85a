#![allow(
    clippy::expect_used,
    clippy::panic,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
mod aci_ui;
mod adyen_uk_ui;
mod airwallex_ui;
mod authorizedotnet_ui;
mod bambora_ui;
mod bluesnap_ui;
mod checkout_ui;
mod globalpay_ui;
mod mollie_ui;
mod multisafepay_ui;
mod nexinets_ui;
mod noon_ui;
mod nuvei_ui;
mod paypal_ui;
mod payu_ui;
mod selenium;
mod shift4_ui;
mod stripe_ui;
mod trustpay_3ds_ui;
mod worldline_ui;
mod zen_ui;
