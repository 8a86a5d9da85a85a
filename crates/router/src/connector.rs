pub mod aci;
pub mod adyen;
pub mod applepay;
pub mod authorizedotnet;
pub mod braintree;
pub mod checkout;
pub mod stripe;

pub use self::{
    aci::Aci, adyen::Adyen, applepay::Applepay, authorizedotnet::Authorizedotnet,
    braintree::Braintree, checkout::Checkout, stripe::Stripe,
};
