mod address;
pub mod behaviour {
    pub use hyperswitch_domain_models::behaviour::{Conversion, ReverseConversion};
}

mod customer;
mod event;
mod merchant_account;
mod merchant_connector_account;
mod merchant_key_store {
    pub use hyperswitch_domain_models::merchant_key_store::MerchantKeyStore;
}
pub mod payments;
pub mod types;
#[cfg(feature = "olap")]
pub mod user;
pub mod user_key_store;

pub use address::*;
pub use customer::*;
pub use event::*;
pub use merchant_account::*;
pub use merchant_connector_account::*;
pub use merchant_key_store::*;
pub use payments::*;
#[cfg(feature = "olap")]
pub use user::*;
pub use user_key_store::*;
