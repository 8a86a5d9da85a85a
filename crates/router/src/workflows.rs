#[cfg(feature = "email")]
pub mod api_key_expiry;
pub mod outgoing_webhook_retry;
pub mod payment_sync;
pub mod refund_router;
#[cfg(feature = "payouts")]
pub mod stripe_attach_external_account;
pub mod tokenized_data;
