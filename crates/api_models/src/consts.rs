/// Max payment intent fulfillment expiry
pub const MAX_ORDER_FULFILLMENT_EXPIRY: i64 = 1800;

/// Min payment intent fulfillment expiry
pub const MIN_ORDER_FULFILLMENT_EXPIRY: i64 = 60;
