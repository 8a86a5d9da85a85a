pub use hyperswitch_domain_models::router_flow_types::vault::{
    ExternalVaultDeleteFlow, ExternalVaultInsertFlow, ExternalVaultRetrieveFlow,
};
pub use hyperswitch_interfaces::api::{
    ExternalVaultDeleteV2, ExternalVaultInsertV2, ExternalVaultRetrieveV2, VaultV2,
};
