//! Operation methods, one module per endpoint family.
//!
//! Every operation follows the same sequence: validate required fields,
//! render the path from the catalog, assemble query parameters and headers,
//! dispatch, and decode the typed result. Options records live next to the
//! methods that consume them.

mod ca;
mod components;
mod msp;
mod orderer;
mod peer;
mod platform;

pub use ca::{
    CreateCaOptions, EditCaOptions, ImportCaOptions, SubmitBlockOptions, UpdateCaOptions,
};
pub use components::{
    ATTRS_INCLUDED, ATTRS_OMITTED, CACHE_SKIP, CACHE_USE, COMPONENT_TYPE_FABRIC_CA,
    COMPONENT_TYPE_FABRIC_ORDERER, COMPONENT_TYPE_FABRIC_PEER, COMPONENT_TYPE_MSP,
    DeleteAllComponentsOptions, DeleteComponentOptions, DeleteComponentsByTagOptions,
    GetComponentOptions, GetComponentsByTagOptions, GetComponentsByTypeOptions,
    ListComponentsOptions, RemoveComponentOptions, RemoveComponentsByTagOptions,
};
pub use msp::{
    EditAdminCertsOptions, EditMspOptions, GetMspCertificateOptions, ImportMspOptions,
};
pub use orderer::{
    CreateOrdererOptions, EditOrdererOptions, ImportOrdererOptions, ORDERER_TYPE_RAFT,
    UpdateOrdererOptions,
};
pub use peer::{CreatePeerOptions, EditPeerOptions, ImportPeerOptions, UpdatePeerOptions};
pub use platform::{
    ArchiveNotificationsOptions, ClearCachesOptions, DeleteAllNotificationsOptions,
    DeleteAllSessionsOptions, DeleteSigTxOptions, EditSettingsOptions, GetFabricVersionsOptions,
    GetHealthOptions, GetPostmanOptions, GetSettingsOptions, GetSwaggerOptions,
    ListNotificationsOptions, POSTMAN_AUTH_API_KEY, POSTMAN_AUTH_BASIC, POSTMAN_AUTH_BEARER,
    RestartOptions,
};

use crate::ClientError;
use crate::catalog::OperationDefinition;

/// Rejects an empty required field before anything is dispatched.
pub(crate) fn require_field<'a>(
    operation: &'static OperationDefinition,
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ClientError> {
    if value.is_empty() {
        Err(ClientError::MissingRequiredField {
            operation_id: operation.operation_id,
            field,
        })
    } else {
        Ok(value)
    }
}
