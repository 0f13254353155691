//! Generic component models: the union descriptor returned by the
//! component-lifecycle reads and the delete/remove responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{GenericResources, MspCryptoField, NodeOu, StorageObject};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericComponentResponseResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<GenericResources>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericComponentResponseStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<StorageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<StorageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<StorageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<StorageObject>,
}

/// Component descriptor covering every component type.
///
/// Fields that only apply to one type (for example `ca_name`,
/// `cluster_name`, `state_db`) are simply absent for the others. Deployment
/// attributes and parsed certificates appear only when the corresponding
/// query flags requested them.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericComponentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `fabric-ca`, `fabric-peer`, `fabric-orderer`, or `msp`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpcwp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp: Option<MspCryptoField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ou: Option<NodeOu>,
    /// Only present when `ca_attrs=included` on a CA component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consenter_proposal_fin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<GenericComponentResponseResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<GenericComponentResponseStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Millisecond UNIX timestamp of creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

/// Outcome of a single component delete or remove.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteComponentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Response of the bulk Kubernetes deletes (`deleteComponentsByTag`,
/// `deleteAllComponents`).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteMultiComponentsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Vec<DeleteComponentResponse>>,
}

/// Response of the bulk import removal (`removeComponentsByTag`).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RemoveMultiComponentsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<Vec<DeleteComponentResponse>>,
}
