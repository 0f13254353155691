//! Orderer models: the orderer.yaml configuration tree for raft nodes,
//! create/import/update bodies, and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Bccsp, ConfigObject, GenericResources, Hsm, MspCryptoField, NodeOu, ResourceObject,
    StorageObject,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererKeepalive {
    #[serde(rename = "ServerMinInterval", skip_serializing_if = "Option::is_none")]
    pub server_min_interval: Option<String>,
    #[serde(rename = "ServerInterval", skip_serializing_if = "Option::is_none")]
    pub server_interval: Option<String>,
    #[serde(rename = "ServerTimeout", skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererAuthentication {
    #[serde(rename = "TimeWindow", skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    #[serde(rename = "NoExpirationChecks", skip_serializing_if = "Option::is_none")]
    pub no_expiration_checks: Option<bool>,
}

/// The `General` section of orderer.yaml for creates.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererGeneral {
    #[serde(rename = "Keepalive", skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<ConfigOrdererKeepalive>,
    #[serde(rename = "BCCSP", skip_serializing_if = "Option::is_none")]
    pub bccsp: Option<Bccsp>,
    #[serde(rename = "Authentication", skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ConfigOrdererAuthentication>,
}

/// The `General` section of orderer.yaml for updates. BCCSP cannot change
/// after deployment and is absent here.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererGeneralUpdate {
    #[serde(rename = "Keepalive", skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<ConfigOrdererKeepalive>,
    #[serde(rename = "Authentication", skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ConfigOrdererAuthentication>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererDebug {
    #[serde(rename = "BroadcastTraceDir", skip_serializing_if = "Option::is_none")]
    pub broadcast_trace_dir: Option<String>,
    #[serde(rename = "DeliverTraceDir", skip_serializing_if = "Option::is_none")]
    pub deliver_trace_dir: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererMetricsStatsd {
    #[serde(rename = "Network", skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "WriteInterval", skip_serializing_if = "Option::is_none")]
    pub write_interval: Option<String>,
    #[serde(rename = "Prefix", skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererMetrics {
    /// `prometheus`, `statsd`, or `disabled`.
    #[serde(rename = "Provider", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(rename = "Statsd", skip_serializing_if = "Option::is_none")]
    pub statsd: Option<ConfigOrdererMetricsStatsd>,
}

/// Orderer configuration override for creates, one per raft node.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererCreate {
    #[serde(rename = "General", skip_serializing_if = "Option::is_none")]
    pub general: Option<ConfigOrdererGeneral>,
    #[serde(rename = "Debug", skip_serializing_if = "Option::is_none")]
    pub debug: Option<ConfigOrdererDebug>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConfigOrdererMetrics>,
}

/// Orderer configuration deltas for updates.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigOrdererUpdate {
    #[serde(rename = "General", skip_serializing_if = "Option::is_none")]
    pub general: Option<ConfigOrdererGeneralUpdate>,
    #[serde(rename = "Debug", skip_serializing_if = "Option::is_none")]
    pub debug: Option<ConfigOrdererDebug>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConfigOrdererMetrics>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateOrdererRaftBodyResources {
    pub orderer: ResourceObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ResourceObject>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateOrdererRaftBodyStorage {
    pub orderer: StorageObject,
}

/// Request body for `createOrderer`.
///
/// The per-node arrays (`config`, `config_override`, `zone`, `region`) are
/// index-aligned: element `n` configures raft node `n`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateOrdererBody {
    /// Only `raft` ordering services can be created.
    pub orderer_type: String,
    pub msp_id: String,
    pub display_name: String,
    pub config: Vec<ConfigObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Vec<ConfigOrdererCreate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<CreateOrdererRaftBodyResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CreateOrdererRaftBodyStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsm: Option<Hsm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Request body for `importOrderer`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImportOrdererBody {
    pub cluster_name: String,
    pub display_name: String,
    pub grpcwp_url: String,
    pub msp: MspCryptoField,
    pub msp_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for `updateOrderer`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateOrdererBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<ConfigOrdererUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ou: Option<NodeOu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<CreateOrdererRaftBodyResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

/// Request body for `editOrderer` (metadata edits, no redeploy).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditOrdererBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpcwp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    /// Mark the pre-created orderer as finished joining a consortium.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consenter_proposal_fin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OrdererResponseResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<GenericResources>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OrdererResponseStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<StorageObject>,
}

/// Orderer component descriptor as returned by create/import/update/edit.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OrdererResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpcwp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consenter_proposal_fin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ou: Option<NodeOu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp: Option<MspCryptoField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<OrdererResponseResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<OrdererResponseStorage>,
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
