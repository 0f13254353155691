//! Peer models: the Fabric core.yaml configuration tree exposed for
//! creates/updates, peer resource and storage descriptors, and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Bccsp, ConfigObject, GenericResources, Hsm, Metrics, MspCryptoField, NodeOu, ResourceObject,
    ResourceObjectCouchDb, ResourceObjectFabV1, ResourceObjectFabV2, StorageObject,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerKeepaliveClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerKeepaliveDeliveryClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// gRPC keepalive settings between the peer and its clients.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerKeepalive {
    #[serde(rename = "minInterval", skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ConfigPeerKeepaliveClient>,
    #[serde(rename = "deliveryClient", skip_serializing_if = "Option::is_none")]
    pub delivery_client: Option<ConfigPeerKeepaliveDeliveryClient>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGossipElection {
    #[serde(rename = "startupGracePeriod", skip_serializing_if = "Option::is_none")]
    pub startup_grace_period: Option<String>,
    #[serde(
        rename = "membershipSampleInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub membership_sample_interval: Option<String>,
    #[serde(
        rename = "leaderAliveThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub leader_alive_threshold: Option<String>,
    #[serde(
        rename = "leaderElectionDuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub leader_election_duration: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGossipPvtDataPolicy {
    #[serde(rename = "requiredPeerCount", skip_serializing_if = "Option::is_none")]
    pub required_peer_count: Option<i64>,
    #[serde(rename = "maxPeerCount", skip_serializing_if = "Option::is_none")]
    pub max_peer_count: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGossipPvtData {
    #[serde(rename = "pullRetryThreshold", skip_serializing_if = "Option::is_none")]
    pub pull_retry_threshold: Option<String>,
    #[serde(
        rename = "transientstoreMaxBlockRetention",
        skip_serializing_if = "Option::is_none"
    )]
    pub transientstore_max_block_retention: Option<i64>,
    #[serde(rename = "pushAckTimeout", skip_serializing_if = "Option::is_none")]
    pub push_ack_timeout: Option<String>,
    #[serde(rename = "btlPullMargin", skip_serializing_if = "Option::is_none")]
    pub btl_pull_margin: Option<i64>,
    #[serde(rename = "reconcileBatchSize", skip_serializing_if = "Option::is_none")]
    pub reconcile_batch_size: Option<i64>,
    #[serde(
        rename = "reconcileSleepInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub reconcile_sleep_interval: Option<String>,
    #[serde(
        rename = "reconciliationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub reconciliation_enabled: Option<bool>,
    #[serde(
        rename = "skipPullingInvalidTransactionsDuringCommit",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_pulling_invalid_transactions_during_commit: Option<bool>,
    #[serde(
        rename = "implicitCollectionDisseminationPolicy",
        skip_serializing_if = "Option::is_none"
    )]
    pub implicit_collection_dissemination_policy: Option<ConfigPeerGossipPvtDataPolicy>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGossipState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "checkInterval", skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<String>,
    #[serde(rename = "responseTimeout", skip_serializing_if = "Option::is_none")]
    pub response_timeout: Option<String>,
    #[serde(rename = "batchSize", skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i64>,
    #[serde(rename = "blockBufferSize", skip_serializing_if = "Option::is_none")]
    pub block_buffer_size: Option<i64>,
    #[serde(rename = "maxRetries", skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
}

/// Gossip dissemination settings, exposed purely as configuration fields.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGossip {
    #[serde(rename = "useLeaderElection", skip_serializing_if = "Option::is_none")]
    pub use_leader_election: Option<bool>,
    #[serde(rename = "orgLeader", skip_serializing_if = "Option::is_none")]
    pub org_leader: Option<bool>,
    #[serde(
        rename = "membershipTrackerInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub membership_tracker_interval: Option<String>,
    #[serde(
        rename = "maxBlockCountToStore",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_block_count_to_store: Option<i64>,
    #[serde(
        rename = "maxPropagationBurstLatency",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_propagation_burst_latency: Option<String>,
    #[serde(
        rename = "maxPropagationBurstSize",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_propagation_burst_size: Option<i64>,
    #[serde(rename = "propagateIterations", skip_serializing_if = "Option::is_none")]
    pub propagate_iterations: Option<i64>,
    #[serde(rename = "pullInterval", skip_serializing_if = "Option::is_none")]
    pub pull_interval: Option<String>,
    #[serde(rename = "pullPeerNum", skip_serializing_if = "Option::is_none")]
    pub pull_peer_num: Option<i64>,
    #[serde(
        rename = "requestStateInfoInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_state_info_interval: Option<String>,
    #[serde(
        rename = "publishStateInfoInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_state_info_interval: Option<String>,
    #[serde(
        rename = "stateInfoRetentionInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_info_retention_interval: Option<String>,
    #[serde(rename = "publishCertPeriod", skip_serializing_if = "Option::is_none")]
    pub publish_cert_period: Option<String>,
    #[serde(
        rename = "skipBlockVerification",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_block_verification: Option<bool>,
    #[serde(rename = "dialTimeout", skip_serializing_if = "Option::is_none")]
    pub dial_timeout: Option<String>,
    #[serde(rename = "connTimeout", skip_serializing_if = "Option::is_none")]
    pub conn_timeout: Option<String>,
    #[serde(rename = "recvBuffSize", skip_serializing_if = "Option::is_none")]
    pub recv_buff_size: Option<i64>,
    #[serde(rename = "sendBuffSize", skip_serializing_if = "Option::is_none")]
    pub send_buff_size: Option<i64>,
    #[serde(rename = "digestWaitTime", skip_serializing_if = "Option::is_none")]
    pub digest_wait_time: Option<String>,
    #[serde(rename = "requestWaitTime", skip_serializing_if = "Option::is_none")]
    pub request_wait_time: Option<String>,
    #[serde(rename = "responseWaitTime", skip_serializing_if = "Option::is_none")]
    pub response_wait_time: Option<String>,
    #[serde(rename = "aliveTimeInterval", skip_serializing_if = "Option::is_none")]
    pub alive_time_interval: Option<String>,
    #[serde(
        rename = "aliveExpirationTimeout",
        skip_serializing_if = "Option::is_none"
    )]
    pub alive_expiration_timeout: Option<String>,
    #[serde(rename = "reconnectInterval", skip_serializing_if = "Option::is_none")]
    pub reconnect_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub election: Option<ConfigPeerGossipElection>,
    #[serde(rename = "pvtData", skip_serializing_if = "Option::is_none")]
    pub pvt_data: Option<ConfigPeerGossipPvtData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ConfigPeerGossipState>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerAuthentication {
    /// Tolerance window for client clock skew, e.g. `15m`.
    pub timewindow: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerClient {
    #[serde(rename = "connTimeout")]
    pub conn_timeout: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerDeliveryclientAddressOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "caCertsFile", skip_serializing_if = "Option::is_none")]
    pub ca_certs_file: Option<String>,
}

/// Settings for the peer's ordering-service delivery client.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerDeliveryclient {
    #[serde(
        rename = "reconnectTotalTimeThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub reconnect_total_time_threshold: Option<String>,
    #[serde(rename = "connTimeout", skip_serializing_if = "Option::is_none")]
    pub conn_timeout: Option<String>,
    #[serde(
        rename = "reConnectBackoffThreshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub re_connect_backoff_threshold: Option<String>,
    #[serde(rename = "addressOverrides", skip_serializing_if = "Option::is_none")]
    pub address_overrides: Option<Vec<ConfigPeerDeliveryclientAddressOverride>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerAdminService {
    #[serde(rename = "listenAddress")]
    pub listen_address: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerDiscovery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "authCacheEnabled", skip_serializing_if = "Option::is_none")]
    pub auth_cache_enabled: Option<bool>,
    #[serde(rename = "authCacheMaxSize", skip_serializing_if = "Option::is_none")]
    pub auth_cache_max_size: Option<i64>,
    #[serde(
        rename = "authCachePurgeRetentionRatio",
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_cache_purge_retention_ratio: Option<f64>,
    #[serde(
        rename = "orgMembersAllowedAccess",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_members_allowed_access: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerLimitsConcurrency {
    #[serde(rename = "endorserService", skip_serializing_if = "Option::is_none")]
    pub endorser_service: Option<i64>,
    #[serde(rename = "deliverService", skip_serializing_if = "Option::is_none")]
    pub deliver_service: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<ConfigPeerLimitsConcurrency>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// The `peer` section of core.yaml for creates.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerCreatePeer {
    /// Peer id within the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "networkId", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<ConfigPeerKeepalive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gossip: Option<ConfigPeerGossip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ConfigPeerAuthentication>,
    #[serde(rename = "BCCSP", skip_serializing_if = "Option::is_none")]
    pub bccsp: Option<Bccsp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ConfigPeerClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveryclient: Option<ConfigPeerDeliveryclient>,
    #[serde(rename = "adminService", skip_serializing_if = "Option::is_none")]
    pub admin_service: Option<ConfigPeerAdminService>,
    #[serde(rename = "validatorPoolSize", skip_serializing_if = "Option::is_none")]
    pub validator_pool_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery: Option<ConfigPeerDiscovery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ConfigPeerLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<ConfigPeerGateway>,
}

/// The `peer` section of core.yaml for updates. BCCSP cannot change after
/// deployment and is absent here.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerUpdatePeer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "networkId", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<ConfigPeerKeepalive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gossip: Option<ConfigPeerGossip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ConfigPeerAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ConfigPeerClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveryclient: Option<ConfigPeerDeliveryclient>,
    #[serde(rename = "adminService", skip_serializing_if = "Option::is_none")]
    pub admin_service: Option<ConfigPeerAdminService>,
    #[serde(rename = "validatorPoolSize", skip_serializing_if = "Option::is_none")]
    pub validator_pool_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery: Option<ConfigPeerDiscovery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ConfigPeerLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<ConfigPeerGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerChaincodeGolang {
    #[serde(rename = "dynamicLink", skip_serializing_if = "Option::is_none")]
    pub dynamic_link: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerChaincodeExternalBuilder {
    #[serde(
        rename = "environmentWhitelist",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment_whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerChaincodeSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cscc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lscc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vscc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qscc: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerChaincodeLogging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// The `chaincode` section of core.yaml.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerChaincode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golang: Option<ConfigPeerChaincodeGolang>,
    #[serde(rename = "externalBuilders", skip_serializing_if = "Option::is_none")]
    pub external_builders: Option<Vec<ConfigPeerChaincodeExternalBuilder>>,
    #[serde(rename = "installTimeout", skip_serializing_if = "Option::is_none")]
    pub install_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startuptimeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executetimeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ConfigPeerChaincodeSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<ConfigPeerChaincodeLogging>,
}

/// Peer configuration override for creates.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<ConfigPeerCreatePeer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaincode: Option<ConfigPeerChaincode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Peer configuration deltas for updates.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigPeerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<ConfigPeerUpdatePeer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaincode: Option<ConfigPeerChaincode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Per-container resource allocation for a deployed peer.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeerResources {
    /// Only relevant for Fabric v2.x peers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaincodelauncher: Option<ResourceObjectFabV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couchdb: Option<ResourceObjectCouchDb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<ResourceObject>,
    /// Only relevant for Fabric v1.x peers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dind: Option<ResourceObjectFabV1>,
    /// Only relevant for Fabric v1.x peers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluentd: Option<ResourceObjectFabV1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<ResourceObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ResourceObject>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreatePeerBodyStorage {
    pub peer: StorageObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<StorageObject>,
}

/// Request body for `createPeer`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreatePeerBody {
    pub msp_id: String,
    pub display_name: String,
    pub config: ConfigObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<ConfigPeerCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PeerResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CreatePeerBodyStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// `couchdb` or `leveldb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsm: Option<Hsm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Request body for `importPeer`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImportPeerBody {
    pub display_name: String,
    pub grpcwp_url: String,
    pub msp: MspCryptoField,
    pub msp_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for `updatePeer`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdatePeerBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<ConfigPeerUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ou: Option<NodeOu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PeerResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

/// Request body for `editPeer` (metadata edits, no redeploy).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditPeerBody {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeerResponseResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<GenericResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<GenericResources>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeerResponseStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<StorageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statedb: Option<StorageObject>,
}

/// Peer component descriptor as returned by create/import/update/edit.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpcwp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ou: Option<NodeOu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp: Option<MspCryptoField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PeerResponseResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<PeerResponseStorage>,
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
