//! Platform settings models: public settings, settings edits, Fabric
//! version inventory, health statistics, and cache flushes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// IBM Cloud resource name decomposition.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SettingsCrn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SettingsClusterData {
    /// `paid` or `free`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
}

/// Fabric capability levels advertised to channel configuration tooling.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FabricCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<Vec<String>>,
}

/// Feature toggles for the console UI and APIs.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FeatureFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_channel_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_peer_config_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saas_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_availability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ou_identifier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infra_import_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsm_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_raft_nodes_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mustgather_enabled: Option<bool>,
}

/// File-logging settings for one side of the console.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `error`, `warn`, `info`, `verbose`, `debug`, or `silly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FileLogging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<LoggingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<LoggingSettings>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SettingsTimestamps {
    /// Millisecond UNIX timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_settings_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SettingsVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apollo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athena: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stitch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Response of `getSettings`. Wire names are the server's UPPER_CASE keys.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetPublicSettingsResponse {
    #[serde(rename = "ACTIVITY_TRACKER_PATH", skip_serializing_if = "Option::is_none")]
    pub activity_tracker_path: Option<String>,
    #[serde(rename = "ATHENA_ID", skip_serializing_if = "Option::is_none")]
    pub athena_id: Option<String>,
    #[serde(rename = "AUTH_SCHEME", skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(rename = "CALLBACK_URI", skip_serializing_if = "Option::is_none")]
    pub callback_uri: Option<String>,
    #[serde(rename = "CLUSTER_DATA", skip_serializing_if = "Option::is_none")]
    pub cluster_data: Option<SettingsClusterData>,
    #[serde(rename = "CONFIGTXLATOR_URL", skip_serializing_if = "Option::is_none")]
    pub configtxlator_url: Option<String>,
    #[serde(rename = "CRN", skip_serializing_if = "Option::is_none")]
    pub crn: Option<SettingsCrn>,
    #[serde(rename = "CRN_STRING", skip_serializing_if = "Option::is_none")]
    pub crn_string: Option<String>,
    #[serde(rename = "CSP_HEADER_VALUES", skip_serializing_if = "Option::is_none")]
    pub csp_header_values: Option<Vec<String>>,
    #[serde(rename = "DB_SYSTEM", skip_serializing_if = "Option::is_none")]
    pub db_system: Option<String>,
    #[serde(rename = "DEPLOYER_URL", skip_serializing_if = "Option::is_none")]
    pub deployer_url: Option<String>,
    #[serde(rename = "DOMAIN", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "ENVIRONMENT", skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(rename = "FABRIC_CAPABILITIES", skip_serializing_if = "Option::is_none")]
    pub fabric_capabilities: Option<FabricCapabilities>,
    #[serde(rename = "FEATURE_FLAGS", skip_serializing_if = "Option::is_none")]
    pub feature_flags: Option<FeatureFlags>,
    #[serde(rename = "FILE_LOGGING", skip_serializing_if = "Option::is_none")]
    pub file_logging: Option<FileLogging>,
    #[serde(rename = "HOST_URL", skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,
    #[serde(rename = "IAM_CACHE_ENABLED", skip_serializing_if = "Option::is_none")]
    pub iam_cache_enabled: Option<bool>,
    #[serde(rename = "IAM_URL", skip_serializing_if = "Option::is_none")]
    pub iam_url: Option<String>,
    #[serde(rename = "IBM_ID", skip_serializing_if = "Option::is_none")]
    pub ibm_id: Option<String>,
    #[serde(rename = "INFRASTRUCTURE", skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,
    #[serde(rename = "LANDING_URL", skip_serializing_if = "Option::is_none")]
    pub landing_url: Option<String>,
    #[serde(rename = "LOGIN_URI", skip_serializing_if = "Option::is_none")]
    pub login_uri: Option<String>,
    #[serde(rename = "LOGOUT_URI", skip_serializing_if = "Option::is_none")]
    pub logout_uri: Option<String>,
    #[serde(rename = "MAX_REQ_PER_MIN", skip_serializing_if = "Option::is_none")]
    pub max_req_per_min: Option<i64>,
    #[serde(rename = "MAX_REQ_PER_MIN_AK", skip_serializing_if = "Option::is_none")]
    pub max_req_per_min_ak: Option<i64>,
    #[serde(rename = "MEMORY_CACHE_ENABLED", skip_serializing_if = "Option::is_none")]
    pub memory_cache_enabled: Option<bool>,
    #[serde(rename = "PORT", skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(rename = "PROXY_CACHE_ENABLED", skip_serializing_if = "Option::is_none")]
    pub proxy_cache_enabled: Option<bool>,
    #[serde(
        rename = "PROXY_TLS_FABRIC_REQS",
        skip_serializing_if = "Option::is_none"
    )]
    pub proxy_tls_fabric_reqs: Option<String>,
    #[serde(rename = "PROXY_TLS_HTTP_URL", skip_serializing_if = "Option::is_none")]
    pub proxy_tls_http_url: Option<String>,
    #[serde(rename = "PROXY_TLS_WS_URL", skip_serializing_if = "Option::is_none")]
    pub proxy_tls_ws_url: Option<Value>,
    #[serde(rename = "REGION", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(
        rename = "SESSION_CACHE_ENABLED",
        skip_serializing_if = "Option::is_none"
    )]
    pub session_cache_enabled: Option<bool>,
    #[serde(rename = "TIMEOUTS", skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<Value>,
    #[serde(rename = "TIMESTAMPS", skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<SettingsTimestamps>,
    #[serde(
        rename = "TRANSACTION_VISIBILITY",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_visibility: Option<Value>,
    #[serde(rename = "TRUST_PROXY", skip_serializing_if = "Option::is_none")]
    pub trust_proxy: Option<String>,
    #[serde(rename = "TRUST_UNKNOWN_CERTS", skip_serializing_if = "Option::is_none")]
    pub trust_unknown_certs: Option<bool>,
    #[serde(rename = "VERSIONS", skip_serializing_if = "Option::is_none")]
    pub versions: Option<SettingsVersions>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditSettingsBodyInactivityTimeouts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Idle window in milliseconds before a session is closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_time: Option<i64>,
}

/// Request body for `editSettings`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditSettingsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivity_timeouts: Option<EditSettingsBodyInactivityTimeouts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_logging: Option<FileLogging>,
}

/// One installable Fabric version.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FabricVersionObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Version inventory keyed by version string; the key set is open-ended.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FabricVersionDictionary {
    #[serde(flatten)]
    pub versions: HashMap<String, FabricVersionObject>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FabricVersionsInventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<FabricVersionDictionary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<FabricVersionDictionary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer: Option<FabricVersionDictionary>,
}

/// Response of `getFabricVersions`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetFabricVersionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<FabricVersionsInventory>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HealthMemoryUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,
    #[serde(rename = "heapTotal", skip_serializing_if = "Option::is_none")]
    pub heap_total: Option<String>,
    #[serde(rename = "heapUsed", skip_serializing_if = "Option::is_none")]
    pub heap_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
}

/// Health data of the console process itself.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HealthOptools {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Millisecond UNIX timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<HealthMemoryUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CpuHealthStatsTimes {
    /// All values in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irq: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CpuHealthStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<CpuHealthStatsTimes>,
}

/// Health data of the host operating system.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HealthOs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endian: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loadavg: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<Vec<CpuHealthStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_time: Option<String>,
}

/// Response of `getHealth`. Wire names are the server's UPPER_CASE keys.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetHealthResponse {
    #[serde(rename = "OPTOOLS", skip_serializing_if = "Option::is_none")]
    pub optools: Option<HealthOptools>,
    #[serde(rename = "OS", skip_serializing_if = "Option::is_none")]
    pub os: Option<HealthOs>,
}

/// Response of `clearCaches`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CacheFlushResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Caches that were actually flushed, e.g. `couch_cache`, `iam_cache`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flushed: Option<Vec<String>>,
}
