//! Records shared across component families: error payloads, Kubernetes
//! resource/storage descriptors, BCCSP blocks, and component crypto.

use serde::{Deserialize, Serialize};

/// Error payload returned by the service on non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// CPU and memory requests for one container.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceRequests {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// CPU and memory limits for one container.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Requests/limits pair for a standard container.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceObject {
    pub requests: ResourceRequests,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
}

/// Requests/limits pair for containers only present on Fabric v1.x
/// deployments (dind, fluentd).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceObjectFabV1 {
    pub requests: ResourceRequests,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
}

/// Requests/limits pair for containers only present on Fabric v2.x
/// deployments (chaincode launcher).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceObjectFabV2 {
    pub requests: ResourceRequests,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
}

/// Requests/limits pair for the CouchDB container.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResourceObjectCouchDb {
    pub requests: ResourceRequests,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
}

/// Resource requests as echoed back in deployment attributes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericResourcesRequests {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Resource limits as echoed back in deployment attributes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericResourceLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Deployed resource allocation for one container, response side.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenericResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<GenericResourcesRequests>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<GenericResourceLimits>,
}

/// Persistent volume claim for one container.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StorageObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

/// Pointer to a proxy that routes PKCS#11 requests to an HSM.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Hsm {
    pub pkcs11endpoint: String,
}

/// Node OU toggle for a component's MSP.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NodeOu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// BCCSP software provider settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BccspSw {
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Security")]
    pub security: i64,
}

/// BCCSP PKCS#11 provider settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BccspPkcs11 {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Pin")]
    pub pin: String,
    #[serde(rename = "Hash", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(rename = "Security", skip_serializing_if = "Option::is_none")]
    pub security: Option<i64>,
}

/// Crypto service provider selection, software or PKCS#11/HSM.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Bccsp {
    /// Provider to use, `SW` or `PKCS11`.
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(rename = "SW", skip_serializing_if = "Option::is_none")]
    pub sw: Option<BccspSw>,
    #[serde(rename = "PKCS11", skip_serializing_if = "Option::is_none")]
    pub pkcs11: Option<BccspPkcs11>,
}

/// Operational metrics settings embedded in component configs.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Metrics {
    /// `prometheus`, `statsd`, or `disabled`.
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statsd: Option<MetricsStatsd>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MetricsStatsd {
    /// `udp` or `tcp`.
    pub network: String,
    pub address: String,
    #[serde(rename = "writeInterval")]
    pub write_interval: String,
    pub prefix: String,
}

// Crypto material a new component enrolls or imports with. `config` bodies
// carry exactly one of the enrollment/msp branches.

/// Crypto configuration for a component being created.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<ConfigObjectEnrollment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp: Option<ConfigObjectMsp>,
}

/// Enrollment-based crypto: the component enrolls against a running CA.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigObjectEnrollment {
    pub component: EnrollmentComponent,
    pub ca: EnrollmentCa,
    pub tlsca: EnrollmentTlsCa,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EnrollmentComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admincerts: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EnrollmentCa {
    pub host: String,
    pub port: i64,
    pub name: String,
    pub tls_cert: String,
    pub enroll_id: String,
    pub enroll_secret: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EnrollmentTlsCa {
    pub host: String,
    pub port: i64,
    pub name: String,
    pub tls_cert: String,
    pub enroll_id: String,
    pub enroll_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr_hosts: Option<Vec<String>>,
}

/// MSP-based crypto: the caller supplies all certificates and keys.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigObjectMsp {
    pub component: MspConfigComponent,
    pub ca: MspConfigCa,
    pub tlsca: MspConfigCa,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspConfigComponent {
    /// Private key, base64 PEM.
    pub ekey: String,
    /// Signed certificate, base64 PEM.
    pub ecert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_certs: Option<Vec<String>>,
    pub tls_key: String,
    pub tls_cert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_auth: Option<MspConfigClientAuth>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspConfigClientAuth {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspConfigCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certs: Option<Vec<String>>,
}

// MSP material echoed back on component responses.

/// Component crypto as reported by the service.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspCryptoField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<MspCryptoFieldCa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlsca: Option<MspCryptoFieldTlsCa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<MspCryptoFieldComponent>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspCryptoFieldCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspCryptoFieldTlsCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspCryptoFieldComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_certs: Option<Vec<String>>,
}
