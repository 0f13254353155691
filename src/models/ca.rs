//! Certificate-authority models: the Fabric CA server configuration tree,
//! create/import/update bodies, and CA responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Bccsp, GenericResources, Hsm, Metrics, MspCryptoField, ResourceObject, StorageObject,
};

/// Cross-origin request settings for the CA server.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCors {
    pub enabled: bool,
    pub origins: Vec<String>,
}

/// Mutual-TLS requirements for clients of the CA.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaTlsClientauth {
    /// One of `noclientcert`, `requestclientcert`, `requireclientcert`,
    /// `verifyclientcertifgiven`, `requireandverifyclientcert`.
    #[serde(rename = "type")]
    pub auth_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certfiles: Option<Vec<String>>,
}

/// TLS key pair served by the CA.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaTls {
    /// Private key, base64 PEM.
    pub keyfile: String,
    /// Certificate, base64 PEM.
    pub certfile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clientauth: Option<ConfigCaTlsClientauth>,
}

/// Signing key pair and chain for the CA itself.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chainfile: Option<String>,
}

/// Certificate-revocation-list generation settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCrl {
    /// Validity window for generated CRLs, e.g. `24h`.
    pub expiry: String,
}

/// `hf.*` registrar attributes on a registry identity.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct IdentityAttrs {
    #[serde(rename = "hf.Registrar.Roles", skip_serializing_if = "Option::is_none")]
    pub hf_registrar_roles: Option<String>,
    #[serde(
        rename = "hf.Registrar.DelegateRoles",
        skip_serializing_if = "Option::is_none"
    )]
    pub hf_registrar_delegate_roles: Option<String>,
    #[serde(rename = "hf.Revoker", skip_serializing_if = "Option::is_none")]
    pub hf_revoker: Option<bool>,
    #[serde(rename = "hf.IntermediateCA", skip_serializing_if = "Option::is_none")]
    pub hf_intermediate_ca: Option<bool>,
    #[serde(rename = "hf.GenCRL", skip_serializing_if = "Option::is_none")]
    pub hf_gen_crl: Option<bool>,
    #[serde(
        rename = "hf.Registrar.Attributes",
        skip_serializing_if = "Option::is_none"
    )]
    pub hf_registrar_attributes: Option<String>,
    #[serde(rename = "hf.AffiliationMgr", skip_serializing_if = "Option::is_none")]
    pub hf_affiliation_mgr: Option<bool>,
}

/// One bootstrap identity in the CA registry.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaRegistryIdentity {
    pub name: String,
    pub pass: String,
    /// `client`, `peer`, `orderer`, `user`, or `admin`.
    #[serde(rename = "type")]
    pub identity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxenrollments: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<IdentityAttrs>,
}

/// Identity registry served by the CA.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaRegistry {
    /// `-1` for unlimited enrollments.
    pub maxenrollments: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<ConfigCaRegistryIdentity>>,
}

/// Client key pair the CA presents to a TLS-protected database.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaDbTlsClient {
    pub certfile: String,
    pub keyfile: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaDbTls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certfiles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ConfigCaDbTlsClient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Backing database for the CA.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaDb {
    /// `sqlite3`, `postgres`, or `mysql`.
    #[serde(rename = "type")]
    pub db_type: String,
    pub datasource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ConfigCaDbTls>,
}

/// Affiliation hierarchy. Keys are organization names, values the list of
/// departments; the set of organizations is open-ended.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaAffiliations {
    #[serde(flatten)]
    pub organizations: HashMap<String, Value>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCsrKeyrequest {
    /// e.g. `ecdsa`.
    pub algo: String,
    /// Key bit size, e.g. `256`.
    pub size: i64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCsrName {
    #[serde(rename = "C")]
    pub country: String,
    #[serde(rename = "ST")]
    pub state: String,
    #[serde(rename = "L", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(rename = "O")]
    pub organization: String,
    #[serde(rename = "OU", skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCsrCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathlength: Option<i64>,
}

/// Certificate signing request defaults for the CA's own certificate.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCsr {
    /// Common name, e.g. `ca`.
    pub cn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyrequest: Option<ConfigCaCsrKeyrequest>,
    pub names: Vec<ConfigCaCsrName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<ConfigCaCsrCa>,
}

/// Idemix issuer settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIdemix {
    pub rhpoolsize: i64,
    pub nonceexpiration: String,
    pub noncesweepinterval: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIntermediateParentserver {
    /// Parent CA URL, including enroll id and secret.
    pub url: String,
    pub caname: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIntermediateEnrollment {
    pub hosts: String,
    pub profile: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIntermediateTlsClient {
    pub certfile: String,
    pub keyfile: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIntermediateTls {
    pub certfiles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ConfigCaIntermediateTlsClient>,
}

/// Settings for running as an intermediate CA chained to a parent.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaIntermediate {
    pub parentserver: ConfigCaIntermediateParentserver,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<ConfigCaIntermediateEnrollment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ConfigCaIntermediateTls>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCfgIdentities {
    pub passwordattempts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowremove: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCfg {
    pub identities: ConfigCaCfgIdentities,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigningDefault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigningProfilesCaCaconstraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isca: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxpathlen: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxpathlenzero: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigningProfilesCa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caconstraint: Option<ConfigCaSigningProfilesCaCaconstraint>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigningProfilesTls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigningProfiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<ConfigCaSigningProfilesCa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ConfigCaSigningProfilesTls>,
}

/// Certificate signing policy.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaSigning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ConfigCaSigningDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<ConfigCaSigningProfiles>,
}

/// Fabric CA server configuration for component creation.
///
/// Mirrors the CA server YAML one-to-one; the client performs no semantic
/// validation of the contents.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<ConfigCaCors>,
    /// Enable the CA's debug logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crlsizelimit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ConfigCaTls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<ConfigCaCa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl: Option<ConfigCaCrl>,
    pub registry: ConfigCaRegistry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<ConfigCaDb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliations: Option<ConfigCaAffiliations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr: Option<ConfigCaCsr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idemix: Option<ConfigCaIdemix>,
    #[serde(rename = "BCCSP", skip_serializing_if = "Option::is_none")]
    pub bccsp: Option<Bccsp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<ConfigCaIntermediate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg: Option<ConfigCaCfg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing: Option<ConfigCaSigning>,
}

/// Fabric CA server configuration deltas for component updates.
///
/// Same tree as [`ConfigCaCreate`] with every branch optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConfigCaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<ConfigCaCors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crlsizelimit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ConfigCaTls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<ConfigCaCa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl: Option<ConfigCaCrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<ConfigCaRegistry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<ConfigCaDb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliations: Option<ConfigCaAffiliations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr: Option<ConfigCaCsr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idemix: Option<ConfigCaIdemix>,
    #[serde(rename = "BCCSP", skip_serializing_if = "Option::is_none")]
    pub bccsp: Option<Bccsp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg: Option<ConfigCaCfg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Config override for a CA create request: the enrollment CA tree plus an
/// optional TLS CA tree.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateCaBodyConfigOverride {
    pub ca: ConfigCaCreate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlsca: Option<ConfigCaCreate>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateCaBodyResources {
    pub ca: ResourceObject,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateCaBodyStorage {
    pub ca: StorageObject,
}

/// Request body for `createCa`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateCaBody {
    pub display_name: String,
    pub config_override: CreateCaBodyConfigOverride,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<CreateCaBodyResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CreateCaBodyStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsm: Option<Hsm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Request body for `importCa`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImportCaBody {
    pub display_name: String,
    pub api_url: String,
    pub ca_name: String,
    pub tlsca_name: String,
    /// TLS certificate of the running CA, base64 PEM.
    pub tls_cert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateCaBodyConfigOverride {
    pub ca: ConfigCaUpdate,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateCaBodyResources {
    pub ca: ResourceObject,
}

/// Request body for `updateCa`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateCaBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<UpdateCaBodyConfigOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<UpdateCaBodyResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

/// Request body for `editCa` (metadata edits, no redeploy).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditCaBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for `submitBlock`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SubmitBlockBody {
    /// Config block to submit, base64.
    pub b64_block: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CaResponseResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<GenericResources>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CaResponseStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<StorageObject>,
}

/// CA component descriptor as returned by create/import/update/edit.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_override: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp: Option<MspCryptoField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<CaResponseResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CaResponseStorage>,
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
