//! MSP models: import/edit bodies, MSP descriptors, public certificate
//! data, and admin-certificate edits.

use serde::{Deserialize, Serialize};

/// Request body for `importMsp`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImportMspBody {
    pub msp_id: String,
    pub display_name: String,
    /// Root certificates, base64 PEM.
    pub root_certs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_root_certs: Option<Vec<String>>,
}

/// Request body for `editMsp`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditMspBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_root_certs: Option<Vec<String>>,
}

/// MSP descriptor as returned by import/edit.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Millisecond UNIX timestamp of import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_root_certs: Option<Vec<String>>,
}

/// Certificate bundle published for one MSP id.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MspPublicData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_root_certs: Option<Vec<String>>,
}

/// Response of `getMspCertificate`: one entry per component sharing the
/// requested MSP id.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetMspCertificateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msps: Option<Vec<MspPublicData>>,
}

/// Request body for `editAdminCerts`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditAdminCertsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_admin_certs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_admin_certs: Option<Vec<String>>,
}

/// Parsed certificate data echoed back after an admin-cert edit.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AdminCertData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_64_pem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Millisecond UNIX timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after_ts: Option<i64>,
    /// Millisecond UNIX timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "X509_version", skip_serializing_if = "Option::is_none")]
    pub x509_version: Option<i64>,
    /// Remaining validity, e.g. `10 hrs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_left: Option<String>,
}

/// Response of `editAdminCerts`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EditAdminCertsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes_made: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_admin_certs: Option<Vec<AdminCertData>>,
}
