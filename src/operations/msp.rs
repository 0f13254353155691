//! MSP operations: import, edit, certificate lookup, and admin-certificate
//! edits on deployed components.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::ClientError;
use crate::catalog::{self, render_path};
use crate::client::{ACCEPT_JSON, IbpClient};
use crate::models::{
    EditAdminCertsBody, EditAdminCertsResponse, EditMspBody, GetMspCertificateResponse,
    ImportMspBody, MspResponse,
};
use crate::operations::require_field;
use crate::response::ServiceResponse;

/// Options for `importMsp`.
#[derive(Clone, Debug, Default)]
pub struct ImportMspOptions {
    pub msp_id: String,
    pub display_name: String,
    /// Root certificates, base64 PEM. At least one is required.
    pub root_certs: Vec<String>,
    pub intermediate_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub tls_root_certs: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl ImportMspOptions {
    pub fn new(
        msp_id: impl Into<String>,
        display_name: impl Into<String>,
        root_certs: Vec<String>,
    ) -> Self {
        Self {
            msp_id: msp_id.into(),
            display_name: display_name.into(),
            root_certs,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_intermediate_certs(mut self, intermediate_certs: Vec<String>) -> Self {
        self.intermediate_certs = Some(intermediate_certs);
        self
    }

    #[must_use]
    pub fn with_admins(mut self, admins: Vec<String>) -> Self {
        self.admins = Some(admins);
        self
    }

    #[must_use]
    pub fn with_tls_root_certs(mut self, tls_root_certs: Vec<String>) -> Self {
        self.tls_root_certs = Some(tls_root_certs);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `editMsp`.
#[derive(Clone, Debug, Default)]
pub struct EditMspOptions {
    pub id: String,
    pub msp_id: Option<String>,
    pub display_name: Option<String>,
    pub root_certs: Option<Vec<String>>,
    pub intermediate_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub tls_root_certs: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl EditMspOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_msp_id(mut self, msp_id: impl Into<String>) -> Self {
        self.msp_id = Some(msp_id.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_root_certs(mut self, root_certs: Vec<String>) -> Self {
        self.root_certs = Some(root_certs);
        self
    }

    #[must_use]
    pub fn with_intermediate_certs(mut self, intermediate_certs: Vec<String>) -> Self {
        self.intermediate_certs = Some(intermediate_certs);
        self
    }

    #[must_use]
    pub fn with_admins(mut self, admins: Vec<String>) -> Self {
        self.admins = Some(admins);
        self
    }

    #[must_use]
    pub fn with_tls_root_certs(mut self, tls_root_certs: Vec<String>) -> Self {
        self.tls_root_certs = Some(tls_root_certs);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `getMspCertificate`.
#[derive(Clone, Debug, Default)]
pub struct GetMspCertificateOptions {
    pub msp_id: String,
    /// `skip` to bypass the server-side cache.
    pub cache: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl GetMspCertificateOptions {
    pub fn new(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cache(mut self, value: impl Into<String>) -> Self {
        self.cache = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `editAdminCerts`.
#[derive(Clone, Debug, Default)]
pub struct EditAdminCertsOptions {
    pub id: String,
    /// Certificates to append, base64 PEM.
    pub append_admin_certs: Option<Vec<String>>,
    /// Certificates to remove, base64 PEM.
    pub remove_admin_certs: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl EditAdminCertsOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_append_admin_certs(mut self, certs: Vec<String>) -> Self {
        self.append_admin_certs = Some(certs);
        self
    }

    #[must_use]
    pub fn with_remove_admin_certs(mut self, certs: Vec<String>) -> Self {
        self.remove_admin_certs = Some(certs);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

impl IbpClient {
    /// Imports an MSP definition.
    pub async fn import_msp(
        &self,
        options: &ImportMspOptions,
    ) -> Result<ServiceResponse<MspResponse>, ClientError> {
        require_field(&catalog::IMPORT_MSP, "msp_id", &options.msp_id)?;
        require_field(&catalog::IMPORT_MSP, "display_name", &options.display_name)?;
        if options.root_certs.is_empty() {
            return Err(ClientError::MissingRequiredField {
                operation_id: catalog::IMPORT_MSP.operation_id,
                field: "root_certs",
            });
        }
        let path = render_path(&catalog::IMPORT_MSP, &[])?;

        let body = ImportMspBody {
            msp_id: options.msp_id.clone(),
            display_name: options.display_name.clone(),
            root_certs: options.root_certs.clone(),
            intermediate_certs: options.intermediate_certs.clone(),
            admins: options.admins.clone(),
            tls_root_certs: options.tls_root_certs.clone(),
        };

        self.send(
            Method::POST,
            &path,
            &[],
            options.headers.as_ref(),
            Some(serde_json::to_value(&body)?),
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Edits an imported MSP definition.
    pub async fn edit_msp(
        &self,
        options: &EditMspOptions,
    ) -> Result<ServiceResponse<MspResponse>, ClientError> {
        let path = render_path(&catalog::EDIT_MSP, &[("id", &options.id)])?;

        let body = EditMspBody {
            msp_id: options.msp_id.clone(),
            display_name: options.display_name.clone(),
            root_certs: options.root_certs.clone(),
            intermediate_certs: options.intermediate_certs.clone(),
            admins: options.admins.clone(),
            tls_root_certs: options.tls_root_certs.clone(),
        };

        self.send(
            Method::PUT,
            &path,
            &[],
            options.headers.as_ref(),
            Some(serde_json::to_value(&body)?),
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Gets the public certificates of every component sharing an MSP id.
    pub async fn get_msp_certificate(
        &self,
        options: &GetMspCertificateOptions,
    ) -> Result<ServiceResponse<GetMspCertificateResponse>, ClientError> {
        let path = render_path(&catalog::GET_MSP_CERTIFICATE, &[("msp_id", &options.msp_id)])?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = options.cache.as_deref() {
            query.push(("cache", value));
        }

        self.send(
            Method::GET,
            &path,
            &query,
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Appends or removes admin certificates on a deployed component.
    ///
    /// Only valid for components with node OU support disabled.
    pub async fn edit_admin_certs(
        &self,
        options: &EditAdminCertsOptions,
    ) -> Result<ServiceResponse<EditAdminCertsResponse>, ClientError> {
        let path = render_path(&catalog::EDIT_ADMIN_CERTS, &[("id", &options.id)])?;

        let body = EditAdminCertsBody {
            append_admin_certs: options.append_admin_certs.clone(),
            remove_admin_certs: options.remove_admin_certs.clone(),
        };

        self.send(
            Method::PUT,
            &path,
            &[],
            options.headers.as_ref(),
            Some(serde_json::to_value(&body)?),
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{EditAdminCertsOptions, GetMspCertificateOptions, ImportMspOptions};
    use crate::client::{ClientOptions, IbpClient};
    use crate::operations::CACHE_SKIP;
    use crate::ClientError;

    fn client_for(server: &MockServer) -> IbpClient {
        IbpClient::new(ClientOptions {
            url: Some(server.uri()),
            ..ClientOptions::default()
        })
        .expect("mock server URI is valid")
    }

    #[tokio::test]
    async fn import_msp_posts_certificates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ak/api/v2/components/msp"))
            .and(body_partial_json(json!({
                "msp_id": "Org1",
                "display_name": "Org1 MSP",
                "root_certs": ["cm9vdC1jZXJ0"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msp-1",
                "msp_id": "Org1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = ImportMspOptions::new("Org1", "Org1 MSP", vec!["cm9vdC1jZXJ0".to_owned()]);
        let response = client
            .import_msp(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.msp_id.as_deref(), Some("Org1"));
    }

    #[tokio::test]
    async fn import_msp_requires_root_certs() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let error = client
            .import_msp(&ImportMspOptions::new("Org1", "Org1 MSP", Vec::new()))
            .await
            .expect_err("empty root_certs must fail");
        assert!(matches!(
            error,
            ClientError::MissingRequiredField {
                operation_id: "importMsp",
                field: "root_certs",
            }
        ));
    }

    #[tokio::test]
    async fn get_msp_certificate_uses_msps_path_and_cache_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ak/api/v2/components/msps/Org1"))
            .and(query_param("cache", "skip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "msps": [{"msp_id": "Org1", "root_certs": ["cm9vdC1jZXJ0"]}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = GetMspCertificateOptions::new("Org1").with_cache(CACHE_SKIP);
        let response = client
            .get_msp_certificate(&options)
            .await
            .expect("operation succeeds");
        let msps = response.result.msps.expect("msps present");
        assert_eq!(msps.len(), 1);
        assert_eq!(msps[0].msp_id.as_deref(), Some("Org1"));
    }

    #[tokio::test]
    async fn edit_admin_certs_reports_changes() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/ak/api/v2/kubernetes/components/peer-1/certs"))
            .and(body_partial_json(json!({
                "append_admin_certs": ["YWRtaW4tY2VydA=="],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "changes_made": 1,
                "set_admin_certs": [{"serial_number_hex": "649a1206fd0bc8be"}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = EditAdminCertsOptions::new("peer-1")
            .with_append_admin_certs(vec!["YWRtaW4tY2VydA==".to_owned()]);
        let response = client
            .edit_admin_certs(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.changes_made, Some(1));
    }
}
