//! Certificate-authority operations: create, import, update, edit, and
//! config-block submission.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::ClientError;
use crate::catalog::{self, render_path};
use crate::client::{ACCEPT_JSON, ACCEPT_TEXT, IbpClient};
use crate::models::{
    CaResponse, CreateCaBody, CreateCaBodyConfigOverride, CreateCaBodyResources,
    CreateCaBodyStorage, EditCaBody, GenericComponentResponse, Hsm, ImportCaBody, SubmitBlockBody,
    UpdateCaBody, UpdateCaBodyConfigOverride, UpdateCaBodyResources,
};
use crate::operations::require_field;
use crate::response::ServiceResponse;

/// Options for `createCa`.
#[derive(Clone, Debug, Default)]
pub struct CreateCaOptions {
    pub display_name: String,
    /// CA server configuration; at minimum the enrollment CA registry.
    pub config_override: CreateCaBodyConfigOverride,
    pub resources: Option<CreateCaBodyResources>,
    pub storage: Option<CreateCaBodyStorage>,
    pub zone: Option<String>,
    pub replicas: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub region: Option<String>,
    pub version: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl CreateCaOptions {
    pub fn new(
        display_name: impl Into<String>,
        config_override: CreateCaBodyConfigOverride,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            config_override,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_resources(mut self, resources: CreateCaBodyResources) -> Self {
        self.resources = Some(resources);
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: CreateCaBodyStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn with_replicas(mut self, replicas: i64) -> Self {
        self.replicas = Some(replicas);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_hsm(mut self, hsm: Hsm) -> Self {
        self.hsm = Some(hsm);
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `importCa`.
#[derive(Clone, Debug, Default)]
pub struct ImportCaOptions {
    pub display_name: String,
    /// API endpoint of the running CA, e.g. `https://ca.example.com:7054`.
    pub api_url: String,
    pub ca_name: String,
    pub tlsca_name: String,
    /// TLS certificate of the running CA, base64 PEM.
    pub tls_cert: String,
    pub operations_url: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl ImportCaOptions {
    pub fn new(
        display_name: impl Into<String>,
        api_url: impl Into<String>,
        ca_name: impl Into<String>,
        tlsca_name: impl Into<String>,
        tls_cert: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            api_url: api_url.into(),
            ca_name: ca_name.into(),
            tlsca_name: tlsca_name.into(),
            tls_cert: tls_cert.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_operations_url(mut self, operations_url: impl Into<String>) -> Self {
        self.operations_url = Some(operations_url.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `updateCa` (redeploys the CA when config changes).
#[derive(Clone, Debug, Default)]
pub struct UpdateCaOptions {
    pub id: String,
    pub config_override: Option<UpdateCaBodyConfigOverride>,
    pub replicas: Option<i64>,
    pub resources: Option<UpdateCaBodyResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl UpdateCaOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config_override(mut self, config_override: UpdateCaBodyConfigOverride) -> Self {
        self.config_override = Some(config_override);
        self
    }

    #[must_use]
    pub fn with_replicas(mut self, replicas: i64) -> Self {
        self.replicas = Some(replicas);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: UpdateCaBodyResources) -> Self {
        self.resources = Some(resources);
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `editCa` (metadata-only edits).
#[derive(Clone, Debug, Default)]
pub struct EditCaOptions {
    pub id: String,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub ca_name: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl EditCaOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    #[must_use]
    pub fn with_operations_url(mut self, operations_url: impl Into<String>) -> Self {
        self.operations_url = Some(operations_url.into());
        self
    }

    #[must_use]
    pub fn with_ca_name(mut self, ca_name: impl Into<String>) -> Self {
        self.ca_name = Some(ca_name.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `submitBlock`.
#[derive(Clone, Debug, Default)]
pub struct SubmitBlockOptions {
    pub id: String,
    /// Config block to submit, base64.
    pub b64_block: String,
    pub headers: Option<HeaderMap>,
}

impl SubmitBlockOptions {
    pub fn new(id: impl Into<String>, b64_block: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            b64_block: b64_block.into(),
            headers: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

impl IbpClient {
    /// Creates a CA in the Kubernetes cluster.
    pub async fn create_ca(
        &self,
        options: &CreateCaOptions,
    ) -> Result<ServiceResponse<CaResponse>, ClientError> {
        require_field(&catalog::CREATE_CA, "display_name", &options.display_name)?;
        let path = render_path(&catalog::CREATE_CA, &[])?;

        let body = CreateCaBody {
            display_name: options.display_name.clone(),
            config_override: options.config_override.clone(),
            resources: options.resources.clone(),
            storage: options.storage.clone(),
            zone: options.zone.clone(),
            replicas: options.replicas,
            tags: options.tags.clone(),
            hsm: options.hsm.clone(),
            region: options.region.clone(),
            version: options.version.clone(),
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

    /// Imports a CA running elsewhere.
    pub async fn import_ca(
        &self,
        options: &ImportCaOptions,
    ) -> Result<ServiceResponse<CaResponse>, ClientError> {
        require_field(&catalog::IMPORT_CA, "display_name", &options.display_name)?;
        require_field(&catalog::IMPORT_CA, "api_url", &options.api_url)?;
        require_field(&catalog::IMPORT_CA, "ca_name", &options.ca_name)?;
        require_field(&catalog::IMPORT_CA, "tlsca_name", &options.tlsca_name)?;
        require_field(&catalog::IMPORT_CA, "tls_cert", &options.tls_cert)?;
        let path = render_path(&catalog::IMPORT_CA, &[])?;

        let body = ImportCaBody {
            display_name: options.display_name.clone(),
            api_url: options.api_url.clone(),
            ca_name: options.ca_name.clone(),
            tlsca_name: options.tlsca_name.clone(),
            tls_cert: options.tls_cert.clone(),
            operations_url: options.operations_url.clone(),
            location: options.location.clone(),
            tags: options.tags.clone(),
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

    /// Updates a deployed CA. Config changes restart the CA.
    pub async fn update_ca(
        &self,
        options: &UpdateCaOptions,
    ) -> Result<ServiceResponse<CaResponse>, ClientError> {
        let path = render_path(&catalog::UPDATE_CA, &[("id", &options.id)])?;

        let body = UpdateCaBody {
            config_override: options.config_override.clone(),
            replicas: options.replicas,
            resources: options.resources.clone(),
            version: options.version.clone(),
            zone: options.zone.clone(),
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

    /// Edits console metadata of a CA without touching the deployment.
    pub async fn edit_ca(
        &self,
        options: &EditCaOptions,
    ) -> Result<ServiceResponse<CaResponse>, ClientError> {
        let path = render_path(&catalog::EDIT_CA, &[("id", &options.id)])?;

        let body = EditCaBody {
            display_name: options.display_name.clone(),
            api_url: options.api_url.clone(),
            operations_url: options.operations_url.clone(),
            ca_name: options.ca_name.clone(),
            location: options.location.clone(),
            tags: options.tags.clone(),
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

    /// Submits a config block to a pre-created raft orderer node.
    ///
    /// The server may answer `text/plain`; the body is decoded as the
    /// component payload either way.
    pub async fn submit_block(
        &self,
        options: &SubmitBlockOptions,
    ) -> Result<ServiceResponse<GenericComponentResponse>, ClientError> {
        require_field(&catalog::SUBMIT_BLOCK, "b64_block", &options.b64_block)?;
        let path = render_path(&catalog::SUBMIT_BLOCK, &[("id", &options.id)])?;

        let body = SubmitBlockBody {
            b64_block: options.b64_block.clone(),
        };

        self.send(
            Method::PUT,
            &path,
            &[],
            options.headers.as_ref(),
            Some(serde_json::to_value(&body)?),
            ACCEPT_TEXT,
        )
        .await?
        .into_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{CreateCaOptions, ImportCaOptions, SubmitBlockOptions, UpdateCaOptions};
    use crate::client::{ClientOptions, IbpClient};
    use crate::models::{
        ConfigCaCreate, ConfigCaRegistry, ConfigCaRegistryIdentity, CreateCaBodyConfigOverride,
    };
    use crate::ClientError;

    fn client_for(server: &MockServer) -> IbpClient {
        IbpClient::new(ClientOptions {
            url: Some(server.uri()),
            ..ClientOptions::default()
        })
        .expect("mock server URI is valid")
    }

    fn minimal_config_override() -> CreateCaBodyConfigOverride {
        CreateCaBodyConfigOverride {
            ca: ConfigCaCreate {
                registry: ConfigCaRegistry {
                    maxenrollments: -1,
                    identities: Some(vec![ConfigCaRegistryIdentity {
                        name: "admin".to_owned(),
                        pass: "password".to_owned(),
                        identity_type: "client".to_owned(),
                        ..ConfigCaRegistryIdentity::default()
                    }]),
                },
                ..ConfigCaCreate::default()
            },
            tlsca: None,
        }
    }

    #[tokio::test]
    async fn create_ca_posts_body_and_decodes_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ak/api/v2/kubernetes/components/fabric-ca"))
            .and(body_partial_json(json!({
                "display_name": "My CA",
                "config_override": {
                    "ca": {"registry": {"maxenrollments": -1}},
                },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "component-1",
                "display_name": "My CA",
                "location": "ibmcloud",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = CreateCaOptions::new("My CA", minimal_config_override());
        let response = client.create_ca(&options).await.expect("operation succeeds");
        assert_eq!(response.result.id.as_deref(), Some("component-1"));
        assert_eq!(response.result.display_name.as_deref(), Some("My CA"));
    }

    #[tokio::test]
    async fn create_ca_requires_display_name() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let error = client
            .create_ca(&CreateCaOptions::new("", minimal_config_override()))
            .await
            .expect_err("empty display name must fail");
        assert!(matches!(
            error,
            ClientError::MissingRequiredField {
                operation_id: "createCa",
                field: "display_name",
            }
        ));
    }

    #[tokio::test]
    async fn import_ca_requires_every_certificate_field() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let options = ImportCaOptions::new("My imported CA", "https://ca.example.com:7054", "ca", "tlsca", "");
        let error = client
            .import_ca(&options)
            .await
            .expect_err("empty tls_cert must fail");
        assert!(matches!(
            error,
            ClientError::MissingRequiredField {
                operation_id: "importCa",
                field: "tls_cert",
            }
        ));
    }

    #[tokio::test]
    async fn update_ca_puts_to_kubernetes_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/ak/api/v2/kubernetes/components/fabric-ca/component-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "component-1",
                "version": "1.5.3-1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = UpdateCaOptions::new("component-1").with_version("1.5.3-1");
        let response = client.update_ca(&options).await.expect("operation succeeds");
        assert_eq!(response.result.version.as_deref(), Some("1.5.3-1"));
    }

    #[tokio::test]
    async fn submit_block_accepts_text_plain_response() {
        let server = MockServer::start().await;
        let payload = json!({
            "id": "orderer-1",
            "type": "fabric-orderer",
            "consenter_proposal_fin": true,
        });
        Mock::given(method("PUT"))
            .and(path("/ak/api/v2/kubernetes/components/orderer-1/config"))
            .and(body_partial_json(json!({"b64_block": "bWFkZS11cCBibG9jaw=="})))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(payload.to_string(), "text/plain"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = SubmitBlockOptions::new("orderer-1", "bWFkZS11cCBibG9jaw==");
        let response = client
            .submit_block(&options)
            .await
            .expect("text/plain payload decodes");
        assert_eq!(response.result.id.as_deref(), Some("orderer-1"));
        assert_eq!(response.result.consenter_proposal_fin, Some(true));
    }
}
