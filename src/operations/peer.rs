//! Peer operations: create, import, update, and edit.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::ClientError;
use crate::catalog::{self, render_path};
use crate::client::{ACCEPT_JSON, IbpClient};
use crate::models::{
    ConfigObject, ConfigPeerCreate, ConfigPeerUpdate, CreatePeerBody, CreatePeerBodyStorage,
    EditPeerBody, Hsm, ImportPeerBody, MspCryptoField, NodeOu, PeerResources, PeerResponse,
    UpdatePeerBody,
};
use crate::operations::require_field;
use crate::response::ServiceResponse;

/// Options for `createPeer`.
#[derive(Clone, Debug, Default)]
pub struct CreatePeerOptions {
    pub msp_id: String,
    pub display_name: String,
    /// Crypto material the peer enrolls or imports with.
    pub config: ConfigObject,
    pub config_override: Option<ConfigPeerCreate>,
    pub resources: Option<PeerResources>,
    pub storage: Option<CreatePeerBodyStorage>,
    pub zone: Option<String>,
    /// `couchdb` or `leveldb`.
    pub state_db: Option<String>,
    pub tags: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub region: Option<String>,
    pub version: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl CreatePeerOptions {
    pub fn new(
        msp_id: impl Into<String>,
        display_name: impl Into<String>,
        config: ConfigObject,
    ) -> Self {
        Self {
            msp_id: msp_id.into(),
            display_name: display_name.into(),
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config_override(mut self, config_override: ConfigPeerCreate) -> Self {
        self.config_override = Some(config_override);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: PeerResources) -> Self {
        self.resources = Some(resources);
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: CreatePeerBodyStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn with_state_db(mut self, state_db: impl Into<String>) -> Self {
        self.state_db = Some(state_db.into());
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

/// Options for `importPeer`.
#[derive(Clone, Debug, Default)]
pub struct ImportPeerOptions {
    pub display_name: String,
    /// gRPC web proxy URL fronting the peer.
    pub grpcwp_url: String,
    pub msp: MspCryptoField,
    pub msp_id: String,
    pub api_url: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl ImportPeerOptions {
    pub fn new(
        display_name: impl Into<String>,
        grpcwp_url: impl Into<String>,
        msp: MspCryptoField,
        msp_id: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            grpcwp_url: grpcwp_url.into(),
            msp,
            msp_id: msp_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_operations_url(mut self, operations_url: impl Into<String>) -> Self {
        self.operations_url = Some(operations_url.into());
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

/// Options for `updatePeer` (redeploys the peer when config changes).
#[derive(Clone, Debug, Default)]
pub struct UpdatePeerOptions {
    pub id: String,
    pub admin_certs: Option<Vec<String>>,
    pub config_override: Option<ConfigPeerUpdate>,
    pub node_ou: Option<NodeOu>,
    pub replicas: Option<i64>,
    pub resources: Option<PeerResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl UpdatePeerOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_admin_certs(mut self, admin_certs: Vec<String>) -> Self {
        self.admin_certs = Some(admin_certs);
        self
    }

    #[must_use]
    pub fn with_config_override(mut self, config_override: ConfigPeerUpdate) -> Self {
        self.config_override = Some(config_override);
        self
    }

    #[must_use]
    pub fn with_node_ou(mut self, node_ou: NodeOu) -> Self {
        self.node_ou = Some(node_ou);
        self
    }

    #[must_use]
    pub fn with_replicas(mut self, replicas: i64) -> Self {
        self.replicas = Some(replicas);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: PeerResources) -> Self {
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

/// Options for `editPeer` (metadata-only edits).
#[derive(Clone, Debug, Default)]
pub struct EditPeerOptions {
    pub id: String,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub grpcwp_url: Option<String>,
    pub msp_id: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl EditPeerOptions {
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
    pub fn with_grpcwp_url(mut self, grpcwp_url: impl Into<String>) -> Self {
        self.grpcwp_url = Some(grpcwp_url.into());
        self
    }

    #[must_use]
    pub fn with_msp_id(mut self, msp_id: impl Into<String>) -> Self {
        self.msp_id = Some(msp_id.into());
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

impl IbpClient {
    /// Creates a peer in the Kubernetes cluster.
    pub async fn create_peer(
        &self,
        options: &CreatePeerOptions,
    ) -> Result<ServiceResponse<PeerResponse>, ClientError> {
        require_field(&catalog::CREATE_PEER, "msp_id", &options.msp_id)?;
        require_field(&catalog::CREATE_PEER, "display_name", &options.display_name)?;
        let path = render_path(&catalog::CREATE_PEER, &[])?;

        let body = CreatePeerBody {
            msp_id: options.msp_id.clone(),
            display_name: options.display_name.clone(),
            config: options.config.clone(),
            config_override: options.config_override.clone(),
            resources: options.resources.clone(),
            storage: options.storage.clone(),
            zone: options.zone.clone(),
            state_db: options.state_db.clone(),
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

    /// Imports a peer running elsewhere.
    pub async fn import_peer(
        &self,
        options: &ImportPeerOptions,
    ) -> Result<ServiceResponse<PeerResponse>, ClientError> {
        require_field(&catalog::IMPORT_PEER, "display_name", &options.display_name)?;
        require_field(&catalog::IMPORT_PEER, "grpcwp_url", &options.grpcwp_url)?;
        require_field(&catalog::IMPORT_PEER, "msp_id", &options.msp_id)?;
        let path = render_path(&catalog::IMPORT_PEER, &[])?;

        let body = ImportPeerBody {
            display_name: options.display_name.clone(),
            grpcwp_url: options.grpcwp_url.clone(),
            msp: options.msp.clone(),
            msp_id: options.msp_id.clone(),
            api_url: options.api_url.clone(),
            location: options.location.clone(),
            operations_url: options.operations_url.clone(),
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

    /// Updates a deployed peer. Config changes restart the peer.
    pub async fn update_peer(
        &self,
        options: &UpdatePeerOptions,
    ) -> Result<ServiceResponse<PeerResponse>, ClientError> {
        let path = render_path(&catalog::UPDATE_PEER, &[("id", &options.id)])?;

        let body = UpdatePeerBody {
            admin_certs: options.admin_certs.clone(),
            config_override: options.config_override.clone(),
            node_ou: options.node_ou.clone(),
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

    /// Edits console metadata of a peer without touching the deployment.
    pub async fn edit_peer(
        &self,
        options: &EditPeerOptions,
    ) -> Result<ServiceResponse<PeerResponse>, ClientError> {
        let path = render_path(&catalog::EDIT_PEER, &[("id", &options.id)])?;

        let body = EditPeerBody {
            display_name: options.display_name.clone(),
            api_url: options.api_url.clone(),
            operations_url: options.operations_url.clone(),
            grpcwp_url: options.grpcwp_url.clone(),
            msp_id: options.msp_id.clone(),
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
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{CreatePeerOptions, UpdatePeerOptions};
    use crate::client::{ClientOptions, IbpClient};
    use crate::models::{ConfigObject, ConfigObjectEnrollment, EnrollmentCa, EnrollmentTlsCa};
    use crate::ClientError;

    fn client_for(server: &MockServer) -> IbpClient {
        IbpClient::new(ClientOptions {
            url: Some(server.uri()),
            ..ClientOptions::default()
        })
        .expect("mock server URI is valid")
    }

    fn enrollment_config() -> ConfigObject {
        ConfigObject {
            enrollment: Some(ConfigObjectEnrollment {
                ca: EnrollmentCa {
                    host: "ca.example.com".to_owned(),
                    port: 7054,
                    name: "ca".to_owned(),
                    tls_cert: "dGxzLWNlcnQ=".to_owned(),
                    enroll_id: "peer1".to_owned(),
                    enroll_secret: "password".to_owned(),
                },
                tlsca: EnrollmentTlsCa {
                    host: "ca.example.com".to_owned(),
                    port: 7054,
                    name: "tlsca".to_owned(),
                    tls_cert: "dGxzLWNlcnQ=".to_owned(),
                    enroll_id: "peer1".to_owned(),
                    enroll_secret: "password".to_owned(),
                    csr_hosts: None,
                },
                ..ConfigObjectEnrollment::default()
            }),
            msp: None,
        }
    }

    #[tokio::test]
    async fn create_peer_posts_enrollment_config() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ak/api/v2/kubernetes/components/fabric-peer"))
            .and(body_partial_json(json!({
                "msp_id": "Org1",
                "display_name": "My Peer",
                "config": {"enrollment": {"ca": {"enroll_id": "peer1"}}},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "peer-1",
                "display_name": "My Peer",
                "state_db": "couchdb",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = CreatePeerOptions::new("Org1", "My Peer", enrollment_config())
            .with_state_db("couchdb");
        let response = client
            .create_peer(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.id.as_deref(), Some("peer-1"));
        assert_eq!(response.result.state_db.as_deref(), Some("couchdb"));
    }

    #[tokio::test]
    async fn create_peer_requires_msp_id() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let error = client
            .create_peer(&CreatePeerOptions::new("", "My Peer", enrollment_config()))
            .await
            .expect_err("empty msp_id must fail");
        assert!(matches!(
            error,
            ClientError::MissingRequiredField {
                operation_id: "createPeer",
                field: "msp_id",
            }
        ));
    }

    #[tokio::test]
    async fn update_peer_requires_id() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let error = client
            .update_peer(&UpdatePeerOptions::new(""))
            .await
            .expect_err("empty id must fail");
        assert!(matches!(
            error,
            ClientError::MissingPathParameter {
                operation_id: "updatePeer",
                parameter: "id",
            }
        ));
    }
}
