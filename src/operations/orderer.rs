//! Orderer operations: raft create, import, update, and edit.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::ClientError;
use crate::catalog::{self, render_path};
use crate::client::{ACCEPT_JSON, IbpClient};
use crate::models::{
    ConfigObject, ConfigOrdererCreate, ConfigOrdererUpdate, CreateOrdererBody,
    CreateOrdererRaftBodyResources, CreateOrdererRaftBodyStorage, EditOrdererBody, Hsm,
    ImportOrdererBody, MspCryptoField, NodeOu, OrdererResponse, UpdateOrdererBody,
};
use crate::operations::require_field;
use crate::response::ServiceResponse;

/// The only ordering-service type that can be created.
pub const ORDERER_TYPE_RAFT: &str = "raft";

/// Options for `createOrderer`.
///
/// The per-node arrays are index-aligned: `config[n]`, and when present
/// `config_override[n]`, `zone[n]`, and `region[n]`, all configure raft
/// node `n`.
#[derive(Clone, Debug, Default)]
pub struct CreateOrdererOptions {
    /// [`ORDERER_TYPE_RAFT`].
    pub orderer_type: String,
    pub msp_id: String,
    pub display_name: String,
    /// One crypto entry per raft node.
    pub config: Vec<ConfigObject>,
    pub cluster_name: Option<String>,
    /// Appends nodes to an existing cluster instead of creating one.
    pub cluster_id: Option<String>,
    pub config_override: Option<Vec<ConfigOrdererCreate>>,
    pub resources: Option<CreateOrdererRaftBodyResources>,
    pub storage: Option<CreateOrdererRaftBodyStorage>,
    pub system_channel_id: Option<String>,
    pub zone: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub region: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub version: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl CreateOrdererOptions {
    pub fn new(
        orderer_type: impl Into<String>,
        msp_id: impl Into<String>,
        display_name: impl Into<String>,
        config: Vec<ConfigObject>,
    ) -> Self {
        Self {
            orderer_type: orderer_type.into(),
            msp_id: msp_id.into(),
            display_name: display_name.into(),
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cluster_name(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = Some(cluster_name.into());
        self
    }

    #[must_use]
    pub fn with_cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.cluster_id = Some(cluster_id.into());
        self
    }

    #[must_use]
    pub fn with_config_override(mut self, config_override: Vec<ConfigOrdererCreate>) -> Self {
        self.config_override = Some(config_override);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: CreateOrdererRaftBodyResources) -> Self {
        self.resources = Some(resources);
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: CreateOrdererRaftBodyStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn with_system_channel_id(mut self, system_channel_id: impl Into<String>) -> Self {
        self.system_channel_id = Some(system_channel_id.into());
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: Vec<String>) -> Self {
        self.zone = Some(zone);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: Vec<String>) -> Self {
        self.region = Some(region);
        self
    }

    #[must_use]
    pub fn with_hsm(mut self, hsm: Hsm) -> Self {
        self.hsm = Some(hsm);
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

/// Options for `importOrderer`.
#[derive(Clone, Debug, Default)]
pub struct ImportOrdererOptions {
    pub cluster_name: String,
    pub display_name: String,
    /// gRPC web proxy URL fronting the orderer.
    pub grpcwp_url: String,
    pub msp: MspCryptoField,
    pub msp_id: String,
    pub api_url: Option<String>,
    pub cluster_id: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub system_channel_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl ImportOrdererOptions {
    pub fn new(
        cluster_name: impl Into<String>,
        display_name: impl Into<String>,
        grpcwp_url: impl Into<String>,
        msp: MspCryptoField,
        msp_id: impl Into<String>,
    ) -> Self {
        Self {
            cluster_name: cluster_name.into(),
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
    pub fn with_cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.cluster_id = Some(cluster_id.into());
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
    pub fn with_system_channel_id(mut self, system_channel_id: impl Into<String>) -> Self {
        self.system_channel_id = Some(system_channel_id.into());
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

/// Options for `updateOrderer` (redeploys the node when config changes).
#[derive(Clone, Debug, Default)]
pub struct UpdateOrdererOptions {
    pub id: String,
    pub admin_certs: Option<Vec<String>>,
    pub config_override: Option<ConfigOrdererUpdate>,
    pub node_ou: Option<NodeOu>,
    pub replicas: Option<i64>,
    pub resources: Option<CreateOrdererRaftBodyResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl UpdateOrdererOptions {
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
    pub fn with_config_override(mut self, config_override: ConfigOrdererUpdate) -> Self {
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
    pub fn with_resources(mut self, resources: CreateOrdererRaftBodyResources) -> Self {
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

/// Options for `editOrderer` (metadata-only edits).
#[derive(Clone, Debug, Default)]
pub struct EditOrdererOptions {
    pub id: String,
    pub cluster_name: Option<String>,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub grpcwp_url: Option<String>,
    pub msp_id: Option<String>,
    /// Mark the pre-created orderer as finished joining a consortium.
    pub consenter_proposal_fin: Option<bool>,
    pub location: Option<String>,
    pub system_channel_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub headers: Option<HeaderMap>,
}

impl EditOrdererOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cluster_name(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = Some(cluster_name.into());
        self
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
    pub fn with_consenter_proposal_fin(mut self, consenter_proposal_fin: bool) -> Self {
        self.consenter_proposal_fin = Some(consenter_proposal_fin);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_system_channel_id(mut self, system_channel_id: impl Into<String>) -> Self {
        self.system_channel_id = Some(system_channel_id.into());
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
    /// Creates a raft ordering service in the Kubernetes cluster.
    pub async fn create_orderer(
        &self,
        options: &CreateOrdererOptions,
    ) -> Result<ServiceResponse<OrdererResponse>, ClientError> {
        require_field(&catalog::CREATE_ORDERER, "orderer_type", &options.orderer_type)?;
        require_field(&catalog::CREATE_ORDERER, "msp_id", &options.msp_id)?;
        require_field(
            &catalog::CREATE_ORDERER,
            "display_name",
            &options.display_name,
        )?;
        if options.config.is_empty() {
            return Err(ClientError::MissingRequiredField {
                operation_id: catalog::CREATE_ORDERER.operation_id,
                field: "config",
            });
        }
        let path = render_path(&catalog::CREATE_ORDERER, &[])?;

        let body = CreateOrdererBody {
            orderer_type: options.orderer_type.clone(),
            msp_id: options.msp_id.clone(),
            display_name: options.display_name.clone(),
            config: options.config.clone(),
            cluster_name: options.cluster_name.clone(),
            cluster_id: options.cluster_id.clone(),
            config_override: options.config_override.clone(),
            resources: options.resources.clone(),
            storage: options.storage.clone(),
            system_channel_id: options.system_channel_id.clone(),
            zone: options.zone.clone(),
            tags: options.tags.clone(),
            region: options.region.clone(),
            hsm: options.hsm.clone(),
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

    /// Imports an orderer running elsewhere.
    pub async fn import_orderer(
        &self,
        options: &ImportOrdererOptions,
    ) -> Result<ServiceResponse<OrdererResponse>, ClientError> {
        require_field(
            &catalog::IMPORT_ORDERER,
            "cluster_name",
            &options.cluster_name,
        )?;
        require_field(
            &catalog::IMPORT_ORDERER,
            "display_name",
            &options.display_name,
        )?;
        require_field(&catalog::IMPORT_ORDERER, "grpcwp_url", &options.grpcwp_url)?;
        require_field(&catalog::IMPORT_ORDERER, "msp_id", &options.msp_id)?;
        let path = render_path(&catalog::IMPORT_ORDERER, &[])?;

        let body = ImportOrdererBody {
            cluster_name: options.cluster_name.clone(),
            display_name: options.display_name.clone(),
            grpcwp_url: options.grpcwp_url.clone(),
            msp: options.msp.clone(),
            msp_id: options.msp_id.clone(),
            api_url: options.api_url.clone(),
            cluster_id: options.cluster_id.clone(),
            location: options.location.clone(),
            operations_url: options.operations_url.clone(),
            system_channel_id: options.system_channel_id.clone(),
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

    /// Updates a deployed orderer node. Config changes restart the node.
    pub async fn update_orderer(
        &self,
        options: &UpdateOrdererOptions,
    ) -> Result<ServiceResponse<OrdererResponse>, ClientError> {
        let path = render_path(&catalog::UPDATE_ORDERER, &[("id", &options.id)])?;

        let body = UpdateOrdererBody {
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

    /// Edits console metadata of an orderer without touching the deployment.
    pub async fn edit_orderer(
        &self,
        options: &EditOrdererOptions,
    ) -> Result<ServiceResponse<OrdererResponse>, ClientError> {
        let path = render_path(&catalog::EDIT_ORDERER, &[("id", &options.id)])?;

        let body = EditOrdererBody {
            cluster_name: options.cluster_name.clone(),
            display_name: options.display_name.clone(),
            api_url: options.api_url.clone(),
            operations_url: options.operations_url.clone(),
            grpcwp_url: options.grpcwp_url.clone(),
            msp_id: options.msp_id.clone(),
            consenter_proposal_fin: options.consenter_proposal_fin,
            location: options.location.clone(),
            system_channel_id: options.system_channel_id.clone(),
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

    use super::{CreateOrdererOptions, EditOrdererOptions, ORDERER_TYPE_RAFT};
    use crate::client::{ClientOptions, IbpClient};
    use crate::models::ConfigObject;
    use crate::ClientError;

    fn client_for(server: &MockServer) -> IbpClient {
        IbpClient::new(ClientOptions {
            url: Some(server.uri()),
            ..ClientOptions::default()
        })
        .expect("mock server URI is valid")
    }

    #[tokio::test]
    async fn create_orderer_posts_one_config_per_node() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ak/api/v2/kubernetes/components/fabric-orderer"))
            .and(body_partial_json(json!({
                "orderer_type": "raft",
                "msp_id": "OrdererOrg",
                "display_name": "My OS",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "orderer-1",
                "orderer_type": "raft",
                "cluster_name": "My OS",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = CreateOrdererOptions::new(
            ORDERER_TYPE_RAFT,
            "OrdererOrg",
            "My OS",
            vec![ConfigObject::default()],
        )
        .with_cluster_name("My OS");
        let response = client
            .create_orderer(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.orderer_type.as_deref(), Some("raft"));
    }

    #[tokio::test]
    async fn create_orderer_requires_node_configs() {
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let options =
            CreateOrdererOptions::new(ORDERER_TYPE_RAFT, "OrdererOrg", "My OS", Vec::new());
        let error = client
            .create_orderer(&options)
            .await
            .expect_err("empty config array must fail");
        assert!(matches!(
            error,
            ClientError::MissingRequiredField {
                operation_id: "createOrderer",
                field: "config",
            }
        ));
    }

    #[tokio::test]
    async fn edit_orderer_marks_consenter_proposal_done() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/ak/api/v2/components/fabric-orderer/orderer-1"))
            .and(body_partial_json(json!({"consenter_proposal_fin": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "orderer-1",
                "consenter_proposal_fin": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = EditOrdererOptions::new("orderer-1").with_consenter_proposal_fin(true);
        let response = client
            .edit_orderer(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.consenter_proposal_fin, Some(true));
    }
}
