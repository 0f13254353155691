//! Component lifecycle operations: reads by id/type/tag, imported-component
//! removal, Kubernetes deletes, and the purge-all endpoint.

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::ClientError;
use crate::catalog::{self, render_path};
use crate::client::{ACCEPT_JSON, IbpClient};
use crate::models::{
    DeleteComponentResponse, DeleteMultiComponentsResponse, GenericComponentResponse,
    RemoveMultiComponentsResponse,
};
use crate::response::ServiceResponse;

/// Query flag value that includes the requested attribute block.
pub const ATTRS_INCLUDED: &str = "included";
/// Query flag value that omits the requested attribute block.
pub const ATTRS_OMITTED: &str = "omitted";
/// Query flag value that bypasses the server-side cache.
pub const CACHE_SKIP: &str = "skip";
/// Query flag value that allows a cached response.
pub const CACHE_USE: &str = "use";

/// Component type path segment for certificate authorities.
pub const COMPONENT_TYPE_FABRIC_CA: &str = "fabric-ca";
/// Component type path segment for peers.
pub const COMPONENT_TYPE_FABRIC_PEER: &str = "fabric-peer";
/// Component type path segment for orderers.
pub const COMPONENT_TYPE_FABRIC_ORDERER: &str = "fabric-orderer";
/// Component type path segment for imported MSP definitions.
pub const COMPONENT_TYPE_MSP: &str = "msp";

/// Options for `getComponent`.
#[derive(Clone, Debug, Default)]
pub struct GetComponentOptions {
    /// Component id.
    pub id: String,
    /// `included` to add deployment attributes (resources, storage, zone).
    pub deployment_attrs: Option<String>,
    /// `included` to parse certificates into structured data.
    pub parsed_certs: Option<String>,
    /// `skip` to bypass the server-side cache.
    pub cache: Option<String>,
    /// `included` to add CA attributes such as the CA name.
    pub ca_attrs: Option<String>,
    /// Extra headers sent with this request only.
    pub headers: Option<HeaderMap>,
}

impl GetComponentOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_deployment_attrs(mut self, value: impl Into<String>) -> Self {
        self.deployment_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_parsed_certs(mut self, value: impl Into<String>) -> Self {
        self.parsed_certs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cache(mut self, value: impl Into<String>) -> Self {
        self.cache = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ca_attrs(mut self, value: impl Into<String>) -> Self {
        self.ca_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `removeComponent` (imported components).
#[derive(Clone, Debug, Default)]
pub struct RemoveComponentOptions {
    pub id: String,
    pub headers: Option<HeaderMap>,
}

impl RemoveComponentOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `deleteComponent` (Kubernetes-deployed components).
#[derive(Clone, Debug, Default)]
pub struct DeleteComponentOptions {
    pub id: String,
    pub headers: Option<HeaderMap>,
}

impl DeleteComponentOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `listComponents`.
#[derive(Clone, Debug, Default)]
pub struct ListComponentsOptions {
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub ca_attrs: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl ListComponentsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_deployment_attrs(mut self, value: impl Into<String>) -> Self {
        self.deployment_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_parsed_certs(mut self, value: impl Into<String>) -> Self {
        self.parsed_certs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cache(mut self, value: impl Into<String>) -> Self {
        self.cache = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ca_attrs(mut self, value: impl Into<String>) -> Self {
        self.ca_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `getComponentsByType`.
#[derive(Clone, Debug, Default)]
pub struct GetComponentsByTypeOptions {
    /// One of the `COMPONENT_TYPE_*` path segments.
    pub component_type: String,
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl GetComponentsByTypeOptions {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_deployment_attrs(mut self, value: impl Into<String>) -> Self {
        self.deployment_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_parsed_certs(mut self, value: impl Into<String>) -> Self {
        self.parsed_certs = Some(value.into());
        self
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

/// Options for `getComponentsByTag`.
#[derive(Clone, Debug, Default)]
pub struct GetComponentsByTagOptions {
    pub tag: String,
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl GetComponentsByTagOptions {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_deployment_attrs(mut self, value: impl Into<String>) -> Self {
        self.deployment_attrs = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_parsed_certs(mut self, value: impl Into<String>) -> Self {
        self.parsed_certs = Some(value.into());
        self
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

/// Options for `removeComponentsByTag`.
#[derive(Clone, Debug, Default)]
pub struct RemoveComponentsByTagOptions {
    pub tag: String,
    pub headers: Option<HeaderMap>,
}

impl RemoveComponentsByTagOptions {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            headers: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `deleteComponentsByTag`.
#[derive(Clone, Debug, Default)]
pub struct DeleteComponentsByTagOptions {
    pub tag: String,
    pub headers: Option<HeaderMap>,
}

impl DeleteComponentsByTagOptions {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            headers: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Options for `deleteAllComponents`.
#[derive(Clone, Debug, Default)]
pub struct DeleteAllComponentsOptions {
    pub headers: Option<HeaderMap>,
}

impl DeleteAllComponentsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

impl IbpClient {
    /// Gets one component by id.
    ///
    /// Deployment attributes, parsed certificates, and CA attributes are
    /// only present when the corresponding query flags ask for them.
    pub async fn get_component(
        &self,
        options: &GetComponentOptions,
    ) -> Result<ServiceResponse<GenericComponentResponse>, ClientError> {
        let path = render_path(&catalog::GET_COMPONENT, &[("id", &options.id)])?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = options.deployment_attrs.as_deref() {
            query.push(("deployment_attrs", value));
        }
        if let Some(value) = options.parsed_certs.as_deref() {
            query.push(("parsed_certs", value));
        }
        if let Some(value) = options.cache.as_deref() {
            query.push(("cache", value));
        }
        if let Some(value) = options.ca_attrs.as_deref() {
            query.push(("ca_attrs", value));
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

    /// Removes an imported component from the console.
    ///
    /// The running node, if any, is untouched; see
    /// [`Self::delete_component`] for Kubernetes-deployed components.
    pub async fn remove_component(
        &self,
        options: &RemoveComponentOptions,
    ) -> Result<ServiceResponse<DeleteComponentResponse>, ClientError> {
        let path = render_path(&catalog::REMOVE_COMPONENT, &[("id", &options.id)])?;
        self.send(
            Method::DELETE,
            &path,
            &[],
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Deletes a Kubernetes-deployed component and its deployment.
    pub async fn delete_component(
        &self,
        options: &DeleteComponentOptions,
    ) -> Result<ServiceResponse<DeleteComponentResponse>, ClientError> {
        let path = render_path(&catalog::DELETE_COMPONENT, &[("id", &options.id)])?;
        self.send(
            Method::DELETE,
            &path,
            &[],
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Lists every component the console knows about.
    pub async fn list_components(
        &self,
        options: &ListComponentsOptions,
    ) -> Result<ServiceResponse<Vec<GenericComponentResponse>>, ClientError> {
        let path = render_path(&catalog::LIST_COMPONENTS, &[])?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = options.deployment_attrs.as_deref() {
            query.push(("deployment_attrs", value));
        }
        if let Some(value) = options.parsed_certs.as_deref() {
            query.push(("parsed_certs", value));
        }
        if let Some(value) = options.cache.as_deref() {
            query.push(("cache", value));
        }
        if let Some(value) = options.ca_attrs.as_deref() {
            query.push(("ca_attrs", value));
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

    /// Lists components of one type (`fabric-ca`, `fabric-peer`,
    /// `fabric-orderer`, or `msp`).
    pub async fn get_components_by_type(
        &self,
        options: &GetComponentsByTypeOptions,
    ) -> Result<ServiceResponse<Vec<GenericComponentResponse>>, ClientError> {
        let path = render_path(
            &catalog::GET_COMPONENTS_BY_TYPE,
            &[("type", &options.component_type)],
        )?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = options.deployment_attrs.as_deref() {
            query.push(("deployment_attrs", value));
        }
        if let Some(value) = options.parsed_certs.as_deref() {
            query.push(("parsed_certs", value));
        }
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

    /// Lists components carrying one tag.
    pub async fn get_components_by_tag(
        &self,
        options: &GetComponentsByTagOptions,
    ) -> Result<ServiceResponse<Vec<GenericComponentResponse>>, ClientError> {
        let path = render_path(&catalog::GET_COMPONENTS_BY_TAG, &[("tag", &options.tag)])?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = options.deployment_attrs.as_deref() {
            query.push(("deployment_attrs", value));
        }
        if let Some(value) = options.parsed_certs.as_deref() {
            query.push(("parsed_certs", value));
        }
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

    /// Removes every imported component carrying one tag.
    pub async fn remove_components_by_tag(
        &self,
        options: &RemoveComponentsByTagOptions,
    ) -> Result<ServiceResponse<RemoveMultiComponentsResponse>, ClientError> {
        let path = render_path(&catalog::REMOVE_COMPONENTS_BY_TAG, &[("tag", &options.tag)])?;
        self.send(
            Method::DELETE,
            &path,
            &[],
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Deletes every Kubernetes-deployed component carrying one tag.
    pub async fn delete_components_by_tag(
        &self,
        options: &DeleteComponentsByTagOptions,
    ) -> Result<ServiceResponse<DeleteMultiComponentsResponse>, ClientError> {
        let path = render_path(&catalog::DELETE_COMPONENTS_BY_TAG, &[("tag", &options.tag)])?;
        self.send(
            Method::DELETE,
            &path,
            &[],
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }

    /// Deletes every component in the cluster, deployed or imported.
    pub async fn delete_all_components(
        &self,
        options: &DeleteAllComponentsOptions,
    ) -> Result<ServiceResponse<DeleteMultiComponentsResponse>, ClientError> {
        let path = render_path(&catalog::DELETE_ALL_COMPONENTS, &[])?;
        self.send(
            Method::DELETE,
            &path,
            &[],
            options.headers.as_ref(),
            None,
            ACCEPT_JSON,
        )
        .await?
        .into_json()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{
        ATTRS_INCLUDED, CACHE_SKIP, COMPONENT_TYPE_FABRIC_PEER, DeleteComponentOptions,
        GetComponentOptions, GetComponentsByTypeOptions, ListComponentsOptions,
    };
    use crate::client::{ClientOptions, IbpClient};
    use crate::ClientError;

    fn client_for(server: &MockServer) -> IbpClient {
        IbpClient::new(ClientOptions {
            url: Some(server.uri()),
            ..ClientOptions::default()
        })
        .expect("mock server URI is valid")
    }

    #[tokio::test]
    async fn get_component_sends_expected_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ak/api/v2/components/testString"))
            .and(query_param("deployment_attrs", "included"))
            .and(query_param("parsed_certs", "included"))
            .and(query_param("cache", "skip"))
            .and(query_param("ca_attrs", "included"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "testString",
                "type": "fabric-peer",
                "display_name": "My Peer",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = GetComponentOptions::new("testString")
            .with_deployment_attrs(ATTRS_INCLUDED)
            .with_parsed_certs(ATTRS_INCLUDED)
            .with_cache(CACHE_SKIP)
            .with_ca_attrs(ATTRS_INCLUDED);

        let response = client
            .get_component(&options)
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.id.as_deref(), Some("testString"));
        assert_eq!(response.result.component_type.as_deref(), Some("fabric-peer"));
    }

    #[tokio::test]
    async fn get_component_requires_id_before_dispatch() {
        // No service URL is configured: a dispatch attempt would fail with a
        // different error, so validation provably runs first.
        let client = IbpClient::new(ClientOptions::default()).expect("empty options are valid");
        let error = client
            .get_component(&GetComponentOptions::new(""))
            .await
            .expect_err("empty id must fail");
        assert!(matches!(
            error,
            ClientError::MissingPathParameter {
                operation_id: "getComponent",
                parameter: "id",
            }
        ));
    }

    #[tokio::test]
    async fn operations_fail_without_service_url() {
        let mut client = IbpClient::new(ClientOptions {
            url: Some("https://blockchainv2/api".to_owned()),
            ..ClientOptions::default()
        })
        .expect("valid options");
        client.set_service_url("").expect("clearing never fails");

        let error = client
            .get_component(&GetComponentOptions::new("testString"))
            .await
            .expect_err("missing URL must fail");
        assert!(matches!(error, ClientError::MissingServiceUrl));
        assert!(error.to_string().contains("service URL missing"));
    }

    #[tokio::test]
    async fn invalid_json_body_yields_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ak/api/v2/components/testString"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("} this is not valid json {", "application/json"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .get_component(&GetComponentOptions::new("testString"))
            .await
            .expect_err("invalid JSON must fail");

        match &error {
            ClientError::Deserialization { response, .. } => {
                assert_eq!(response.status.as_u16(), 200);
                assert_eq!(response.body, "} this is not valid json {");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(error.response().is_some());
    }

    #[tokio::test]
    async fn server_error_payload_is_attached() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/ak/api/v2/kubernetes/components/component-1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "statusCode": 500,
                "msg": "problem deleting component",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .delete_component(&DeleteComponentOptions::new("component-1"))
            .await
            .expect_err("500 must fail");

        match error {
            ClientError::HttpStatus { error, response } => {
                assert_eq!(response.status.as_u16(), 500);
                let payload = error.expect("payload parses");
                assert_eq!(payload.status_code, Some(500));
                assert_eq!(payload.msg.as_deref(), Some("problem deleting component"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn list_components_decodes_top_level_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ak/api/v2/components"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "ca-1", "type": "fabric-ca"},
                {"id": "peer-1", "type": "fabric-peer"},
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .list_components(&ListComponentsOptions::new())
            .await
            .expect("operation succeeds");
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.result[1].id.as_deref(), Some("peer-1"));
    }

    #[tokio::test]
    async fn per_call_headers_reach_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ak/api/v2/components/types/fabric-peer"))
            .and(header("x-custom-header", "custom-value"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut headers = HeaderMap::new();
        headers.insert("x-custom-header", HeaderValue::from_static("custom-value"));
        let options =
            GetComponentsByTypeOptions::new(COMPONENT_TYPE_FABRIC_PEER).with_headers(headers);

        let response = client
            .get_components_by_type(&options)
            .await
            .expect("operation succeeds");
        assert!(response.result.is_empty());
    }
}
