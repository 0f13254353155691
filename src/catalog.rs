use url::form_urlencoded::byte_serialize;

use crate::ClientError;

/// Metadata for one REST operation.
///
/// The IBP management paths are literal and stable, so the registry is
/// committed in-source rather than generated from the service's OpenAPI
/// document.
#[derive(Clone, Copy, Debug)]
pub struct OperationDefinition {
    /// Stable operation identifier.
    pub operation_id: &'static str,
    /// Uppercase HTTP method (for example `GET`, `POST`).
    pub method: &'static str,
    /// Path template, potentially containing `{param}` placeholders.
    pub path_template: &'static str,
    /// Required path parameter names extracted from `path_template`.
    pub path_params: &'static [&'static str],
}

macro_rules! operation {
    ($name:ident, $id:literal, $method:literal, $path:literal, [$($param:literal),*]) => {
        pub(crate) static $name: OperationDefinition = OperationDefinition {
            operation_id: $id,
            method: $method,
            path_template: $path,
            path_params: &[$($param),*],
        };
    };
}

// Components.
operation!(GET_COMPONENT, "getComponent", "GET", "/ak/api/v2/components/{id}", ["id"]);
operation!(REMOVE_COMPONENT, "removeComponent", "DELETE", "/ak/api/v2/components/{id}", ["id"]);
operation!(DELETE_COMPONENT, "deleteComponent", "DELETE", "/ak/api/v2/kubernetes/components/{id}", ["id"]);
operation!(LIST_COMPONENTS, "listComponents", "GET", "/ak/api/v2/components", []);
operation!(GET_COMPONENTS_BY_TYPE, "getComponentsByType", "GET", "/ak/api/v2/components/types/{type}", ["type"]);
operation!(GET_COMPONENTS_BY_TAG, "getComponentsByTag", "GET", "/ak/api/v2/components/tags/{tag}", ["tag"]);
operation!(REMOVE_COMPONENTS_BY_TAG, "removeComponentsByTag", "DELETE", "/ak/api/v2/components/tags/{tag}", ["tag"]);
operation!(DELETE_COMPONENTS_BY_TAG, "deleteComponentsByTag", "DELETE", "/ak/api/v2/kubernetes/components/tags/{tag}", ["tag"]);
operation!(DELETE_ALL_COMPONENTS, "deleteAllComponents", "DELETE", "/ak/api/v2/kubernetes/components/purge", []);

// Certificate authorities.
operation!(CREATE_CA, "createCa", "POST", "/ak/api/v2/kubernetes/components/fabric-ca", []);
operation!(IMPORT_CA, "importCa", "POST", "/ak/api/v2/components/fabric-ca", []);
operation!(UPDATE_CA, "updateCa", "PUT", "/ak/api/v2/kubernetes/components/fabric-ca/{id}", ["id"]);
operation!(EDIT_CA, "editCa", "PUT", "/ak/api/v2/components/fabric-ca/{id}", ["id"]);
operation!(SUBMIT_BLOCK, "submitBlock", "PUT", "/ak/api/v2/kubernetes/components/{id}/config", ["id"]);

// Peers.
operation!(CREATE_PEER, "createPeer", "POST", "/ak/api/v2/kubernetes/components/fabric-peer", []);
operation!(IMPORT_PEER, "importPeer", "POST", "/ak/api/v2/components/fabric-peer", []);
operation!(UPDATE_PEER, "updatePeer", "PUT", "/ak/api/v2/kubernetes/components/fabric-peer/{id}", ["id"]);
operation!(EDIT_PEER, "editPeer", "PUT", "/ak/api/v2/components/fabric-peer/{id}", ["id"]);

// Orderers.
operation!(CREATE_ORDERER, "createOrderer", "POST", "/ak/api/v2/kubernetes/components/fabric-orderer", []);
operation!(IMPORT_ORDERER, "importOrderer", "POST", "/ak/api/v2/components/fabric-orderer", []);
operation!(UPDATE_ORDERER, "updateOrderer", "PUT", "/ak/api/v2/kubernetes/components/fabric-orderer/{id}", ["id"]);
operation!(EDIT_ORDERER, "editOrderer", "PUT", "/ak/api/v2/components/fabric-orderer/{id}", ["id"]);

// MSPs.
operation!(IMPORT_MSP, "importMsp", "POST", "/ak/api/v2/components/msp", []);
operation!(EDIT_MSP, "editMsp", "PUT", "/ak/api/v2/components/msp/{id}", ["id"]);
operation!(GET_MSP_CERTIFICATE, "getMspCertificate", "GET", "/ak/api/v2/components/msps/{msp_id}", ["msp_id"]);
operation!(EDIT_ADMIN_CERTS, "editAdminCerts", "PUT", "/ak/api/v2/kubernetes/components/{id}/certs", ["id"]);

// Platform.
operation!(GET_SETTINGS, "getSettings", "GET", "/ak/api/v2/settings", []);
operation!(EDIT_SETTINGS, "editSettings", "PUT", "/ak/api/v2/settings", []);
operation!(GET_FABRIC_VERSIONS, "getFabricVersions", "GET", "/ak/api/v2/kubernetes/fabric/versions", []);
operation!(GET_HEALTH, "getHealth", "GET", "/ak/api/v2/health", []);
operation!(LIST_NOTIFICATIONS, "listNotifications", "GET", "/ak/api/v2/notifications", []);
operation!(ARCHIVE_NOTIFICATIONS, "archiveNotifications", "POST", "/ak/api/v2/notifications/bulk", []);
operation!(DELETE_ALL_NOTIFICATIONS, "deleteAllNotifications", "DELETE", "/ak/api/v2/notifications/purge", []);
operation!(DELETE_SIG_TX, "deleteSigTx", "DELETE", "/ak/api/v2/signature_collections/{id}", ["id"]);
operation!(DELETE_ALL_SESSIONS, "deleteAllSessions", "DELETE", "/ak/api/v2/sessions", []);
operation!(CLEAR_CACHES, "clearCaches", "POST", "/ak/api/v2/cache", []);
operation!(RESTART, "restart", "POST", "/ak/api/v2/restart", []);
operation!(GET_SWAGGER, "getSwagger", "GET", "/ak/api/v2/openapi", []);
operation!(GET_POSTMAN, "getPostman", "GET", "/ak/api/v2/postman", []);

/// Every operation exposed by the client, in endpoint-family order.
pub static OPERATIONS: &[&OperationDefinition] = &[
    &GET_COMPONENT,
    &REMOVE_COMPONENT,
    &DELETE_COMPONENT,
    &LIST_COMPONENTS,
    &GET_COMPONENTS_BY_TYPE,
    &GET_COMPONENTS_BY_TAG,
    &REMOVE_COMPONENTS_BY_TAG,
    &DELETE_COMPONENTS_BY_TAG,
    &DELETE_ALL_COMPONENTS,
    &CREATE_CA,
    &IMPORT_CA,
    &UPDATE_CA,
    &EDIT_CA,
    &SUBMIT_BLOCK,
    &CREATE_PEER,
    &IMPORT_PEER,
    &UPDATE_PEER,
    &EDIT_PEER,
    &CREATE_ORDERER,
    &IMPORT_ORDERER,
    &UPDATE_ORDERER,
    &EDIT_ORDERER,
    &IMPORT_MSP,
    &EDIT_MSP,
    &GET_MSP_CERTIFICATE,
    &EDIT_ADMIN_CERTS,
    &GET_SETTINGS,
    &EDIT_SETTINGS,
    &GET_FABRIC_VERSIONS,
    &GET_HEALTH,
    &LIST_NOTIFICATIONS,
    &ARCHIVE_NOTIFICATIONS,
    &DELETE_ALL_NOTIFICATIONS,
    &DELETE_SIG_TX,
    &DELETE_ALL_SESSIONS,
    &CLEAR_CACHES,
    &RESTART,
    &GET_SWAGGER,
    &GET_POSTMAN,
];

/// Renders an operation path, substituting `{param}` placeholders.
///
/// Values are percent-encoded per segment. A required parameter that is
/// absent or empty yields [`ClientError::MissingPathParameter`].
pub(crate) fn render_path(
    operation: &'static OperationDefinition,
    path_params: &[(&'static str, &str)],
) -> Result<String, ClientError> {
    let mut rendered = operation.path_template.to_owned();

    for required_param in operation.path_params {
        let value = path_params
            .iter()
            .find(|(name, _)| name == required_param)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
            .ok_or(ClientError::MissingPathParameter {
                operation_id: operation.operation_id,
                parameter: *required_param,
            })?;

        let placeholder = format!("{{{required_param}}}");
        rendered = rendered.replace(&placeholder, &encode_path_segment(value));
    }

    Ok(rendered)
}

fn encode_path_segment(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{GET_COMPONENT, OPERATIONS, render_path};
    use crate::ClientError;

    #[test]
    fn catalog_covers_every_endpoint_family() {
        assert_eq!(OPERATIONS.len(), 39);
        let unique: HashSet<&str> = OPERATIONS.iter().map(|op| op.operation_id).collect();
        assert_eq!(unique.len(), OPERATIONS.len());
    }

    #[test]
    fn catalog_paths_are_rooted_and_consistent() {
        for operation in OPERATIONS {
            assert!(
                operation.path_template.starts_with("/ak/api/v2"),
                "unexpected path for {}",
                operation.operation_id
            );
            for param in operation.path_params {
                assert!(
                    operation.path_template.contains(&format!("{{{param}}}")),
                    "{} does not reference {{{param}}}",
                    operation.operation_id
                );
            }
        }
    }

    #[test]
    fn render_path_replaces_required_path_params() {
        let path = render_path(&GET_COMPONENT, &[("id", "component-1")]).expect("path renders");
        assert_eq!(path, "/ak/api/v2/components/component-1");
    }

    #[test]
    fn render_path_percent_encodes_values() {
        let path = render_path(&GET_COMPONENT, &[("id", "org one")]).expect("path renders");
        assert_eq!(path, "/ak/api/v2/components/org+one");
    }

    #[test]
    fn render_path_reports_missing_parameter() {
        let error = render_path(&GET_COMPONENT, &[]).expect_err("missing parameter should error");
        match error {
            ClientError::MissingPathParameter {
                operation_id,
                parameter,
            } => {
                assert_eq!(operation_id, "getComponent");
                assert_eq!(parameter, "id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_path_treats_empty_value_as_missing() {
        let error = render_path(&GET_COMPONENT, &[("id", "")]).expect_err("empty id should error");
        assert!(matches!(error, ClientError::MissingPathParameter { .. }));
    }
}
