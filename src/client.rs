use std::env;

use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::auth::Authenticator;
use crate::catalog::{OPERATIONS, OperationDefinition};
use crate::models::ErrorResponse;
use crate::response::RawResponse;
use crate::ClientError;

/// Environment variable holding the service base URL.
pub const ENV_URL: &str = "BLOCKCHAIN_URL";
/// Environment variable holding the auth type label.
pub const ENV_AUTH_TYPE: &str = "BLOCKCHAIN_AUTH_TYPE";

pub(crate) const ACCEPT_JSON: &str = "application/json";
pub(crate) const ACCEPT_TEXT: &str = "text/plain";

/// Construction options for [`IbpClient`].
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// Service base URL. May be omitted and set later via
    /// [`IbpClient::set_service_url`].
    pub url: Option<String>,
    /// Credential scheme applied to every request.
    pub authenticator: Authenticator,
    /// Headers sent with every request. Per-call headers override these.
    pub default_headers: Option<HeaderMap>,
    /// Transport to dispatch through. A fresh `reqwest::Client` is built
    /// when omitted; the transport owns connection pooling either way.
    pub http: Option<reqwest::Client>,
}

/// Client for the IBM Blockchain Platform management REST API.
///
/// The client holds only configuration: a base URL, an authenticator, and
/// default headers. Every operation is a single HTTP round-trip awaited by
/// the caller, so sharing a clone across tasks is safe.
#[derive(Clone, Debug)]
pub struct IbpClient {
    base_url: Option<Url>,
    authenticator: Authenticator,
    default_headers: HeaderMap,
    http: reqwest::Client,
}

impl IbpClient {
    /// Creates a client from explicit options.
    ///
    /// The URL, when present, must parse as an absolute URL. The
    /// authenticator is validated eagerly: basic auth with an empty
    /// username or password is rejected, as are empty tokens and keys.
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        options.authenticator.validate()?;

        let base_url = match options.url.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_base_url(raw)?),
        };

        Ok(Self {
            base_url,
            authenticator: options.authenticator,
            default_headers: options.default_headers.unwrap_or_default(),
            http: options.http.unwrap_or_default(),
        })
    }

    /// Creates a client from `BLOCKCHAIN_`-prefixed environment variables.
    ///
    /// Reads `BLOCKCHAIN_URL` and `BLOCKCHAIN_AUTH_TYPE`. Only the literal
    /// `noauth` auth type is accepted; the comparison is case-sensitive and
    /// an unset auth type is rejected rather than defaulted. The URL may be
    /// absent and supplied later via [`Self::set_service_url`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Environment-constructor core with an injectable variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        let auth_label = lookup(ENV_AUTH_TYPE).unwrap_or_default();
        let authenticator = Authenticator::from_type_label(&auth_label)?;

        Self::new(ClientOptions {
            url: lookup(ENV_URL),
            authenticator,
            ..ClientOptions::default()
        })
    }

    /// Replaces the service base URL.
    ///
    /// An empty string clears the URL; subsequent operations then fail with
    /// [`ClientError::MissingServiceUrl`] before dispatching anything.
    pub fn set_service_url(&mut self, url: &str) -> Result<(), ClientError> {
        self.base_url = if url.is_empty() {
            None
        } else {
            Some(parse_base_url(url)?)
        };
        Ok(())
    }

    /// Returns the configured service base URL, if any.
    pub fn service_url(&self) -> Option<&str> {
        self.base_url.as_ref().map(Url::as_str)
    }

    /// Replaces the headers sent with every request.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Returns the full operation registry.
    pub fn operations() -> &'static [&'static OperationDefinition] {
        OPERATIONS
    }

    /// Dispatches one operation round-trip and collects the raw response.
    ///
    /// `path` must already be rendered. Non-success statuses are returned as
    /// [`ClientError::HttpStatus`] with the server payload attached when it
    /// parses as JSON.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        headers: Option<&HeaderMap>,
        body: Option<Value>,
        accept: &'static str,
    ) -> Result<RawResponse, ClientError> {
        let base_url = self.base_url.as_ref().ok_or(ClientError::MissingServiceUrl)?;
        let url = join_endpoint(base_url, path)?;

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, accept)
            .headers(self.default_headers.clone());

        if let Some(extra) = headers {
            request = request.headers(extra.clone());
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        request = self.authenticator.apply(request);

        if let Some(json_body) = body {
            request = request.json(&json_body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let payload = response.text().await?;

        let raw = RawResponse {
            status,
            headers: response_headers,
            body: payload,
        };

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                error: serde_json::from_str::<ErrorResponse>(&raw.body).ok(),
                response: raw,
            });
        }

        Ok(raw)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|_| ClientError::InvalidBaseUrl(raw.to_owned()))
}

/// Joins an endpoint path onto the base URL.
///
/// The base path is normalized to a trailing slash first, so a base such as
/// `https://host/instance` keeps its prefix when endpoint paths are joined.
fn join_endpoint(base_url: &Url, path: &str) -> Result<Url, ClientError> {
    let base = ensure_trailing_slash(base_url.clone());
    base.join(path.trim_start_matches('/'))
        .map_err(|_| ClientError::InvalidPath(path.to_owned()))
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::{ClientOptions, ENV_AUTH_TYPE, ENV_URL, IbpClient, join_endpoint};
    use crate::auth::Authenticator;
    use crate::ClientError;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn rejects_malformed_base_url() {
        let error = IbpClient::new(ClientOptions {
            url: Some("{BAD_URL_STRING".to_owned()),
            ..ClientOptions::default()
        })
        .expect_err("malformed URL should be rejected");
        match error {
            ClientError::InvalidBaseUrl(raw) => assert_eq!(raw, "{BAD_URL_STRING"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_basic_auth_with_empty_credentials() {
        for authenticator in [
            Authenticator::basic("", "password"),
            Authenticator::basic("username", ""),
        ] {
            let error = IbpClient::new(ClientOptions {
                url: Some("https://blockchainv2/api".to_owned()),
                authenticator,
                ..ClientOptions::default()
            })
            .expect_err("empty credential should be rejected");
            assert!(matches!(error, ClientError::MissingCredentials(_)));
        }
    }

    #[test]
    fn external_config_accepts_noauth_literal() {
        let client = IbpClient::from_lookup(lookup_from(&[
            (ENV_URL, "https://blockchainv2/api"),
            (ENV_AUTH_TYPE, "noauth"),
        ]))
        .expect("noauth config should construct");
        assert_eq!(client.service_url(), Some("https://blockchainv2/api"));
    }

    #[test]
    fn external_config_url_can_be_overridden() {
        let mut client = IbpClient::from_lookup(lookup_from(&[
            (ENV_URL, "https://blockchainv2/api"),
            (ENV_AUTH_TYPE, "noauth"),
        ]))
        .expect("noauth config should construct");
        client
            .set_service_url("https://override.example.com/api")
            .expect("override URL is valid");
        assert_eq!(
            client.service_url(),
            Some("https://override.example.com/api")
        );
    }

    #[test]
    fn external_config_rejects_other_auth_labels() {
        for label in ["NOAuth", "basic", "iam", ""] {
            let error = IbpClient::from_lookup(lookup_from(&[
                (ENV_URL, "https://blockchainv2/api"),
                (ENV_AUTH_TYPE, label),
            ]))
            .expect_err("label should be rejected");
            assert!(matches!(error, ClientError::UnsupportedAuthType(_)));
        }
    }

    #[test]
    fn external_config_rejects_unset_auth_type() {
        let error = IbpClient::from_lookup(lookup_from(&[(ENV_URL, "https://blockchainv2/api")]))
            .expect_err("unset auth type should be rejected");
        assert!(matches!(error, ClientError::UnsupportedAuthType(_)));
    }

    #[test]
    fn empty_service_url_clears_configuration() {
        let mut client = IbpClient::new(ClientOptions {
            url: Some("https://blockchainv2/api".to_owned()),
            ..ClientOptions::default()
        })
        .expect("valid options");
        client.set_service_url("").expect("clearing never fails");
        assert_eq!(client.service_url(), None);
    }

    #[test]
    fn joins_paths_from_base_with_nested_prefix() {
        let base = reqwest::Url::parse("https://example.com/instance/v2").expect("valid url");
        let resolved =
            join_endpoint(&base, "/ak/api/v2/components").expect("valid path");
        assert_eq!(
            resolved.as_str(),
            "https://example.com/instance/v2/ak/api/v2/components"
        );
    }
}
