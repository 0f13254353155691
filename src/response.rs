use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::ClientError;

/// Undecoded HTTP response: status, headers, and body text.
///
/// Attached to server-status and decoding errors so callers can inspect the
/// wire-level exchange even when no typed result exists.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Decodes the body as JSON into `T`, keeping status and headers.
    ///
    /// The body text is parsed regardless of the response content-type, so
    /// endpoints that answer `text/plain` with a JSON payload still decode.
    pub(crate) fn into_json<T: DeserializeOwned>(self) -> Result<ServiceResponse<T>, ClientError> {
        match serde_json::from_str(&self.body) {
            Ok(result) => Ok(ServiceResponse {
                status: self.status,
                headers: self.headers,
                result,
            }),
            Err(source) => Err(ClientError::Deserialization {
                source,
                response: self,
            }),
        }
    }

    /// Returns the body verbatim, keeping status and headers.
    ///
    /// Used by the raw-document endpoints (`getSwagger`, `getPostman`).
    pub(crate) fn into_text(self) -> ServiceResponse<String> {
        ServiceResponse {
            status: self.status,
            headers: self.headers,
            result: self.body,
        }
    }
}

/// Successful operation outcome: decoded result plus response metadata.
#[derive(Clone, Debug)]
pub struct ServiceResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}
