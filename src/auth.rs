use crate::ClientError;

/// Auth type label accepted by the external-config constructor.
pub const AUTH_TYPE_NOAUTH: &str = "noauth";

/// Credential scheme applied to every outgoing request.
///
/// The variant is fixed at client construction; requests never mutate it.
/// Token issuance and refresh are out of scope: the `Iam` variant carries a
/// credential the caller already obtained from IAM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Authenticator {
    /// No `Authorization` header.
    #[default]
    NoAuth,
    /// HTTP basic auth. Both fields must be non-empty.
    Basic { username: String, password: String },
    /// Raw bearer token, sent as `Authorization: Bearer <token>`.
    Bearer { token: String },
    /// Pre-issued IAM credential, sent as a bearer credential.
    Iam { api_key: String },
}

impl Authenticator {
    /// Basic-auth authenticator.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer-token authenticator.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// IAM authenticator around a pre-issued credential.
    pub fn iam(api_key: impl Into<String>) -> Self {
        Self::Iam {
            api_key: api_key.into(),
        }
    }

    /// Resolves an external-config auth type label.
    ///
    /// The match is an exact, case-sensitive comparison: only `noauth` is
    /// currently accepted, and misspellings such as `NOAuth` are rejected
    /// rather than coerced.
    pub(crate) fn from_type_label(label: &str) -> Result<Self, ClientError> {
        if label == AUTH_TYPE_NOAUTH {
            Ok(Self::NoAuth)
        } else {
            Err(ClientError::UnsupportedAuthType(label.to_owned()))
        }
    }

    /// Rejects empty credential fields.
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        match self {
            Self::NoAuth => Ok(()),
            Self::Basic { username, password } => {
                if username.is_empty() {
                    Err(ClientError::MissingCredentials(
                        "basic auth requires a non-empty username",
                    ))
                } else if password.is_empty() {
                    Err(ClientError::MissingCredentials(
                        "basic auth requires a non-empty password",
                    ))
                } else {
                    Ok(())
                }
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    Err(ClientError::MissingCredentials(
                        "bearer auth requires a non-empty token",
                    ))
                } else {
                    Ok(())
                }
            }
            Self::Iam { api_key } => {
                if api_key.is_empty() {
                    Err(ClientError::MissingCredentials(
                        "IAM auth requires a non-empty API key",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Attaches the credential to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::NoAuth => request,
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Iam { api_key } => request.bearer_auth(api_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Authenticator;
    use crate::ClientError;

    #[test]
    fn noauth_label_is_case_sensitive() {
        assert_eq!(
            Authenticator::from_type_label("noauth").expect("literal accepted"),
            Authenticator::NoAuth
        );
        let error = Authenticator::from_type_label("NOAuth").expect_err("misspelling rejected");
        match error {
            ClientError::UnsupportedAuthType(label) => assert_eq!(label, "NOAuth"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn basic_auth_rejects_empty_fields() {
        assert!(Authenticator::basic("", "secret").validate().is_err());
        assert!(Authenticator::basic("admin", "").validate().is_err());
        assert!(Authenticator::basic("admin", "secret").validate().is_ok());
    }

    #[test]
    fn bearer_and_iam_reject_empty_credentials() {
        assert!(Authenticator::bearer("").validate().is_err());
        assert!(Authenticator::iam("").validate().is_err());
        assert!(Authenticator::bearer("token").validate().is_ok());
        assert!(Authenticator::iam("key").validate().is_ok());
    }
}
