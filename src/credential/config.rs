use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::credential::{
    options::{
        with_allow_signup, with_client_id, with_login, with_redirect_uri, with_scope, with_state,
        with_token,
    },
    Credential, CredentialError, CredentialOption,
};

/// Credential configuration with one named field per credential attribute
///
/// Loaded from JSON:
/// ```json
/// {
///   "token": "ghp_...",
///   "client_id": "Iv1.0123456789abcdef",
///   "scope": "repo read:user"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialConfig {
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub login: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
    pub allow_signup: Option<String>,
    pub token: Option<String>,
}

impl CredentialConfig {
    pub fn from_json_str(content: &str) -> Result<Self, CredentialError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        log::debug!("Loading credential config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The option sequence equivalent to this configuration.
    ///
    /// The token comes last so it is the only step that can fail.
    pub fn options(&self) -> Vec<CredentialOption> {
        let mut options = Vec::new();
        if let Some(client_id) = &self.client_id {
            options.push(with_client_id(client_id.as_str()));
        }
        if let Some(redirect_uri) = &self.redirect_uri {
            options.push(with_redirect_uri(redirect_uri.as_str()));
        }
        if let Some(login) = &self.login {
            options.push(with_login(login.as_str()));
        }
        if let Some(scope) = &self.scope {
            options.push(with_scope(scope.as_str()));
        }
        if let Some(state) = &self.state {
            options.push(with_state(state.as_str()));
        }
        if let Some(allow_signup) = &self.allow_signup {
            options.push(with_allow_signup(allow_signup.as_str()));
        }
        if let Some(token) = &self.token {
            options.push(with_token(token.as_str()));
        }
        options
    }

    pub fn build(self) -> Result<Credential, CredentialError> {
        Credential::try_from(self)
    }
}

impl TryFrom<CredentialConfig> for Credential {
    type Error = CredentialError;

    fn try_from(config: CredentialConfig) -> Result<Self, Self::Error> {
        Credential::new(config.options())
    }
}
