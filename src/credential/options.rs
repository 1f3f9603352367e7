use crate::credential::{token::validate_token, Credential, CredentialError};

/// A single configuration step applied while building a [`Credential`]
///
/// Options are applied in order, so a later option overwrites the field
/// set by an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOption {
    ClientId(String),
    RedirectUri(String),
    Login(String),
    Scope(String),
    State(String),
    AllowSignup(String),
    Token(String),
}

impl CredentialOption {
    /// Apply this option to an in-progress credential
    pub(crate) fn apply(self, credential: &mut Credential) -> Result<(), CredentialError> {
        match self {
            CredentialOption::ClientId(client_id) => credential.client_id = Some(client_id),
            CredentialOption::RedirectUri(redirect_uri) => {
                credential.redirect_uri = Some(redirect_uri)
            }
            CredentialOption::Login(login) => credential.login = Some(login),
            CredentialOption::Scope(scope) => credential.scope = Some(scope),
            CredentialOption::State(state) => credential.state = Some(state),
            CredentialOption::AllowSignup(allow_signup) => {
                credential.allow_signup = Some(allow_signup)
            }
            CredentialOption::Token(token) => {
                validate_token(&token)?;
                credential.token = Some(token);
            }
        }
        Ok(())
    }

    /// Name of the field this option sets, used for logging
    pub fn field(&self) -> &'static str {
        match self {
            CredentialOption::ClientId(_) => "client_id",
            CredentialOption::RedirectUri(_) => "redirect_uri",
            CredentialOption::Login(_) => "login",
            CredentialOption::Scope(_) => "scope",
            CredentialOption::State(_) => "state",
            CredentialOption::AllowSignup(_) => "allow_signup",
            CredentialOption::Token(_) => "token",
        }
    }
}

pub fn with_client_id(client_id: impl Into<String>) -> CredentialOption {
    CredentialOption::ClientId(client_id.into())
}

pub fn with_redirect_uri(redirect_uri: impl Into<String>) -> CredentialOption {
    CredentialOption::RedirectUri(redirect_uri.into())
}

pub fn with_login(login: impl Into<String>) -> CredentialOption {
    CredentialOption::Login(login.into())
}

pub fn with_scope(scope: impl Into<String>) -> CredentialOption {
    CredentialOption::Scope(scope.into())
}

pub fn with_state(state: impl Into<String>) -> CredentialOption {
    CredentialOption::State(state.into())
}

pub fn with_allow_signup(allow_signup: impl Into<String>) -> CredentialOption {
    CredentialOption::AllowSignup(allow_signup.into())
}

/// Set the bearer token; the only option that validates its input
pub fn with_token(token: impl Into<String>) -> CredentialOption {
    CredentialOption::Token(token.into())
}
