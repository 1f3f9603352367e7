//! GitHub API authentication, backed by the shared [`Credential`] type.

use crate::credential::{Credential, CredentialError, CredentialOption};

pub use crate::credential::{
    with_allow_signup, with_client_id, with_login, with_redirect_uri, with_scope, with_state,
    with_token, Authenticator, FlowContext,
};

pub type Authentication = Credential;

pub fn new<I>(options: I) -> Result<Authentication, CredentialError>
where
    I: IntoIterator<Item = CredentialOption>,
{
    Credential::new(options)
}
