pub mod authentication;
pub mod authorization;
pub mod cli;
pub mod credential;

pub use credential::{
    Authenticator, Credential, CredentialConfig, CredentialError, CredentialOption, FlowContext,
};
