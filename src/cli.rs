//! Command line interface for the demo binary.

use clap::{Parser, ValueEnum};

use crate::credential::{Authenticator, Credential, CredentialConfig, CredentialError, FlowContext};

/// Which accessor to read the token through
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Basic,
    Web,
    Device,
}

/// Build a GitHub API credential and print its token
#[derive(Debug, Parser)]
#[clap(name = "github-api-auth", version)]
pub struct Args {
    /// GitHub OAuth or personal access token
    #[clap(value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[clap(long, value_enum, default_value = "basic")]
    pub flow: Flow,
    #[clap(long, value_name = "GITHUB_CLIENT_ID", env = "GITHUB_CLIENT_ID")]
    pub client_id: Option<String>,
    #[clap(long, value_name = "GITHUB_REDIRECT_URI", env = "GITHUB_REDIRECT_URI")]
    pub redirect_uri: Option<String>,
    #[clap(long, value_name = "GITHUB_LOGIN", env = "GITHUB_LOGIN")]
    pub login: Option<String>,
    #[clap(long, value_name = "GITHUB_SCOPE", env = "GITHUB_SCOPE")]
    pub scope: Option<String>,
    #[clap(long, value_name = "GITHUB_STATE", env = "GITHUB_STATE")]
    pub state: Option<String>,
    #[clap(long, value_name = "GITHUB_ALLOW_SIGNUP", env = "GITHUB_ALLOW_SIGNUP")]
    pub allow_signup: Option<String>,
}

impl Args {
    pub fn config(&self) -> CredentialConfig {
        CredentialConfig {
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            login: self.login.clone(),
            scope: self.scope.clone(),
            state: self.state.clone(),
            allow_signup: self.allow_signup.clone(),
            token: self.token.clone(),
        }
    }

    /// Build the credential and read its token through the selected flow
    pub fn run(&self) -> Result<String, CredentialError> {
        if self.token.is_none() {
            log::warn!("No token given and GITHUB_TOKEN is not set");
        }

        let credential = Credential::try_from(self.config())?;
        let ctx = FlowContext::new();
        let token = match self.flow {
            Flow::Basic => credential.basic(),
            Flow::Web => credential.web_application(&ctx)?,
            Flow::Device => credential.device(&ctx)?,
        };

        log::debug!("Read token through {:?} flow", self.flow);
        Ok(token.to_string())
    }
}
