use std::time::Instant;

use crate::credential::errors::CredentialError;

/// Cancellation and deadline carrier for the OAuth flow accessors
///
/// The flows are pass-through today, so nothing reads this yet.
#[derive(Debug, Clone, Default)]
pub struct FlowContext {
    deadline: Option<Instant>,
    cancelled: bool,
}

impl FlowContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            deadline: None,
            cancelled: true,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// The GitHub API authentication methods
pub trait Authenticator {
    /// Returns the GitHub OAuth token to be used in the Authorization
    /// request header, or an empty string when no token was configured.
    fn basic(&self) -> &str;

    /// Web application flow for standard OAuth apps that run in the browser.
    ///
    /// No redirect or code exchange happens; the stored token is returned.
    fn web_application(&self, ctx: &FlowContext) -> Result<&str, CredentialError>;

    /// Device flow for headless apps such as a CLI tool or Git credential
    /// manager.
    ///
    /// No polling happens; the stored token is returned.
    fn device(&self, ctx: &FlowContext) -> Result<&str, CredentialError>;
}
