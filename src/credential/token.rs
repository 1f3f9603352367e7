use regex::Regex;
use std::sync::LazyLock;

use crate::credential::errors::CredentialError;

/// Length of a GitHub OAuth or personal access token
pub const TOKEN_LENGTH: usize = 40;

// Unanchored: any string containing a 40 character run is accepted.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]{40}").expect("token pattern is valid"));

/// Check that a token has the shape of a GitHub token
pub fn validate_token(token: &str) -> Result<(), CredentialError> {
    if TOKEN_PATTERN.is_match(token) {
        Ok(())
    } else {
        log::debug!("Rejected token of length {}", token.len());
        Err(CredentialError::InvalidToken)
    }
}
