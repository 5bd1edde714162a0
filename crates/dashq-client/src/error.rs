//! Error types for dashq-client

use thiserror::Error;

/// Failures while turning credential settings into usable AWS credentials.
///
/// Static keys, profiles, and the default chain resolve lazily inside the
/// SDK and cannot fail here; only the explicit STS AssumeRole hop can.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("failed to assume role {role_arn}: {message}")]
    AssumeRole { role_arn: String, message: String },

    #[error("assume role response for {role_arn} contained no credentials")]
    MissingAssumedCredentials { role_arn: String },
}

impl CredentialsError {
    pub fn assume_role(role_arn: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssumeRole {
            role_arn: role_arn.into(),
            message: message.into(),
        }
    }
}
