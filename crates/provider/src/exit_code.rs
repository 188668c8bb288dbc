//! Process exit codes for the provider binary.
//!
//! Invariants:
//! - Codes 1-6 are stable; hosts and scripts may branch on them.

use splunk_client::ClientError;

use crate::error::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Rejected credentials or failed login.
    AuthenticationFailed = 2,
    /// Network, TLS or timeout failure.
    ConnectionError = 3,
    NotFound = 4,
    /// Bad configuration or a request Splunk rejected as invalid.
    ValidationError = 5,
    PermissionDenied = 6,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,
            ClientError::InvalidResponse(_) | ClientError::Values(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ProviderError> for ExitCode {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::Client(inner) => Self::from(inner),
            ProviderError::NotFound { .. } => ExitCode::NotFound,
            ProviderError::Config(_)
            | ProviderError::Sync(_)
            | ProviderError::Validation { .. }
            | ProviderError::UnknownResource(_)
            | ProviderError::InvalidImportId { .. } => ExitCode::ValidationError,
            ProviderError::NotConfigured => ExitCode::GeneralError,
        }
    }
}

/// Exit code for an error anywhere in an `anyhow` chain.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(provider_err) = cause.downcast_ref::<ProviderError>() {
            return ExitCode::from(provider_err);
        }
        if let Some(client_err) = cause.downcast_ref::<ClientError>() {
            return ExitCode::from(client_err);
        }
    }
    ExitCode::GeneralError
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            status_text: String::new(),
            url: "https://localhost:8089/services/data/indexes".to_string(),
            message: String::new(),
            body: String::new(),
            request_id: None,
        }
    }

    #[test]
    fn test_api_status_mapping() {
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_provider_errors_unwrap_client_errors() {
        let err = ProviderError::Client(ClientError::AuthFailed("bad password".into()));
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
        assert_eq!(
            ExitCode::from(&ProviderError::UnknownResource("splunk_x".into())),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_exit_code_from_anyhow_chain() {
        let err = anyhow::Error::new(ProviderError::NotFound {
            kind: "splunk_indexes".into(),
            id: "web".into(),
        })
        .context("import failed");
        assert_eq!(exit_code_for(&err).as_i32(), 4);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), ExitCode::GeneralError);
    }
}
