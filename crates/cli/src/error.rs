//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants and vSphere method faults to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use vsphere_client::ClientError;

use crate::cancellation::SIGINT_EXIT_CODE;

/// Structured exit codes for vsphere-roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Rejected credentials or expired session.
    AuthenticationFailed = 2,

    /// Network failure, timeout, or server unavailable.
    ConnectionError = 3,

    /// No role matches the given name or id.
    NotFound = 4,

    /// Bad input: conflicting lookup keys, duplicate names, invalid privileges,
    /// or a role that is still in use.
    ValidationError = 5,

    /// SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Exit code for a vSphere method fault type.
fn from_fault(fault: &str) -> Option<ExitCode> {
    match fault {
        "InvalidLogin" | "NotAuthenticated" => Some(ExitCode::AuthenticationFailed),
        "NotFound" | "ManagedObjectNotFound" => Some(ExitCode::NotFound),
        "InvalidArgument" | "InvalidRequest" | "AlreadyExists" | "RemoveFailed" => {
            Some(ExitCode::ValidationError)
        }
        _ => None,
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Authentication errors (exit code 2)
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::SessionExpired { .. } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Not found (exit code 4)
            ClientError::RoleNotFound(_) => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::InvalidRequest(_) => ExitCode::ValidationError,

            ClientError::InvalidResponse(_) => ExitCode::GeneralError,

            ClientError::ApiError { status, fault, .. } => {
                if let Some(code) = fault.as_deref().and_then(from_fault) {
                    return code;
                }
                match status {
                    400 => ExitCode::ValidationError,
                    401 => ExitCode::AuthenticationFailed,
                    404 => ExitCode::NotFound,
                    502..=504 => ExitCode::ConnectionError,
                    _ => ExitCode::GeneralError,
                }
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
