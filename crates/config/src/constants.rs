//! Centralized constants for the vsphere-roles workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default per-call API timeout in seconds (5 minutes).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// Maximum allowed per-call API timeout in seconds (1 hour).
pub const MAX_API_TIMEOUT_SECS: u64 = 3600;

/// Default VI/JSON API release used in request paths.
pub const DEFAULT_API_RELEASE: &str = "8.0.1.0";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Header carrying the vSphere session id on VI/JSON requests.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

// =============================================================================
// Role Lookup Cache Defaults
// =============================================================================

/// Default time-to-live for cached role lookups in seconds.
pub const DEFAULT_ROLE_CACHE_TTL_SECS: u64 = 60;

/// Maximum allowed role cache TTL in seconds (1 hour).
pub const MAX_ROLE_CACHE_TTL_SECS: u64 = 3600;

/// Default maximum number of cached role entries.
pub const DEFAULT_ROLE_CACHE_CAPACITY: u64 = 512;
