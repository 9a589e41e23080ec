//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Routes
// =============================================================================

/// Where unauthenticated callers are sent
pub const LOGIN_PATH: &str = "/admin/login";

/// Form target for signing out of the HTML dashboard
pub const LOGOUT_PATH: &str = "/admin/logout";

/// Landing page after a successful form login
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Path prefix guarded by the session gate (`/dashboard/:path*`)
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Protected JSON endpoints live under this prefix
pub const PROTECTED_API_PREFIX: &str = "/dashboard/api/";

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "menu_session";

/// Argon2id hash of a random throwaway secret.
///
/// Verified in place of a real hash when the email is unknown so that both
/// login failure paths cost the same.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$MwliBqWGhfpt8WIO8hf9Ow$VrBZpYbf42uYCi65ZOCYnXUS854wuYBly5wCJS3fa3M";

// =============================================================================
// Route Gate
// =============================================================================

/// Text shown while the gate has not confirmed a session
pub const GATE_LOADING_MESSAGE: &str = "Checking authentication...";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Client session storage
// =============================================================================

/// Default location of the CLI's persisted session
pub const DEFAULT_SESSION_FILE: &str = ".digital-menu/session.json";

// =============================================================================
// Rate Limiting
// =============================================================================

/// Login attempts a client may make back to back
pub const LOGIN_BURST_SIZE: u32 = 10;

/// One further attempt is granted every this many seconds (~10/minute)
pub const LOGIN_REPLENISH_SECONDS: u64 = 6;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length accepted when hashing new passwords
pub const MIN_PASSWORD_LENGTH: usize = 8;
