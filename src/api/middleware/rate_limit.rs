//! Login throttling with `governor` and `tower_governor`.
//!
//! One token bucket per client IP, shared by every credential endpoint.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{extract::ConnectInfo, http::Request};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::KeyExtractor,
    GovernorError, GovernorLayer,
};

use crate::errors::{AppError, AppResult};

// =============================================================================
// Client IP key extractor
// =============================================================================

/// Keys requests by client IP.
///
/// Proxy headers are only consulted when the server sits behind a trusted
/// proxy; otherwise any client could mint a fresh key per request. A
/// trusted header that does not parse as an IP is rejected, never used as a
/// key.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    pub fn new(trust_proxy_headers: bool) -> Self {
        Self {
            trust_proxy_headers,
        }
    }
}

fn header_ip<T>(req: &Request<T>, name: &str) -> Option<Result<IpAddr, GovernorError>> {
    let raw = req.headers().get(name)?;
    let ip = raw
        .to_str()
        .ok()
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse::<IpAddr>().ok());
    Some(ip.ok_or(GovernorError::UnableToExtractKey))
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.trust_proxy_headers {
            if let Some(ip) = header_ip(req, "x-forwarded-for") {
                return ip;
            }
            if let Some(ip) = header_ip(req, "x-real-ip") {
                return ip;
            }
        }

        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate limiter configuration
// =============================================================================

/// Shared limiter state; lives in `AppState` so every login route draws from
/// the same buckets.
pub type LoginThrottleConfig = GovernorConfig<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

/// Layer applied to the credential routes.
pub type LoginThrottleLayer = GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

/// Allow `burst` attempts at once, then one more every `replenish_seconds`.
///
/// # Errors
/// Returns a validation error when either value is zero.
pub fn login_throttle_config(
    burst: u32,
    replenish_seconds: u64,
    trust_proxy_headers: bool,
) -> AppResult<Arc<LoginThrottleConfig>> {
    GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor::new(trust_proxy_headers))
        .per_second(replenish_seconds)
        .burst_size(burst)
        .finish()
        .map(Arc::new)
        .ok_or_else(|| AppError::validation("login throttle needs a non-zero burst and period"))
}

/// Layer over an existing limiter.
pub fn login_rate_limiter(config: &Arc<LoginThrottleConfig>) -> LoginThrottleLayer {
    GovernorLayer {
        config: Arc::clone(config),
    }
}
