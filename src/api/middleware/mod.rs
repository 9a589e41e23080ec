//! API middleware.

mod rate_limit;
mod session_gate;

pub use rate_limit::{
    login_rate_limiter, login_throttle_config, ClientIpKeyExtractor, LoginThrottleConfig,
    LoginThrottleLayer,
};
pub use session_gate::{request_session, session_gate_middleware, CurrentUser};
