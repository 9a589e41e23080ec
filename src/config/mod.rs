//! Configuration: environment-driven [`Config`] plus the route, cookie and
//! security constants shared by every layer.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
