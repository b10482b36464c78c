//! Kismet gateway: the HTTP shell around the provider router.
//!
//! Loads provider slots from TOML or the environment, builds the router
//! once at startup and serves the reading endpoints over axum.

pub mod config;
pub mod error;
pub mod routes;
pub mod serve;
pub mod state;
pub mod utils;

pub use config::{GatewayConfig, ServerConfig};
pub use error::{ApiError, Invalid};
pub use serve::{ServeHandle, serve, serve_with_router};
pub use state::AppState;
