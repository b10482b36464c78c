//! Shared application state for the gateway server.

use router::{Provider, Router};
use std::sync::Arc;

/// Shared state available to all request handlers.
pub struct AppState<P = Provider> {
    /// The provider router (immutable after init).
    pub router: Arc<Router<P>>,
}

impl<P> AppState<P> {
    /// Wrap a router.
    pub fn new(router: Router<P>) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}
