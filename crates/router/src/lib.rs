//! Multi-provider text generation router.
//!
//! [`Registry`] builds the live provider list from configuration once at
//! startup. [`Router`] is the single entry point handlers call: it rotates
//! the starting provider across calls, fails over within a call, and
//! absorbs total failure into a [`fallback`] reply, so generation always
//! yields text.

pub mod config;
pub mod fallback;
mod provider;
mod registry;
mod router;

pub use {
    config::{ProviderConfig, ProviderKind, Wire},
    provider::{Provider, build_provider},
    registry::Registry,
    router::{Generation, Router, Source},
};
