//! Shared text-generation provider interface.
//!
//! Every vendor adapter implements [`LLM`]: take a user prompt, an optional
//! context block and a response [`Language`], return plain text or a
//! [`ProviderError`]. Adapters share [`HttpProvider`] for the wire call, so
//! timeouts, auth headers and failure classification behave the same for
//! every vendor.

pub use config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, General};
pub use error::{ErrorKind, ProviderError};
pub use http::{DEFAULT_TIMEOUT, HttpProvider};
pub use message::{Message, Role, compose};
pub use prompt::{Domain, Language};
pub use provider::LLM;
pub use reqwest::{self, Client};

mod config;
mod error;
mod http;
mod message;
mod provider;
