//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the credential-attaching adapter over a pluggable transport,
//! `browser` is the `gloo-net` transport, `api` holds the endpoint calls,
//! `error` the failure type and message normalization, and `types` the wire
//! schema.

pub mod api;
pub mod browser;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
