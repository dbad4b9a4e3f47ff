#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Typed contract for the Safe Client Gateway REST API
//!
//! The [`endpoints`] registry declares every path template, its method, its
//! parameter shapes and its response shape. The [`rpc`] model holds the
//! payloads, with every polymorphic record a closed enum discriminated by
//! its `type` field. Nothing here performs I/O: a [`Request`] renders into a
//! method, URL and body for any transport, and
//! [`Endpoint::decode_response`] classifies what comes back.

#[macro_use]
mod macros;

/// Endpoint registry
pub mod endpoints;

/// Request rendering & error types
pub mod request;

/// RPC method structs
pub mod rpc;

/// Network configuration
pub mod networks;

pub use endpoints::{Endpoint, EndpointDescriptor, Method, REGISTRY};
pub use request::{ContractError, ContractResult, RenderedRequest, Request};
