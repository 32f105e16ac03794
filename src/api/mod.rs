//! Memoir API Bindings
//!
//! HTTP transport, JSON client and the multipart upload path.

mod http;
mod client;
mod upload;
#[cfg(test)]
pub mod mock;

pub use http::*;
pub use client::*;
pub use upload::*;
