//! API Access
//!
//! HTTP calls to the Pantopia REST API.

pub mod client;

pub use client::*;
