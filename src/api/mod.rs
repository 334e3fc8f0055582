//! HTTP surface of the crate: the backend client.

pub mod client;

pub use client::Codex;
