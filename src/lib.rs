//! # Codex client
//!
//! Client-side glue for the Codex document assistant: [`api::Codex`] wraps
//! the backend reachability probe and document upload, and
//! [`core::state::SharedState`] holds the UI-observable flags that those
//! calls and other collaborators keep current.

pub mod api;
pub mod core;

#[cfg(test)]
pub mod test_support;

pub use api::Codex;
pub use core::state::SharedState;
