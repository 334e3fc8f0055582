//! # Core Application State
//!
//! This module contains Codex's shared state and configuration.
//! It knows nothing about HTTP or any specific UI technology.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │         CORE            │
//!                │  (this module)          │
//!                │                         │
//!                │  • state (UI record)    │
//!                │  • config (settings)    │
//!                │                         │
//!                │  No I/O. No UI.         │
//!                └───────────┬─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       ┌────────────┐              ┌────────────┐
//!       │    API     │              │    CLI     │
//!       │  (client)  │              │  (main.rs) │
//!       └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `UiState` record and its `SharedState` handle
//! - [`config`]: Layered settings (defaults → file → env → CLI)

pub mod config;
pub mod state;
