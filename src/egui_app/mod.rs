//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that talks to the remote movie API for authentication, catalog
//! browsing, and favorites/profile management.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (API base URL resolution)
//! - **`api`** - API access layer (request construction, bearer auth,
//!   error normalization)
//! - **`session`** - Session store (cached profile + token, favorites
//!   bookkeeping, JSON file persistence)
//! - **`state`** - Central app state and worker-thread result plumbing
//! - **`views`** - Welcome, movies, and profile views plus dialogs and
//!   the snackbar
//! - **`theme`** - Color scheme and style helpers
//! - **`main`** - Main application entry point (binary)

pub mod api;
pub mod config;
pub mod session;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use session::{Session, SessionStore};
pub use state::{AppState, AppView};
