//! FlixDesk - Main Library
//!
//! FlixDesk is a native desktop client for a myFlix-style movie REST API,
//! built with egui/eframe. It lets a user register, log in, browse the
//! movie catalog, manage a personal favorites list, and edit or delete
//! their profile.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the app and its tests
//!   - Typed API payloads (movies, profiles, credentials)
//!   - Configuration types
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - API access layer (request construction, bearer auth, error
//!     normalization)
//!   - Session store (cached profile + token, favorites bookkeeping)
//!   - Views and application state
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - Custom error types in `shared::error` and `shared::config`
//!
//! Failures from the remote API keep their distinguishing detail
//! internally (`ApiError`) but collapse to a single generic phrase at
//! the UI boundary.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
