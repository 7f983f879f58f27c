//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop app and the test suite. All types are designed for
//! serialization and transmission over HTTP.

/// Typed API payloads (movies, users, credentials)
pub mod models;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ApiError;
pub use models::{
    AuthResponse, Director, Genre, LoginCredentials, Movie, ProfileUpdate, RegistrationInput,
    UserProfile,
};
