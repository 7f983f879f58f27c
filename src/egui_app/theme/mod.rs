//! Theme Module
//!
//! This module provides the color scheme and styling for the FlixDesk
//! UI. It includes:
//!
//! - Color constants for the dark cinema theme
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for cards, dialogs, and the snackbar

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
