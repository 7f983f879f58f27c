//! Color Constants for the FlixDesk Theme
//!
//! This module defines all the color constants used throughout the UI.
//! Colors are based on a dark charcoal scheme with a warm red accent,
//! in the style of classic cinema interiors.

use eframe::egui::Color32;

/// Dark background for main areas - Charcoal
pub const BG_DARK: Color32 = Color32::from_rgb(0x14, 0x18, 0x1D);

/// Top bar background - Darker charcoal
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0E, 0x11, 0x15);

/// Movie card background - Slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x1E, 0x24, 0x2B);

/// Movie card border - Muted slate
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x32, 0x3B, 0x45);

/// Card hovered or selected - Lighter slate
pub const CARD_HOVER: Color32 = Color32::from_rgb(0x29, 0x31, 0x3A);

/// Dialog/window background - Slate
pub const DIALOG_BG: Color32 = Color32::from_rgb(0x1E, 0x24, 0x2B);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x29, 0x31, 0x3A);

/// Text on dark backgrounds - Off-white
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEC, 0xEF, 0xF1);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x14, 0x18, 0x1D);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x90, 0x9A, 0xA4);

/// Accent color for highlights - Cinema red
pub const ACCENT: Color32 = Color32::from_rgb(0xC6, 0x28, 0x3C);

/// Favorite marker - Warm red
pub const FAVORITE: Color32 = Color32::from_rgb(0xE5, 0x4B, 0x5C);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0xC6, 0x28, 0x3C);

/// Button primary hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0xD8, 0x3A, 0x4E);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0x32, 0x3B, 0x45);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Snackbar background
pub const SNACKBAR_BG: Color32 = Color32::from_rgb(0x32, 0x3B, 0x45);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x32, 0x3B, 0x45);
