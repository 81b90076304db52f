#![warn(missing_docs)]

//! # bevel Theming
//!
//! Themes, the theme registry and look configuration for the bevel rendering engine.
//!
//! ## Overview
//!
//! - **[Theme](theme::Theme)**: a named, immutable bundle of role colors and fonts
//! - **[ThemeRegistry](registry::ThemeRegistry)**: the catalog of installable themes and default resolution
//! - **[ThemeScope](registry::ThemeScope)**: one execution scope's active theme
//! - **[LookConfig](config::LookConfig)**: startup settings from the environment or a TOML file
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use bevel_theme::config::LookConfig;
//! use bevel_theme::registry::ThemeRegistry;
//! use bevel_theme::theme::ColorRole;
//!
//! let registry = Arc::new(ThemeRegistry::new(LookConfig::from_env_or_default()));
//! let scope = registry.scope();
//! scope.set_active_theme_by_name("DesertBlue").unwrap();
//! let shadow = scope.color(ColorRole::ControlShadow);
//! ```

/// Color helpers.
pub mod color;
/// Contains the [config::LookConfig] struct.
pub mod config;
/// Error types.
pub mod error;
/// Platform flavor detection.
pub mod platform;
/// Contains the [registry::ThemeRegistry] and [registry::ThemeScope].
pub mod registry;
/// Hex color (de)serialization.
pub mod serde_color;
/// Contains the [theme::Theme] struct and built-in themes.
pub mod theme;

pub use color::Color;
