// SPDX-License-Identifier: MPL-2.0
//! User interface components and rendering.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Scrollable thumbnail grid with item-count header
//! - [`slider`] - Fullscreen single-image view with page navigation
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`icons`] - Inline SVG icon loading and rendering

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod slider;
pub mod styles;
pub mod theming;
