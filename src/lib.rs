// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a grid image gallery with a fullscreen slider, built
//! with the Iced GUI framework.
//!
//! Scroll and page positions survive restarts through a small persisted
//! key-value store; everything else is a thin coordination layer between
//! two state controllers and the declarative UI.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.2.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod slider;
pub mod ui;
