// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Translation bundles are embedded at compile time from `assets/i18n/`.
//! Locale resolution order: CLI flag, config file, OS locale, `en-US`.

pub mod fluent;

pub use fluent::I18n;
