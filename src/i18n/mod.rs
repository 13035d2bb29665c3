// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the widget's wording.
//!
//! Uses the Fluent localization system with translation files embedded at
//! build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no supported locale is requested

pub mod fluent;
