// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`feedback`] - The feedback widget component
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod feedback;
pub mod styles;
