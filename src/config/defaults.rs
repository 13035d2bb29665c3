// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default time a submission may take before it counts as failed (seconds).
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Minimum allowed submission timeout (seconds).
pub const MIN_TIMEOUT_SECS: u32 = 1;

/// Maximum allowed submission timeout (seconds).
pub const MAX_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Wording Defaults
// ==========================================================================

/// Whether "satisfied" is rendered before "not satisfied".
pub const DEFAULT_FIRST_OPTION_YES: bool = true;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";
