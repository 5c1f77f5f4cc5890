// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Locale**: bundle root, load order, initial and fallback language
//! - **Header**: model selector members and default selection

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Resource root used when none is configured (bundles compiled in).
pub const DEFAULT_RESOURCE_ROOT: &str = crate::i18n::source::EMBEDDED_ROOT;

/// Order in which bundles are fetched at startup. The last entry that loads
/// ends up active.
pub const DEFAULT_LOAD_ORDER: [&str; 3] = ["en", "kz", "ru"];

/// Active language before any bundle has arrived.
pub const DEFAULT_INITIAL_LANGUAGE: &str = "ru";

/// Language consulted when the active bundle lacks a key.
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Languages offered by the header selector, in display order.
pub const DEFAULT_SELECTABLE_LANGUAGES: [&str; 3] = ["ru", "kz", "en"];

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Model preselected when the header mounts, regardless of the member list.
pub const DEFAULT_MODEL_SELECTION: u32 = 9;

/// Models offered when the parent supplies none.
pub const DEFAULT_MEMBERS: [u32; 3] = [3, 6, 9];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOAD_ORDER.is_empty());
    assert!(!DEFAULT_SELECTABLE_LANGUAGES.is_empty());
    assert!(!DEFAULT_MEMBERS.is_empty());
    assert!(!DEFAULT_FALLBACK_LANGUAGE.is_empty());
    assert!(!DEFAULT_INITIAL_LANGUAGE.is_empty());
};
