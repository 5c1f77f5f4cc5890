// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! Translations are plain key → string bundles, one per language, fetched at
//! startup and registered into a single [`LocaleStore`].
//!
//! # Features
//!
//! - Sequential bundle loading with last-wins activation ([`loader`])
//! - Lookup with a fixed fallback language, ending on the raw key ([`store`])
//! - Bundles from HTTP, a local directory, or compiled into the binary
//!   ([`source`])
//! - Explicit change notification for views bound to the active language

pub mod bundle;
pub mod language;
pub mod loader;
pub mod source;
pub mod store;

pub use bundle::TranslationBundle;
pub use language::LanguageCode;
pub use loader::{load_locales, LoaderState, LocaleLoader, StepOutcome};
pub use source::{BundleSource, DirectorySource, EmbeddedSource, HttpSource, ResourceSource};
pub use store::{LocaleRegistry, LocaleStore};
