// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FetchError;
use crate::i18n::{LanguageCode, TranslationBundle};
use crate::ui::footer;
use crate::ui::header;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    /// Result of one locale loader step.
    BundleFetched {
        lang: LanguageCode,
        result: Result<TranslationBundle, FetchError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LANDING_SITE_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional bundle root override: `embedded`, a directory or a base URL.
    pub locale_root: Option<String>,
    /// Models offered by the header; empty keeps the configured list.
    pub members: Vec<u32>,
}
