// SPDX-License-Identifier: MPL-2.0
//! Where locale bundles come from.
//!
//! Each bundle lives at `<root>/<lang>.json`. The root is either an HTTP(S)
//! base URL, a local directory, or the bundles compiled into the binary.

use super::{LanguageCode, TranslationBundle};
use crate::error::FetchError;
use rust_embed::RustEmbed;
use std::future::Future;
use std::path::PathBuf;

/// Keyword selecting the compiled-in bundles as resource root.
pub const EMBEDDED_ROOT: &str = "embedded";

const USER_AGENT: &str = concat!("LandingSite/", env!("CARGO_PKG_VERSION"));

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fetches one language's bundle.
pub trait BundleSource {
    fn fetch(
        &self,
        lang: &LanguageCode,
    ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send;
}

fn resource_name(lang: &LanguageCode) -> String {
    format!("{lang}.json")
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses an already configured client, e.g. one shared with other requests.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, lang: &LanguageCode) -> String {
        format!("{}/{}", self.base_url, resource_name(lang))
    }
}

impl BundleSource for HttpSource {
    fn fetch(
        &self,
        lang: &LanguageCode,
    ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send {
        let url = self.url_for(lang);
        let client = self.client.clone();
        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            let payload = response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            TranslationBundle::from_json(&payload)
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BundleSource for DirectorySource {
    fn fetch(
        &self,
        lang: &LanguageCode,
    ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send {
        let path = self.dir.join(resource_name(lang));
        async move {
            let payload = tokio::fs::read_to_string(&path).await.map_err(|e| {
                match e.kind() {
                    std::io::ErrorKind::NotFound => {
                        FetchError::NotFound(path.display().to_string())
                    }
                    // Not UTF-8
                    std::io::ErrorKind::InvalidData => {
                        FetchError::Malformed(format!("{}: {e}", path.display()))
                    }
                    _ => FetchError::Network(e.to_string()),
                }
            })?;
            TranslationBundle::from_json(&payload)
        }
    }
}

/// Bundles shipped inside the executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Languages that have a compiled-in bundle.
    pub fn available() -> Vec<LanguageCode> {
        Asset::iter()
            .filter_map(|file| {
                file.strip_suffix(".json")
                    .and_then(|stem| stem.parse::<LanguageCode>().ok())
            })
            .collect()
    }
}

impl BundleSource for EmbeddedSource {
    fn fetch(
        &self,
        lang: &LanguageCode,
    ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send {
        let name = resource_name(lang);
        let result = match Asset::get(&name) {
            Some(file) => TranslationBundle::from_json(&String::from_utf8_lossy(&file.data)),
            None => Err(FetchError::NotFound(name)),
        };
        std::future::ready(result)
    }
}

/// The bundle source selected by configuration.
#[derive(Debug, Clone)]
pub enum ResourceSource {
    Http(HttpSource),
    Directory(DirectorySource),
    Embedded(EmbeddedSource),
}

impl ResourceSource {
    /// Interprets a configured resource root.
    ///
    /// `embedded` (or an empty string) selects the compiled-in bundles, an
    /// `http://` or `https://` prefix selects HTTP, anything else is treated
    /// as a directory path.
    pub fn from_root(root: &str) -> Result<Self, FetchError> {
        let root = root.trim();
        if root.is_empty() || root.eq_ignore_ascii_case(EMBEDDED_ROOT) {
            Ok(Self::Embedded(EmbeddedSource))
        } else if root.starts_with("http://") || root.starts_with("https://") {
            HttpSource::new(root).map(Self::Http)
        } else {
            Ok(Self::Directory(DirectorySource::new(root)))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.base_url.clone(),
            Self::Directory(source) => source.dir.display().to_string(),
            Self::Embedded(_) => EMBEDDED_ROOT.to_string(),
        }
    }
}

impl BundleSource for ResourceSource {
    fn fetch(
        &self,
        lang: &LanguageCode,
    ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send {
        // Clone so the returned future does not borrow `self` across awaits.
        let source = self.clone();
        let lang = lang.clone();
        async move {
            match source {
                Self::Http(http) => http.fetch(&lang).await,
                Self::Directory(dir) => dir.fetch(&lang).await,
                Self::Embedded(embedded) => embedded.fetch(&lang).await,
            }
        }
    }
}
