// SPDX-License-Identifier: MPL-2.0
//! The single source of truth for translations and the active language.
//!
//! The application owns exactly one [`LocaleStore`] and hands references to
//! whoever needs it. Mutation goes through [`LocaleStore::set_bundle`] and
//! [`LocaleStore::set_active_language`] only. Views that must follow the
//! active language hold a [`watch::Receiver`] obtained from
//! [`LocaleStore::subscribe`]; every activation publishes to it.

use super::{LanguageCode, TranslationBundle};
use tokio::sync::watch;

/// Write side of the locale layer, as seen by the loader.
///
/// [`LocaleStore`] is the production implementation; tests substitute
/// recorders to observe the exact call sequence.
pub trait LocaleRegistry {
    fn set_bundle(&mut self, lang: LanguageCode, bundle: TranslationBundle);
    fn set_active_language(&mut self, lang: LanguageCode);
}

#[derive(Debug)]
pub struct LocaleStore {
    /// Registration order is preserved; bundles are never removed.
    bundles: Vec<(LanguageCode, TranslationBundle)>,
    active: watch::Sender<LanguageCode>,
    fallback: LanguageCode,
}

impl LocaleStore {
    pub fn new(initial: LanguageCode, fallback: LanguageCode) -> Self {
        let (active, _) = watch::channel(initial);
        Self {
            bundles: Vec::new(),
            active,
            fallback,
        }
    }

    /// Inserts or replaces the bundle for `lang`.
    ///
    /// A replaced bundle keeps its original registration slot.
    pub fn set_bundle(&mut self, lang: LanguageCode, bundle: TranslationBundle) {
        match self.bundles.iter_mut().find(|(code, _)| *code == lang) {
            Some((_, existing)) => *existing = bundle,
            None => self.bundles.push((lang, bundle)),
        }
    }

    /// Switches the active language and notifies every subscriber.
    ///
    /// No bundle is required for `lang`; lookups fall back until one arrives.
    pub fn set_active_language(&mut self, lang: LanguageCode) {
        self.active.send_replace(lang);
    }

    /// Resolves `key` against the active bundle, then the fallback bundle,
    /// and finally returns `key` itself.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        let active = self.active.borrow();
        let from_active = self.bundle(&active).and_then(|bundle| bundle.get(key));
        drop(active);

        if let Some(message) = from_active {
            return message;
        }

        if let Some(message) = self.bundle(&self.fallback).and_then(|bundle| bundle.get(key)) {
            return message;
        }

        log::debug!("[locale-store] no message for `{key}`");
        key
    }

    pub fn active_language(&self) -> LanguageCode {
        self.active.borrow().clone()
    }

    pub fn fallback_language(&self) -> &LanguageCode {
        &self.fallback
    }

    pub fn subscribe(&self) -> watch::Receiver<LanguageCode> {
        self.active.subscribe()
    }

    pub fn bundle(&self, lang: &LanguageCode) -> Option<&TranslationBundle> {
        self.bundles
            .iter()
            .find(|(code, _)| code == lang)
            .map(|(_, bundle)| bundle)
    }

    pub fn has_bundle(&self, lang: &LanguageCode) -> bool {
        self.bundle(lang).is_some()
    }

    /// Languages with a registered bundle, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.bundles.iter().map(|(code, _)| code)
    }
}

impl LocaleRegistry for LocaleStore {
    fn set_bundle(&mut self, lang: LanguageCode, bundle: TranslationBundle) {
        LocaleStore::set_bundle(self, lang, bundle);
    }

    fn set_active_language(&mut self, lang: LanguageCode) {
        LocaleStore::set_active_language(self, lang);
    }
}
