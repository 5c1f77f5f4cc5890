// SPDX-License-Identifier: MPL-2.0
//! Sequential locale loading.
//!
//! Bundles are fetched one language at a time, in the order given. After each
//! successful fetch the bundle is registered and that language becomes active,
//! so a complete run ends on the last language of the order that loaded. A
//! failed fetch leaves its language unregistered and inactive, and loading
//! continues with the next code. There are no retries.
//!
//! [`LocaleLoader`] is an explicit state machine so the GUI can run each fetch
//! as its own task and commit the result on the UI thread:
//!
//! ```text
//! Idle --begin--> Loading(l0) --complete--> Loading(l1) --> ... --> Done
//! ```
//!
//! [`LocaleLoader::run`] drives the same machine with plain awaits.

use super::source::BundleSource;
use super::store::LocaleRegistry;
use super::{LanguageCode, TranslationBundle};
use crate::error::FetchError;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState {
    Idle,
    Loading(LanguageCode),
    Done,
}

/// Result of one step of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Loaded(LanguageCode),
    Failed(LanguageCode, FetchError),
}

#[derive(Debug)]
pub struct LocaleLoader {
    pending: VecDeque<LanguageCode>,
    state: LoaderState,
    outcomes: Vec<StepOutcome>,
}

impl LocaleLoader {
    pub fn new(order: impl IntoIterator<Item = LanguageCode>) -> Self {
        Self {
            pending: order.into_iter().collect(),
            state: LoaderState::Idle,
            outcomes: Vec::new(),
        }
    }

    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn is_done(&self) -> bool {
        self.state == LoaderState::Done
    }

    /// Starts the sequence and returns the first language to fetch.
    ///
    /// Returns `None` when the order is empty or the loader already started.
    pub fn begin(&mut self) -> Option<LanguageCode> {
        if self.state != LoaderState::Idle {
            return None;
        }
        self.advance()
    }

    /// Commits the fetch result for the in-flight language and returns the
    /// next language to fetch.
    ///
    /// On success the bundle is registered before the language is activated.
    /// A result for any language other than the in-flight one is ignored.
    pub fn complete<R: LocaleRegistry>(
        &mut self,
        registry: &mut R,
        lang: LanguageCode,
        result: Result<TranslationBundle, FetchError>,
    ) -> Option<LanguageCode> {
        match &self.state {
            LoaderState::Loading(current) if *current == lang => {}
            other => {
                log::warn!("[locale-loader] ignoring result for {lang} while {other:?}");
                return None;
            }
        }

        match result {
            Ok(bundle) => {
                log::info!("[locale-loader] loaded {lang} ({} messages)", bundle.len());
                registry.set_bundle(lang.clone(), bundle);
                registry.set_active_language(lang.clone());
                self.outcomes.push(StepOutcome::Loaded(lang));
            }
            Err(err) => {
                log::warn!("[locale-loader] skipping {lang}: {err}");
                self.outcomes.push(StepOutcome::Failed(lang, err));
            }
        }

        self.advance()
    }

    /// Runs every remaining step, awaiting each fetch before issuing the next.
    pub async fn run<S, R>(&mut self, source: &S, registry: &mut R)
    where
        S: BundleSource,
        R: LocaleRegistry,
    {
        let mut next = match &self.state {
            LoaderState::Loading(lang) => Some(lang.clone()),
            LoaderState::Idle | LoaderState::Done => None,
        };
        if next.is_none() {
            next = self.begin();
        }

        while let Some(lang) = next {
            let result = source.fetch(&lang).await;
            next = self.complete(registry, lang, result);
        }
    }

    fn advance(&mut self) -> Option<LanguageCode> {
        match self.pending.pop_front() {
            Some(lang) => {
                self.state = LoaderState::Loading(lang.clone());
                Some(lang)
            }
            None => {
                if self.state != LoaderState::Done {
                    let loaded = self
                        .outcomes
                        .iter()
                        .filter(|o| matches!(o, StepOutcome::Loaded(_)))
                        .count();
                    log::info!(
                        "[locale-loader] finished: {loaded}/{} bundles loaded",
                        self.outcomes.len()
                    );
                }
                self.state = LoaderState::Done;
                None
            }
        }
    }
}

/// Loads `order` from `source` into `registry`, one language at a time.
pub async fn load_locales<S, R>(
    source: &S,
    registry: &mut R,
    order: impl IntoIterator<Item = LanguageCode>,
) -> Vec<StepOutcome>
where
    S: BundleSource,
    R: LocaleRegistry,
{
    let mut loader = LocaleLoader::new(order);
    loader.run(source, registry).await;
    loader.outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleStore;
    use std::collections::HashSet;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn code(s: &str) -> LanguageCode {
        s.parse().unwrap()
    }

    fn codes(list: &[&str]) -> Vec<LanguageCode> {
        list.iter().map(|s| code(s)).collect()
    }

    fn bundle_for(lang: &str) -> TranslationBundle {
        [("greeting", format!("hello-{lang}"))].into_iter().collect()
    }

    /// Serves `greeting = hello-<lang>` for every language except the failing
    /// ones, with an optional per-language latency.
    #[derive(Clone, Default)]
    struct FakeSource {
        failing: HashSet<String>,
        delays_ms: Vec<(String, u64)>,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl FakeSource {
        fn failing(langs: &[&str]) -> Self {
            Self {
                failing: langs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        fn with_delays(delays: &[(&str, u64)]) -> Self {
            Self {
                delays_ms: delays.iter().map(|(l, d)| (l.to_string(), *d)).collect(),
                ..Self::default()
            }
        }
    }

    impl BundleSource for FakeSource {
        fn fetch(
            &self,
            lang: &LanguageCode,
        ) -> impl Future<Output = Result<TranslationBundle, FetchError>> + Send {
            let this = self.clone();
            let lang = lang.to_string();
            async move {
                this.requested.lock().unwrap().push(lang.clone());
                let now = this.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                this.max_in_flight.fetch_max(now, Ordering::SeqCst);

                let delay = this
                    .delays_ms
                    .iter()
                    .find(|(l, _)| *l == lang)
                    .map_or(0, |(_, d)| *d);
                tokio::time::sleep(Duration::from_millis(delay)).await;

                this.in_flight.fetch_sub(1, Ordering::SeqCst);
                if this.failing.contains(&lang) {
                    Err(FetchError::Status(500))
                } else {
                    Ok(bundle_for(&lang))
                }
            }
        }
    }

    /// Records registry calls in order.
    #[derive(Default)]
    struct RecordingRegistry {
        calls: Vec<String>,
    }

    impl LocaleRegistry for RecordingRegistry {
        fn set_bundle(&mut self, lang: LanguageCode, _bundle: TranslationBundle) {
            self.calls.push(format!("bundle:{lang}"));
        }

        fn set_active_language(&mut self, lang: LanguageCode) {
            self.calls.push(format!("active:{lang}"));
        }
    }

    #[tokio::test]
    async fn all_successful_loads_end_on_last_language() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let source = FakeSource::with_delays(&[("en", 30), ("kz", 1), ("ru", 15)]);

        load_locales(&source, &mut store, codes(&["en", "kz", "ru"])).await;

        assert_eq!(store.active_language(), code("ru"));
        let order: Vec<_> = store.languages().map(LanguageCode::as_str).collect();
        assert_eq!(order, vec!["en", "kz", "ru"]);
    }

    #[tokio::test]
    async fn last_wins_even_when_last_language_is_not_initial() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        load_locales(&FakeSource::default(), &mut store, codes(&["ru", "kz", "en"])).await;
        assert_eq!(store.active_language(), code("en"));
    }

    #[tokio::test]
    async fn failed_fetch_is_skipped_and_loading_continues() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let source = FakeSource::failing(&["kz"]);

        let outcomes = load_locales(&source, &mut store, codes(&["en", "kz", "ru"])).await;

        assert!(store.has_bundle(&code("en")));
        assert!(!store.has_bundle(&code("kz")));
        assert!(store.has_bundle(&code("ru")));
        assert_eq!(store.active_language(), code("ru"));
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Loaded(code("en")),
                StepOutcome::Failed(code("kz"), FetchError::Status(500)),
                StepOutcome::Loaded(code("ru")),
            ]
        );
    }

    #[tokio::test]
    async fn failed_last_language_leaves_previous_active() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        load_locales(&FakeSource::failing(&["ru"]), &mut store, codes(&["en", "kz", "ru"])).await;
        assert_eq!(store.active_language(), code("kz"));
    }

    #[tokio::test]
    async fn every_fetch_fails_keeps_initial_language() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let source = FakeSource::failing(&["en", "kz", "ru"]);
        load_locales(&source, &mut store, codes(&["en", "kz", "ru"])).await;

        assert_eq!(store.active_language(), code("ru"));
        assert_eq!(store.languages().count(), 0);
        assert_eq!(store.lookup("greeting"), "greeting");
    }

    #[tokio::test]
    async fn fetches_never_overlap_and_follow_input_order() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let source = FakeSource::with_delays(&[("en", 20), ("kz", 5), ("ru", 10)]);

        load_locales(&source, &mut store, codes(&["en", "kz", "ru"])).await;

        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(*source.requested.lock().unwrap(), vec!["en", "kz", "ru"]);
    }

    #[tokio::test]
    async fn bundle_is_registered_before_activation() {
        let mut registry = RecordingRegistry::default();
        load_locales(
            &FakeSource::failing(&["kz"]),
            &mut registry,
            codes(&["en", "kz", "ru"]),
        )
        .await;

        assert_eq!(
            registry.calls,
            vec!["bundle:en", "active:en", "bundle:ru", "active:ru"]
        );
    }

    #[test]
    fn manual_switch_between_steps_is_overwritten_by_next_step() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let mut loader = LocaleLoader::new(codes(&["en", "ru"]));

        let en = loader.begin().unwrap();
        let ru = loader.complete(&mut store, en, Ok(bundle_for("en"))).unwrap();
        assert_eq!(loader.state(), &LoaderState::Loading(code("ru")));

        // User picks kz while the ru fetch is outstanding.
        store.set_active_language(code("kz"));
        assert_eq!(store.active_language(), code("kz"));

        assert!(loader.complete(&mut store, ru, Ok(bundle_for("ru"))).is_none());
        assert_eq!(store.active_language(), code("ru"));
        assert!(loader.is_done());
    }

    #[test]
    fn empty_order_goes_straight_to_done() {
        let mut loader = LocaleLoader::new(Vec::new());
        assert_eq!(loader.state(), &LoaderState::Idle);
        assert!(loader.begin().is_none());
        assert!(loader.is_done());
    }

    #[test]
    fn begin_twice_does_not_restart() {
        let mut loader = LocaleLoader::new(codes(&["en", "ru"]));
        assert_eq!(loader.begin(), Some(code("en")));
        assert_eq!(loader.begin(), None);
        assert_eq!(loader.state(), &LoaderState::Loading(code("en")));
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let mut loader = LocaleLoader::new(codes(&["en", "ru"]));
        loader.begin();

        let next = loader.complete(&mut store, code("ru"), Ok(bundle_for("ru")));
        assert!(next.is_none());
        assert!(!store.has_bundle(&code("ru")));
        assert_eq!(loader.state(), &LoaderState::Loading(code("en")));
    }

    #[test]
    fn lookup_during_loading_uses_fallback_then_active() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        let mut loader = LocaleLoader::new(codes(&["en", "ru"]));

        let en = loader.begin().unwrap();
        assert_eq!(store.lookup("greeting"), "greeting");

        let ru = loader.complete(&mut store, en, Ok(bundle_for("en"))).unwrap();
        assert_eq!(store.lookup("greeting"), "hello-en");

        loader.complete(&mut store, ru, Ok(bundle_for("ru")));
        assert_eq!(store.lookup("greeting"), "hello-ru");
    }
}
