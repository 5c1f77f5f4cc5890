// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component events are routed here: header events reach the locale store or
//! the parent's model state, footer events reach the link dispatcher, and
//! loader results are committed before the next fetch is issued.

use super::Message;
use crate::error::FetchError;
use crate::i18n::{BundleSource, LanguageCode, LocaleLoader, LocaleStore, ResourceSource, TranslationBundle};
use crate::link::LinkDispatcher;
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::header::{self, Event as HeaderEvent, ModelSelection};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub store: &'a mut LocaleStore,
    pub loader: &'a mut LocaleLoader,
    pub source: &'a ResourceSource,
    pub header: &'a mut header::State,
    pub current_model: &'a mut ModelSelection,
    pub links: &'a LinkDispatcher,
}

/// Issues the fetch for `lang`; its result comes back as
/// [`Message::BundleFetched`].
pub fn fetch_bundle(source: &ResourceSource, lang: LanguageCode) -> Task<Message> {
    let source = source.clone();
    Task::perform(
        async move {
            let result = source.fetch(&lang).await;
            (lang, result)
        },
        |(lang, result)| Message::BundleFetched { lang, result },
    )
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match ctx.header.update(message) {
        HeaderEvent::None => {}
        HeaderEvent::ModelChange(model) => {
            log::info!("[app] model changed: {} -> {}", ctx.current_model, model);
            *ctx.current_model = model;
        }
        HeaderEvent::LanguageSelected(lang) => {
            log::info!("[app] language selected: {lang}");
            ctx.store.set_active_language(lang);
        }
    }
    Task::none()
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: &footer::Message) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::None => {}
        FooterEvent::OpenLink(href) => ctx.links.dispatch(href),
    }
    Task::none()
}

pub fn handle_bundle_fetched(
    ctx: &mut UpdateContext<'_>,
    lang: LanguageCode,
    result: Result<TranslationBundle, FetchError>,
) -> Task<Message> {
    match ctx.loader.complete(ctx.store, lang, result) {
        Some(next) => fetch_bundle(ctx.source, next),
        None => Task::none(),
    }
}
