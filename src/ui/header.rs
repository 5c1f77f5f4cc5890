// SPDX-License-Identifier: MPL-2.0
//! Page header with the model selector and the language selector.
//!
//! The model selector offers the `members` handed down by the parent and
//! reports changes through [`Event::ModelChange`]; it never touches the
//! locale store. The language selector is bound to the store's active
//! language in both directions: selections go up as
//! [`Event::LanguageSelected`], and the displayed value always follows the
//! store through a [`watch::Receiver`].

use super::design_tokens::{palette, radius, spacing, typography};
use super::registry::{ComponentKind, Registry};
use crate::i18n::{LanguageCode, LocaleStore};
use iced::{
    alignment::Vertical,
    widget::{container, pick_list, text, Container, Row, Space},
    Border, Element, Length, Theme,
};
use std::fmt;
use tokio::sync::watch;

/// Tag under which the header is registered.
pub const TAG: &str = "my-header";

/// Installs the header as a named page element.
pub fn register(registry: &mut Registry) {
    registry.component(TAG, ComponentKind::Header);
}

/// An entry of the model selector. Opaque to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelSelection(pub u32);

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub store: &'a LocaleStore,
    /// Models offered by the parent, in display order.
    pub members: &'a [ModelSelection],
}

/// Messages emitted by the header widgets.
#[derive(Debug, Clone)]
pub enum Message {
    ModelSelected(ModelSelection),
    LanguageSelected(LanguageCode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ModelChange(ModelSelection),
    LanguageSelected(LanguageCode),
}

#[derive(Debug)]
pub struct State {
    selected_model: ModelSelection,
    languages: Vec<LanguageCode>,
    active_language: watch::Receiver<LanguageCode>,
}

impl State {
    /// Mounts the header. `default_model` is used as-is, whether or not it
    /// appears among the members.
    pub fn new(
        store: &LocaleStore,
        languages: Vec<LanguageCode>,
        default_model: ModelSelection,
    ) -> Self {
        Self {
            selected_model: default_model,
            languages,
            active_language: store.subscribe(),
        }
    }

    pub fn selected_model(&self) -> ModelSelection {
        self.selected_model
    }

    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    /// The language shown by the selector, i.e. the store's active language.
    pub fn displayed_language(&self) -> LanguageCode {
        self.active_language.borrow().clone()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ModelSelected(model) => {
                // Like a <select> change event: nothing fires when the value
                // does not change.
                if model == self.selected_model {
                    return Event::None;
                }
                self.selected_model = model;
                Event::ModelChange(model)
            }
            Message::LanguageSelected(lang) => Event::LanguageSelected(lang),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let model_select = pick_list(ctx.members, Some(self.selected_model), Message::ModelSelected)
            .placeholder(ctx.store.lookup("header.model"))
            .text_size(typography::SELECT_MODEL)
            .padding([spacing::XXS, spacing::XS]);

        let language_select = pick_list(
            self.languages.as_slice(),
            Some(self.displayed_language()),
            Message::LanguageSelected,
        )
        .text_size(typography::SELECT_LANGUAGE)
        .padding([spacing::XXS, spacing::XS]);

        let language_label = text(ctx.store.lookup("header.language"))
            .size(typography::BODY)
            .color(palette::GRAY_700);

        let row = Row::new()
            .spacing(spacing::MD)
            .padding(spacing::SM)
            .align_y(Vertical::Center)
            .push(model_select)
            .push(Space::new().width(Length::Fill))
            .push(language_label)
            .push(language_select);

        Container::new(row)
            .width(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::GRAY_100.into()),
                text_color: Some(palette::GRAY_900),
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LanguageCode {
        s.parse().unwrap()
    }

    fn languages() -> Vec<LanguageCode> {
        vec![code("ru"), code("kz"), code("en")]
    }

    fn store() -> LocaleStore {
        LocaleStore::new(code("ru"), code("en"))
    }

    #[test]
    fn default_selection_is_independent_of_members() {
        let store = store();
        let state = State::new(&store, languages(), ModelSelection(9));
        let members = [ModelSelection(3), ModelSelection(6), ModelSelection(9)];

        assert_eq!(state.selected_model(), ModelSelection(9));
        assert_ne!(state.selected_model(), members[0]);
    }

    #[test]
    fn selecting_a_model_emits_exactly_one_model_change() {
        let store = store();
        let mut state = State::new(&store, languages(), ModelSelection(9));

        let event = state.update(Message::ModelSelected(ModelSelection(3)));

        assert_eq!(event, Event::ModelChange(ModelSelection(3)));
        assert_eq!(state.selected_model(), ModelSelection(3));
    }

    #[test]
    fn model_change_does_not_touch_the_store() {
        let store = store();
        let rx = store.subscribe();
        let mut state = State::new(&store, languages(), ModelSelection(9));

        state.update(Message::ModelSelected(ModelSelection(6)));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.active_language(), code("ru"));
        assert_eq!(store.languages().count(), 0);
    }

    #[test]
    fn reselecting_current_model_emits_nothing() {
        let store = store();
        let mut state = State::new(&store, languages(), ModelSelection(9));
        assert_eq!(state.update(Message::ModelSelected(ModelSelection(9))), Event::None);
    }

    #[test]
    fn language_selection_is_forwarded_to_parent() {
        let store = store();
        let mut state = State::new(&store, languages(), ModelSelection(9));
        let event = state.update(Message::LanguageSelected(code("kz")));
        assert_eq!(event, Event::LanguageSelected(code("kz")));
    }

    #[test]
    fn selector_follows_store_changes() {
        let mut store = store();
        let state = State::new(&store, languages(), ModelSelection(9));
        assert_eq!(state.displayed_language(), code("ru"));

        store.set_active_language(code("en"));
        assert_eq!(state.displayed_language(), code("en"));
    }

    #[test]
    fn selectable_languages_do_not_depend_on_loaded_bundles() {
        let store = store();
        let state = State::new(&store, languages(), ModelSelection(9));
        assert_eq!(state.languages(), languages().as_slice());
        assert!(!store.has_bundle(&code("kz")));
    }

    #[test]
    fn register_installs_my_header() {
        let mut registry = Registry::new();
        register(&mut registry);
        assert_eq!(registry.resolve("my-header"), Some(ComponentKind::Header));
    }

    #[test]
    fn header_view_renders() {
        let store = store();
        let state = State::new(&store, languages(), ModelSelection(9));
        let members = [ModelSelection(3), ModelSelection(6), ModelSelection(9)];
        let _element = state.view(ViewContext {
            store: &store,
            members: &members,
        });
    }

    #[test]
    fn header_view_renders_without_members() {
        let store = store();
        let state = State::new(&store, languages(), ModelSelection(9));
        let _element = state.view(ViewContext {
            store: &store,
            members: &[],
        });
    }
}
