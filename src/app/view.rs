// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is built from [`PAGE_TEMPLATE`]: each element slot is mounted
//! from whatever component is registered under its tag, the body slot
//! renders the page content.

use super::Message;
use crate::i18n::LocaleStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::header::{self, ModelSelection, ViewContext as HeaderViewContext};
use crate::ui::registry::{ComponentKind, Registry, Slot, PAGE_TEMPLATE};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub store: &'a LocaleStore,
    pub registry: &'a Registry,
    pub header: &'a header::State,
    pub members: &'a [ModelSelection],
    pub current_model: ModelSelection,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = PAGE_TEMPLATE
        .iter()
        .fold(Column::new().width(Length::Fill), |column, slot| {
            match render_slot(&ctx, *slot) {
                Some(element) => column.push(element),
                None => column,
            }
        });

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn render_slot<'a>(ctx: &ViewContext<'a>, slot: Slot) -> Option<Element<'a, Message>> {
    match slot {
        Slot::Body => Some(view_body(ctx)),
        Slot::Element(tag) => ctx.registry.resolve(tag).map(|kind| match kind {
            ComponentKind::Header => ctx
                .header
                .view(HeaderViewContext {
                    store: ctx.store,
                    members: ctx.members,
                })
                .map(Message::Header),
            ComponentKind::Footer => {
                footer::view(FooterViewContext { store: ctx.store }).map(Message::Footer)
            }
        }),
    }
}

fn view_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = format!(
        "{} {}",
        ctx.store.lookup("hero.selected_model"),
        ctx.current_model
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(ctx.store.lookup("hero.title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.store.lookup("hero.subtitle")).size(typography::BODY))
        .push(Text::new(selected).size(typography::BODY));

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
