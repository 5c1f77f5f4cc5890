// SPDX-License-Identifier: MPL-2.0
//! Page footer listing the contact links.

use super::design_tokens::{palette, radius, spacing, typography};
use super::registry::{ComponentKind, Registry};
use crate::i18n::LocaleStore;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, tooltip, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

pub const TAG: &str = "my-footer";

pub fn register(registry: &mut Registry) {
    registry.component(TAG, ComponentKind::Footer);
}

/// A static contact entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub identifier: &'static str,
    pub href: &'static str,
    pub display_label: &'static str,
    /// File name of the entry's icon in the site's static images.
    pub icon_ref: &'static str,
}

impl ContactLink {
    /// Translation key of the caption shown next to the label.
    pub fn caption_key(&self) -> String {
        format!("contact.{}", self.identifier)
    }
}

/// Contact entries, in display order.
pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        identifier: "instagram",
        href: "https://www.instagram.com/kulbanu.baibulatova1/",
        display_label: "kulbanu.baibulatova1",
        icon_ref: "instagram.png",
    },
    ContactLink {
        identifier: "whatsapp",
        href: "https://wa.me/77773042162",
        display_label: "77773042162",
        icon_ref: "whatsapp.gif",
    },
    ContactLink {
        identifier: "phone",
        href: "tel:+77773042162",
        display_label: "+77773042162",
        icon_ref: "phone.png",
    },
];

pub struct ViewContext<'a> {
    pub store: &'a LocaleStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(&'static str),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Open(href) => Event::OpenLink(*href),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.store.lookup("footer.heading")).size(typography::TITLE_SM);

    let links = CONTACT_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, link| {
            row.push(build_link_item(&ctx, link))
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(links);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::GRAY_100.into()),
            text_color: Some(palette::GRAY_900),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn build_link_item<'a>(ctx: &ViewContext<'a>, link: &'static ContactLink) -> Element<'a, Message> {
    let caption_key = link.caption_key();
    let caption = format!("{}:", ctx.store.lookup(&caption_key));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text(caption)
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .push(
            text(link.display_label)
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );

    let link_button = button(row)
        .style(button::text)
        .padding(spacing::XXS)
        .on_press(Message::Open(link.href));

    // No image rendering; the icon reference is shown on hover instead.
    tooltip(
        link_button,
        Text::new(link.icon_ref).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LanguageCode, TranslationBundle};

    fn code(s: &str) -> LanguageCode {
        s.parse().unwrap()
    }

    #[test]
    fn contact_links_are_in_display_order() {
        let ids: Vec<_> = CONTACT_LINKS.iter().map(|l| l.identifier).collect();
        assert_eq!(ids, ["instagram", "whatsapp", "phone"]);
    }

    #[test]
    fn phone_link_uses_tel_scheme() {
        assert_eq!(CONTACT_LINKS[2].href, "tel:+77773042162");
        assert_eq!(CONTACT_LINKS[2].display_label, "+77773042162");
    }

    #[test]
    fn open_emits_link_event_with_href() {
        let href = CONTACT_LINKS[1].href;
        assert_eq!(update(&Message::Open(href)), Event::OpenLink("https://wa.me/77773042162"));
    }

    #[test]
    fn every_link_carries_an_icon_reference() {
        let icons: Vec<_> = CONTACT_LINKS.iter().map(|l| l.icon_ref).collect();
        assert_eq!(icons, ["instagram.png", "whatsapp.gif", "phone.png"]);
    }

    #[test]
    fn caption_key_is_namespaced() {
        assert_eq!(CONTACT_LINKS[0].caption_key(), "contact.instagram");
    }

    #[test]
    fn register_installs_my_footer() {
        let mut registry = Registry::new();
        register(&mut registry);
        assert_eq!(registry.resolve(TAG), Some(ComponentKind::Footer));
    }

    #[test]
    fn footer_view_renders_with_and_without_bundles() {
        let mut store = LocaleStore::new(code("ru"), code("en"));
        drop(view(ViewContext { store: &store }));

        store.set_bundle(
            code("ru"),
            [("footer.heading", "Контакты")].into_iter().collect::<TranslationBundle>(),
        );
        let _element = view(ViewContext { store: &store });
    }
}
