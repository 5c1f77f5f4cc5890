// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct owns the locale store for the whole run and wires it to
//! the header, the footer and the locale loader. Loader steps arrive as
//! messages, so user input can interleave between them; every store mutation
//! happens in `update` on the UI thread.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::{EmbeddedSource, LanguageCode, LocaleLoader, LocaleStore, ResourceSource};
use crate::link::LinkDispatcher;
use crate::ui::footer;
use crate::ui::header::{self, ModelSelection};
use crate::ui::registry::{Registry, PAGE_TEMPLATE};
use iced::{window, Element, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    store: LocaleStore,
    loader: LocaleLoader,
    source: ResourceSource,
    header: header::State,
    /// Models offered by the header, in display order.
    members: Vec<ModelSelection>,
    /// Last model reported by the header.
    current_model: ModelSelection,
    registry: Registry,
    links: LinkDispatcher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_language", &self.store.active_language())
            .field("loader", self.loader.state())
            .field("source", &self.source.describe())
            .field("current_model", &self.current_model)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entries of `order` that have no compiled-in bundle.
fn missing_embedded(order: &[LanguageCode]) -> Vec<&LanguageCode> {
    let available = EmbeddedSource::available();
    order
        .iter()
        .filter(|lang| !available.contains(*lang))
        .collect()
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the configuration and starts the locale loader.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("[app] {warning}");
        }

        Self::from_config(config, flags, LinkDispatcher::system())
    }

    /// Builds the application from an already loaded configuration. CLI flags
    /// take precedence over the matching config fields.
    fn from_config(config: Config, flags: Flags, links: LinkDispatcher) -> (Self, Task<Message>) {
        let root = flags
            .locale_root
            .unwrap_or(config.locale.resource_root);
        let source = ResourceSource::from_root(&root).unwrap_or_else(|err| {
            log::warn!("[app] cannot use locale root {root}: {err}; using embedded bundles");
            ResourceSource::Embedded(EmbeddedSource)
        });
        log::info!("[app] loading locales from {}", source.describe());

        let store = LocaleStore::new(config.locale.initial, config.locale.fallback);

        let members = if flags.members.is_empty() {
            config.header.members
        } else {
            flags.members
        };
        let members: Vec<ModelSelection> = members.into_iter().map(ModelSelection).collect();

        let header = header::State::new(
            &store,
            config.locale.languages,
            ModelSelection(config.header.default_model),
        );

        let mut registry = Registry::new();
        header::register(&mut registry);
        footer::register(&mut registry);
        for tag in registry.unresolved(&PAGE_TEMPLATE) {
            log::warn!("[app] no component registered for <{tag}>");
        }

        if matches!(source, ResourceSource::Embedded(_)) {
            for lang in missing_embedded(&config.locale.load_order) {
                log::warn!("[app] no embedded bundle for {lang}; it will be skipped");
            }
        }

        let mut loader = LocaleLoader::new(config.locale.load_order);
        let task = match loader.begin() {
            Some(lang) => update::fetch_bundle(&source, lang),
            None => Task::none(),
        };

        let app = App {
            current_model: header.selected_model(),
            store,
            loader,
            source,
            header,
            members,
            registry,
            links,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.store.lookup("site.title").to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            store: &mut self.store,
            loader: &mut self.loader,
            source: &self.source,
            header: &mut self.header,
            current_model: &mut self.current_model,
            links: &self.links,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, &footer_message)
            }
            Message::BundleFetched { lang, result } => {
                update::handle_bundle_fetched(&mut ctx, lang, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            store: &self.store,
            registry: &self.registry,
            header: &self.header,
            members: &self.members,
            current_model: self.current_model,
        })
    }
}
