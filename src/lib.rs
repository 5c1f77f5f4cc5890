// SPDX-License-Identifier: MPL-2.0
//! `landing_site` is a small localized landing page built with the Iced GUI
//! framework.
//!
//! It loads translation bundles at startup, renders a header with a model
//! selector and a language selector, and a footer of contact links that open
//! in the system's default handler.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod link;
pub mod ui;
