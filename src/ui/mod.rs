// SPDX-License-Identifier: MPL-2.0
//! Page components and their shared styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `Event` for its parent and a `view` taking a
//! `ViewContext`.
//!
//! - [`header`] - Model selector and language selector (`my-header`)
//! - [`footer`] - Contact links (`my-footer`)
//! - [`registry`] - Tag-based component registration and the page template
//! - [`design_tokens`] - Colors, spacing and type sizes

pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod registry;
