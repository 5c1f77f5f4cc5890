// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the page components.
//!
//! Spacing follows an 8px grid (MD = XS * 2). Header selector sizes mirror
//! the site's stylesheet: the model selector at 2em, the language selector
//! at 1.5em of the 16px body size.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod typography {
    /// Page heading in the body.
    pub const TITLE_LG: f32 = 30.0;

    /// Model selector (2em).
    pub const SELECT_MODEL: f32 = 32.0;

    /// Language selector (1.5em).
    pub const SELECT_LANGUAGE: f32 = 24.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 16.0;

    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
