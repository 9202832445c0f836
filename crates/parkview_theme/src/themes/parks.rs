//! Default Parkview theme
//!
//! A slate/cobalt palette with teal and amber accents. Both variants share
//! spacing, typography, radii and opacity; only colors and the status bar
//! style differ.

use parkview_core::Color;

use crate::theme::{StatusBarStyle, ThemeBundle, ThemeVariant, TokenSet};
use crate::tokens::*;

/// Raw palette shared by both variants
pub mod palette {
    use parkview_core::Color;

    pub const WHITE: Color = Color::hex(0xFFFFFF);
    pub const OFF_WHITE: Color = Color::hex(0xF7F9FC);

    pub const GRAY_50: Color = Color::hex(0xF8FAFC);
    pub const GRAY_100: Color = Color::hex(0xF1F5F9);
    pub const GRAY_200: Color = Color::hex(0xE2E8F0);
    pub const GRAY_300: Color = Color::hex(0xCBD5F5);
    pub const GRAY_500: Color = Color::hex(0x64748B);
    pub const GRAY_600: Color = Color::hex(0x475569);
    pub const GRAY_700: Color = Color::hex(0x334155);
    pub const GRAY_800: Color = Color::hex(0x1E293B);
    pub const GRAY_900: Color = Color::hex(0x0F172A);

    pub const COBALT_050: Color = Color::hex(0xE3ECFF);
    pub const COBALT_200: Color = Color::hex(0xB9CCFF);
    pub const COBALT_400: Color = Color::hex(0x3478F6);
    pub const COBALT_500: Color = Color::hex(0x1F5BD8);
    pub const COBALT_700: Color = Color::hex(0x12378F);

    pub const TEAL_100: Color = Color::hex(0xCCFBF1);
    pub const TEAL_400: Color = Color::hex(0x14B8A6);
    pub const TEAL_600: Color = Color::hex(0x0F766E);

    pub const AMBER_100: Color = Color::hex(0xFEF3C7);
    pub const AMBER_400: Color = Color::hex(0xFBBF24);
    pub const AMBER_600: Color = Color::hex(0xD97706);

    pub const ROSE_100: Color = Color::hex(0xFFE4E6);
    pub const ROSE_400: Color = Color::hex(0xFB7185);
    pub const ROSE_600: Color = Color::hex(0xE11D48);

    pub const EMERALD_100: Color = Color::hex(0xDCFCE7);
    pub const EMERALD_400: Color = Color::hex(0x34D399);
    pub const EMERALD_600: Color = Color::hex(0x059669);
}

use palette::*;

pub static LIGHT: TokenSet = TokenSet {
    variant: ThemeVariant::Light,
    colors: ColorTokens {
        background: GRAY_50,
        background_subtle: OFF_WHITE,
        surface: WHITE,
        surface_subtle: GRAY_100,
        surface_contrast: GRAY_700,
        text_primary: GRAY_900,
        text_secondary: GRAY_600,
        text_muted: GRAY_500,
        text_inverse: WHITE,
        primary: COBALT_500,
        primary_muted: COBALT_200,
        secondary: TEAL_400,
        secondary_muted: TEAL_100,
        accent: AMBER_400,
        border: GRAY_200,
        border_muted: GRAY_100,
        success: EMERALD_400,
        warning: AMBER_400,
        danger: ROSE_400,
        overlay: Color::rgba8(15, 23, 42, 0.45),
        shadow: Color::rgba8(15, 23, 42, 0.12),
    },
    spacing: SpacingTokens::DEFAULT,
    typography: TypographyTokens::DEFAULT,
    radii: RadiusTokens::DEFAULT,
    opacity: OpacityTokens::DEFAULT,
    is_dark: false,
    status_bar_style: StatusBarStyle::DarkContent,
};

pub static DARK: TokenSet = TokenSet {
    variant: ThemeVariant::Dark,
    colors: ColorTokens {
        background: GRAY_900,
        background_subtle: GRAY_800,
        surface: GRAY_800,
        surface_subtle: GRAY_700,
        surface_contrast: WHITE,
        text_primary: GRAY_50,
        text_secondary: GRAY_200,
        text_muted: GRAY_500,
        text_inverse: GRAY_900,
        primary: COBALT_400,
        primary_muted: COBALT_050,
        secondary: TEAL_100,
        secondary_muted: TEAL_600,
        accent: AMBER_400,
        border: GRAY_700,
        border_muted: GRAY_800,
        success: EMERALD_400,
        warning: AMBER_400,
        danger: ROSE_400,
        overlay: Color::rgba8(2, 6, 23, 0.65),
        shadow: Color::rgba8(0, 0, 0, 0.5),
    },
    spacing: SpacingTokens::DEFAULT,
    typography: TypographyTokens::DEFAULT,
    radii: RadiusTokens::DEFAULT,
    opacity: OpacityTokens::DEFAULT,
    is_dark: true,
    status_bar_style: StatusBarStyle::LightContent,
};

/// The default light/dark pair
pub fn bundle() -> ThemeBundle {
    ThemeBundle {
        name: "parks",
        light: &LIGHT,
        dark: &DARK,
    }
}
