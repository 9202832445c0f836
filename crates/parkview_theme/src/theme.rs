//! Theme variants, token sets, and bundles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Light, ThemeVariant::Dark];

    /// The opposite variant
    pub fn toggle(self) -> Self {
        match self {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeVariant::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for variant names other than `light` and `dark`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme variant `{0}` (expected `light` or `dark`)")]
pub struct ParseVariantError(pub String);

impl FromStr for ThemeVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Content style of the platform status bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    /// Dark glyphs, for light backgrounds
    DarkContent,
    /// Light glyphs, for dark backgrounds
    LightContent,
}

impl StatusBarStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusBarStyle::DarkContent => "dark-content",
            StatusBarStyle::LightContent => "light-content",
        }
    }
}

/// Frozen design values for one theme variant
///
/// Token sets are built as `static` items and handed out as
/// `&'static TokenSet`. Switching themes changes which set is active; a set
/// is never modified.
#[derive(Debug, PartialEq)]
pub struct TokenSet {
    pub variant: ThemeVariant,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub radii: RadiusTokens,
    pub opacity: OpacityTokens,
    pub is_dark: bool,
    pub status_bar_style: StatusBarStyle,
}

impl TokenSet {
    pub fn color(&self, token: ColorToken) -> parkview_core::Color {
        self.colors.get(token)
    }

    pub fn space(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }
}

/// A light/dark pair of token sets
#[derive(Clone, Copy, Debug)]
pub struct ThemeBundle {
    pub name: &'static str,
    pub light: &'static TokenSet,
    pub dark: &'static TokenSet,
}

impl ThemeBundle {
    pub fn for_variant(&self, variant: ThemeVariant) -> &'static TokenSet {
        match variant {
            ThemeVariant::Light => self.light,
            ThemeVariant::Dark => self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        crate::themes::parks::bundle()
    }
}
