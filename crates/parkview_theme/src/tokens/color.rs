//! Color tokens for theming

use parkview_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surface colors
    Background,
    BackgroundSubtle,
    Surface,
    SurfaceSubtle,
    SurfaceContrast,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,

    // Brand colors
    Primary,
    PrimaryMuted,
    Secondary,
    SecondaryMuted,
    Accent,

    // Border colors
    Border,
    BorderMuted,

    // Semantic colors
    Success,
    Warning,
    Danger,

    // Effects
    Overlay,
    Shadow,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Surface colors
    pub background: Color,
    pub background_subtle: Color,
    pub surface: Color,
    pub surface_subtle: Color,
    pub surface_contrast: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // Brand colors
    pub primary: Color,
    pub primary_muted: Color,
    pub secondary: Color,
    pub secondary_muted: Color,
    pub accent: Color,

    // Border colors
    pub border: Color,
    pub border_muted: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // Effects
    pub overlay: Color,
    pub shadow: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::BackgroundSubtle => self.background_subtle,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceSubtle => self.surface_subtle,
            ColorToken::SurfaceContrast => self.surface_contrast,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryMuted => self.primary_muted,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryMuted => self.secondary_muted,
            ColorToken::Accent => self.accent,
            ColorToken::Border => self.border,
            ColorToken::BorderMuted => self.border_muted,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Danger => self.danger,
            ColorToken::Overlay => self.overlay,
            ColorToken::Shadow => self.shadow,
        }
    }
}
