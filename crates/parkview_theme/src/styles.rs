//! Screen styles derived from a token set
//!
//! [`styles_for`] is a pure function of the token set. [`StyleCache`] keeps
//! the last result and only recomputes when a different token set (by
//! identity) is passed in, so a theme switch costs one derivation and
//! re-renders with the same theme cost none.

use parkview_core::Color;

use crate::theme::TokenSet;
use crate::tokens::{FontWeight, TextSize};

/// Drop shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    /// Android-style elevation
    pub elevation: f32,
}

/// Box properties of a view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewStyle {
    pub background: Option<Color>,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub gap: f32,
    pub height: Option<f32>,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Option<Color>,
    pub shadow: Option<Shadow>,
}

/// Text properties
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub font_weight: FontWeight,
    pub color: Color,
    pub letter_spacing: f32,
    pub uppercase: bool,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl TextStyle {
    fn new(tokens: &TokenSet, size: TextSize, weight: FontWeight, color: Color) -> Self {
        Self {
            font_size: tokens.typography.font_size(size),
            line_height: tokens.typography.line_height(size),
            font_weight: weight,
            color,
            letter_spacing: tokens.typography.letter_spacing.normal,
            uppercase: false,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }
}

/// Every style used by the park screens
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSet {
    pub container: ViewStyle,

    // Park list
    pub list_content: ViewStyle,
    pub card: ViewStyle,
    pub park_name: TextStyle,
    pub separator: ViewStyle,

    // Park detail
    pub detail_content: ViewStyle,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub section_title: TextStyle,
    pub section_spacer: ViewStyle,
    pub info_row: ViewStyle,
    pub info_label: TextStyle,
    pub info_value: TextStyle,
    pub info_divider: ViewStyle,
    pub coaster_card: ViewStyle,
    pub coaster_name: TextStyle,
    pub coaster_separator: ViewStyle,
}

/// Derive the screen styles for `tokens`
pub fn styles_for(tokens: &TokenSet) -> StyleSet {
    let c = &tokens.colors;
    let s = &tokens.spacing;
    let t = &tokens.typography;

    let card = |offset_y: f32, opacity: f32, radius: f32, elevation: f32| ViewStyle {
        background: Some(c.surface),
        padding_vertical: s.md,
        padding_horizontal: s.lg,
        corner_radius: tokens.radii.md,
        border_width: 1.0,
        border_color: Some(c.border),
        shadow: Some(Shadow {
            color: c.shadow,
            offset_y,
            opacity,
            radius,
            elevation,
        }),
        ..ViewStyle::default()
    };
    let spacer = |height: f32| ViewStyle {
        height: Some(height),
        ..ViewStyle::default()
    };

    StyleSet {
        container: ViewStyle {
            background: Some(c.background),
            ..ViewStyle::default()
        },

        list_content: ViewStyle {
            padding_vertical: s.lg,
            padding_horizontal: s.xl,
            ..ViewStyle::default()
        },
        card: card(6.0, 0.12, 12.0, 4.0),
        park_name: TextStyle::new(tokens, TextSize::Lg, FontWeight::Semibold, c.text_primary),
        separator: spacer(s.md),

        detail_content: ViewStyle {
            padding_vertical: s.xl,
            padding_horizontal: s.xl,
            ..ViewStyle::default()
        },
        title: TextStyle {
            margin_bottom: s.md,
            ..TextStyle::new(tokens, TextSize::Xl, FontWeight::Bold, c.text_primary)
        },
        subtitle: TextStyle {
            margin_top: s.sm,
            ..TextStyle::new(tokens, TextSize::Md, FontWeight::Regular, c.text_secondary)
        },
        section_title: TextStyle {
            margin_top: s.xl,
            margin_bottom: s.md,
            ..TextStyle::new(tokens, TextSize::Lg, FontWeight::Semibold, c.text_primary)
        },
        section_spacer: spacer(s.md),
        info_row: ViewStyle {
            padding_vertical: s.sm,
            gap: s.xs,
            ..ViewStyle::default()
        },
        info_label: TextStyle {
            letter_spacing: t.letter_spacing.relaxed,
            uppercase: true,
            ..TextStyle::new(tokens, TextSize::Sm, FontWeight::Regular, c.text_secondary)
        },
        info_value: TextStyle::new(tokens, TextSize::Md, FontWeight::Medium, c.text_primary),
        info_divider: ViewStyle {
            height: Some(1.0),
            background: Some(c.border_muted),
            ..ViewStyle::default()
        },
        coaster_card: card(4.0, 0.1, 10.0, 3.0),
        coaster_name: TextStyle::new(tokens, TextSize::Md, FontWeight::Semibold, c.text_primary),
        coaster_separator: spacer(s.md),
    }
}

/// Memoizes [`styles_for`] by token-set identity
#[derive(Debug, Default)]
pub struct StyleCache {
    entry: Option<(&'static TokenSet, StyleSet)>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles for `tokens`, derived at most once per distinct token set in a row
    pub fn get(&mut self, tokens: &'static TokenSet) -> &StyleSet {
        if !self.is_cached(tokens) {
            self.entry = None;
        }
        let (_, styles) = self.entry.get_or_insert_with(|| {
            tracing::trace!(variant = %tokens.variant, "deriving styles");
            (tokens, styles_for(tokens))
        });
        styles
    }

    /// Whether the cached styles belong to `tokens`
    pub fn is_cached(&self, tokens: &'static TokenSet) -> bool {
        matches!(&self.entry, Some((cached, _)) if std::ptr::eq(*cached, tokens))
    }
}
