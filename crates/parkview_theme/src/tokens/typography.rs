//! Typography tokens

/// Step of the type scale, shared by font sizes and line heights
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Numeric font weight
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight (400..=700)
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Font family names by role
#[derive(Clone, Debug, PartialEq)]
pub struct FontFamilies {
    pub regular: &'static str,
    pub medium: &'static str,
    pub bold: &'static str,
    pub monospace: &'static str,
}

/// Values indexed by [`TextSize`]
#[derive(Clone, Debug, PartialEq)]
pub struct SizeScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SizeScale {
    pub fn get(&self, size: TextSize) -> f32 {
        match size {
            TextSize::Xs => self.xs,
            TextSize::Sm => self.sm,
            TextSize::Md => self.md,
            TextSize::Lg => self.lg,
            TextSize::Xl => self.xl,
            TextSize::Xxl => self.xxl,
        }
    }
}

/// Letter spacing presets
#[derive(Clone, Debug, PartialEq)]
pub struct LetterSpacing {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

/// Complete typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_families: FontFamilies,
    pub font_sizes: SizeScale,
    pub line_heights: SizeScale,
    pub letter_spacing: LetterSpacing,
}

impl TypographyTokens {
    pub const DEFAULT: Self = Self {
        font_families: FontFamilies {
            regular: "System",
            medium: "System",
            bold: "System",
            monospace: "Menlo",
        },
        font_sizes: SizeScale {
            xs: 12.0,
            sm: 14.0,
            md: 16.0,
            lg: 20.0,
            xl: 24.0,
            xxl: 32.0,
        },
        line_heights: SizeScale {
            xs: 16.0,
            sm: 18.0,
            md: 22.0,
            lg: 26.0,
            xl: 32.0,
            xxl: 40.0,
        },
        letter_spacing: LetterSpacing {
            tight: -0.2,
            normal: 0.0,
            relaxed: 0.25,
        },
    };

    pub fn font_size(&self, size: TextSize) -> f32 {
        self.font_sizes.get(size)
    }

    pub fn line_height(&self, size: TextSize) -> f32 {
        self.line_heights.get(size)
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}
