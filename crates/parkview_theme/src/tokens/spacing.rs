//! Spacing scale

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    None,
    Hairline,
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Huge,
}

/// Either a named step of the scale or a literal pixel value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    Token(SpacingToken),
    Px(f32),
}

impl From<SpacingToken> for Spacing {
    fn from(token: SpacingToken) -> Self {
        Spacing::Token(token)
    }
}

impl From<f32> for Spacing {
    fn from(px: f32) -> Self {
        Spacing::Px(px)
    }
}

/// Complete spacing scale
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub none: f32,
    pub hairline: f32,
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub huge: f32,
}

impl SpacingTokens {
    pub const DEFAULT: Self = Self {
        none: 0.0,
        hairline: 1.0,
        xxs: 2.0,
        xs: 4.0,
        sm: 8.0,
        md: 12.0,
        lg: 16.0,
        xl: 24.0,
        xxl: 32.0,
        xxxl: 40.0,
        huge: 64.0,
    };

    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::None => self.none,
            SpacingToken::Hairline => self.hairline,
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
            SpacingToken::Huge => self.huge,
        }
    }

    /// Resolve a token or pass a literal value through
    pub fn value(&self, spacing: impl Into<Spacing>) -> f32 {
        match spacing.into() {
            Spacing::Token(token) => self.get(token),
            Spacing::Px(px) => px,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}
