//! Border radius tokens

/// Radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Xs,
    Sm,
    Md,
    Lg,
    Pill,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    /// Large enough to fully round any control
    pub pill: f32,
}

impl RadiusTokens {
    pub const DEFAULT: Self = Self {
        xs: 4.0,
        sm: 8.0,
        md: 12.0,
        lg: 20.0,
        pill: 999.0,
    };

    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Pill => self.pill,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}
