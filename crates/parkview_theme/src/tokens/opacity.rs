//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Transparent,
    Subtle,
    Muted,
    Overlay,
    Disabled,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub transparent: f32,
    pub subtle: f32,
    pub muted: f32,
    pub overlay: f32,
    pub disabled: f32,
}

impl OpacityTokens {
    pub const DEFAULT: Self = Self {
        transparent: 0.0,
        subtle: 0.08,
        muted: 0.16,
        overlay: 0.65,
        disabled: 0.4,
    };

    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Transparent => self.transparent,
            OpacityToken::Subtle => self.subtle,
            OpacityToken::Muted => self.muted,
            OpacityToken::Overlay => self.overlay,
            OpacityToken::Disabled => self.disabled,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}
