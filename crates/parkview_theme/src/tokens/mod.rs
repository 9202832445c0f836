//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Spacing (margins, padding)
//! - Typography (fonts, sizes, weights)
//! - Border radii
//! - Opacity
//!
//! Every table is `const`-constructible so token sets can live in statics.

mod color;
mod opacity;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use opacity::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
