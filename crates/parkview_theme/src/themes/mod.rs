//! Built-in themes

pub mod parks;

pub use parks::{DARK, LIGHT};
