//! Data models for animation and bezier declarations

pub mod animation;
pub mod bezier;
pub mod style;

pub use animation::*;
pub use bezier::*;
pub use style::*;
