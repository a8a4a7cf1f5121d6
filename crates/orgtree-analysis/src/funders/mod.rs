//! Funder alias map and identifier resolution.

pub mod map;
pub mod resolver;

pub use map::{FunderMap, FunderMapBuilder, FunderMapStats};
pub use resolver::FunderResolver;
