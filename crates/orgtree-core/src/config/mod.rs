//! Configuration system for orgtree.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod build_config;
pub mod lookup_config;
pub mod orgtree_config;
pub mod output_config;

pub use build_config::BuildConfig;
pub use lookup_config::LookupConfig;
pub use orgtree_config::{CliOverrides, OrgtreeConfig};
pub use output_config::OutputConfig;
