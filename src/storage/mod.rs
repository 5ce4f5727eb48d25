//! Storage for configuration and the update-check cache.

pub mod cache;
pub mod config;
pub mod paths;

pub use config::{
    ConfigSource, ConfigSources, Defaults, EnvLayer, FileConfig, FlagLayer, KeySource,
    ResolvedConfig, resolve,
};
pub use paths::AppPaths;
