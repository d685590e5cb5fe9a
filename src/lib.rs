#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod minify;
pub mod models;
pub mod project;

pub use builder::{BundleError, SiteBuilder};
pub use config::BundleConfig;
pub use models::{BuildReport, InlineStats};
pub use project::BundleLayout;
