#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod error;
pub mod models;
pub mod strings;

pub use builder::AppBuilder;
pub use bundle::{Bundler, CommandBundler, GitBranchPublisher, PublishTarget};
pub use config::BuildSpec;
pub use error::{BuildError, BuildResult};
pub use models::{BuildArtifact, BuildStage};
pub use strings::{LiteralIntrospector, LocaleStore, ModuleIntrospector};
