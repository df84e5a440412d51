mod cleaner;
mod cleaner_config;
mod dependency_cleaner;
mod document;
mod error;

pub use cleaner::{BulletCleaner, LineCleaner, PrefixCleaner};
pub use cleaner_config::CleanerConfig;
pub use dependency_cleaner::{
    clean_dependencies, CleanReport, DependencyCleaner, DependencyCleanerBuilder,
};
pub use document::Document;
pub use error::{CleanError, ConfigError};
