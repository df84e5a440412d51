use std::{
    fmt::{self, Debug, Formatter},
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, info};

use crate::{
    cleaner::{BulletCleaner, LineCleaner},
    cleaner_config::CleanerConfig,
    document::Document,
    CleanError,
};

/// Summary of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub lines: usize,
    pub bytes_written: usize,
}

/// A builder for the `DependencyCleaner` struct
/// That allows for configuring paths and the
/// line cleaner before building it
pub struct DependencyCleanerBuilder {
    config: Option<String>,
    paths: Option<CleanerConfig>,
    cleaner: Option<Arc<dyn LineCleaner>>,
}

impl DependencyCleanerBuilder {
    pub fn new() -> Self {
        DependencyCleanerBuilder {
            config: None,
            paths: None,
            cleaner: None,
        }
    }

    /// A config file path, or inline JSON/TOML.
    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    pub fn with_paths(mut self, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        self.paths = Some(CleanerConfig::new(input, output));
        self
    }

    pub fn with_cleaner<T: LineCleaner + 'static>(mut self, cleaner: T) -> Self {
        self.cleaner = Some(Arc::new(cleaner));
        self
    }

    pub fn build(self) -> DependencyCleaner {
        DependencyCleaner {
            config: self.config,
            paths: self.paths,
            cleaner: self.cleaner.unwrap_or_else(|| Arc::new(BulletCleaner)),
        }
    }
}

impl Default for DependencyCleanerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a dependency list, cleans every line and writes the result.
///
/// # Example
///
/// ```no_run
/// use dep_cleaner::DependencyCleaner;
///
/// let report = DependencyCleaner::new()
///     .with_paths("prelim_req.txt", "req.txt")
///     .build()
///     .run()?;
/// println!("Dependencies cleaned and saved to {}", report.output_path.display());
/// # Ok::<(), dep_cleaner::CleanError>(())
/// ```
#[derive(Clone)]
pub struct DependencyCleaner {
    config: Option<String>,
    paths: Option<CleanerConfig>,
    cleaner: Arc<dyn LineCleaner>,
}

impl Debug for DependencyCleaner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyCleaner")
            .field("config", &self.config)
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}

impl DependencyCleaner {
    pub fn new() -> DependencyCleanerBuilder {
        DependencyCleanerBuilder::new()
    }

    /// Explicit paths win over the config.
    pub fn resolve_paths(&self) -> Result<CleanerConfig, CleanError> {
        if let Some(paths) = &self.paths {
            return Ok(paths.clone());
        }
        match &self.config {
            Some(config_str) => Ok(CleanerConfig::from_config(config_str)?),
            None => Err(CleanError::MissingPaths),
        }
    }

    pub fn run(&self) -> Result<CleanReport, CleanError> {
        let paths = self.resolve_paths()?;
        debug!("resolved paths: {}", paths);
        self.clean(&paths.input_path, &paths.output_path)
    }

    /// The input is fully read before the output is touched, so a missing
    /// input never creates or truncates the output file.
    pub fn clean(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<CleanReport, CleanError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let cleaned = Document::read(input_path)?.clean_with(self.cleaner.as_ref());
        let bytes_written = cleaned.write(output_path)?;
        info!(
            "wrote {} lines ({} bytes) to {}",
            cleaned.len(),
            bytes_written,
            output_path.display()
        );

        Ok(CleanReport {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            lines: cleaned.len(),
            bytes_written,
        })
    }

    pub fn clean_text(&self, text: &str) -> String {
        Document::from_text(text)
            .clean_with(self.cleaner.as_ref())
            .render()
    }
}

impl Default for DependencyCleaner {
    fn default() -> Self {
        DependencyCleanerBuilder::new().build()
    }
}

/// Cleans `input_path` into `output_path` with the default bullet cleaner.
pub fn clean_dependencies(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<CleanReport, CleanError> {
    DependencyCleaner::default().clean(input_path, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::PrefixCleaner;

    #[test]
    fn clean_text_matches_documented_scenario() {
        let cleaner = DependencyCleaner::default();
        assert_eq!(
            cleaner.clean_text("- numpy==1.2.0\n  - pandas\nscipy\n"),
            "numpy==1.2.0\npandas\nscipy"
        );
    }

    #[test]
    fn custom_cleaner_is_used() {
        let cleaner = DependencyCleaner::new()
            .with_cleaner(PrefixCleaner::default())
            .build();
        assert_eq!(cleaner.clean_text("- a\n--- b"), "a\n--- b");
    }

    #[test]
    fn no_paths_is_an_error() {
        let err = DependencyCleaner::default().run().unwrap_err();
        assert!(matches!(err, CleanError::MissingPaths));
    }

    #[test]
    fn explicit_paths_override_config() {
        let cleaner = DependencyCleaner::new()
            .with_config(r#"{"input_path": "from_config.txt", "output_path": "x.txt"}"#)
            .with_paths("direct.txt", "out.txt")
            .build();
        let paths = cleaner.resolve_paths().unwrap();
        assert_eq!(paths, CleanerConfig::new("direct.txt", "out.txt"));
    }

    #[test]
    fn config_paths_are_used_when_no_explicit_paths() {
        let cleaner = DependencyCleaner::new()
            .with_config(r#"{"input_path": "in.txt", "output_path": "out.txt"}"#)
            .build();
        assert_eq!(
            cleaner.resolve_paths().unwrap(),
            CleanerConfig::new("in.txt", "out.txt")
        );
    }

    #[test]
    fn bad_config_surfaces_config_error() {
        let err = DependencyCleaner::new()
            .with_config("not a config")
            .build()
            .run()
            .unwrap_err();
        assert!(matches!(err, CleanError::Config(_)));
    }
}
