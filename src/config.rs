//! Run configuration threaded through every phase of the job.

use std::path::PathBuf;

/// WebP encode quality on a 0-100 scale.
pub const DEFAULT_QUALITY: u8 = 85;

/// Extensions being phased out, matched case-sensitively in both cases.
pub const LEGACY_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".JPG", ".JPEG", ".PNG"];

/// Extension every image is converted to.
pub const TARGET_EXTENSION: &str = "webp";

/// Configuration for a single conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root holding the top-level HTML files and the assets tree.
    pub project_root: PathBuf,

    /// WebP encode quality (0-100).
    pub quality: u8,

    /// Image extensions to convert and rewrite, matched case-sensitively.
    pub legacy_extensions: &'static [&'static str],
}

impl Config {
    /// Build a config for `project_root` with the default tunables.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            quality: DEFAULT_QUALITY,
            legacy_extensions: LEGACY_EXTENSIONS,
        }
    }

    /// The image tree searched recursively for legacy files.
    pub fn images_dir(&self) -> PathBuf {
        self.project_root.join("assets").join("images")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
