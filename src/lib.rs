//! One-shot WebP migration for static-site assets.
//!
//! Scans `assets/images` recursively for JPG/PNG files, re-encodes each
//! as a lossy WebP sibling, then rewrites `src` references in the
//! project's top-level HTML files. Sources are never deleted, and re-runs
//! skip images that already have a `.webp` next to them.

pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod rewrite;

pub use config::Config;
pub use convert::{convert_image, Conversion};
pub use discover::find_images;
pub use error::ConvertError;
pub use pipeline::{run, RunSummary};
pub use rewrite::rewrite_references;
