//! Orchestration: discovery, conversion, then reference rewriting.

use std::io;
use std::path::Path;

use crate::config::Config;
use crate::convert;
use crate::discover;
use crate::rewrite;

/// Aggregate outcome of one run, for final reporting and tests.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Images discovered under the images tree.
    pub found: usize,

    /// Images newly converted this run.
    pub converted: usize,

    /// Images skipped because their output already existed.
    pub skipped: usize,

    /// Images that failed to decode or encode.
    pub failed: usize,

    /// Top-level HTML files rewritten in place.
    pub html_updated: usize,

    /// One message per failed image.
    pub errors: Vec<String>,
}

/// Run the whole job: convert everything under the images tree, then
/// retarget the HTML references.
///
/// Each image is attempted exactly once. Conversion failures are logged,
/// recorded in the summary, and skipped; the only error path out of here
/// is a filesystem failure while rewriting HTML.
pub fn run(config: &Config) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    tracing::info!("WebP Converter - Starting...");

    let images = discover::find_images(&config.images_dir(), config.legacy_extensions);
    summary.found = images.len();
    tracing::info!("Found {} images to convert.", images.len());

    for image_path in &images {
        if convert::webp_sibling(image_path).exists() {
            tracing::info!("[SKIP] Skipping {} (WebP exists)", file_name(image_path));
            summary.skipped += 1;
            continue;
        }

        match convert::convert_image(image_path, config.quality) {
            Ok(conversion) => {
                tracing::info!(
                    "[OK] {} -> {} (saved {:.1}%)",
                    file_name(&conversion.source),
                    file_name(&conversion.output),
                    conversion.savings_percent()
                );
                summary.converted += 1;
            }
            Err(err) => {
                tracing::error!("[ERROR] Error converting {}: {}", file_name(image_path), err);
                summary.errors.push(format!("{}: {}", file_name(image_path), err));
                summary.failed += 1;
            }
        }
    }

    tracing::info!("[DONE] Converted {} images to WebP.", summary.converted);

    tracing::info!("Updating HTML references...");
    let updated = rewrite::rewrite_references(&config.project_root, config.legacy_extensions)?;
    summary.html_updated = updated.len();

    tracing::info!("[DONE] Done! All images converted and HTML updated.");
    tracing::info!("Note: Original files kept. Delete them manually after verification.");

    Ok(summary)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
