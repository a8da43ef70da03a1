//! Reference Rewriter: retargets HTML `src` references at `.webp` files.
//!
//! This is quote-bounded textual substitution, not an HTML parser. The
//! pattern fires anywhere the `src="...<ext>"` shape appears, comments and
//! scripts included, and any attribute whose name merely ends in `src`
//! (such as `data-src`) is rewritten along with `src` itself.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::TARGET_EXTENSION;

/// Apply the `src` substitution for every legacy extension in sequence.
///
/// Each extension is matched literally and case-sensitively between an
/// attribute-opening fragment and its closing quote; both quote styles
/// are accepted and preserved.
pub fn rewrite_content(content: &str, extensions: &[&str]) -> String {
    apply_patterns(content, &compile_patterns(extensions))
}

/// One compiled substitution pattern per legacy extension.
fn compile_patterns(extensions: &[&str]) -> Vec<Regex> {
    extensions
        .iter()
        .map(|ext| {
            let pattern = format!(r#"(src=["'][^"']*){}(["'])"#, regex::escape(ext));
            Regex::new(&pattern).expect("escaped extension forms a valid pattern")
        })
        .collect()
}

fn apply_patterns(content: &str, patterns: &[Regex]) -> String {
    let replacement = format!("${{1}}.{}${{2}}", TARGET_EXTENSION);
    let mut content = content.to_string();

    for re in patterns {
        content = re.replace_all(&content, replacement.as_str()).into_owned();
    }

    content
}

/// Immediate-child `*.html` files of `root`, non-recursive and
/// case-sensitive on the extension.
fn find_html_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_html = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(".html"))
            .unwrap_or(false);
        if path.is_file() && is_html {
            files.push(path);
        }
    }

    Ok(files)
}

/// Rewrite legacy references in every top-level HTML file under `root`.
///
/// The substitution patterns are compiled once per run and shared across
/// files. A file is written back only if its content changed, so
/// untouched files keep their modification time. Returns the files that
/// were rewritten. Unlike the convert phase, read and write failures
/// here propagate and abort the run.
pub fn rewrite_references(root: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let patterns = compile_patterns(extensions);
    let mut updated = Vec::new();

    for html_file in find_html_files(root)? {
        let content = fs::read_to_string(&html_file)?;
        let rewritten = apply_patterns(&content, &patterns);

        if rewritten != content {
            fs::write(&html_file, &rewritten)?;
            let name = html_file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            tracing::info!("[UPDATED] Updated: {}", name);
            updated.push(html_file);
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEGACY_EXTENSIONS;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn rewrites_src_in_both_quote_styles() {
        let html = r#"<img src="photo.jpg"> <img src='banner.png'>"#;
        let out = rewrite_content(html, LEGACY_EXTENSIONS);
        assert_eq!(out, r#"<img src="photo.webp"> <img src='banner.webp'>"#);
    }

    #[test]
    fn rewrites_every_occurrence_and_uppercase_variants() {
        let html = r#"<img src="a.JPG"><img src="b.jpeg"><img src="c.PNG">"#;
        let out = rewrite_content(html, LEGACY_EXTENSIONS);
        assert_eq!(out, r#"<img src="a.webp"><img src="b.webp"><img src="c.webp">"#);
    }

    #[test]
    fn suffix_matched_attributes_are_rewritten_too() {
        // Known false positive of the textual pattern: any attribute whose
        // name ends in `src` shares the matched shape.
        let html = r#"<img data-src="lazy.png">"#;
        let out = rewrite_content(html, LEGACY_EXTENSIONS);
        assert_eq!(out, r#"<img data-src="lazy.webp">"#);
    }

    #[test]
    fn other_attributes_are_left_alone() {
        let html = r#"<div data-foo="x.png" href="pic.jpg">keep x.png</div>"#;
        let out = rewrite_content(html, LEGACY_EXTENSIONS);
        assert_eq!(out, html);
    }

    #[test]
    fn already_converted_and_mixed_case_references_are_untouched() {
        let html = r#"<img src="done.webp"><img src="odd.Jpg">"#;
        assert_eq!(rewrite_content(html, LEGACY_EXTENSIONS), html);
    }

    #[test]
    fn only_top_level_html_files_are_rewritten() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("pages");
        fs::create_dir_all(&nested).unwrap();

        let markup = r#"<img src="a.jpg">"#;
        fs::write(tmp.path().join("index.html"), markup).unwrap();
        fs::write(tmp.path().join("readme.md"), markup).unwrap();
        fs::write(nested.join("inner.html"), markup).unwrap();

        let updated = rewrite_references(tmp.path(), LEGACY_EXTENSIONS).unwrap();

        assert_eq!(updated, vec![tmp.path().join("index.html")]);
        assert_eq!(
            fs::read_to_string(tmp.path().join("index.html")).unwrap(),
            r#"<img src="a.webp">"#
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("readme.md")).unwrap(),
            markup
        );
        assert_eq!(
            fs::read_to_string(nested.join("inner.html")).unwrap(),
            markup
        );
    }

    #[test]
    fn rewrites_multiple_files_in_one_pass() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("index.html"), r#"<img src="a.jpg">"#).unwrap();
        fs::write(tmp.path().join("about.html"), r#"<img src='b.PNG'>"#).unwrap();

        let mut updated = rewrite_references(tmp.path(), LEGACY_EXTENSIONS).unwrap();
        updated.sort();

        assert_eq!(
            updated,
            vec![
                tmp.path().join("about.html"),
                tmp.path().join("index.html"),
            ]
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("index.html")).unwrap(),
            r#"<img src="a.webp">"#
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("about.html")).unwrap(),
            r#"<img src='b.webp'>"#
        );
    }

    #[test]
    fn unchanged_files_keep_their_mtime() {
        let tmp = TempDir::new().unwrap();
        let page = tmp.path().join("about.html");
        fs::write(&page, r#"<img src="done.webp">"#).unwrap();
        let before = fs::metadata(&page).unwrap().modified().unwrap();

        let updated = rewrite_references(tmp.path(), LEGACY_EXTENSIONS).unwrap();

        assert!(updated.is_empty());
        let after = fs::metadata(&page).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn rerunning_after_a_rewrite_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let page = tmp.path().join("index.html");
        fs::write(&page, r#"<img src="hero.jpg">"#).unwrap();

        let first = rewrite_references(tmp.path(), LEGACY_EXTENSIONS).unwrap();
        assert_eq!(first.len(), 1);

        let second = rewrite_references(tmp.path(), LEGACY_EXTENSIONS).unwrap();
        assert!(second.is_empty());
        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            r#"<img src="hero.webp">"#
        );
    }

    #[test]
    fn non_utf8_markup_aborts_with_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.html"), [0xff, 0xfe, 0x00, 0x2e]).unwrap();

        assert!(rewrite_references(tmp.path(), LEGACY_EXTENSIONS).is_err());
    }
}
