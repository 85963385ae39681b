//! Zettelkasten directory scanner
//!
//! Notes are plain files named `<id> <title>.<ext>`, for example
//! `201906121519 Atomic notes.md`. A note cites another one with a wiki link
//! `[[201906121600]]`; an alias after `|` is ignored.

use crate::core::models::Zettel;
use crate::core::visualizer::{GraphVisualizer, VisualizerSettings};
use crate::{debug, info};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a note from its file stem and content
///
/// - id: first whitespace-separated token of the file stem
/// - title: first Markdown `# ` heading, else the rest of the file stem, else the id
/// - links: every `[[target]]` in order of appearance
#[must_use]
pub fn parse_zettel(file_stem: &str, content: &str) -> Zettel {
    let stem = file_stem.trim();
    let (id, rest) = stem
        .split_once(char::is_whitespace)
        .map_or((stem, ""), |(id, rest)| (id, rest.trim()));

    let title = content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|heading| !heading.is_empty())
        .unwrap_or(if rest.is_empty() { id } else { rest });

    let mut zettel = Zettel::new(id, title);
    for link in extract_links(content) {
        zettel.add_link(link);
    }
    zettel
}

/// Extract the targets of all `[[...]]` links
#[must_use]
pub fn extract_links(content: &str) -> Vec<&str> {
    let mut links = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("[[") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("]]") else {
            break;
        };
        let inner = &after[..end];
        // an unclosed `[[` followed later by a link: restart at the inner `[[`
        if let Some(nested) = inner.rfind("[[") {
            rest = &after[nested..];
            continue;
        }
        let target = inner.split('|').next().unwrap_or_default().trim();
        if !target.is_empty() && !target.contains('\n') {
            links.push(target);
        }
        rest = &after[end + 2..];
    }

    links
}

/// Read all notes with the given extension from `dir` (non-recursive)
///
/// Files are read in file name order so graphs are reproducible.
///
/// # Errors
/// Returns an error if the directory or a note cannot be read
pub fn scan_notes_dir<P: AsRef<Path>>(
    dir: P,
    extension: &str,
) -> Result<Vec<Zettel>, Box<dyn Error>> {
    let dir = dir.as_ref();
    let extension = extension.trim_start_matches('.');

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if path.is_file() && matches {
            paths.push(path);
        }
    }
    paths.sort();

    let mut zettels = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            debug!("Skipping note with non UTF-8 name: {}", path.display());
            continue;
        };
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let mut zettel = parse_zettel(stem, &content);
        zettel.path = Some(path.clone());
        zettels.push(zettel);
    }

    info!("Read {} notes from {}", zettels.len(), dir.display());
    Ok(zettels)
}

/// Build a visualizer holding one labeled node per zettel and one edge per citation
#[must_use]
pub fn build_visualizer(
    zettels: &[Zettel],
    name: &str,
    settings: VisualizerSettings,
) -> GraphVisualizer {
    let mut viz = GraphVisualizer::with_settings(name, settings);
    for zettel in zettels {
        viz.add_labeled_node(&zettel.id, &zettel.title);
    }
    for zettel in zettels {
        for link in &zettel.links {
            viz.add_edge(&zettel.id, link);
        }
    }
    viz
}
