//! Integration tests for reading a Zettelkasten directory

use std::fs;
use tempfile::TempDir;
use zettel_viz::config::{IncludePlotlyJs, LayoutConfig, RenderConfig};
use zettel_viz::notes::{build_visualizer, scan_notes_dir};
use zettel_viz::VisualizerSettings;

fn write_note(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("Failed to write note");
}

fn sample_kasten() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_note(
        &dir,
        "201906121519 Atomic notes.md",
        "# Atomic notes\n\nOne idea per note, see [[201906121600]] and [[201906121700|links]].\n",
    );
    write_note(
        &dir,
        "201906121600 Linking.md",
        "# Linking\n\nBack to [[201906121519]].\n",
    );
    write_note(&dir, "201906121700 Links are edges.md", "No heading here.\n");
    write_note(&dir, "201906121800 Orphan.md", "# Orphan\n\nNothing cited.\n");
    write_note(&dir, "README.txt", "[[201906121519]] should be ignored");
    dir
}

#[test]
fn test_scan_reads_only_matching_extension() {
    let dir = sample_kasten();
    let zettels = scan_notes_dir(dir.path(), "md").expect("scan should succeed");

    let ids: Vec<&str> = zettels.iter().map(|z| z.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["201906121519", "201906121600", "201906121700", "201906121800"]
    );
    assert_eq!(zettels[0].title, "Atomic notes");
    assert_eq!(zettels[2].title, "Links are edges");
    assert_eq!(
        zettels[0].links,
        vec!["201906121600".to_string(), "201906121700".to_string()]
    );
    assert!(zettels.iter().all(|z| z.path.is_some()));
}

#[test]
fn test_scan_accepts_dotted_extension() {
    let dir = sample_kasten();
    let zettels = scan_notes_dir(dir.path(), ".txt").expect("scan should succeed");
    assert_eq!(zettels.len(), 1);
    assert_eq!(zettels[0].id, "README");
}

#[test]
fn test_scan_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    assert!(scan_notes_dir(dir.path().join("missing"), "md").is_err());
}

#[test]
fn test_notes_to_rendered_graph() {
    let dir = sample_kasten();
    let zettels = scan_notes_dir(dir.path(), "md").expect("scan should succeed");

    let bundle = dir.path().join("plotly.min.js");
    fs::write(&bundle, "window.Plotly = {};").expect("Failed to write bundle");
    let settings = VisualizerSettings {
        layout: LayoutConfig {
            seed: Some(5),
            ..LayoutConfig::default()
        },
        render: RenderConfig {
            include_plotlyjs: IncludePlotlyJs::Inline,
            plotly_js: bundle.to_string_lossy().into_owned(),
            ..RenderConfig::default()
        },
        ..VisualizerSettings::default()
    };
    let mut viz = build_visualizer(&zettels, "Kasten", settings);

    // 1519 <-> 1600 collapse into one edge; the orphan is isolated
    assert_eq!(viz.graph().edge_count(), 2);
    assert_eq!(viz.graph().isolates(), vec!["201906121800".to_string()]);

    let out = dir.path().join("out").join("kasten");
    let written = viz.render(&out, false).expect("render should succeed");
    assert!(written.ends_with("out/kasten.html"));

    let html = fs::read_to_string(&written).expect("Failed to read output");
    assert!(html.contains("201906121519\\u003cbr>Atomic notes"));
    assert!(html.contains("window.Plotly = {};"));
    assert!(!html.contains("Orphan"));
    assert!(html.contains("<title>Kasten</title>"));
}
