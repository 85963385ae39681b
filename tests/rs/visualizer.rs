//! Integration tests for graph assembly, figure building and rendering

use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use zettel_viz::config::{LayoutConfig, RenderConfig};
use zettel_viz::layout::{Layout, LayoutAlgorithm};
use zettel_viz::{GraphVisualizer, VisualizerSettings};

const FAKE_BUNDLE: &str =
    "/* plotly.js test bundle */ var closing = \"</script>\"; window.Plotly = { newPlot: function () {} };";

fn seeded_settings() -> VisualizerSettings {
    VisualizerSettings {
        layout: LayoutConfig {
            seed: Some(2024),
            ..LayoutConfig::default()
        },
        ..VisualizerSettings::default()
    }
}

fn seeded(name: &str) -> GraphVisualizer {
    GraphVisualizer::with_settings(name, seeded_settings())
}

/// Visualizer whose pages inline a Plotly.js bundle written into `dir`
fn seeded_with_bundle(name: &str, dir: &TempDir) -> GraphVisualizer {
    let bundle = dir.path().join("plotly.min.js");
    fs::write(&bundle, FAKE_BUNDLE).expect("Failed to write bundle");
    let settings = VisualizerSettings {
        render: RenderConfig {
            plotly_js: bundle.to_string_lossy().into_owned(),
            ..RenderConfig::default()
        },
        ..seeded_settings()
    };
    GraphVisualizer::with_settings(name, settings)
}

#[test]
fn test_node_set_is_every_referenced_id() {
    let mut viz = seeded("ids");
    viz.add_node("A");
    viz.add_node("A");
    viz.add_edge("B", "C");
    viz.add_edge("A", "D");
    viz.add_node("E");

    let ids: HashSet<&str> = viz.graph().node_ids().collect();
    let expected: HashSet<&str> = ["A", "B", "C", "D", "E"].into_iter().collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_three_nodes_one_edge_scenario() {
    let mut viz = seeded("scenario");
    viz.add_node("A");
    viz.add_node("B");
    viz.add_node("C");
    viz.add_edge("A", "B");

    let figure = viz.build_figure(None).expect("figure should build");

    assert_eq!(figure.nodes().len(), 2);
    assert!(figure.nodes().position("C").is_none());
    assert_eq!(figure.edges().len(), 1);
}

#[test]
fn test_colors_are_distinct_neighbor_counts() {
    let mut viz = seeded("degrees");
    viz.add_edge("hub", "a");
    viz.add_edge("hub", "b");
    viz.add_edge("hub", "c");
    viz.add_edge("a", "hub");
    viz.add_edge("a", "b");

    let figure = viz.build_figure(None).expect("figure should build");
    let trace = figure.nodes();

    assert_eq!(trace.color("hub"), Some(3));
    assert_eq!(trace.color("a"), Some(2));
    assert_eq!(trace.color("b"), Some(2));
    assert_eq!(trace.color("c"), Some(1));
    for id in &trace.ids {
        assert_eq!(trace.color(id), Some(viz.graph().degree(id)));
    }
}

#[test]
fn test_every_edge_has_one_arrow_between_its_endpoints() {
    let mut viz = seeded("arrows");
    let citations = [("1", "2"), ("2", "3"), ("3", "1"), ("4", "1"), ("4", "2")];
    for (source, target) in citations {
        viz.add_edge(source, target);
    }

    let figure = viz.build_figure(None).expect("figure should build");
    let trace = figure.nodes();

    assert_eq!(figure.edges().len(), citations.len());
    for ((source, target), arrow) in citations.iter().zip(figure.edges()) {
        assert_eq!(trace.position(source), Some((arrow.ax, arrow.ay)));
        assert_eq!(trace.position(target), Some((arrow.x, arrow.y)));
        assert_eq!(arrow.arrowhead, 2);
        assert_eq!(arrow.arrowcolor, "#666");
    }
}

#[test]
fn test_supplied_layout_positions_markers() {
    let mut viz = seeded("pos");
    viz.add_edge("A", "B");
    viz.add_node("lonely");
    let layout: Layout = [("A", (-3.0, 1.0)), ("B", (4.0, 0.5))].into_iter().collect();

    let figure = viz.build_figure(Some(&layout)).expect("figure should build");

    assert_eq!(figure.nodes().position("A"), Some((-3.0, 1.0)));
    assert_eq!(figure.nodes().position("B"), Some((4.0, 0.5)));
}

#[test]
fn test_empty_graph_builds_empty_figure() {
    let mut viz = seeded("empty");
    viz.add_node("only");

    let figure = viz.build_figure(None).expect("figure should build");
    assert!(figure.nodes().is_empty());
    assert!(figure.edges().is_empty());
}

#[test]
fn test_large_graph_uses_random_layout() {
    let mut viz = seeded("large");
    for i in 0..7_500 {
        viz.add_edge(&format!("s{i}"), &format!("t{i}"));
    }
    let node_count = viz.graph().node_count();
    assert_eq!(node_count, 15_000);
    assert_eq!(
        LayoutAlgorithm::select(node_count, &viz.settings().layout),
        LayoutAlgorithm::Random
    );

    let figure = viz.build_figure(None).expect("figure should build");
    let trace = figure.nodes();
    assert_eq!(trace.len(), 15_000);
    // random positions live in the unit square; force-directed ones are centered on the origin
    assert!(trace.x.iter().chain(&trace.y).all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn test_small_graph_uses_force_directed_layout() {
    let mut viz = seeded("small");
    for i in 1..20 {
        viz.add_edge(&format!("n{i}"), &format!("n{}", i - 1));
    }

    let figure = viz.build_figure(None).expect("figure should build");
    let trace = figure.nodes();
    let max = trace
        .x
        .iter()
        .chain(&trace.y)
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    assert!((max - 1.0).abs() < 1e-9, "force layout is scaled to [-1, 1]");
    assert!(trace.x.iter().any(|&x| x < 0.0));
}

#[test]
fn test_render_normalizes_html_suffix() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut first = seeded_with_bundle("Suffix", &temp_dir);
    first.add_edge("A", "B");
    let bare = first
        .render(&temp_dir.path().join("graph"), false)
        .expect("render should succeed");

    let mut second = seeded_with_bundle("Suffix", &temp_dir);
    second.add_edge("A", "B");
    let explicit = second
        .render(&temp_dir.path().join("graph.html"), false)
        .expect("render should succeed");

    assert_eq!(bare, explicit);
    assert_eq!(bare.file_name().and_then(|n| n.to_str()), Some("graph.html"));
}

#[test]
fn test_render_writes_standalone_page() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut viz = seeded_with_bundle("My <Notes>", &temp_dir);
    viz.add_labeled_node("A", "</script> <!--<script> title");
    viz.add_edge("A", "B");

    let path = viz
        .render(&temp_dir.path().join("nested/dir/out"), false)
        .expect("render should succeed");
    let html = fs::read_to_string(&path).expect("Failed to read output");

    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("My &lt;Notes&gt;"));
    assert!(html.contains("\\u003c/script> \\u003c!--\\u003cscript> title"));
    assert!(!html.contains("<!--"));
    assert!(html.contains("\"annotations\":[{"));
    assert_eq!(html.matches("</script>").count(), 2);
}

#[test]
fn test_render_inlines_plotly_bundle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut viz = seeded_with_bundle("Offline", &temp_dir);
    viz.add_edge("A", "B");

    let path = viz
        .render(&temp_dir.path().join("offline"), false)
        .expect("render should succeed");
    let html = fs::read_to_string(&path).expect("Failed to read output");

    assert!(!html.contains("<script src="), "page must not load scripts over the network");
    assert!(html.contains("/* plotly.js test bundle */"));
    assert!(html.contains("window.Plotly = { newPlot: function () {} };"));
    assert!(html.contains(r#"var closing = "<\/script>";"#));
    let bundle_at = html.find("plotly.js test bundle").expect("bundle inlined");
    let plot_at = html.find("Plotly.newPlot(").expect("plot call present");
    assert!(bundle_at < plot_at, "bundle must load before the plot call");
}

#[test]
fn test_render_without_bundle_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut settings = seeded_settings();
    settings.render.plotly_js = temp_dir
        .path()
        .join("missing.js")
        .to_string_lossy()
        .into_owned();
    let mut viz = GraphVisualizer::with_settings("NoBundle", settings);
    viz.add_edge("A", "B");

    let output = temp_dir.path().join("graph");
    assert!(viz.render(&output, false).is_err());
    assert!(!temp_dir.path().join("graph.html").exists());
}

#[test]
fn test_render_reports_write_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocked = temp_dir.path().join("out.html");
    fs::create_dir(&blocked).expect("Failed to create blocking dir");

    let mut viz = seeded_with_bundle("Blocked", &temp_dir);
    viz.add_edge("A", "B");

    let result = viz.render(&temp_dir.path().join("out"), false);
    assert!(result.is_err());
    assert!(blocked.is_dir());
    let leftovers = fs::read_dir(&blocked)
        .expect("Failed to read dir")
        .count();
    assert_eq!(leftovers, 0);
}
