//! Render command handler
//!
//! Scans a notes directory, builds the citation graph and writes it as an
//! interactive HTML plot.

use std::path::{Path, PathBuf};
use zettel_viz::config::Config;
use zettel_viz::notes::{build_visualizer, scan_notes_dir};
use zettel_viz::{error, info, verbose, VisualizerSettings};

/// Options of a single render run
pub struct RenderArgs<'a> {
    /// Explicit output path, if any
    pub output: Option<&'a Path>,
    /// Graph name
    pub name: &'a str,
}

/// Run the render command, exiting with status 1 on failure
pub fn run(args: &RenderArgs, config: &Config) {
    match render(args, config) {
        Ok(path) => println!("✓ Graph rendered: {}", path.display()),
        Err(e) => {
            error!("Render failed: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn render(args: &RenderArgs, config: &Config) -> Result<PathBuf, String> {
    if config.paths.notes_dir.is_empty() {
        return Err(
            "No notes directory given. Pass one or set it with `zkviz config set notes_dir <DIR>`"
                .to_string(),
        );
    }
    let notes_dir = PathBuf::from(&config.paths.notes_dir);

    let zettels = scan_notes_dir(&notes_dir, &config.render.note_extension)
        .map_err(|e| format!("Failed to read notes from {}: {e}", notes_dir.display()))?;
    let citations: usize = zettels.iter().map(|z| z.links.len()).sum();
    verbose!("Read {} notes with {citations} citations", zettels.len());

    let mut viz = build_visualizer(&zettels, args.name, VisualizerSettings::from(config));
    let isolated = viz.graph().isolates().len();

    let output = args
        .output
        .map_or_else(|| default_output_path(config, args.name), Path::to_path_buf);

    let written = viz
        .render(&output, config.render.open_browser)
        .map_err(|e| format!("Failed to render {}: {e}", output.display()))?;
    info!("Render complete: {}", written.display());

    println!("\n=== Summary ===");
    println!("Notes: {}", zettels.len());
    println!("Zettels plotted: {}", viz.graph().node_count());
    println!("Citations drawn: {}", viz.graph().edge_count());
    println!("Isolated zettels hidden: {isolated}");

    Ok(written)
}

/// `<output_dir>/<name>.html`, with path separators in the name replaced
fn default_output_path(config: &Config, name: &str) -> PathBuf {
    let file_name: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let dir = if config.paths.output_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.output_dir)
    };
    dir.join(format!("{file_name}.html"))
}
