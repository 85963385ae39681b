//! Citation graph visualizer
//!
//! Collects zettels and citations, then turns them into a Plotly figure:
//! isolated notes are dropped, the rest are laid out, colored by how many
//! notes they are connected to, and every citation becomes an arrow.

use crate::core::config::{Config, LayoutConfig, RenderConfig, StyleConfig};
use crate::core::figure::{
    Annotation, Axis, ColorBar, ColorBarTitle, Figure, FigureLayout, Line, Margin, Marker,
    ScatterTrace,
};
use crate::core::layout::{Layout, LayoutAlgorithm};
use crate::core::models::ZettelGraph;
use crate::core::render::{normalize_output_path, open_in_browser, HtmlRenderer};
use crate::{debug, info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Default display name
pub const DEFAULT_NAME: &str = "Zettelkasten";

/// Tunables used when building and rendering figures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualizerSettings {
    /// Layout selection and simulation settings
    pub layout: LayoutConfig,
    /// Marker and arrow styling
    pub style: StyleConfig,
    /// HTML output settings
    pub render: RenderConfig,
}

impl From<&Config> for VisualizerSettings {
    fn from(config: &Config) -> Self {
        Self {
            layout: config.layout.clone(),
            style: config.style.clone(),
            render: config.render.clone(),
        }
    }
}

/// Builds and renders the citation graph of a Zettelkasten
#[derive(Debug, Clone)]
pub struct GraphVisualizer {
    name: String,
    graph: ZettelGraph,
    settings: VisualizerSettings,
}

impl Default for GraphVisualizer {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl GraphVisualizer {
    /// Create a visualizer with default settings
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, VisualizerSettings::default())
    }

    /// Create a visualizer with explicit settings
    #[must_use]
    pub fn with_settings(name: impl Into<String>, settings: VisualizerSettings) -> Self {
        Self {
            name: name.into(),
            graph: ZettelGraph::new(),
            settings,
        }
    }

    /// Display name, used as the page title
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }

    /// Underlying graph
    #[must_use]
    pub const fn graph(&self) -> &ZettelGraph {
        &self.graph
    }

    /// Add a zettel. Adding the same id twice is a no-op.
    pub fn add_node(&mut self, id: &str) {
        self.graph.add_node(id);
    }

    /// Add a zettel with a label shown in its hover text
    pub fn add_labeled_node(&mut self, id: &str, label: &str) {
        self.graph.add_labeled_node(id, label);
    }

    /// Add a citation from `source` to `target`
    ///
    /// Zettels that were never added are created on the fly, so citations to
    /// notes outside the scanned set still show up in the graph.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        for id in [source, target] {
            if !self.graph.contains(id) {
                debug!("Citation {source} -> {target} creates zettel {id}");
            }
        }
        self.graph.add_edge(source, target);
    }

    /// Build the figure
    ///
    /// Isolated zettels are removed from the graph first. When `pos` is
    /// `None` a layout is computed with the algorithm selected for the
    /// remaining node count.
    ///
    /// # Errors
    /// Returns an error if a supplied layout has no position for a zettel
    pub fn build_figure(&mut self, pos: Option<&Layout>) -> Result<Figure, String> {
        let removed = self.graph.remove_isolates();
        if !removed.is_empty() {
            debug!("Removed {} isolated zettels", removed.len());
        }

        let computed;
        let layout = if let Some(layout) = pos {
            layout
        } else {
            let algorithm = LayoutAlgorithm::select(self.graph.node_count(), &self.settings.layout);
            info!(
                "Computing {algorithm} layout for {} zettels and {} citations",
                self.graph.node_count(),
                self.graph.edge_count()
            );
            computed = algorithm.compute(&self.graph, &self.settings.layout);
            &computed
        };

        let position = |id: &str| {
            layout
                .get(id)
                .ok_or_else(|| format!("No position for zettel '{id}'"))
        };

        let mut trace = ScatterTrace::markers(self.marker());
        for node in self.graph.nodes() {
            let text = node
                .label
                .as_deref()
                .map_or_else(|| node.id.clone(), |label| format!("{}<br>{label}", node.id));
            trace.push(
                &node.id,
                position(&node.id)?,
                text,
                self.graph.degree(&node.id),
            );
        }

        let mut annotations = Vec::with_capacity(self.graph.edge_count());
        for (source, target) in self.graph.edges() {
            annotations.push(self.arrow(position(source)?, position(target)?));
        }

        if trace.is_empty() {
            warn!("'{}' has no connected zettels; the figure is empty", self.name);
        }

        Ok(Figure {
            data: [trace],
            layout: FigureLayout {
                title: None,
                showlegend: false,
                hovermode: "closest",
                margin: Margin {
                    b: 20,
                    l: 5,
                    r: 5,
                    t: 40,
                },
                annotations,
                xaxis: Axis::blank(),
                yaxis: Axis::blank(),
            },
        })
    }

    /// Build the figure and write it as HTML
    ///
    /// `.html` is appended to `output` when missing. When `open` is set the
    /// file is opened in the default browser; a failed launch is logged, not
    /// returned.
    ///
    /// # Returns
    /// The path the page was written to
    ///
    /// # Errors
    /// Returns an error if the figure cannot be built or the file cannot be written
    pub fn render(&mut self, output: &Path, open: bool) -> Result<PathBuf, Box<dyn Error>> {
        let figure = self.build_figure(None)?;
        let output_path = normalize_output_path(output);

        HtmlRenderer::new(self.settings.render.clone()).generate(
            &figure,
            &self.name,
            &output_path,
        )?;
        info!("Graph written to {}", output_path.display());

        if open {
            if let Err(e) = open_in_browser(&output_path) {
                warn!("Could not open {} in a browser: {e}", output_path.display());
            }
        }

        Ok(output_path)
    }

    fn marker(&self) -> Marker {
        let style = &self.settings.style;
        Marker {
            showscale: true,
            colorscale: style.colorscale.clone(),
            reversescale: style.reverse_scale,
            color: Vec::with_capacity(self.graph.node_count()),
            size: style.node_size,
            colorbar: ColorBar {
                thickness: style.colorbar_thickness,
                title: ColorBarTitle {
                    text: style.colorbar_title.clone(),
                    side: "right",
                },
                xanchor: "left",
            },
            line: Line {
                width: style.marker_line_width,
            },
        }
    }

    fn arrow(&self, (ax, ay): (f64, f64), (x, y): (f64, f64)) -> Annotation {
        let style = &self.settings.style;
        Annotation {
            ax,
            ay,
            axref: "x",
            ayref: "y",
            x,
            y,
            xref: "x",
            yref: "y",
            text: "",
            showarrow: true,
            arrowwidth: style.arrow_width,
            arrowcolor: style.arrow_color.clone(),
            arrowhead: style.arrow_head,
            standoff: style.arrow_standoff,
        }
    }
}
