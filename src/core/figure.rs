//! Plotly figure model
//!
//! These types serialize to the JSON accepted by `Plotly.newPlot`: a list of
//! traces plus a layout. Only the attributes the citation graph uses are
//! modeled.

use serde::Serialize;

/// A complete figure: node trace plus layout with edge annotations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Traces drawn on the plot: the node markers
    pub data: [ScatterTrace; 1],
    /// Canvas layout, including one annotation per edge
    pub layout: FigureLayout,
}

impl Figure {
    /// The node trace
    #[must_use]
    pub const fn nodes(&self) -> &ScatterTrace {
        &self.data[0]
    }

    /// Edge annotations
    #[must_use]
    pub fn edges(&self) -> &[Annotation] {
        &self.layout.annotations
    }

    /// Serialize the figure to Plotly JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails (e.g. a non-finite coordinate)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Scatter trace holding the node markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    /// Trace type, always `scatter`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Node ids in trace order (not rendered, kept for lookups)
    #[serde(skip)]
    pub ids: Vec<String>,
    /// Marker x coordinates
    pub x: Vec<f64>,
    /// Marker y coordinates
    pub y: Vec<f64>,
    /// Hover text for each marker
    pub text: Vec<String>,
    /// Draw mode, always `markers`
    pub mode: &'static str,
    /// Hover shows only the text
    pub hoverinfo: &'static str,
    /// Marker styling and adjacency coloring
    pub marker: Marker,
}

impl ScatterTrace {
    /// Empty marker trace with the given styling
    #[must_use]
    pub const fn markers(marker: Marker) -> Self {
        Self {
            kind: "scatter",
            ids: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            text: Vec::new(),
            mode: "markers",
            hoverinfo: "text",
            marker,
        }
    }

    /// Append a node marker
    pub fn push(&mut self, id: &str, (x, y): (f64, f64), text: String, color: usize) {
        self.ids.push(id.to_string());
        self.x.push(x);
        self.y.push(y);
        self.text.push(text);
        self.marker.color.push(color);
    }

    /// Number of markers
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trace has no markers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Position of the marker for `id`
    #[must_use]
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        let i = self.ids.iter().position(|node| node == id)?;
        Some((self.x[i], self.y[i]))
    }

    /// Color value (adjacency) of the marker for `id`
    #[must_use]
    pub fn color(&self, id: &str) -> Option<usize> {
        let i = self.ids.iter().position(|node| node == id)?;
        self.marker.color.get(i).copied()
    }
}

/// Marker styling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Show the colorbar
    pub showscale: bool,
    /// Plotly colorscale name
    pub colorscale: String,
    /// Reverse the colorscale
    pub reversescale: bool,
    /// Per-marker color value (node adjacency)
    pub color: Vec<usize>,
    /// Marker size, identical for every node
    pub size: f64,
    /// Colorbar settings
    pub colorbar: ColorBar,
    /// Marker outline
    pub line: Line,
}

/// Colorbar next to the plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    /// Thickness in pixels
    pub thickness: f64,
    /// Title text and placement
    pub title: ColorBarTitle,
    /// Horizontal anchor
    pub xanchor: &'static str,
}

/// Colorbar title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBarTitle {
    /// Title text
    pub text: String,
    /// Side of the colorbar the title sits on
    pub side: &'static str,
}

/// Line styling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Line width
    pub width: f64,
}

/// Arrow annotation drawn for one citation
///
/// The tail (`ax`, `ay`) sits on the citing zettel and the head (`x`, `y`)
/// on the cited one; both are in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Tail x coordinate
    pub ax: f64,
    /// Tail y coordinate
    pub ay: f64,
    /// Tail x reference axis
    pub axref: &'static str,
    /// Tail y reference axis
    pub ayref: &'static str,
    /// Head x coordinate
    pub x: f64,
    /// Head y coordinate
    pub y: f64,
    /// Head x reference axis
    pub xref: &'static str,
    /// Head y reference axis
    pub yref: &'static str,
    /// Annotation text, empty for a bare arrow
    pub text: &'static str,
    /// Draw the arrow
    pub showarrow: bool,
    /// Arrow stroke width
    pub arrowwidth: f64,
    /// Arrow stroke color
    pub arrowcolor: String,
    /// Arrowhead style
    pub arrowhead: u8,
    /// Gap between the arrowhead and the head point, in pixels
    pub standoff: f64,
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    /// Page/plot title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Show the legend
    pub showlegend: bool,
    /// Hover mode
    pub hovermode: &'static str,
    /// Plot margins
    pub margin: Margin,
    /// Edge arrows
    pub annotations: Vec<Annotation>,
    /// Horizontal axis
    pub xaxis: Axis,
    /// Vertical axis
    pub yaxis: Axis,
}

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    /// Bottom
    pub b: u32,
    /// Left
    pub l: u32,
    /// Right
    pub r: u32,
    /// Top
    pub t: u32,
}

/// Axis styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Axis {
    /// Show grid lines
    pub showgrid: bool,
    /// Show the zero line
    pub zeroline: bool,
    /// Show tick labels
    pub showticklabels: bool,
}

impl Axis {
    /// Axis without grid, zero line or tick labels
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            showgrid: false,
            zeroline: false,
            showticklabels: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> Marker {
        Marker {
            showscale: true,
            colorscale: "YlGnBu".to_string(),
            reversescale: true,
            color: Vec::new(),
            size: 10.0,
            colorbar: ColorBar {
                thickness: 15.0,
                title: ColorBarTitle {
                    text: "Adjacency".to_string(),
                    side: "right",
                },
                xanchor: "left",
            },
            line: Line { width: 0.3 },
        }
    }

    #[test]
    fn test_trace_lookup() {
        let mut trace = ScatterTrace::markers(marker());
        trace.push("A", (0.5, -0.5), "A".to_string(), 2);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.position("A"), Some((0.5, -0.5)));
        assert_eq!(trace.color("A"), Some(2));
        assert_eq!(trace.position("B"), None);
    }

    #[test]
    fn test_json_uses_plotly_attribute_names() {
        let mut trace = ScatterTrace::markers(marker());
        trace.push("A", (0.0, 1.0), "A<br>Alpha".to_string(), 1);
        let figure = Figure {
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
                annotations: Vec::new(),
                xaxis: Axis::blank(),
                yaxis: Axis::blank(),
            },
        };

        let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "markers");
        assert_eq!(json["data"][0]["marker"]["color"][0], 1);
        assert_eq!(json["data"][0]["marker"]["colorbar"]["title"]["side"], "right");
        assert!(json["data"][0].get("ids").is_none());
        assert!(json["layout"].get("title").is_none());
        assert_eq!(json["layout"]["xaxis"]["showgrid"], false);
    }
}
