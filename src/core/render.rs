//! HTML rendering of citation graph figures
//!
//! The page is a single HTML file: the figure JSON is embedded in an inline
//! script, and Plotly.js is either copied in from a local bundle (the default,
//! so the page works offline) or referenced by URL.

use crate::core::config::{IncludePlotlyJs, RenderConfig};
use crate::core::figure::Figure;
use crate::core::get_version;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const HTML_SUFFIX: &str = ".html";

/// Page template wrapping the figure
#[derive(Template)]
#[template(path = "figure.html")]
struct FigurePage<'a> {
    title: &'a str,
    version: &'a str,
    /// Bundle source when `inline_plotly`, otherwise its URL
    plotly_js: &'a str,
    inline_plotly: bool,
    figure_json: &'a str,
}

/// Renders figures to standalone HTML pages
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    /// Create a renderer using the given settings
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the page as a string
    ///
    /// # Errors
    /// Returns an error if the Plotly.js bundle cannot be read (inline mode),
    /// the figure cannot be serialized or the template fails
    pub fn render(&self, figure: &Figure, title: &str) -> Result<String, Box<dyn Error>> {
        let figure_json = json_script_safe(&figure.to_json()?);
        let plotly_js = match self.config.include_plotlyjs {
            IncludePlotlyJs::Inline => bundle_script_safe(&self.read_bundle()?),
            IncludePlotlyJs::Cdn => self.config.plotly_cdn.clone(),
        };
        let page = FigurePage {
            title,
            version: get_version(),
            plotly_js: &plotly_js,
            inline_plotly: self.config.include_plotlyjs == IncludePlotlyJs::Inline,
            figure_json: &figure_json,
        };
        Ok(page.render()?)
    }

    fn read_bundle(&self) -> Result<String, String> {
        let bundle = &self.config.plotly_js;
        if bundle.is_empty() {
            return Err("No Plotly.js bundle configured (render.plotly_js)".to_string());
        }
        fs::read_to_string(bundle).map_err(|e| {
            format!(
                "Cannot read Plotly.js bundle '{bundle}': {e}. \
                 Download plotly.min.js to that path or set render.include_plotlyjs = \"cdn\""
            )
        })
    }

    /// Render the page and write it to `output_path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written
    pub fn generate(
        &self,
        figure: &Figure,
        title: &str,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let html = self.render(figure, title)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, html)?;
        Ok(())
    }
}

/// Append `.html` unless the path already ends with it
///
/// The check is on the whole path string, so `graph.v2` becomes
/// `graph.v2.html` rather than having its extension replaced.
#[must_use]
pub fn normalize_output_path(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    if raw.to_string_lossy().ends_with(HTML_SUFFIX) {
        return path.to_path_buf();
    }
    let mut with_suffix = raw.to_os_string();
    with_suffix.push(HTML_SUFFIX);
    PathBuf::from(with_suffix)
}

/// Escape every `<` in figure JSON
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same
/// text, so no note title can open or close markup inside the script element.
fn json_script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Keep an inlined bundle from closing the surrounding `<script>` element
fn bundle_script_safe(source: &str) -> String {
    source.replace("</script", "<\\/script")
}

/// Open a file with the system's default browser
///
/// # Errors
/// Returns an error if the launcher process cannot be spawned
pub fn open_in_browser(path: &Path) -> Result<(), std::io::Error> {
    let mut command = browser_command(path);
    command.spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn browser_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::visualizer::GraphVisualizer;

    fn empty_figure() -> Figure {
        GraphVisualizer::new("empty").build_figure(None).unwrap()
    }

    #[test]
    fn test_normalize_appends_suffix() {
        assert_eq!(
            normalize_output_path(Path::new("graph")),
            PathBuf::from("graph.html")
        );
        assert_eq!(
            normalize_output_path(Path::new("out/graph.v2")),
            PathBuf::from("out/graph.v2.html")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_output_path(Path::new("graph"));
        assert_eq!(normalize_output_path(&once), once);
        assert_eq!(
            normalize_output_path(Path::new("graph.html")),
            PathBuf::from("graph.html")
        );
    }

    #[test]
    fn test_json_script_safe_escapes_every_tag_opener() {
        assert_eq!(
            json_script_safe(r#"{"text":"</script>"}"#),
            r#"{"text":"\u003c/script>"}"#
        );
        assert_eq!(
            json_script_safe(r#"{"text":"<!--<script>"}"#),
            r#"{"text":"\u003c!--\u003cscript>"}"#
        );
    }

    #[test]
    fn test_json_script_safe_keeps_valid_json() {
        let escaped = json_script_safe(r#"{"text":"A<br><!--<script>"}"#);
        let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(value["text"], "A<br><!--<script>");
    }

    #[test]
    fn test_bundle_script_safe() {
        assert_eq!(
            bundle_script_safe(r#"var s="</script>";"#),
            r#"var s="<\/script>";"#
        );
    }

    #[test]
    fn test_missing_bundle_is_an_error() {
        let renderer = HtmlRenderer::new(RenderConfig {
            plotly_js: "/nonexistent/zkviz/plotly.min.js".to_string(),
            ..RenderConfig::default()
        });
        let err = renderer.render(&empty_figure(), "t").unwrap_err().to_string();
        assert!(err.contains("include_plotlyjs"));
    }

    #[test]
    fn test_cdn_page_references_url() {
        let renderer = HtmlRenderer::new(RenderConfig {
            include_plotlyjs: IncludePlotlyJs::Cdn,
            ..RenderConfig::default()
        });
        let html = renderer.render(&empty_figure(), "t").unwrap();
        assert!(html.contains("<script src="));
        assert!(html.contains("cdn.plot.ly"));
    }
}
