//! Configuration module for `zkviz`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the zkviz config directory in path-like values
const DIR_VARIABLE: &str = "$ZKVIZ";

/// File name of the Plotly.js bundle in the zkviz config directory
const PLOTLY_BUNDLE: &str = "plotly.min.js";

/// Plotly.js release referenced by `cdn` pages
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of force-directed simulation steps
    pub iterations: usize,
    /// Graphs with at least this many nodes use the random layout
    pub random_threshold: usize,
    /// Seed for the layout's random number generator (random when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            random_threshold: 10_000,
            seed: None,
        }
    }
}

/// Figure style configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Marker size in pixels, identical for every node
    pub node_size: f64,
    /// Plotly colorscale name used for node adjacency
    pub colorscale: String,
    /// Reverse the colorscale so well-connected nodes are dark
    pub reverse_scale: bool,
    /// Title of the adjacency colorbar
    pub colorbar_title: String,
    /// Colorbar thickness in pixels
    pub colorbar_thickness: f64,
    /// Width of the marker outline
    pub marker_line_width: f64,
    /// Arrow stroke width
    pub arrow_width: f64,
    /// Arrow stroke color
    pub arrow_color: String,
    /// Plotly arrowhead style (0-8)
    pub arrow_head: u8,
    /// Gap in pixels between the arrowhead and the target marker center
    pub arrow_standoff: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_size: 10.0,
            colorscale: "YlGnBu".to_string(),
            reverse_scale: true,
            colorbar_title: "Adjacency".to_string(),
            colorbar_thickness: 15.0,
            marker_line_width: 0.3,
            arrow_width: 1.0,
            arrow_color: "#666".to_string(),
            arrow_head: 2,
            arrow_standoff: 5.0,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Default Zettelkasten directory
    #[serde(default)]
    pub notes_dir: String,
    /// Directory for rendered graphs
    #[serde(default)]
    pub output_dir: String,
}

/// How the page gets Plotly.js
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludePlotlyJs {
    /// Copy the local bundle into the page so it works offline
    #[default]
    Inline,
    /// Reference the bundle by URL
    Cdn,
}

impl FromStr for IncludePlotlyJs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "cdn" => Ok(Self::Cdn),
            other => Err(format!("expected 'inline' or 'cdn', got '{other}'")),
        }
    }
}

impl fmt::Display for IncludePlotlyJs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::Cdn => write!(f, "cdn"),
        }
    }
}

/// HTML rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether Plotly.js is inlined into the page or loaded from `plotly_cdn`
    pub include_plotlyjs: IncludePlotlyJs,
    /// Local Plotly.js bundle copied into inline pages
    pub plotly_js: String,
    /// Plotly.js URL used by `cdn` pages
    pub plotly_cdn: String,
    /// Open rendered graphs in the default browser
    pub open_browser: bool,
    /// Extension of note files in the notes directory
    pub note_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_plotlyjs: IncludePlotlyJs::Inline,
            plotly_js: Config::get_zkviz_dir()
                .join(PLOTLY_BUNDLE)
                .to_string_lossy()
                .into_owned(),
            plotly_cdn: PLOTLY_CDN.to_string(),
            open_browser: false,
            note_extension: "md".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Figure style settings
    #[serde(default)]
    pub style: StyleConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override notes directory
    pub notes_dir: Option<String>,
    /// Override output directory
    pub output_dir: Option<String>,
    /// Override force-directed iteration count
    pub iterations: Option<usize>,
    /// Override random layout threshold
    pub random_threshold: Option<usize>,
    /// Override layout seed
    pub seed: Option<u64>,
    /// Override browser opening
    pub open_browser: Option<bool>,
}

impl Config {
    /// Get the `$ZKVIZ` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/zkviz`
    /// - macOS: `~/Library/Application Support/zkviz`
    /// - Windows: `%APPDATA%\zkviz`
    #[must_use]
    pub fn get_zkviz_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zkviz")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in; numeric sections already fall back to their serde defaults.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.notes_dir.is_empty() && !defaults.paths.notes_dir.is_empty() {
            self.paths.notes_dir.clone_from(&defaults.paths.notes_dir);
            changed = true;
        }
        if self.paths.output_dir.is_empty() && !defaults.paths.output_dir.is_empty() {
            self.paths.output_dir.clone_from(&defaults.paths.output_dir);
            changed = true;
        }

        if self.render.plotly_js.is_empty() && !defaults.render.plotly_js.is_empty() {
            self.render.plotly_js.clone_from(&defaults.render.plotly_js);
            changed = true;
        }
        if self.render.plotly_cdn.is_empty() && !defaults.render.plotly_cdn.is_empty() {
            self.render.plotly_cdn.clone_from(&defaults.render.plotly_cdn);
            changed = true;
        }
        if self.render.note_extension.is_empty() && !defaults.render.note_extension.is_empty() {
            self.render
                .note_extension
                .clone_from(&defaults.render.note_extension);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file itself is
    /// not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(notes_dir) = &overrides.notes_dir {
            self.paths.notes_dir.clone_from(notes_dir);
        }
        if let Some(output_dir) = &overrides.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }

        if let Some(iterations) = overrides.iterations {
            self.layout.iterations = iterations;
        }
        if let Some(threshold) = overrides.random_threshold {
            self.layout.random_threshold = threshold;
        }
        if let Some(seed) = overrides.seed {
            self.layout.seed = Some(seed);
        }

        if let Some(open) = overrides.open_browser {
            self.render.open_browser = open;
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_zkviz_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ZKVIZ` in a string to the zkviz config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let zkviz_dir = Self::get_zkviz_dir();
            value.replace(DIR_VARIABLE, zkviz_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$ZKVIZ` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.notes_dir = Self::expand_variables(&config.paths.notes_dir);
        config.paths.output_dir = Self::expand_variables(&config.paths.output_dir);
        config.render.plotly_js = Self::expand_variables(&config.render.plotly_js);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists it is loaded, missing fields are merged
    ///   from defaults and the updated config is saved.
    /// - On first run the config directory and file are created from defaults.
    ///
    /// Falls back to defaults if any error occurs while loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `iterations`,
    /// `random_threshold`, `seed`, `node_size`, `colorscale`, `reverse_scale`,
    /// `colorbar_title`, `colorbar_thickness`, `marker_line_width`,
    /// `arrow_width`, `arrow_color`, `arrow_head`, `arrow_standoff`,
    /// `notes_dir`, `output_dir`, `include_plotlyjs`, `plotly_js`,
    /// `plotly_cdn`, `open_browser`, `note_extension`. Dashes may be used
    /// instead of underscores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match normalize_key(key).as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "iterations" => self.layout.iterations.to_string(),
            "random_threshold" => self.layout.random_threshold.to_string(),
            "seed" => self
                .layout
                .seed
                .map_or_else(String::new, |seed| seed.to_string()),
            "node_size" => self.style.node_size.to_string(),
            "colorscale" => self.style.colorscale.clone(),
            "reverse_scale" => self.style.reverse_scale.to_string(),
            "colorbar_title" => self.style.colorbar_title.clone(),
            "colorbar_thickness" => self.style.colorbar_thickness.to_string(),
            "marker_line_width" => self.style.marker_line_width.to_string(),
            "arrow_width" => self.style.arrow_width.to_string(),
            "arrow_color" => self.style.arrow_color.clone(),
            "arrow_head" => self.style.arrow_head.to_string(),
            "arrow_standoff" => self.style.arrow_standoff.to_string(),
            "notes_dir" => self.paths.notes_dir.clone(),
            "output_dir" => self.paths.output_dir.clone(),
            "include_plotlyjs" => self.render.include_plotlyjs.to_string(),
            "plotly_js" => self.render.plotly_js.clone(),
            "plotly_cdn" => self.render.plotly_cdn.clone(),
            "open_browser" => self.render.open_browser.to_string(),
            "note_extension" => self.render.note_extension.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed for that key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_value(key, value)?,
            "iterations" => self.layout.iterations = parse_value(key, value)?,
            "random_threshold" => self.layout.random_threshold = parse_value(key, value)?,
            "seed" => {
                self.layout.seed = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_value(key, value)?)
                };
            }
            "node_size" => self.style.node_size = parse_value(key, value)?,
            "colorscale" => self.style.colorscale = value.to_string(),
            "reverse_scale" => self.style.reverse_scale = parse_value(key, value)?,
            "colorbar_title" => self.style.colorbar_title = value.to_string(),
            "colorbar_thickness" => self.style.colorbar_thickness = parse_value(key, value)?,
            "marker_line_width" => self.style.marker_line_width = parse_value(key, value)?,
            "arrow_width" => self.style.arrow_width = parse_value(key, value)?,
            "arrow_color" => self.style.arrow_color = value.to_string(),
            "arrow_head" => self.style.arrow_head = parse_value(key, value)?,
            "arrow_standoff" => self.style.arrow_standoff = parse_value(key, value)?,
            "notes_dir" => self.paths.notes_dir = value.to_string(),
            "output_dir" => self.paths.output_dir = value.to_string(),
            "include_plotlyjs" => self.render.include_plotlyjs = parse_value(key, value)?,
            "plotly_js" => self.render.plotly_js = Self::expand_variables(value),
            "plotly_cdn" => self.render.plotly_cdn = value.to_string(),
            "open_browser" => self.render.open_browser = parse_value(key, value)?,
            "note_extension" => {
                self.render.note_extension = value.trim_start_matches('.').to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "iterations" => self.layout.iterations = defaults.layout.iterations,
            "random_threshold" => self.layout.random_threshold = defaults.layout.random_threshold,
            "seed" => self.layout.seed = defaults.layout.seed,
            "node_size" => self.style.node_size = defaults.style.node_size,
            "colorscale" => self.style.colorscale.clone_from(&defaults.style.colorscale),
            "reverse_scale" => self.style.reverse_scale = defaults.style.reverse_scale,
            "colorbar_title" => self
                .style
                .colorbar_title
                .clone_from(&defaults.style.colorbar_title),
            "colorbar_thickness" => {
                self.style.colorbar_thickness = defaults.style.colorbar_thickness;
            }
            "marker_line_width" => self.style.marker_line_width = defaults.style.marker_line_width,
            "arrow_width" => self.style.arrow_width = defaults.style.arrow_width,
            "arrow_color" => self.style.arrow_color.clone_from(&defaults.style.arrow_color),
            "arrow_head" => self.style.arrow_head = defaults.style.arrow_head,
            "arrow_standoff" => self.style.arrow_standoff = defaults.style.arrow_standoff,
            "notes_dir" => self.paths.notes_dir.clone_from(&defaults.paths.notes_dir),
            "output_dir" => self.paths.output_dir.clone_from(&defaults.paths.output_dir),
            "include_plotlyjs" => self.render.include_plotlyjs = defaults.render.include_plotlyjs,
            "plotly_js" => self.render.plotly_js.clone_from(&defaults.render.plotly_js),
            "plotly_cdn" => self.render.plotly_cdn.clone_from(&defaults.render.plotly_cdn),
            "open_browser" => self.render.open_browser = defaults.render.open_browser,
            "note_extension" => self
                .render
                .note_extension
                .clone_from(&defaults.render.note_extension),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().replace('-', "_").to_ascii_lowercase()
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[layout]")?;
        writeln!(f, "  iterations = {}", self.layout.iterations)?;
        writeln!(f, "  random_threshold = {}", self.layout.random_threshold)?;
        match self.layout.seed {
            Some(seed) => writeln!(f, "  seed = {seed}")?,
            None => writeln!(f, "  seed = (random)")?,
        }

        writeln!(f, "\n[style]")?;
        writeln!(f, "  node_size = {}", self.style.node_size)?;
        writeln!(f, "  colorscale = \"{}\"", self.style.colorscale)?;
        writeln!(f, "  reverse_scale = {}", self.style.reverse_scale)?;
        writeln!(f, "  colorbar_title = \"{}\"", self.style.colorbar_title)?;
        writeln!(f, "  colorbar_thickness = {}", self.style.colorbar_thickness)?;
        writeln!(f, "  marker_line_width = {}", self.style.marker_line_width)?;
        writeln!(f, "  arrow_width = {}", self.style.arrow_width)?;
        writeln!(f, "  arrow_color = \"{}\"", self.style.arrow_color)?;
        writeln!(f, "  arrow_head = {}", self.style.arrow_head)?;
        writeln!(f, "  arrow_standoff = {}", self.style.arrow_standoff)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  notes_dir = \"{}\"", self.paths.notes_dir)?;
        writeln!(f, "  output_dir = \"{}\"", self.paths.output_dir)?;

        writeln!(f, "\n[render]")?;
        writeln!(f, "  include_plotlyjs = \"{}\"", self.render.include_plotlyjs)?;
        writeln!(f, "  plotly_js = \"{}\"", self.render.plotly_js)?;
        writeln!(f, "  plotly_cdn = \"{}\"", self.render.plotly_cdn)?;
        writeln!(f, "  open_browser = {}", self.render.open_browser)?;
        writeln!(f, "  note_extension = \"{}\"", self.render.note_extension)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("random-threshold"), "random_threshold");
        assert_eq!(normalize_key(" Output_Dir "), "output_dir");
    }

    #[test]
    fn test_set_rejects_bad_numbers() {
        let mut config = Config::from_defaults();
        let err = config.set("iterations", "many").unwrap_err();
        assert!(err.contains("iterations"));
        assert!(config.set("arrow_head", "300").is_err());
    }

    #[test]
    fn test_seed_can_be_cleared() {
        let mut config = Config::from_defaults();
        config.set("seed", "42").unwrap();
        assert_eq!(config.layout.seed, Some(42));
        config.set("seed", "").unwrap();
        assert_eq!(config.layout.seed, None);
        assert_eq!(config.get("seed"), Some(String::new()));
    }

    #[test]
    fn test_style_widths_round_trip_through_get_set() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();

        config.set("colorbar-thickness", "22.5").unwrap();
        config.set("marker_line_width", "1").unwrap();
        assert_eq!(config.get("colorbar_thickness"), Some("22.5".to_string()));
        assert_eq!(config.get("marker-line-width"), Some("1".to_string()));
        assert!(config.set("marker_line_width", "thin").is_err());

        let listing = config.to_string();
        assert!(listing.contains("colorbar_thickness = 22.5"));
        assert!(listing.contains("marker_line_width = 1"));

        config.unset("colorbar_thickness", &defaults).unwrap();
        config.unset("marker_line_width", &defaults).unwrap();
        assert_eq!(config.style, defaults.style);
    }

    #[test]
    fn test_include_plotlyjs_parsing() {
        let mut config = Config::from_defaults();
        assert_eq!(config.render.include_plotlyjs, IncludePlotlyJs::Inline);

        config.set("include-plotlyjs", "CDN").unwrap();
        assert_eq!(config.render.include_plotlyjs, IncludePlotlyJs::Cdn);
        assert_eq!(config.get("include_plotlyjs"), Some("cdn".to_string()));
        assert!(config.set("include_plotlyjs", "embedded").is_err());
    }

    #[test]
    fn test_note_extension_drops_leading_dot() {
        let mut config = Config::from_defaults();
        config.set("note-extension", ".txt").unwrap();
        assert_eq!(config.render.note_extension, "txt");
    }
}
