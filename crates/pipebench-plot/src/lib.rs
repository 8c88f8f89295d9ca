//! Static chart rendering for the macro × pipe result matrix.
//!
//! Two renderers, both consuming the same `(pipes, macros, results, limit)`
//! tuple: a 3D surface of the full grid and a 2D line graph of the
//! transposed view. Output backend is chosen by file extension (`.svg`
//! vector, `.png` bitmap).

use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod colormap;
pub mod line;
pub mod surface;

pub use colormap::ColorMap;
pub use line::render_lines;
pub use surface::render_surface;

/// Errors raised while rendering or loading chart style.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported image format `{0}` (use .svg or .png)")]
    UnsupportedFormat(String),
    #[error("invalid color `{0}` (expected #rrggbb)")]
    InvalidColor(String),
    #[error("{0}")]
    Shape(String),
    #[error("failed to read style file {path}: {source}")]
    StyleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse style file {path}: {source}")]
    StyleParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("render failed: {0}")]
    Backend(String),
}

/// Chart style loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Width of the drawing area in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height of the drawing area in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Line width for 2D series, in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: u32,
    /// Marker radius for 2D series, in pixels.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    /// Background color in hex form (`#rrggbb`).
    #[serde(default = "default_background")]
    pub background: String,
    /// Colormap for the surface chart.
    #[serde(default)]
    pub colormap: ColorMap,
    /// Base font size for axis labels and ticks.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_width() -> u32 {
    1200
}
fn default_height() -> u32 {
    800
}
fn default_line_width() -> u32 {
    2
}
fn default_marker_size() -> u32 {
    4
}
fn default_background() -> String {
    "#ffffff".to_string()
}
fn default_font_size() -> u32 {
    16
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            line_width: default_line_width(),
            marker_size: default_marker_size(),
            background: default_background(),
            colormap: ColorMap::default(),
            font_size: default_font_size(),
        }
    }
}

/// Load a chart style from a YAML file.
pub fn load_style(path: &Path) -> Result<PlotStyle, PlotError> {
    let text = fs::read_to_string(path).map_err(|source| PlotError::StyleIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| PlotError::StyleParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a `#rrggbb` color string.
pub(crate) fn parse_color(hex: &str) -> Result<RGBColor, PlotError> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || hex.len() != digits.len() + 1 {
        return Err(PlotError::InvalidColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| PlotError::InvalidColor(hex.to_string()))
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Output backend selected from the target path extension.
pub(crate) enum Backend {
    Svg,
    Png,
}

pub(crate) fn backend_for(path: &Path) -> Result<Backend, PlotError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => Ok(Backend::Svg),
        Some("png") => Ok(Backend::Png),
        other => Err(PlotError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

pub(crate) fn backend_err<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Tick label for a macro-index axis position; blank between categories.
pub(crate) fn macro_tick(macros: &[&str], pos: f64) -> String {
    let j = pos.round();
    if j < 0.0 || (pos - j).abs() > 1e-6 {
        return String::new();
    }
    macros
        .get(j as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Validate the `(pipes, macros, results)` tuple shared by both renderers.
pub(crate) fn check_shape(
    pipes: &[u32],
    macros: &[&str],
    results: &[Vec<f64>],
) -> Result<(), PlotError> {
    if pipes.is_empty() || macros.is_empty() {
        return Err(PlotError::Shape("axes must be non-empty".to_string()));
    }
    if results.len() != macros.len() {
        return Err(PlotError::Shape(format!(
            "result rows ({}) must match macro count ({})",
            results.len(),
            macros.len()
        )));
    }
    for (i, row) in results.iter().enumerate() {
        if row.len() != pipes.len() {
            return Err(PlotError::Shape(format!(
                "result row {} length ({}) must match pipe count ({})",
                i,
                row.len(),
                pipes.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_defaults() {
        let style = PlotStyle::default();
        assert_eq!(style.width, 1200);
        assert_eq!(style.height, 800);
        assert_eq!(style.colormap, ColorMap::Inferno);
    }

    #[test]
    fn parse_color_accepts_hex() {
        assert_eq!(parse_color("#ff8000").unwrap(), RGBColor(255, 128, 0));
        assert!(parse_color("ff8000").is_err());
        assert!(parse_color("#ff80").is_err());
        assert!(parse_color("#zzzzzz").is_err());
    }

    #[test]
    fn backend_dispatch_by_extension() {
        assert!(matches!(
            backend_for(Path::new("a/mpi.svg")).unwrap(),
            Backend::Svg
        ));
        assert!(matches!(
            backend_for(Path::new("mpi1.png")).unwrap(),
            Backend::Png
        ));
        assert!(backend_for(Path::new("mpi.pdf")).is_err());
        assert!(backend_for(Path::new("mpi")).is_err());
    }

    #[test]
    fn macro_ticks_only_on_integer_positions() {
        let macros = ["SMALL", "MIDDLE"];
        assert_eq!(macro_tick(&macros, 0.0), "SMALL");
        assert_eq!(macro_tick(&macros, 1.0), "MIDDLE");
        assert_eq!(macro_tick(&macros, 0.5), "");
        assert_eq!(macro_tick(&macros, -1.0), "");
        assert_eq!(macro_tick(&macros, 5.0), "");
    }

    #[test]
    fn shape_mismatch_rejected() {
        let pipes = [1, 2];
        let macros = ["A"];
        assert!(check_shape(&pipes, &macros, &[vec![0.1, 0.2]]).is_ok());
        assert!(check_shape(&pipes, &macros, &[vec![0.1]]).is_err());
        assert!(check_shape(&pipes, &macros, &[]).is_err());
        assert!(check_shape(&[], &macros, &[vec![]]).is_err());
    }
}
