//! Configuration for the report pipeline.
//!
//! Sources in precedence order:
//! 1. Command-line arguments (which also absorb `PIPEBENCH_*` env vars)
//! 2. Configuration file (`.yaml`/`.yml` or `.json`)
//! 3. Built-in defaults

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Chart image format; selects the plotters backend by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Benchmark title; names the input file and the chart files.
    #[serde(default = "default_title")]
    pub title: String,
    /// Directory containing `{title}.txt`.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Directory receiving the rendered charts.
    #[serde(default = "default_graph_dir")]
    pub graph_dir: PathBuf,
    /// Upper axis limit for both charts; defaults per title when unset.
    pub limit: Option<f64>,
    /// Chart image format.
    #[serde(default)]
    pub format: ImageFormat,
    /// Optional plot style file (YAML).
    pub plot_style: Option<PathBuf>,
}

fn default_title() -> String {
    "mpi_o3".to_string()
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("./results")
}
fn default_graph_dir() -> PathBuf {
    PathBuf::from("./graph")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            results_dir: default_results_dir(),
            graph_dir: default_graph_dir(),
            limit: None,
            format: ImageFormat::default(),
            plot_style: None,
        }
    }
}

impl ReportConfig {
    /// Load from a file, or return defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("invalid YAML config {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON config {}", path.display()))?,
            other => bail!(
                "unsupported config format `{}` for {}",
                other.unwrap_or("<none>"),
                path.display()
            ),
        };
        Ok(config)
    }

    /// Axis limit, falling back to the per-title default (350 for the
    /// plain `mpi` run, 150 otherwise).
    pub fn effective_limit(&self) -> f64 {
        self.limit
            .unwrap_or(if self.title == "mpi" { 350.0 } else { 150.0 })
    }

    /// Path of the variables file for this run.
    pub fn input_path(&self) -> PathBuf {
        self.results_dir.join(format!("{}.txt", self.title))
    }

    /// Paths of the surface chart and the line graph.
    pub fn chart_paths(&self) -> (PathBuf, PathBuf) {
        let ext = self.format.extension();
        (
            self.graph_dir.join(format!("{}.{ext}", self.title)),
            self.graph_dir.join(format!("{}1.{ext}", self.title)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn defaults_mirror_the_lab_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.title, "mpi_o3");
        assert_eq!(config.results_dir, PathBuf::from("./results"));
        assert_eq!(config.graph_dir, PathBuf::from("./graph"));
        assert_eq!(config.format, ImageFormat::Svg);
    }

    #[test]
    fn per_title_limit_defaults() {
        let mut config = ReportConfig {
            title: "mpi".to_string(),
            ..Default::default()
        };
        assert_eq!(config.effective_limit(), 350.0);
        config.title = "mpi_o3".to_string();
        assert_eq!(config.effective_limit(), 150.0);
        config.limit = Some(42.0);
        assert_eq!(config.effective_limit(), 42.0);
    }

    #[test]
    fn paths_follow_title_and_format() {
        let config = ReportConfig {
            title: "mpi".to_string(),
            format: ImageFormat::Png,
            ..Default::default()
        };
        assert_eq!(config.input_path(), PathBuf::from("./results/mpi.txt"));
        let (surface, lines) = config.chart_paths();
        assert_eq!(surface, PathBuf::from("./graph/mpi.png"));
        assert_eq!(lines, PathBuf::from("./graph/mpi1.png"));
    }

    #[test]
    fn loads_yaml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "title: mpi\nresults_dir: /data\nformat: png").unwrap();
        let config = ReportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title, "mpi");
        assert_eq!(config.results_dir, PathBuf::from("/data"));
        assert_eq!(config.format, ImageFormat::Png);
        assert_eq!(config.graph_dir, default_graph_dir());
    }

    #[test]
    fn loads_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"title": "mpi", "limit": 99.0}"#).unwrap();
        let config = ReportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title, "mpi");
        assert_eq!(config.effective_limit(), 99.0);
    }

    #[test]
    fn rejects_unknown_config_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, "title = 'x'").unwrap();
        assert!(ReportConfig::load(Some(&path)).is_err());
    }
}
