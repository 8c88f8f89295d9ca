//! pipebench - benchmark report generator for pipe-scaling experiments
//!
//! Reads a `key=value` results file, prints LaTeX table rows to stdout,
//! and renders a 3D surface chart plus a 2D line graph.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

mod config;
mod report;

use config::{ImageFormat, ReportConfig};
use report::Mode;

#[derive(Parser)]
#[command(
    name = "pipebench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Benchmark report generator for pipe-scaling experiments",
    long_about = r#"
pipebench turns a grid of benchmark timings (pipe counts x problem-size
macros) into a LaTeX table and two charts.

The input is a plain text file with one assignment per line; values are
numeric scalars or bracketed numeric lists. Four keys are required:
results_SMALL, results_MIDDLE, results_LARGE, results_EXTLARGE.

Examples:
  pipebench                               # report ./results/mpi_o3.txt
  pipebench --title mpi                   # report ./results/mpi.txt, limit 350
  pipebench --mode write                  # also rewrite the input canonically
  pipebench --format png --limit 200      # bitmap charts, explicit axis limit
  pipebench --config report.yaml          # settings from a config file
"#,
    after_help = r#"
Environment Variables:
  PIPEBENCH_DEBUG=1            Enable debug logging
  PIPEBENCH_CONFIG=<path>      Path to configuration file (YAML or JSON)
  PIPEBENCH_TITLE=<title>      Benchmark title
  PIPEBENCH_RESULTS_DIR=<dir>  Directory containing {title}.txt
  PIPEBENCH_GRAPH_DIR=<dir>    Directory receiving the charts
  PIPEBENCH_LIMIT=<n>          Upper axis limit for both charts
  PIPEBENCH_FORMAT=<fmt>       Chart image format (svg, png)
  PIPEBENCH_PLOT_STYLE=<path>  Plot style file (YAML)
"#
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, env = "PIPEBENCH_DEBUG", value_parser = parse_bool_env)]
    debug: bool,

    /// Path to a configuration file (YAML or JSON)
    #[arg(long, env = "PIPEBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Benchmark title; names the input file and the chart files
    #[arg(short, long, env = "PIPEBENCH_TITLE")]
    title: Option<String>,

    /// Directory containing `{title}.txt`
    #[arg(long, env = "PIPEBENCH_RESULTS_DIR")]
    results_dir: Option<PathBuf>,

    /// Directory receiving the rendered charts
    #[arg(long, env = "PIPEBENCH_GRAPH_DIR")]
    graph_dir: Option<PathBuf>,

    /// Upper axis limit for both charts
    #[arg(long, env = "PIPEBENCH_LIMIT")]
    limit: Option<f64>,

    /// Chart image format
    #[arg(long, value_enum, env = "PIPEBENCH_FORMAT")]
    format: Option<ImageFormat>,

    /// Plot style file (YAML)
    #[arg(long, env = "PIPEBENCH_PLOT_STYLE")]
    plot_style: Option<PathBuf>,

    /// I/O direction: read the results file, or also rewrite it canonically
    #[arg(long, value_enum, default_value = "read")]
    mode: Mode,
}

impl Cli {
    /// Overlay command-line values on top of the file/default config.
    fn apply_to(&self, config: &mut ReportConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(dir) = &self.results_dir {
            config.results_dir = dir.clone();
        }
        if let Some(dir) = &self.graph_dir {
            config.graph_dir = dir.clone();
        }
        if let Some(limit) = self.limit {
            config.limit = Some(limit);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(path) = &self.plot_style {
            config.plot_style = Some(path.clone());
        }
    }
}

fn parse_bool_env(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("invalid boolean `{other}`")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let mut config = ReportConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    debug!("effective config: {config:?}");

    report::run(&config, cli.mode)
}
