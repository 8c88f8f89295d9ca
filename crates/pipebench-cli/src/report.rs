//! The linear report pipeline: load results, print the LaTeX table,
//! render both charts.

use crate::config::ReportConfig;
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use pipebench_data::{read_vars_file, write_vars_file, Dataset, MacroSize};
use pipebench_plot::{load_style, render_lines, render_surface, PlotStyle};
use std::fs;

/// I/O direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Mode {
    /// Load the variables file and report from it.
    #[default]
    Read,
    /// Additionally rewrite the variables file in canonical form.
    Write,
}

/// Execute one report run.
pub fn run(config: &ReportConfig, mode: Mode) -> Result<()> {
    let input = config.input_path();
    let vars = read_vars_file(&input)
        .with_context(|| format!("failed to load results from {}", input.display()))?;
    let dataset = Dataset::from_vars(&vars)
        .with_context(|| format!("invalid result matrix in {}", input.display()))?;
    info!(
        "loaded {} ({} pipes x {} macros)",
        input.display(),
        dataset.pipes().len(),
        MacroSize::ALL.len()
    );

    if mode == Mode::Write {
        write_vars_file(&input, &dataset.to_vars())
            .with_context(|| format!("failed to rewrite {}", input.display()))?;
        info!("rewrote {} in canonical form", input.display());
    }

    let labels: Vec<&str> = MacroSize::ALL.iter().map(|m| m.label()).collect();
    print!(
        "{}",
        pipebench_latex::render_table(dataset.pipes(), &labels, dataset.results())
    );

    let style = match &config.plot_style {
        Some(path) => load_style(path)?,
        None => PlotStyle::default(),
    };
    let lim = config.effective_limit();
    let (surface_path, lines_path) = config.chart_paths();
    fs::create_dir_all(&config.graph_dir)
        .with_context(|| format!("failed to create {}", config.graph_dir.display()))?;

    render_surface(
        dataset.pipes(),
        &labels,
        dataset.results(),
        lim,
        &surface_path,
        &style,
    )?;
    info!("wrote surface chart {}", surface_path.display());

    render_lines(
        dataset.pipes(),
        &labels,
        dataset.results(),
        lim,
        &lines_path,
        &style,
    )?;
    info!("wrote line graph {}", lines_path.display());

    Ok(())
}
