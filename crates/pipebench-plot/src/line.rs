//! 2D line graph of the transposed result grid.
//!
//! One series per pipe count across macro-index positions, with circle
//! markers and a legend entry per pipe. The y axis is clamped to
//! `[-10, limit]` so runs with different limits stay comparable.

use crate::{backend_err, backend_for, check_shape, macro_tick, parse_color};
use crate::{Backend, PlotError, PlotStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Vertical axis range of the line graph.
pub fn time_range(lim: f64) -> std::ops::Range<f64> {
    -10.0..lim
}

/// Render the line graph to `path` (`.svg` or `.png`).
pub fn render_lines(
    pipes: &[u32],
    macros: &[&str],
    results: &[Vec<f64>],
    lim: f64,
    path: &Path,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    check_shape(pipes, macros, results)?;
    match backend_for(path)? {
        Backend::Svg => {
            let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
            draw(&root, pipes, macros, results, lim, style)
        }
        Backend::Png => {
            let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
            draw(&root, pipes, macros, results, lim, style)
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    pipes: &[u32],
    macros: &[&str],
    results: &[Vec<f64>],
    lim: f64,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let background = parse_color(&style.background)?;
    root.fill(&background).map_err(backend_err)?;

    // Slight horizontal padding keeps edge markers off the frame.
    let x_max = macros.len().saturating_sub(1) as f64;
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.25..(x_max + 0.25), time_range(lim))
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_labels(macros.len())
        .y_labels(10)
        .x_label_formatter(&|x| macro_tick(macros, *x))
        .x_desc("Macros")
        .y_desc("Time")
        .axis_desc_style(("sans-serif", style.font_size + 4))
        .label_style(("sans-serif", style.font_size))
        .draw()
        .map_err(backend_err)?;

    for (i, &pipe) in pipes.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points: Vec<(f64, f64)> = results
            .iter()
            .enumerate()
            .map(|(j, row)| (j as f64, row[i]))
            .collect();
        let width = style.line_width;
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(width),
            ))
            .map_err(backend_err)?
            .label(format!("Pipe: {pipe}"))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(width))
            });
        chart
            .draw_series(points.iter().map(|&(x, y)| {
                Circle::new((x, y), style.marker_size as i32, color.filled())
            }))
            .map_err(backend_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", style.font_size))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}
