//! 3D surface chart of the full result grid.
//!
//! x = pipe count, depth = macro index (ticked with the macro labels),
//! height = timing clamped to `[0, limit]` and colored through the
//! configured colormap.

use crate::{backend_err, backend_for, check_shape, macro_tick, parse_color};
use crate::{Backend, PlotError, PlotStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Vertical axis range of the surface chart.
pub fn time_range(lim: f64) -> std::ops::Range<f64> {
    0.0..lim
}

/// Render the surface chart to `path` (`.svg` or `.png`).
pub fn render_surface(
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

    let (x_min, x_max) = {
        let a = f64::from(pipes[0]);
        let b = f64::from(pipes[pipes.len() - 1]);
        // Degenerate single-column axes still need a non-empty range.
        if a == b {
            (a - 0.5, b + 0.5)
        } else {
            (a, b)
        }
    };
    let depth_max = macros.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .build_cartesian_3d(x_min..x_max, time_range(lim), 0.0..depth_max)
        .map_err(backend_err)?;
    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .x_labels(pipes.len().min(10))
        .y_labels(5)
        .z_labels(macros.len())
        .max_light_lines(3)
        .label_style(("sans-serif", style.font_size))
        .x_formatter(&|x| format!("{x:.0}"))
        .z_formatter(&|z| macro_tick(macros, *z))
        .draw()
        .map_err(backend_err)?;

    let colormap = style.colormap;
    let span = if lim > 0.0 { lim } else { 1.0 };
    chart
        .draw_series(
            SurfaceSeries::xoz(
                pipes.iter().map(|&p| f64::from(p)),
                (0..macros.len()).map(|j| j as f64),
                |x, z| value_at(pipes, results, lim, x, z),
            )
            .style_func(&|&y| colormap.sample(y / span).filled()),
        )
        .map_err(backend_err)?;

    // The 3D axes carry no description slot, so captions land on the margin.
    let caption = ("sans-serif", style.font_size + 2).into_font();
    let (w, h) = root.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    root.draw(&Text::new("Pipes", (w / 5, h - 30), caption.clone()))
        .map_err(backend_err)?;
    root.draw(&Text::new("Macros", (3 * w / 4, h - 30), caption.clone()))
        .map_err(backend_err)?;
    root.draw(&Text::new("Time", (15, h / 2), caption))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

fn value_at(pipes: &[u32], results: &[Vec<f64>], lim: f64, x: f64, z: f64) -> f64 {
    let i = pipes
        .iter()
        .position(|&p| f64::from(p) == x)
        .unwrap_or(0);
    let j = (z.round().max(0.0) as usize).min(results.len() - 1);
    results[j][i].clamp(0.0, lim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_axis_is_clamped_to_limit() {
        let range = time_range(150.0);
        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, 150.0);
    }

    #[test]
    fn values_clamp_into_the_axis_range() {
        let pipes = [1, 2];
        let results = vec![vec![5.0, 500.0]];
        assert_eq!(value_at(&pipes, &results, 150.0, 2.0, 0.0), 150.0);
        assert_eq!(value_at(&pipes, &results, 150.0, 1.0, 0.0), 5.0);
    }
}
