//! SVG diagnostics via Plotters.
//!
//! Writes the three diagnostic panels side by side into a single SVG file:
//! scatter points plus each panel's reference line, with axis labels and a
//! caption per panel.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{DiagnosticPanel, DiagnosticSeries};
use crate::error::AppError;
use crate::plot::pad_range;

/// Write the diagnostic panels to `path` as an SVG of `width × height` pixels.
pub fn write_svg_diagnostics(
    path: &Path,
    series: &DiagnosticSeries,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let root = SVGBackend::new(path, (width.max(300), height.max(150))).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::new(2, format!("Failed to draw SVG '{}': {e}", path.display())))?;

    let areas = root.split_evenly((1, 3));
    for (area, panel) in areas.iter().zip(series.panels()) {
        draw_panel(area, panel)
            .map_err(|e| AppError::new(2, format!("Failed to draw '{}' panel: {e}", panel.title)))?;
    }

    root.present()
        .map_err(|e| AppError::new(2, format!("Failed to write SVG '{}': {e}", path.display())))?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: &DiagnosticPanel,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    // Nothing to scale the axes to; leave the panel blank.
    let Some((x_raw, y_raw)) = panel.bounds() else {
        return Ok(());
    };
    let (x0, x1) = pad_range(x_raw[0], x_raw[1], 0.05);
    let (y0, y1) = pad_range(y_raw[0], y_raw[1], 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 18))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .x_labels(5)
        .y_labels(5)
        .draw()?;

    let reference = panel.reference;
    chart.draw_series(LineSeries::new(
        [x0, x1].into_iter().map(|x| (x, reference.at(x))),
        RED.stroke_width(1),
    ))?;

    chart.draw_series(
        panel
            .points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    Ok(())
}
