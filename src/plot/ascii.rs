//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observations: `o`
//! - horizontal reference line: `-`
//! - identity (`y = x`) reference line: `/`

use crate::domain::{DiagnosticPanel, DiagnosticSeries, ReferenceLine};
use crate::plot::pad_range;

/// Render all three diagnostic panels, stacked vertically.
pub fn render_ascii_diagnostics(series: &DiagnosticSeries, width: usize, height: usize) -> String {
    series
        .panels()
        .iter()
        .map(|panel| render_ascii_panel(panel, width, height))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single diagnostic panel.
pub fn render_ascii_panel(panel: &DiagnosticPanel, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some((x_raw, y_raw)) = panel.bounds() else {
        return format!("{}: (no finite points)\n", panel.title);
    };
    let (x_min, x_max) = pad_range(x_raw[0], x_raw[1], 0.0);
    let (y_min, y_max) = pad_range(y_raw[0], y_raw[1], 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Reference line first so points overlay it.
    let ch = match panel.reference {
        ReferenceLine::Horizontal(_) => '-',
        ReferenceLine::Identity => '/',
    };
    let x0 = map_x(x_min, x_min, x_max, width);
    let y0 = map_y(panel.reference.at(x_min), y_min, y_max, height);
    let x1 = map_x(x_max, x_min, x_max, width);
    let y1 = map_y(panel.reference.at(x_max), y_min, y_max, height);
    draw_line(&mut grid, x0, y0, x1, y1, ch);

    for &(px, py) in &panel.points {
        if !(px.is_finite() && py.is_finite()) {
            continue;
        }
        let x = map_x(px, x_min, x_max, width);
        let y = map_y(py, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}: {}=[{x_min:.3}, {x_max:.3}] | {}=[{y_min:.3}, {y_max:.3}]\n",
        panel.title, panel.x_label, panel.y_label
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only writes into empty cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegressionResult;

    fn panel(points: Vec<(f64, f64)>, reference: ReferenceLine) -> DiagnosticPanel {
        DiagnosticPanel {
            title: "Residuals vs Fitted".to_string(),
            x_label: "fitted".to_string(),
            y_label: "residual".to_string(),
            points,
            reference,
        }
    }

    #[test]
    fn panel_golden_snapshot_small() {
        let p = panel(vec![(1.0, 1.0), (3.0, -1.0)], ReferenceLine::Horizontal(0.0));
        let txt = render_ascii_panel(&p, 10, 5);
        let expected = concat!(
            "Residuals vs Fitted: fitted=[1.000, 3.000] | residual=[-1.100, 1.100]\n",
            "o         \n",
            "          \n",
            "----------\n",
            "          \n",
            "         o\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn identity_reference_runs_corner_to_corner() {
        let p = panel(vec![(0.0, 0.0), (4.0, 4.0)], ReferenceLine::Identity);
        let txt = render_ascii_panel(&p, 10, 5);
        let rows: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(rows.len(), 5);
        // Endpoints are observations, the diagonal between them is the reference.
        assert_eq!(rows[0].chars().last(), Some('o'));
        assert_eq!(rows[4].chars().next(), Some('o'));
        assert!(rows[2].contains('/'));
    }

    #[test]
    fn empty_panel_renders_placeholder() {
        let p = panel(vec![], ReferenceLine::Identity);
        assert_eq!(render_ascii_panel(&p, 10, 5), "Residuals vs Fitted: (no finite points)\n");
    }

    #[test]
    fn diagnostics_render_three_panels() {
        let result = RegressionResult {
            coefficients: vec![0.0, 2.0],
            fitted_values: vec![2.0, 4.0, 6.0, 8.0],
            residuals: vec![0.1, -0.2, 0.2, -0.1],
            mse: 0.025,
            r_squared: 0.99,
            adj_r_squared: 0.985,
            standard_errors: vec![0.1, 0.05],
            t_statistics: vec![0.0, 40.0],
            p_values: vec![1.0, 0.0006],
            f_statistic: 1600.0,
            f_p_value: 0.0006,
            df1: 1,
            df2: 2,
        };
        let txt = render_ascii_diagnostics(&result.diagnostics(), 20, 6);
        assert!(txt.contains("Residuals vs Fitted:"));
        assert!(txt.contains("Normal Q-Q:"));
        assert!(txt.contains("Actual vs Predicted:"));
        assert_eq!(txt.lines().count(), 3 * 7 + 2);
    }

    #[test]
    fn degenerate_panel_still_renders() {
        // Perfect fit: every residual is zero.
        let p = panel(vec![(1.0, 0.0), (2.0, 0.0)], ReferenceLine::Horizontal(0.0));
        let txt = render_ascii_panel(&p, 10, 5);
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.contains('o'));
    }
}
