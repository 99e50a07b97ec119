//! Renders the current-density series as a PNG line chart.

use ndarray::Array1;
use plotters::prelude::*;

/// Fixed output path for the exported chart. Overwritten on every run.
pub const CHART_PATH: &str = "graph.png";

/// Draws j(t) against t (in ns) and writes the chart to `filename`.
///
/// The active closed-form solution is shown as the series label. The y-range
/// is padded by 5% around the data, with a fixed ±1 A/m² pad when the series
/// is flat.
pub fn render_chart(
    time: &Array1<f64>,
    current: &Array1<f64>,
    temperature: f64,
    formula: &str,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(filename, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let t_end_ns = time[time.len() - 1] * 1e9;
    let j_min = current.iter().copied().fold(f64::INFINITY, f64::min);
    let j_max = current.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = j_max - j_min;
    let (y_lo, y_hi) = if span > 0.0 {
        (j_min - 0.05 * span, j_max + 0.05 * span)
    } else {
        (j_min - 1.0, j_max + 1.0)
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Current density dynamics: T = {} K", temperature),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..t_end_ns, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Time t (ns)")
        .y_desc("Current density j (A/m^2)")
        .y_label_formatter(&|j| format!("{:.2e}", j))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            time.iter()
                .zip(current.iter())
                .map(|(&t, &j)| (t * 1e9, j)),
            &BLUE,
        ))?
        .label(formula)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
