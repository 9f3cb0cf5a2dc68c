use std::path::Path;
use plotters::prelude::*;
use ljbox_core::{SimulationConfig, State};
use crate::commands::CliError;

const SIZE: (u32, u32) = (800, 800);
/// Largest marker radius in pixels.
const MAX_MARKER: u32 = 40;

fn draw_error<E: std::error::Error>(e: E) -> CliError {
    CliError::Plot(e.to_string())
}

/// Scatter plot of positions before and after the run. Axes cover the box
/// with 10% padding on every side.
pub fn draw_positions(path: &Path, initial: &State, final_state: &State,
                      config: &SimulationConfig) -> Result<(), CliError> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    let low = -0.1 * config.side;
    let high = 1.1 * config.side;
    let mut chart = ChartBuilder::on(&root)
        .caption("Initial and final positions of particles", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(low..high, low..high)
        .map_err(draw_error)?;
    chart.configure_mesh()
        .x_desc("X position")
        .y_desc("Y position")
        .draw()
        .map_err(draw_error)?;

    let marker = marker_size(config.radius);
    let series = [
        (initial, RED, "Initial positions", -12),
        (final_state, BLUE, "Final positions", 4),
    ];
    for (state, color, label, label_offset) in series {
        chart.draw_series(state.particles.iter().map(|particle| {
            Circle::new((particle.position.x, particle.position.y), marker, color.filled())
        }))
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        chart.draw_series(state.particles.iter().enumerate().map(|(i, particle)| {
            EmptyElement::at((particle.position.x, particle.position.y))
                + Text::new(format!("{}", i + 1), (label_offset, -14),
                            ("sans-serif", 15).into_font().color(&color))
        }))
            .map_err(draw_error)?;
    }
    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;
    root.present().map_err(draw_error)?;
    Ok(())
}

/// Marker radius in pixels. The area of the marker follows `radius * 2000`,
/// clamped to `[2, MAX_MARKER]`.
fn marker_size(radius: f64) -> u32 {
    let area = radius * 2000.0;
    let size = area.sqrt().round();
    if size.is_nan() {
        return 2;
    }
    size.clamp(2.0, MAX_MARKER as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::{marker_size, MAX_MARKER};

    #[test]
    fn marker_for_default_radius() {
        assert_eq!(marker_size(0.01), 4);
        assert_eq!(marker_size(0.0), 2);
    }

    #[test]
    fn marker_is_capped_for_huge_radius() {
        assert_eq!(marker_size(5.0), MAX_MARKER);
        assert_eq!(marker_size(1e300), MAX_MARKER);
        assert_eq!(marker_size(f64::INFINITY), MAX_MARKER);
        assert_eq!(marker_size(-1.0), 2);
    }
}
