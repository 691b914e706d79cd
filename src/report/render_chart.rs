// The bar chart rendering: one horizontal bar per team, sized by the
// average rank (lower is better, best team on top), with a whisker from the
// best to the worst rank and a thumbnail logo on each row.

use crate::report::render_common::*;
use crate::report::*;

use log::info;
use plotters::prelude::*;
use snafu::whatever;
use std::path::Path;

use rank_aggregation::RankingEntry;

const WIDTH: u32 = 900;
const HEADER_HEIGHT: usize = 120;
const ROW_HEIGHT: usize = 48;
const LOGO_SIZE: u32 = 32;

pub struct ChartRenderer {
    title: String,
    font_family: String,
}

impl ChartRenderer {
    pub fn new(config: &ReportConfig) -> ChartRenderer {
        ChartRenderer {
            title: config.title(),
            font_family: config.font_family(),
        }
    }
}

impl Renderer for ChartRenderer {
    fn render(
        &self,
        entries: &[RankingEntry],
        logos: &LogoLibrary,
        out_path: &Path,
    ) -> ReportResult<()> {
        if let Err(e) = draw(self, entries, logos, out_path) {
            whatever!(
                "Failed to render bar chart to {}: {}",
                out_path.display(),
                e
            );
        }
        info!("Bar chart rendered to {:?}", out_path);
        Ok(())
    }
}

// The vertical span of the bar for row `i` (row 0 on top), in chart
// coordinates where y grows upward.
pub fn bar_span(num_entries: usize, i: usize) -> (f64, f64) {
    let top = (num_entries - i) as f64;
    (top - 0.85, top - 0.15)
}

fn draw(
    renderer: &ChartRenderer,
    entries: &[RankingEntry],
    logos: &LogoLibrary,
    out_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let n = entries.len();
    let height = (HEADER_HEIGHT + ROW_HEIGHT * n.max(1)) as u32;
    let root = BitMapBackend::new(out_path, (WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    if entries.is_empty() {
        // Nothing to chart; leave a blank canvas with the title.
        root.draw(&Text::new(
            renderer.title.clone(),
            (WIDTH as i32 / 2 - 180, 40),
            resolve_font(&renderer.font_family, 28.0).color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let x_max = entries
        .iter()
        .map(|e| e.worst_rank as f64)
        .fold(1.0, f64::max)
        + 1.0;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            renderer.title.clone(),
            resolve_font(&renderer.font_family, 28.0),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..x_max, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Average rank (lower is better)")
        .label_style(resolve_font(&renderer.font_family, 16.0))
        .axis_desc_style(resolve_font(&renderer.font_family, 16.0))
        .draw()?;

    let bar_color = RGBColor(66, 133, 244);
    let whisker_color = RGBColor(120, 120, 120);
    let label_style = resolve_font(&renderer.font_family, 15.0).color(&BLACK);

    for (i, entry) in entries.iter().enumerate() {
        let (y0, y1) = bar_span(n, i);
        let y_center = (y0 + y1) / 2.0;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y0), (entry.average_rank, y1)],
            bar_color.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (entry.best_rank as f64, y_center),
                (entry.worst_rank as f64, y_center),
            ],
            whisker_color.stroke_width(3),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!(
                "{}  {} (High {} / Low {})",
                entry.team,
                format_average(entry.average_rank),
                entry.best_rank,
                entry.worst_rank
            ),
            (entry.worst_rank as f64 + 0.1, y_center),
            label_style.clone(),
        )))?;
        if let Some(logo) = logos.load(&entry.team, LOGO_SIZE, LOGO_SIZE) {
            let elem: BitMapElement<(f64, f64)> = ((0.05, y1), logo).into();
            chart.draw_series(std::iter::once(elem))?;
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::bar_span;

    #[test]
    fn bars_stack_from_the_top() {
        // Three rows: row 0 occupies the topmost band.
        let (y0, y1) = bar_span(3, 0);
        assert!(y0 > 2.0 && y1 < 3.0 && y0 < y1);
        let (y0_last, y1_last) = bar_span(3, 2);
        assert!(y0_last > 0.0 && y1_last < 1.0);
        assert!(y1_last < y0);
    }
}
