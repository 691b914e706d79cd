// The single-column table graphic: a title, then one row per team with a
// separator line, the logo, the name and the Avg/High/Low columns.

use crate::report::render_common::*;
use crate::report::*;

use log::info;
use plotters::prelude::*;
use snafu::whatever;
use std::path::Path;

use rank_aggregation::RankingEntry;

const WIDTH: u32 = 800;
const HEADER_HEIGHT: i32 = 100;
const ROW_HEIGHT: i32 = 70;
const BOTTOM_MARGIN: i32 = 30;
const LOGO_SIZE: u32 = 50;

pub struct TableRenderer {
    title: String,
    font_family: String,
}

impl TableRenderer {
    pub fn new(config: &ReportConfig) -> TableRenderer {
        TableRenderer {
            title: config.title(),
            font_family: config.font_family(),
        }
    }
}

impl Renderer for TableRenderer {
    fn render(
        &self,
        entries: &[RankingEntry],
        logos: &LogoLibrary,
        out_path: &Path,
    ) -> ReportResult<()> {
        let height = (HEADER_HEIGHT + ROW_HEIGHT * entries.len() as i32 + BOTTOM_MARGIN) as u32;
        if let Err(e) = draw(self, entries, logos, out_path, height) {
            whatever!(
                "Failed to render table graphic to {}: {}",
                out_path.display(),
                e
            );
        }
        info!("Table graphic rendered to {:?}", out_path);
        Ok(())
    }
}

fn draw(
    renderer: &TableRenderer,
    entries: &[RankingEntry],
    logos: &LogoLibrary,
    out_path: &Path,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(out_path, (WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let header_style = resolve_font(&renderer.font_family, 28.0).color(&BLACK);
    root.draw(&Text::new(
        renderer.title.clone(),
        (WIDTH as i32 / 2 - 200, 40),
        header_style,
    ))?;

    let body_style = resolve_font(&renderer.font_family, 22.0).color(&BLACK);
    let separator = RGBColor(200, 200, 200);

    let mut y = HEADER_HEIGHT;
    for entry in entries.iter() {
        root.draw(&PathElement::new(
            vec![(0, y), (WIDTH as i32, y)],
            separator.stroke_width(2),
        ))?;
        let row_top = y + 10;

        if let Some(logo) = logos.load(&entry.team, LOGO_SIZE, LOGO_SIZE) {
            let elem: BitMapElement<(i32, i32)> = ((50, row_top), logo).into();
            root.draw(&elem)?;
        }

        root.draw(&Text::new(
            entry.team.clone(),
            (120, row_top + 12),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format!("Avg: {}", format_average(entry.average_rank)),
            (300, row_top + 12),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format!("High: {}", entry.best_rank),
            (450, row_top + 12),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format!("Low: {}", entry.worst_rank),
            (570, row_top + 12),
            body_style.clone(),
        ))?;

        y += ROW_HEIGHT;
    }

    root.present()?;
    Ok(())
}
