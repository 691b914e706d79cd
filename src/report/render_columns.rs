// The two-column table graphic: the same rows as the table renderer in a
// compact form, split across two columns. Useful when the ranking is long.

use crate::report::render_common::*;
use crate::report::*;

use log::info;
use plotters::prelude::*;
use snafu::whatever;
use std::path::Path;

use rank_aggregation::RankingEntry;

const WIDTH: u32 = 1100;
const COLUMN_WIDTH: i32 = 550;
const HEADER_HEIGHT: i32 = 90;
const ROW_HEIGHT: i32 = 56;
const BOTTOM_MARGIN: i32 = 24;
const LOGO_SIZE: u32 = 40;

pub struct ColumnsRenderer {
    title: String,
    font_family: String,
}

impl ColumnsRenderer {
    pub fn new(config: &ReportConfig) -> ColumnsRenderer {
        ColumnsRenderer {
            title: config.title(),
            font_family: config.font_family(),
        }
    }
}

impl Renderer for ColumnsRenderer {
    fn render(
        &self,
        entries: &[RankingEntry],
        logos: &LogoLibrary,
        out_path: &Path,
    ) -> ReportResult<()> {
        let (left, _right) = split_columns(entries);
        let height = (HEADER_HEIGHT + ROW_HEIGHT * left.len().max(1) as i32 + BOTTOM_MARGIN) as u32;
        if let Err(e) = draw(self, entries, logos, out_path, height) {
            whatever!(
                "Failed to render two-column graphic to {}: {}",
                out_path.display(),
                e
            );
        }
        info!("Two-column graphic rendered to {:?}", out_path);
        Ok(())
    }
}

fn draw(
    renderer: &ColumnsRenderer,
    entries: &[RankingEntry],
    logos: &LogoLibrary,
    out_path: &Path,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(out_path, (WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let header_style = resolve_font(&renderer.font_family, 26.0).color(&BLACK);
    root.draw(&Text::new(
        renderer.title.clone(),
        (WIDTH as i32 / 2 - 180, 36),
        header_style,
    ))?;

    let (left, right) = split_columns(entries);
    draw_column(renderer, &root, left, logos, 0, 0)?;
    draw_column(renderer, &root, right, logos, COLUMN_WIDTH, left.len())?;

    root.present()?;
    Ok(())
}

fn draw_column(
    renderer: &ColumnsRenderer,
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    entries: &[RankingEntry],
    logos: &LogoLibrary,
    x_offset: i32,
    position_offset: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let body_style = resolve_font(&renderer.font_family, 18.0).color(&BLACK);
    let separator = RGBColor(200, 200, 200);

    let mut y = HEADER_HEIGHT;
    for (idx, entry) in entries.iter().enumerate() {
        root.draw(&PathElement::new(
            vec![(x_offset, y), (x_offset + COLUMN_WIDTH, y)],
            separator.stroke_width(1),
        ))?;
        let row_top = y + 8;

        root.draw(&Text::new(
            format!("{}.", position_offset + idx + 1),
            (x_offset + 10, row_top + 10),
            body_style.clone(),
        ))?;
        if let Some(logo) = logos.load(&entry.team, LOGO_SIZE, LOGO_SIZE) {
            let elem: BitMapElement<(i32, i32)> = ((x_offset + 44, row_top), logo).into();
            root.draw(&elem)?;
        }
        root.draw(&Text::new(
            entry.team.clone(),
            (x_offset + 96, row_top + 10),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format_average(entry.average_rank),
            (x_offset + 280, row_top + 10),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format!("High {}", entry.best_rank),
            (x_offset + 360, row_top + 10),
            body_style.clone(),
        ))?;
        root.draw(&Text::new(
            format!("Low {}", entry.worst_rank),
            (x_offset + 450, row_top + 10),
            body_style.clone(),
        ))?;

        y += ROW_HEIGHT;
    }
    Ok(())
}
