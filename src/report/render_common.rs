use crate::report::*;

use image::imageops::FilterType;
use image::DynamicImage;
use log::{debug, warn};
use plotters::prelude::*;
use snafu::whatever;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rank_aggregation::RankingEntry;

use crate::report::render_chart::ChartRenderer;
use crate::report::render_columns::ColumnsRenderer;
use crate::report::render_table::TableRenderer;

/// A rendering strategy for the sorted ranking. All the renderers write a
/// PNG file at the given path.
pub trait Renderer {
    fn render(
        &self,
        entries: &[RankingEntry],
        logos: &LogoLibrary,
        out_path: &Path,
    ) -> ReportResult<()>;
}

pub fn renderer_for_style(style: &str, config: &ReportConfig) -> ReportResult<Box<dyn Renderer>> {
    match style {
        "table" => Ok(Box::new(TableRenderer::new(config))),
        "columns" => Ok(Box::new(ColumnsRenderer::new(config))),
        "chart" => Ok(Box::new(ChartRenderer::new(config))),
        x => whatever!(
            "Unknown rendering style {:?} (expected 'table', 'columns' or 'chart')",
            x
        ),
    }
}

/// Resolves a logo image for a team abbreviation, tolerating missing or
/// unreadable assets: the row is simply rendered without a logo.
pub struct LogoLibrary {
    by_team: HashMap<String, PathBuf>,
}

impl LogoLibrary {
    pub fn from_assets(assets: &[TeamAsset], base_dir: &Path) -> LogoLibrary {
        let by_team = assets
            .iter()
            .map(|a| (a.abbreviation.clone(), base_dir.join(&a.logo_path)))
            .collect();
        LogoLibrary { by_team }
    }

    /// Loads the logo for a team, scaled to the given size. Returns `None`
    /// (with a warning) when the team has no registered asset or the asset
    /// cannot be read.
    pub fn load(&self, team: &str, width: u32, height: u32) -> Option<DynamicImage> {
        let path = match self.by_team.get(team) {
            Some(p) => p,
            None => {
                if self.by_team.is_empty() {
                    // No asset table was supplied at all; stay quiet.
                    debug!("No logo assets configured, skipping logo for {}", team);
                } else {
                    warn!("No logo asset registered for {}", team);
                }
                return None;
            }
        };
        match image::open(path) {
            Ok(img) => Some(img.resize_exact(width, height, FilterType::Triangle)),
            Err(e) => {
                warn!("Could not open logo for {}: {}", team, e);
                None
            }
        }
    }
}

/// Resolves the configured font family, falling back to the default family
/// when the requested one cannot be laid out.
pub fn resolve_font(family: &str, size: f64) -> FontDesc<'_> {
    let font: FontDesc = (family, size).into_font();
    if font.layout_box("Ag").is_ok() {
        font
    } else {
        warn!(
            "Could not load font family {:?}, falling back to {:?}",
            family, DEFAULT_FONT_FAMILY
        );
        (DEFAULT_FONT_FAMILY, size).into_font()
    }
}

/// Splits the entries for the two-column table; the left column gets the
/// extra row when the count is odd.
pub fn split_columns(entries: &[RankingEntry]) -> (&[RankingEntry], &[RankingEntry]) {
    let mid = (entries.len() + 1) / 2;
    entries.split_at(mid)
}
