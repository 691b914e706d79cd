use crate::report::*;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use std::fs;

/// One row of the static team table: display name, the abbreviation used in
/// the ballot files, and the path to the logo image (relative to the config
/// file).
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TeamAsset {
    pub team: String,
    pub abbreviation: String,
    #[serde(rename = "logoPath")]
    pub logo_path: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: Option<String>,
    #[serde(rename = "fontFamily")]
    pub font_family: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamAsset>,
}

impl ReportConfig {
    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn font_family(&self) -> String {
        self.font_family
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
    }
}

pub fn read_report_config(path: &str) -> ReportResult<ReportConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    debug!("read_report_config: read content: {:?}", contents);
    let config: ReportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })?;
    Ok(config)
}

pub fn read_summary(path: String) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {})?;
    debug!("read_summary: read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
