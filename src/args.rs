use clap::Parser;

/// Aggregates team ranking ballots from a folder of text files and renders
/// the averaged ranking as a graphic.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (folder path) The folder containing the ranking ballots. Every '.txt' file in the
    /// folder is read as one ballot: team names, one per line, best first. Other files
    /// are ignored.
    #[clap(value_parser)]
    pub folder: String,

    /// (file path, optional) A JSON description of the teams: display name, abbreviation
    /// and logo image path. Logo paths are resolved relative to this file. Without it,
    /// the graphic is rendered without logos and with default title and font.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, default rankings.png) Where the rendered graphic is written.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (default table) The rendering style: 'table' (single-column table graphic),
    /// 'columns' (two-column table graphic) or 'chart' (horizontal bar chart).
    #[clap(long, value_parser)]
    pub style: Option<String>,

    /// (file path or empty) If specified, the sorted ranking will be written in JSON
    /// format to the given location.
    #[clap(short, long, value_parser)]
    pub summary: Option<String>,

    /// (file path) A reference file containing an expected ranking summary in JSON
    /// format. If provided, teamrank will check that the computed summary matches the
    /// reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
