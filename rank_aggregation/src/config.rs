// ********* Input data structures ***********

/// One voter's ballot: an ordered list of team names.
///
/// The 1-based position of a team in the list is the rank this ballot
/// assigns to it (1 = best). Entries that are blank after normalization are
/// skipped and do not consume a rank.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Ballot {
    pub teams: Vec<String>,
    /// Where this ballot came from (typically a file name). Only used for
    /// logging.
    pub source: Option<String>,
}

// ******** Output data structures *********

/// The aggregated ranking statistics for one team.
///
/// `best_rank` is the numerically smallest rank the team received across
/// all ballots, `worst_rank` the numerically largest. Downstream rendering
/// labels these "High" and "Low" respectively: a high ranking is a small
/// rank number.
#[derive(PartialEq, Debug, Clone)]
pub struct RankingEntry {
    pub team: String,
    pub average_rank: f64,
    pub best_rank: u32,
    pub worst_rank: u32,
}

// ********* Configuration **********

/// How team names are mapped to a team identity during accumulation.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NameNormalization {
    /// Trim surrounding whitespace, keep the casing as written. Two casing
    /// variants of the same name count as distinct teams.
    Trimmed,
    /// Trim and fold to lowercase for identity. The first spelling seen is
    /// the one kept for display.
    CaseInsensitive,
}

impl NameNormalization {
    /// The accumulation key for a raw ballot entry. An empty key means the
    /// entry should be skipped.
    pub fn key(&self, raw: &str) -> String {
        match self {
            NameNormalization::Trimmed => raw.trim().to_string(),
            NameNormalization::CaseInsensitive => raw.trim().to_lowercase(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct AggregationOptions {
    pub normalization: NameNormalization,
}

impl AggregationOptions {
    pub const DEFAULT_OPTIONS: AggregationOptions = AggregationOptions {
        normalization: NameNormalization::Trimmed,
    };
}

impl Default for AggregationOptions {
    fn default() -> Self {
        AggregationOptions::DEFAULT_OPTIONS
    }
}
