pub use crate::config::*;
use crate::aggregate_rankings;

/// A builder for collecting ballots one at a time.
///
/// ```
/// pub use rank_aggregation::builder::Builder;
/// pub use rank_aggregation::AggregationOptions;
///
/// let mut builder = Builder::new(&AggregationOptions::DEFAULT_OPTIONS);
/// builder.add_ballot(&["Anna".to_string(), "Bob".to_string()]);
/// builder.add_ballot(&["Bob".to_string(), "Anna".to_string()]);
///
/// let entries = builder.finish();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].average_rank, 1.5);
/// ```
pub struct Builder {
    pub(crate) _options: AggregationOptions,
    pub(crate) _ballots: Vec<Ballot>,
}

impl Builder {
    pub fn new(options: &AggregationOptions) -> Builder {
        Builder {
            _options: *options,
            _ballots: Vec::new(),
        }
    }

    /// Adds a ballot: team names in rank order, best first.
    pub fn add_ballot(&mut self, teams: &[String]) {
        self._ballots.push(Ballot {
            teams: teams.to_vec(),
            source: None,
        });
    }

    /// Adds a ballot with a label describing where it came from, for
    /// logging.
    pub fn add_ballot_from(&mut self, source: &str, teams: &[String]) {
        self._ballots.push(Ballot {
            teams: teams.to_vec(),
            source: Some(source.to_string()),
        });
    }

    /// Aggregates everything collected so far into the sorted ranking.
    pub fn finish(&self) -> Vec<RankingEntry> {
        aggregate_rankings(&self._ballots, &self._options)
    }
}
