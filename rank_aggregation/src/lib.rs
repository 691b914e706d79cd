pub mod builder;
mod config;
use log::{debug, info};

use std::collections::HashMap;

pub use crate::config::*;

// **** Private structures ****

type Rank = u32;

// Teams are identified by their order of first appearance across the ballot
// stream. This order is also the tie-break for equal averages.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
struct TeamId(u32);

/// The running statistics for one team.
///
/// A fresh accumulator has seen no rank yet: the best rank starts at the
/// maximum sentinel and the worst at zero, so the first recorded rank
/// replaces both.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct RankAccumulator {
    total_rank_sum: u64,
    appearance_count: u32,
    best_rank: Rank,
    worst_rank: Rank,
}

impl RankAccumulator {
    const EMPTY: RankAccumulator = RankAccumulator {
        total_rank_sum: 0,
        appearance_count: 0,
        best_rank: Rank::MAX,
        worst_rank: 0,
    };

    fn record(&mut self, rank: Rank) {
        self.total_rank_sum += rank as u64;
        self.appearance_count += 1;
        self.best_rank = self.best_rank.min(rank);
        self.worst_rank = self.worst_rank.max(rank);
    }

    // Only meaningful after at least one rank has been recorded.
    fn average(&self) -> f64 {
        debug_assert!(self.appearance_count > 0);
        self.total_rank_sum as f64 / self.appearance_count as f64
    }
}

/// Aggregates a collection of ballots into one ranking.
///
/// Every team mentioned in at least one ballot appears exactly once in the
/// output, with its average, best and worst rank across the ballots that
/// mention it. The output is sorted ascending by average rank (lower is
/// better); teams with equal averages keep their order of first appearance.
///
/// An empty collection of ballots yields an empty ranking.
pub fn aggregate_rankings(ballots: &[Ballot], options: &AggregationOptions) -> Vec<RankingEntry> {
    info!("Processing {:?} ballots", ballots.len());

    let mut ids: HashMap<String, TeamId> = HashMap::new();
    // Display names, indexed by TeamId.
    let mut display_names: Vec<String> = Vec::new();
    let mut accumulators: HashMap<TeamId, RankAccumulator> = HashMap::new();

    for ballot in ballots.iter() {
        debug!(
            "aggregate_rankings: ballot {:?}: {:?} entries",
            ballot.source,
            ballot.teams.len()
        );
        let mut rank: Rank = 0;
        for raw in ballot.teams.iter() {
            let key = options.normalization.key(raw);
            if key.is_empty() {
                debug!("aggregate_rankings: skipping blank entry after rank {:?}", rank);
                continue;
            }
            rank += 1;
            let next_id = TeamId(display_names.len() as u32);
            let id = *ids.entry(key).or_insert_with(|| {
                display_names.push(raw.trim().to_string());
                next_id
            });
            let acc = accumulators.entry(id).or_insert(RankAccumulator::EMPTY);
            acc.record(rank);
        }
    }

    let mut entries: Vec<(TeamId, RankingEntry)> = accumulators
        .iter()
        .map(|(id, acc)| {
            debug_assert!(acc.best_rank <= acc.worst_rank);
            (
                *id,
                RankingEntry {
                    team: display_names[id.0 as usize].clone(),
                    average_rank: acc.average(),
                    best_rank: acc.best_rank,
                    worst_rank: acc.worst_rank,
                },
            )
        })
        .collect();
    entries.sort_by(|(id_a, a), (id_b, b)| {
        a.average_rank.total_cmp(&b.average_rank).then(id_a.cmp(id_b))
    });

    info!("aggregate_rankings: {:?} teams in the output", entries.len());
    entries.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballot(teams: &[&str]) -> Ballot {
        Ballot {
            teams: teams.iter().map(|s| s.to_string()).collect(),
            source: None,
        }
    }

    #[test]
    fn two_ballots_three_teams() {
        let ballots = vec![ballot(&["A", "B", "C"]), ballot(&["B", "A", "C"])];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 3);

        // A and B tie at 1.5; A was seen first and comes first.
        assert_eq!(entries[0].team, "A");
        assert_eq!(entries[0].average_rank, 1.5);
        assert_eq!(entries[0].best_rank, 1);
        assert_eq!(entries[0].worst_rank, 2);

        assert_eq!(entries[1].team, "B");
        assert_eq!(entries[1].average_rank, 1.5);
        assert_eq!(entries[1].best_rank, 1);
        assert_eq!(entries[1].worst_rank, 2);

        assert_eq!(entries[2].team, "C");
        assert_eq!(entries[2].average_rank, 3.0);
        assert_eq!(entries[2].best_rank, 3);
        assert_eq!(entries[2].worst_rank, 3);
    }

    #[test]
    fn single_ballot_single_team() {
        let entries = aggregate_rankings(&[ballot(&["X"])], &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].team, "X");
        assert_eq!(entries[0].average_rank, 1.0);
        assert_eq!(entries[0].best_rank, 1);
        assert_eq!(entries[0].worst_rank, 1);
    }

    #[test]
    fn no_ballots_no_entries() {
        let entries = aggregate_rankings(&[], &AggregationOptions::DEFAULT_OPTIONS);
        assert!(entries.is_empty());
    }

    #[test]
    fn blank_entries_do_not_consume_a_rank() {
        let ballots = vec![ballot(&["A", "", "  ", "B"])];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].team, "A");
        assert_eq!(entries[0].best_rank, 1);
        // B follows A directly: the blanks in between are compacted away.
        assert_eq!(entries[1].team, "B");
        assert_eq!(entries[1].best_rank, 2);
        assert_eq!(entries[1].worst_rank, 2);
    }

    #[test]
    fn names_are_trimmed() {
        let ballots = vec![ballot(&["A", "B"]), ballot(&["  A  ", "B"])];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].team, "A");
        assert_eq!(entries[0].average_rank, 1.0);
    }

    #[test]
    fn casing_variants_are_distinct_by_default() {
        let ballots = vec![ballot(&["tigers", "Tigers"])];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn case_insensitive_mode_merges_and_keeps_first_spelling() {
        let options = AggregationOptions {
            normalization: NameNormalization::CaseInsensitive,
        };
        let ballots = vec![ballot(&["Tigers", "Lions"]), ballot(&["tigers", "LIONS"])];
        let entries = aggregate_rankings(&ballots, &options);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].team, "Tigers");
        assert_eq!(entries[0].average_rank, 1.0);
        assert_eq!(entries[1].team, "Lions");
        assert_eq!(entries[1].average_rank, 2.0);
    }

    #[test]
    fn teams_absent_from_a_ballot_keep_their_average() {
        // C only appears in the first ballot; the second must not dilute it.
        let ballots = vec![ballot(&["A", "B", "C"]), ballot(&["A", "B"])];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        let c = entries.iter().find(|e| e.team == "C").unwrap();
        assert_eq!(c.average_rank, 3.0);
        assert_eq!(c.best_rank, 3);
        assert_eq!(c.worst_rank, 3);
    }

    #[test]
    fn averages_lie_between_best_and_worst() {
        let ballots = vec![
            ballot(&["A", "B", "C", "D"]),
            ballot(&["D", "C", "B", "A"]),
            ballot(&["B", "A", "D", "C"]),
        ];
        let entries = aggregate_rankings(&ballots, &AggregationOptions::DEFAULT_OPTIONS);
        assert_eq!(entries.len(), 4);
        for entry in entries.iter() {
            assert!(entry.best_rank as f64 <= entry.average_rank);
            assert!(entry.average_rank <= entry.worst_rank as f64);
        }
        // Sorted non-decreasing by average.
        for pair in entries.windows(2) {
            assert!(pair[0].average_rank <= pair[1].average_rank);
        }
    }
}
