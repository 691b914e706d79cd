// Reads a folder of plain-text ballots: one '.txt' file per voter, one team
// name per line, best first.

use crate::report::*;

use log::{debug, info};
use snafu::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use rank_aggregation::Ballot;

pub const BALLOT_EXTENSION: &str = "txt";

fn simplify_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Reads every recognized ballot file in the folder, in sorted filename
/// order. A missing or unreadable folder is fatal; a folder without any
/// ballot file yields an empty collection.
pub fn read_ballot_folder(folder: &Path) -> ReportResult<Vec<Ballot>> {
    info!("Scanning ballot folder {:?}", folder);
    let listing = fs::read_dir(folder).context(ListingFolderSnafu {
        path: folder.display().to_string(),
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in listing {
        let entry = entry.context(ListingFolderSnafu {
            path: folder.display().to_string(),
        })?;
        let path = entry.path();
        let is_ballot = path.extension().and_then(|e| e.to_str()) == Some(BALLOT_EXTENSION);
        if is_ballot && path.is_file() {
            paths.push(path);
        } else {
            debug!("read_ballot_folder: skipping {:?}", path);
        }
    }
    // listdir order is OS-dependent; sorting keeps the first-seen tie-break
    // deterministic.
    paths.sort();

    let mut ballots: Vec<Ballot> = Vec::new();
    for path in paths {
        let contents = fs::read_to_string(&path).context(ReadingBallotSnafu {
            path: path.display().to_string(),
        })?;
        let teams: Vec<String> = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        debug!("read_ballot_folder: {:?}: {:?} teams", path, teams.len());
        ballots.push(Ballot {
            teams,
            source: simplify_file_name(&path),
        });
    }
    info!("Read {:?} ballots from {:?}", ballots.len(), folder);
    Ok(ballots)
}
