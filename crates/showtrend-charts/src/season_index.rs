//! Season-to-range index over the full episode sequence
//!
//! Built once per render, up front, so every season's global x offset is a
//! precomputed range lookup and contiguity violations surface as an error
//! instead of mis-positioned points.

use std::collections::BTreeMap;
use std::ops::Range;

use showtrend_common::{ChartError, Episode, Result};

/// Maps each season number to its contiguous index range in the episode list
#[derive(Debug, Clone)]
pub struct SeasonIndex {
    ranges: BTreeMap<u32, Range<usize>>,
    episode_count: usize,
    max_season: u32,
}

impl SeasonIndex {
    /// Build the index, validating the input in one pass.
    ///
    /// Fails with `EmptyDataset` for an empty episode list, `Validation`
    /// for a season number of 0, and `NonContiguousSeason` when a season's
    /// episodes are interleaved with another season's.
    pub fn from_episodes(episodes: &[Episode]) -> Result<Self> {
        if episodes.is_empty() {
            return Err(ChartError::empty_dataset("show has no episodes"));
        }

        let mut ranges: BTreeMap<u32, Range<usize>> = BTreeMap::new();
        for (idx, episode) in episodes.iter().enumerate() {
            if episode.season_number == 0 {
                return Err(ChartError::validation_field(
                    "season numbers start at 1",
                    "season_number",
                ));
            }
            match ranges.get_mut(&episode.season_number) {
                None => {
                    ranges.insert(episode.season_number, idx..idx + 1);
                }
                Some(range) => {
                    if range.end != idx {
                        return Err(ChartError::non_contiguous_season(episode.season_number));
                    }
                    range.end = idx + 1;
                }
            }
        }

        let max_season = ranges.keys().next_back().copied().unwrap_or(0);
        Ok(Self {
            ranges,
            episode_count: episodes.len(),
            max_season,
        })
    }

    /// Index range of a season's episodes, if the season has any
    pub fn range(&self, season: u32) -> Option<Range<usize>> {
        self.ranges.get(&season).cloned()
    }

    /// Highest season number seen in the input
    pub fn max_season(&self) -> u32 {
        self.max_season
    }

    /// Total number of episodes across all seasons
    pub fn episode_count(&self) -> usize {
        self.episode_count
    }

    /// Season numbers present in the input, ascending
    pub fn seasons(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.keys().copied()
    }
}
