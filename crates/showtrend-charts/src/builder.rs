//! Season trend builder: Show -> ChartSpec

use showtrend_common::{utils::validate_non_empty, Episode, Result, Show};
use tracing::{debug, trace};

use crate::palette::Palette;
use crate::regression::fit_least_squares;
use crate::season_index::SeasonIndex;
use crate::types::{
    ChartSeries, ChartSpec, LinePoint, MarkerStyle, RenderOptions, ScatterPoint, SeriesData,
    SeriesKind, RATING_SCALE_MAX,
};

/// Builds per-season trend and scatter series from a show's episode list.
///
/// Holds the randomness source used to shuffle the palette once per render;
/// inject a seeded `fastrand::Rng` via [`SeasonTrendBuilder::with_rng`] for
/// deterministic output.
#[derive(Debug)]
pub struct SeasonTrendBuilder {
    rng: fastrand::Rng,
}

impl SeasonTrendBuilder {
    /// Create a builder with a system-seeded randomness source
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Create a builder with an injected randomness source
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    /// Build the chart specification for one render.
    ///
    /// Pure aside from advancing the rng: all chart state is constructed
    /// per call and handed off in the returned `ChartSpec`. Series come out
    /// season-ascending, each season's trend line immediately followed by
    /// its scatter series, both in the same palette color.
    pub fn build(&mut self, show: &Show, options: &RenderOptions) -> Result<ChartSpec> {
        let title = validate_non_empty(&show.primary_title, "primary_title")?;
        let index = SeasonIndex::from_episodes(&show.episodes)?;
        let palette = Palette::shuffled(&mut self.rng);
        let total = index.episode_count();

        debug!(
            show = %title,
            episodes = total,
            max_season = index.max_season(),
            "building season trend series"
        );

        let mut series = Vec::new();
        for season in 1..=index.max_season() {
            // An absent season number emits nothing, but its palette slot
            // stays consumed because lookup is by season number.
            let Some(range) = index.range(season) else {
                trace!(season, "no episodes, skipping");
                continue;
            };

            let color = palette.color_for_season(season);
            let episodes = &show.episodes[range.clone()];
            series.push(self.trend_line_series(season, range.start, episodes, color));
            series.push(self.scatter_series(season, range.start, total, episodes, color));
        }

        let y_min = if options.rating_from_zero {
            0.0
        } else {
            show.episodes
                .iter()
                .map(|e| e.rating.average)
                .fold(f64::INFINITY, f64::min)
        };

        Ok(ChartSpec {
            title,
            series,
            y_min,
            y_max: RATING_SCALE_MAX,
        })
    }

    /// Fit the season's ratings and emit the two-point trend line, with the
    /// local endpoints re-expressed in full-sequence x coordinates.
    fn trend_line_series(
        &self,
        season: u32,
        offset: usize,
        episodes: &[Episode],
        color: &str,
    ) -> ChartSeries {
        let ratings: Vec<f64> = episodes.iter().map(|e| e.rating.average).collect();
        let fit = fit_least_squares(&ratings);
        let last_local = (ratings.len() - 1) as f64;
        let start_y = fit.value_at(0.0);
        let end_y = fit.value_at(last_local);

        trace!(
            season,
            slope = fit.slope,
            intercept = fit.intercept,
            "fitted season trend"
        );

        ChartSeries {
            kind: SeriesKind::Line,
            label: format!("Season {season}"),
            color: color.to_string(),
            marker: MarkerStyle::hidden(),
            tooltip: Some(format!("Season {season}: {start_y:.2} to {end_y:.2}")),
            data: SeriesData::Line(vec![
                LinePoint {
                    x: offset as f64,
                    y: start_y,
                },
                LinePoint {
                    x: offset as f64 + last_local,
                    y: end_y,
                },
            ]),
        }
    }

    /// Emit the season's scatter series: one slot per episode in the FULL
    /// sequence, filled only at this season's indices.
    fn scatter_series(
        &self,
        season: u32,
        offset: usize,
        total: usize,
        episodes: &[Episode],
        color: &str,
    ) -> ChartSeries {
        let mut points: Vec<Option<ScatterPoint>> = vec![None; total];
        for (local, episode) in episodes.iter().enumerate() {
            points[offset + local] = Some(ScatterPoint {
                y: episode.rating.average,
                tooltip: format!(
                    "S{}E{} {}: {:.1} ({} votes)",
                    episode.season_number,
                    episode.episode_number,
                    episode.primary_title,
                    episode.rating.average,
                    episode.rating.count,
                ),
            });
        }

        ChartSeries {
            kind: SeriesKind::Scatter,
            label: format!("Season {season}"),
            color: color.to_string(),
            marker: MarkerStyle::circle(),
            tooltip: None,
            data: SeriesData::Scatter(points),
        }
    }
}

impl Default for SeasonTrendBuilder {
    fn default() -> Self {
        Self::new()
    }
}
