use crate::loader::Dataset;
use crate::model::AggregateCount;
use serde::Serialize;

/// A scoreline singled out by the statistics (most popular per period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopScore {
    pub scoreline: String,
    pub count: u64,
}

/// Global summary numbers for the narrative copy and the stats report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Size of the scoreline universe (all mathematically possible).
    pub universe: usize,

    /// Years with match data, most recent first.
    pub years: Vec<u16>,

    pub observed_atp_2024: usize,
    pub observed_wta_2024: usize,
    pub observed_2024: usize,
    /// Share of the universe seen in 2024, in percent.
    pub coverage_2024_pct: f64,

    pub matches_atp_2024: u64,
    pub matches_wta_2024: u64,
    pub matches_2024: u64,

    pub observed_all_time: usize,
    pub never_seen: usize,

    /// Lexicographically first scoreline that occurred exactly once.
    pub rarest_2024: Option<String>,
    pub rarest_all_time: Option<String>,

    pub popular_2024: Option<TopScore>,
    pub popular_all_time: Option<TopScore>,
}

fn rarest(counts: &[AggregateCount]) -> Option<String> {
    counts
        .iter()
        .filter(|c| c.total_count == 1)
        .map(|c| c.scoreline.as_str())
        .min()
        .map(str::to_string)
}

fn most_popular(counts: &[AggregateCount]) -> Option<TopScore> {
    counts
        .iter()
        .max_by_key(|c| c.total_count)
        .filter(|c| c.total_count > 0)
        .map(|c| TopScore {
            scoreline: c.scoreline.clone(),
            count: c.total_count,
        })
}

impl Statistics {
    pub fn compute(dataset: &Dataset) -> Self {
        let scorelines = &dataset.scorelines;
        let universe = scorelines.len();

        let observed_atp_2024 = scorelines.iter().filter(|s| s.count_atp_2024 > 0).count();
        let observed_wta_2024 = scorelines.iter().filter(|s| s.count_wta_2024 > 0).count();
        let observed_2024 = scorelines.iter().filter(|s| s.count_2024 > 0).count();

        let coverage_2024_pct = if universe > 0 {
            observed_2024 as f64 / universe as f64 * 100.0
        } else {
            0.0
        };

        let matches_atp_2024: u64 = scorelines.iter().map(|s| s.count_atp_2024).sum();
        let matches_wta_2024: u64 = scorelines.iter().map(|s| s.count_wta_2024).sum();

        let observed_all_time = scorelines.iter().filter(|s| s.count_all_time > 0).count();

        Self {
            universe,
            years: dataset.years(),
            observed_atp_2024,
            observed_wta_2024,
            observed_2024,
            coverage_2024_pct,
            matches_atp_2024,
            matches_wta_2024,
            matches_2024: matches_atp_2024 + matches_wta_2024,
            observed_all_time,
            never_seen: universe - observed_all_time,
            rarest_2024: rarest(&dataset.counts_2024),
            rarest_all_time: rarest(&dataset.counts_all_time),
            popular_2024: most_popular(&dataset.counts_2024),
            popular_all_time: most_popular(&dataset.counts_all_time),
        }
    }
}
