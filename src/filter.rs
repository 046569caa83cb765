use crate::classify::{CellOverlay, CountBasis};
use crate::consts::SEASON_YEAR;
use crate::error::{ScorigamiError, SgResult};
use crate::loader::Dataset;
use crate::model::Tour;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// A multi-select control value: everything, or an explicit set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    All,
    Picked(BTreeSet<T>),
}

impl<T: Ord> Selection<T> {
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Picked(set) => set.contains(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// Parses raw multi-select values. Selecting "all" alongside explicit
/// values collapses the whole selection to `All` (absorption rule), and an
/// empty selection also means `All`.
pub fn parse_selection<T>(raw: &[String]) -> SgResult<Selection<T>>
where
    T: FromStr + Ord,
    T::Err: Display,
{
    let mut set = BTreeSet::new();
    for item in raw {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if item.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        let value = item.parse::<T>().map_err(|e| {
            ScorigamiError::Config(format!("invalid selection value '{item}': {e}"))
        })?;
        set.insert(value);
    }
    if set.is_empty() {
        Ok(Selection::All)
    } else {
        Ok(Selection::Picked(set))
    }
}

/// Free-form explorer state: which tours and years are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerFilter {
    pub tours: Selection<Tour>,
    pub years: Selection<u16>,
}

impl Default for ExplorerFilter {
    fn default() -> Self {
        Self {
            tours: Selection::All,
            years: Selection::All,
        }
    }
}

impl ExplorerFilter {
    pub fn parse(tours: &[String], years: &[String]) -> SgResult<Self> {
        Ok(Self {
            tours: parse_selection::<Tour>(tours)?,
            years: parse_selection::<u16>(years)?,
        })
    }

    /// The single selected tour, if the selection narrows to one.
    /// Selecting both tours is equivalent to selecting all.
    pub fn effective_tour(&self) -> Option<Tour> {
        match &self.tours {
            Selection::Picked(set) if set.len() == 1 => set.iter().next().copied(),
            _ => None,
        }
    }

    fn tour_matches(&self, tour: Tour) -> bool {
        self.tours.contains(&tour)
    }

    fn is_season_only(&self) -> bool {
        matches!(&self.years, Selection::Picked(set)
            if set.len() == 1 && set.contains(&SEASON_YEAR))
    }
}

/// Per-record explorer projection: one overlay per scoreline record plus
/// the count basis the classifier should grade against.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub overlays: Vec<CellOverlay>,
    pub basis: CountBasis,
}

impl FilterView {
    /// Derives `filtered_count` / `filtered_observed` for every record.
    ///
    /// Rules in priority order: all years use the precomputed all-time
    /// counters (combined or per-tour); the 2024-only selection uses the
    /// precomputed season counters; anything else is counted from the raw
    /// match list in one parallel pass.
    pub fn derive(dataset: &Dataset, filter: &ExplorerFilter) -> Self {
        let tour = filter.effective_tour();

        if filter.years.is_all() {
            let overlays = dataset
                .scorelines
                .iter()
                .map(|r| {
                    let count = r.count_all_time_for(tour);
                    precomputed(count)
                })
                .collect();
            return Self {
                overlays,
                basis: CountBasis::AllTime,
            };
        }

        if filter.is_season_only() {
            let overlays = dataset
                .scorelines
                .iter()
                .map(|r| {
                    let count = r.count_2024_for(tour);
                    precomputed(count)
                })
                .collect();
            return Self {
                overlays,
                basis: CountBasis::season(tour),
            };
        }

        // Arbitrary year combinations have no precomputed aggregate. One
        // parallel pass over the match list builds per-scoreline counts;
        // never a per-record rescan.
        let counts: HashMap<&str, u64> = dataset
            .matches
            .par_iter()
            .filter(|m| filter.years.contains(&m.year) && filter.tour_matches(m.tour))
            .fold(HashMap::new, |mut map: HashMap<&str, u64>, m| {
                *map.entry(m.scoreline.as_str()).or_insert(0) += 1;
                map
            })
            .reduce(HashMap::new, |mut a, b| {
                for (scoreline, n) in b {
                    *a.entry(scoreline).or_insert(0) += n;
                }
                a
            });

        debug!(
            "Derived counts for {} observed scorelines from the match list",
            counts.len()
        );

        let overlays = dataset
            .scorelines
            .iter()
            .map(|r| {
                let count = counts.get(r.scoreline.as_str()).copied().unwrap_or(0);
                precomputed(count)
            })
            .collect();

        Self {
            overlays,
            basis: CountBasis::SingleYear,
        }
    }
}

fn precomputed(count: u64) -> CellOverlay {
    CellOverlay {
        filtered_count: count,
        filtered_observed: count > 0,
        ..CellOverlay::default()
    }
}
