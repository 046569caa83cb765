use crate::config::{ThresholdSet, Thresholds};
use crate::model::{ScorelineRecord, Tour};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Discrete color bucket for one grid cell. The palette is fixed; every
/// bucket maps to exactly one hex color and legend label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorBucket {
    /// Possible but not observed under the current mode.
    Blank,
    Rare,
    Uncommon,
    Common,
    VeryCommon,
    StraightSets,
    ThreeSets,
    NeverSeen,
    /// 2024-period highlight (rare / popular modes).
    Season,
    /// All-time-period highlight (rare / popular modes).
    Historic,
}

impl ColorBucket {
    pub fn hex(self) -> &'static str {
        match self {
            ColorBucket::Blank => "#FFFFFF",
            ColorBucket::Rare => "#B8E8C2",
            ColorBucket::Uncommon => "#A2F359",
            ColorBucket::Common => "#4D9F64",
            ColorBucket::VeryCommon => "#13472A",
            ColorBucket::StraightSets => "#4D9F64",
            ColorBucket::ThreeSets => "#A2F359",
            ColorBucket::NeverSeen => "#FF5252",
            ColorBucket::Season => "#FF9800",
            ColorBucket::Historic => "#9C27B0",
        }
    }

    /// Whether the bucket marks an observed / highlighted cell. Blank
    /// cells get the faint outline treatment in renderers.
    pub fn is_highlighted(self) -> bool {
        self != ColorBucket::Blank
    }
}

/// Display modes. Narrative steps and the explorer both resolve to one of
/// these before classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    AllScores,
    StraightSets,
    ThreeSets,
    #[strum(serialize = "atp-2024")]
    Atp2024,
    #[strum(serialize = "wta-2024")]
    Wta2024,
    #[strum(serialize = "combined-2024")]
    Combined2024,
    AllTime,
    NeverSeen,
    Rare,
    Popular,
    Explorer,
}

/// Which count family the explorer is currently looking at. Decides the
/// threshold table and legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountBasis {
    AllTime,
    Combined2024,
    Atp2024,
    Wta2024,
    /// Any other single year or multi-year combination, counted from the
    /// raw match list.
    SingleYear,
}

impl CountBasis {
    /// Basis for the precomputed 2024 counters under a tour selection.
    pub fn season(tour: Option<Tour>) -> Self {
        match tour {
            Some(Tour::Atp) => CountBasis::Atp2024,
            Some(Tour::Wta) => CountBasis::Wta2024,
            None => CountBasis::Combined2024,
        }
    }
}

/// Per-record transient state for one render. The base records stay
/// immutable; each render derives a fresh overlay and throws it away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellOverlay {
    pub filtered_count: u64,
    pub filtered_observed: bool,
    pub rare_2024: bool,
    pub rare_all_time: bool,
    pub popular_2024: bool,
    pub popular_all_time: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    pub thresholds: ThresholdSet,
}

impl Classifier {
    pub fn new(thresholds: ThresholdSet) -> Self {
        Self { thresholds }
    }

    fn for_basis(&self, basis: CountBasis) -> Thresholds {
        match basis {
            CountBasis::AllTime => self.thresholds.all_time,
            CountBasis::Combined2024 => self.thresholds.combined_2024,
            CountBasis::Atp2024 => self.thresholds.atp_2024,
            CountBasis::Wta2024 => self.thresholds.wta_2024,
            CountBasis::SingleYear => self.thresholds.single_year,
        }
    }

    fn graded(&self, count: u64, basis: CountBasis) -> ColorBucket {
        if count == 0 {
            return ColorBucket::Blank;
        }
        let t = self.for_basis(basis);
        if count <= t.rare {
            ColorBucket::Rare
        } else if count <= t.uncommon {
            ColorBucket::Uncommon
        } else if count <= t.common {
            ColorBucket::Common
        } else {
            ColorBucket::VeryCommon
        }
    }

    /// Total classification: every mode applied to every record returns a
    /// bucket. Counts were coerced at the load boundary, so a damaged
    /// field shows up here as 0 and maps to `Blank`, never a panic.
    ///
    /// `basis` is only consulted by `Mode::Explorer`.
    pub fn classify(
        &self,
        mode: Mode,
        basis: CountBasis,
        record: &ScorelineRecord,
        overlay: &CellOverlay,
    ) -> ColorBucket {
        match mode {
            Mode::AllScores => ColorBucket::Blank,
            Mode::StraightSets => {
                if record.is_straight_sets {
                    ColorBucket::StraightSets
                } else {
                    ColorBucket::Blank
                }
            }
            Mode::ThreeSets => {
                if record.is_straight_sets {
                    ColorBucket::Blank
                } else {
                    ColorBucket::ThreeSets
                }
            }
            Mode::Atp2024 => self.graded(record.count_atp_2024, CountBasis::Atp2024),
            Mode::Wta2024 => self.graded(record.count_wta_2024, CountBasis::Wta2024),
            Mode::Combined2024 => self.graded(record.count_2024, CountBasis::Combined2024),
            Mode::AllTime => self.graded(record.count_all_time, CountBasis::AllTime),
            Mode::NeverSeen => {
                if record.count_all_time == 0 {
                    ColorBucket::NeverSeen
                } else {
                    ColorBucket::Blank
                }
            }
            // The period flags are independent; the season flag wins when
            // both are set.
            Mode::Rare => {
                if overlay.rare_2024 {
                    ColorBucket::Season
                } else if overlay.rare_all_time {
                    ColorBucket::Historic
                } else {
                    ColorBucket::Blank
                }
            }
            Mode::Popular => {
                if overlay.popular_2024 {
                    ColorBucket::Season
                } else if overlay.popular_all_time {
                    ColorBucket::Historic
                } else {
                    ColorBucket::Blank
                }
            }
            Mode::Explorer => {
                if !overlay.filtered_observed {
                    ColorBucket::Blank
                } else {
                    self.graded(overlay.filtered_count, basis)
                }
            }
        }
    }
}

/// "Top 10%" cutoff: the count at index `floor(0.1 * N)` of the observed
/// counts sorted descending. The floor indexing is preserved exactly even
/// where it disagrees with a rounder reading of "top 10%" for small N.
pub fn popular_threshold(counts: &[u64]) -> u64 {
    let mut observed: Vec<u64> = counts.iter().copied().filter(|&c| c > 0).collect();
    if observed.is_empty() {
        return 0;
    }
    observed.sort_unstable_by(|a, b| b.cmp(a));
    let idx = observed.len() / 10;
    observed.get(idx).copied().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: &'static str,
}

impl LegendItem {
    fn new(label: impl Into<String>, color: &'static str) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Legend entries for a mode, graded ones labelled from the active
/// threshold table (e.g. "Rare (1-50)").
pub fn legend(mode: Mode, basis: CountBasis, thresholds: &ThresholdSet) -> Vec<LegendItem> {
    let graded = |t: Thresholds| {
        vec![
            LegendItem::new("Not Observed", ColorBucket::Blank.hex()),
            LegendItem::new(format!("Rare (1-{})", t.rare), ColorBucket::Rare.hex()),
            LegendItem::new(
                format!("Uncommon ({}-{})", t.rare + 1, t.uncommon),
                ColorBucket::Uncommon.hex(),
            ),
            LegendItem::new(
                format!("Common ({}-{})", t.uncommon + 1, t.common),
                ColorBucket::Common.hex(),
            ),
            LegendItem::new(
                format!("Very Common ({}+)", t.common + 1),
                ColorBucket::VeryCommon.hex(),
            ),
        ]
    };

    match mode {
        Mode::AllScores => vec![LegendItem::new(
            "All Possible Scorelines",
            ColorBucket::Blank.hex(),
        )],
        Mode::StraightSets => vec![
            LegendItem::new("Straight Sets", ColorBucket::StraightSets.hex()),
            LegendItem::new("Three Sets", ColorBucket::Blank.hex()),
        ],
        Mode::ThreeSets => vec![
            LegendItem::new("Three Sets", ColorBucket::ThreeSets.hex()),
            LegendItem::new("Straight Sets", ColorBucket::Blank.hex()),
        ],
        Mode::Atp2024 => graded(thresholds.atp_2024),
        Mode::Wta2024 => graded(thresholds.wta_2024),
        Mode::Combined2024 => graded(thresholds.combined_2024),
        Mode::AllTime => graded(thresholds.all_time),
        Mode::Explorer => graded(match basis {
            CountBasis::AllTime => thresholds.all_time,
            CountBasis::Combined2024 => thresholds.combined_2024,
            CountBasis::Atp2024 => thresholds.atp_2024,
            CountBasis::Wta2024 => thresholds.wta_2024,
            CountBasis::SingleYear => thresholds.single_year,
        }),
        Mode::NeverSeen => vec![
            LegendItem::new("Never Seen", ColorBucket::NeverSeen.hex()),
            LegendItem::new("Observed", ColorBucket::Blank.hex()),
        ],
        Mode::Rare | Mode::Popular => vec![
            LegendItem::new("Not Selected", ColorBucket::Blank.hex()),
            LegendItem::new("2024", ColorBucket::Season.hex()),
            LegendItem::new("All-Time", ColorBucket::Historic.hex()),
        ],
    }
}
