use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where the five pre-aggregated CSV files live. All file names can be
/// overridden individually for non-standard data drops.
#[derive(Args, Debug, Clone)]
pub struct DataPaths {
    #[arg(global = true, short, long, default_value = "processed_data")]
    pub data_dir: String,

    #[arg(global = true, long, default_value = "all_scorelines.csv")]
    pub scorelines_file: String,

    #[arg(global = true, long, default_value = "all_tennis_matches.csv")]
    pub matches_file: String,

    #[arg(global = true, long, default_value = "year_counts.csv")]
    pub year_counts_file: String,

    #[arg(global = true, long, default_value = "scoreline_counts_2024.csv")]
    pub counts_2024_file: String,

    #[arg(global = true, long, default_value = "scoreline_counts_all_time.csv")]
    pub counts_all_time_file: String,
}

impl DataPaths {
    /// All defaults under the given directory. Used by tests.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            data_dir: dir.as_ref().to_string_lossy().into_owned(),
            scorelines_file: "all_scorelines.csv".to_string(),
            matches_file: "all_tennis_matches.csv".to_string(),
            year_counts_file: "year_counts.csv".to_string(),
            counts_2024_file: "scoreline_counts_2024.csv".to_string(),
            counts_all_time_file: "scoreline_counts_all_time.csv".to_string(),
        }
    }

    pub fn scorelines(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.scorelines_file)
    }

    pub fn matches(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.matches_file)
    }

    pub fn year_counts(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.year_counts_file)
    }

    pub fn counts_2024(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.counts_2024_file)
    }

    pub fn counts_all_time(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.counts_all_time_file)
    }
}

/// Inclusive upper bounds for the three lower intensity tiers. Anything
/// above `common` is "very common"; zero is always "not observed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub rare: u64,
    pub uncommon: u64,
    pub common: u64,
}

impl Thresholds {
    pub const fn new(rare: u64, uncommon: u64, common: u64) -> Self {
        Self {
            rare,
            uncommon,
            common,
        }
    }
}

/// Hand-tuned per-mode thresholds. A season and 56 seasons of matches
/// differ by two orders of magnitude, and the tours differ in volume, so a
/// single global scale would wash out the smaller datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSet {
    pub combined_2024: Thresholds,
    pub atp_2024: Thresholds,
    pub wta_2024: Thresholds,
    pub all_time: Thresholds,
    pub single_year: Thresholds,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            combined_2024: Thresholds::new(50, 100, 180),
            atp_2024: Thresholds::new(30, 60, 120),
            wta_2024: Thresholds::new(15, 40, 70),
            all_time: Thresholds::new(100, 500, 1000),
            single_year: Thresholds::new(5, 20, 50),
        }
    }
}

impl ThresholdSet {
    /// Lenient load: a missing or malformed file falls back to the
    /// embedded defaults with a warning, it never aborts startup.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(set) => set,
                Err(e) => {
                    warn!("⚠️  Bad threshold file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "⚠️  Could not read threshold file {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
