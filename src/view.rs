use crate::classify::{
    legend, popular_threshold, CellOverlay, Classifier, ColorBucket, CountBasis, LegendItem, Mode,
};
use crate::config::ThresholdSet;
use crate::error::SgResult;
use crate::filter::{ExplorerFilter, FilterView};
use crate::grid::GridLayout;
use crate::loader::Dataset;
use crate::model::{MatchRecord, ScorelineRecord};
use crate::narrative::{Period, Step};
use serde::Serialize;
use tracing::{info, warn};

/// One mark to draw: fixed position, classified color, and the count the
/// active mode graded on (for tooltips/labels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderCell<'a> {
    pub row: usize,
    pub col: usize,
    pub scoreline: &'a str,
    pub bucket: ColorBucket,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame<'a> {
    pub mode: Mode,
    pub cells: Vec<RenderCell<'a>>,
    pub legend: Vec<LegendItem>,
}

/// Presentation capability the controller depends on. Layout and
/// classification stay pure; everything environment-specific lives behind
/// this seam.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> SgResult<()>;

    /// Fallback visual when a frame cannot be produced or drawn.
    fn placeholder(&mut self, message: &str) -> SgResult<()>;
}

/// Detail lookup result: the record's counters plus example matches,
/// most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct ScorelineDetails {
    pub record: ScorelineRecord,
    pub examples: Vec<MatchRecord>,
}

/// Owns the immutable dataset and the once-computed layout; every render
/// derives a fresh overlay projection instead of mutating records.
pub struct Controller {
    dataset: Dataset,
    layout: GridLayout,
    classifier: Classifier,
}

const EXAMPLE_LIMIT: usize = 5;

impl Controller {
    pub fn new(dataset: Dataset, thresholds: ThresholdSet) -> Self {
        let layout = GridLayout::compute(&dataset.scorelines);
        info!(
            "🎾 Grid ready: {} cells across {} scorelines",
            layout.cells.len(),
            dataset.scorelines.len()
        );
        Self {
            dataset,
            layout,
            classifier: Classifier::new(thresholds),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Builds the frame for one narrative mode. `period` selects the
    /// highlight period for the rare/popular modes.
    pub fn frame_for_mode(&self, mode: Mode, period: Option<Period>) -> RenderFrame<'_> {
        let overlays = self.overlays_for(mode, period);
        self.assemble(mode, CountBasis::AllTime, &overlays)
    }

    /// Builds the explorer frame for a tour/year selection.
    pub fn explorer_frame(&self, filter: &ExplorerFilter) -> RenderFrame<'_> {
        let view = FilterView::derive(&self.dataset, filter);
        self.assemble(Mode::Explorer, view.basis, &view.overlays)
    }

    /// Renders one narrative step. A renderer failure is contained: it is
    /// logged and a placeholder is attempted instead of propagating.
    pub fn render_step(&self, step: Step, renderer: &mut dyn Renderer) {
        match step.mode() {
            Some((mode, period)) => {
                let frame = self.frame_for_mode(mode, period);
                self.draw(renderer, &frame);
            }
            None => {
                if let Err(e) = renderer.placeholder("Ready to explore on your own") {
                    warn!("Placeholder render failed: {}", e);
                }
            }
        }
    }

    pub fn render_explorer(&self, filter: &ExplorerFilter, renderer: &mut dyn Renderer) {
        let frame = self.explorer_frame(filter);
        self.draw(renderer, &frame);
    }

    fn draw(&self, renderer: &mut dyn Renderer, frame: &RenderFrame<'_>) {
        if let Err(e) = renderer.render(frame) {
            warn!("Render failed for mode {}: {}", frame.mode, e);
            if let Err(e) = renderer.placeholder("Visualization not available") {
                warn!("Placeholder render failed: {}", e);
            }
        }
    }

    /// All counters for one scoreline plus up to five example matches,
    /// most recent year first. `None` for an unknown scoreline.
    pub fn score_details(&self, scoreline: &str) -> Option<ScorelineDetails> {
        let record = self
            .dataset
            .scorelines
            .iter()
            .find(|r| r.scoreline == scoreline)?
            .clone();

        let mut examples: Vec<MatchRecord> = self
            .dataset
            .matches
            .iter()
            .filter(|m| m.scoreline == scoreline)
            .cloned()
            .collect();
        examples.sort_by(|a, b| b.year.cmp(&a.year));
        examples.truncate(EXAMPLE_LIMIT);

        Some(ScorelineDetails { record, examples })
    }

    fn assemble(
        &self,
        mode: Mode,
        basis: CountBasis,
        overlays: &[CellOverlay],
    ) -> RenderFrame<'_> {
        let records = &self.dataset.scorelines;
        let cells = self
            .layout
            .cells
            .iter()
            .map(|cell| {
                let record = &records[cell.record];
                let overlay = overlays
                    .get(cell.record)
                    .copied()
                    .unwrap_or_default();
                RenderCell {
                    row: cell.row,
                    col: cell.col,
                    scoreline: &record.scoreline,
                    bucket: self.classifier.classify(mode, basis, record, &overlay),
                    count: Self::tooltip_count(mode, record, &overlay),
                }
            })
            .collect();

        RenderFrame {
            mode,
            cells,
            legend: legend(mode, basis, &self.classifier.thresholds),
        }
    }

    /// Count shown alongside a cell, per mode.
    fn tooltip_count(mode: Mode, record: &ScorelineRecord, overlay: &CellOverlay) -> u64 {
        match mode {
            Mode::Atp2024 => record.count_atp_2024,
            Mode::Wta2024 => record.count_wta_2024,
            Mode::Combined2024 => record.count_2024,
            Mode::Explorer => overlay.filtered_count,
            Mode::Rare | Mode::Popular => {
                if overlay.rare_2024 || overlay.popular_2024 {
                    record.count_2024
                } else {
                    record.count_all_time
                }
            }
            _ => record.count_all_time,
        }
    }

    fn overlays_for(&self, mode: Mode, period: Option<Period>) -> Vec<CellOverlay> {
        let records = &self.dataset.scorelines;
        let mut overlays = vec![CellOverlay::default(); records.len()];

        match (mode, period) {
            (Mode::Rare, Some(Period::Season2024)) => {
                for (overlay, record) in overlays.iter_mut().zip(records) {
                    overlay.rare_2024 = record.count_2024 == 1;
                }
            }
            (Mode::Rare, Some(Period::AllTime)) => {
                for (overlay, record) in overlays.iter_mut().zip(records) {
                    overlay.rare_all_time = record.count_all_time == 1;
                }
            }
            (Mode::Popular, Some(Period::Season2024)) => {
                let counts: Vec<u64> = records.iter().map(|r| r.count_2024).collect();
                let threshold = popular_threshold(&counts);
                if threshold > 0 {
                    for (overlay, record) in overlays.iter_mut().zip(records) {
                        overlay.popular_2024 = record.count_2024 >= threshold;
                    }
                }
            }
            (Mode::Popular, Some(Period::AllTime)) => {
                let counts: Vec<u64> = records.iter().map(|r| r.count_all_time).collect();
                let threshold = popular_threshold(&counts);
                if threshold > 0 {
                    for (overlay, record) in overlays.iter_mut().zip(records) {
                        overlay.popular_all_time = record.count_all_time >= threshold;
                    }
                }
            }
            _ => {}
        }

        overlays
    }
}
