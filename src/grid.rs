use crate::consts::{LOSING_SET_ORDER, ROW_COUNT, WINNING_SET_ORDER};
use crate::model::ScorelineRecord;
use serde::Serialize;
use tracing::warn;

/// Position of one record in the 14-row grid. Purely derived; recomputed
/// whenever the record collection is re-sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Index into the record slice the layout was computed from.
    pub record: usize,
    pub row: usize,
    pub col: usize,
}

/// Static grid positions for a record collection. Rows are ragged: the
/// rendering layer positions each cell by its own indices, not by a shared
/// row length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub cells: Vec<GridCell>,
}

/// Row index for a first-set result, top half first.
pub fn first_set_row(first_set: &str) -> Option<usize> {
    WINNING_SET_ORDER
        .iter()
        .position(|s| *s == first_set)
        .or_else(|| {
            LOSING_SET_ORDER
                .iter()
                .position(|s| *s == first_set)
                .map(|i| i + WINNING_SET_ORDER.len())
        })
}

/// Label for a row index, if in range.
pub fn row_label(row: usize) -> Option<&'static str> {
    if row < WINNING_SET_ORDER.len() {
        Some(WINNING_SET_ORDER[row])
    } else {
        LOSING_SET_ORDER.get(row - WINNING_SET_ORDER.len()).copied()
    }
}

/// Rank of a second-set score in the winning order; scores outside the
/// order (the match winner dropped that set) all rank last together.
fn winning_rank(score: &str) -> isize {
    WINNING_SET_ORDER
        .iter()
        .position(|s| *s == score)
        .map(|i| i as isize)
        .unwrap_or(-1)
}

fn set3_key(record: &ScorelineRecord) -> &str {
    record.set3_score.as_deref().unwrap_or("")
}

impl GridLayout {
    /// Assigns every record a unique `(row, col)`. Pure: two calls on an
    /// unchanged slice yield identical assignments.
    ///
    /// Rows follow the fixed 14-entry first-set order. Within a row,
    /// records sort by second-set rank in the 7-entry winning order,
    /// ascending in the top half and descending in the bottom half (so the
    /// more dominant outcome always faces the grid's center), with ties
    /// broken by third-set score and finally by the second-set string.
    pub fn compute(records: &[ScorelineRecord]) -> Self {
        let mut cells = Vec::with_capacity(records.len());
        let mut placed = 0usize;

        for row in 0..ROW_COUNT {
            let label = row_label(row).unwrap_or_default();
            let bottom_half = row >= WINNING_SET_ORDER.len();

            let mut in_row: Vec<usize> = records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.first_set == label)
                .map(|(i, _)| i)
                .collect();

            in_row.sort_by(|&a, &b| {
                let (ra, rb) = (&records[a], &records[b]);
                let rank_a = winning_rank(&ra.set2_score);
                let rank_b = winning_rank(&rb.set2_score);

                let primary = if bottom_half {
                    rank_b.cmp(&rank_a)
                } else {
                    rank_a.cmp(&rank_b)
                };

                primary
                    .then_with(|| set3_key(ra).cmp(&set3_key(rb)))
                    .then_with(|| ra.set2_score.cmp(&rb.set2_score))
            });

            for (col, record) in in_row.into_iter().enumerate() {
                cells.push(GridCell { record, row, col });
                placed += 1;
            }
        }

        if placed < records.len() {
            warn!(
                "{} records have a first-set result outside the fixed row order and were not placed",
                records.len() - placed
            );
        }

        Self { cells }
    }

    /// Number of cells placed in each of the 14 rows.
    pub fn row_widths(&self) -> [usize; ROW_COUNT] {
        let mut widths = [0usize; ROW_COUNT];
        for cell in &self.cells {
            widths[cell.row] = widths[cell.row].max(cell.col + 1);
        }
        widths
    }
}
