use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use scorigami::classify::ColorBucket;
use scorigami::consts::ROW_COUNT;
use scorigami::error::SgResult;
use scorigami::grid::row_label;
use scorigami::view::{RenderFrame, Renderer};

/// Terminal renderer: one glyph per grid cell, row labels on the left,
/// legend table underneath.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph(bucket: ColorBucket) -> char {
    match bucket {
        ColorBucket::Blank => '·',
        ColorBucket::Rare => '░',
        ColorBucket::Uncommon => '▒',
        ColorBucket::Common => '▓',
        ColorBucket::VeryCommon => '█',
        ColorBucket::StraightSets => '▓',
        ColorBucket::ThreeSets => '▒',
        ColorBucket::NeverSeen => 'X',
        ColorBucket::Season => '@',
        ColorBucket::Historic => '%',
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> SgResult<()> {
        let mut rows: Vec<Vec<char>> = vec![Vec::new(); ROW_COUNT];
        for cell in &frame.cells {
            if cell.row >= ROW_COUNT {
                continue;
            }
            let row = &mut rows[cell.row];
            if row.len() <= cell.col {
                row.resize(cell.col + 1, ' ');
            }
            row[cell.col] = glyph(cell.bucket);
        }

        for (i, row) in rows.iter().enumerate() {
            let label = row_label(i).unwrap_or("");
            let line: String = row.iter().flat_map(|c| [*c, ' ']).collect();
            println!("{:>4} | {}", label, line.trim_end());
        }

        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.set_header(vec!["", "Legend", "Color"]);
        for item in &frame.legend {
            let mark = glyph_for_color(item.color);
            table.add_row(vec![
                Cell::new(mark).set_alignment(CellAlignment::Center),
                Cell::new(&item.label),
                Cell::new(item.color),
            ]);
        }
        println!("{table}");
        Ok(())
    }

    fn placeholder(&mut self, message: &str) -> SgResult<()> {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.add_row(vec![Cell::new(message).set_alignment(CellAlignment::Center)]);
        println!("{table}");
        Ok(())
    }
}

/// Legend mark matching the grid glyph for a palette color.
fn glyph_for_color(color: &str) -> char {
    match color {
        "#FFFFFF" => '·',
        "#B8E8C2" => '░',
        "#A2F359" => '▒',
        "#4D9F64" => '▓',
        "#13472A" => '█',
        "#FF5252" => 'X',
        "#FF9800" => '@',
        "#9C27B0" => '%',
        _ => ' ',
    }
}
