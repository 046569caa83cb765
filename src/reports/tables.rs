use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use scorigami::stats::{Statistics, TopScore};
use scorigami::view::ScorelineDetails;

fn top(score: &Option<TopScore>) -> String {
    match score {
        Some(t) => format!("{} ({} matches)", t.scoreline, t.count),
        None => "N/A".to_string(),
    }
}

pub fn statistics(stats: &Statistics) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Statistic").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Possible scorelines"),
        Cell::new(stats.universe),
    ]);
    if let (Some(newest), Some(oldest)) = (stats.years.first(), stats.years.last()) {
        table.add_row(vec![
            Cell::new("Years covered"),
            Cell::new(format!("{}-{} ({} years)", oldest, newest, stats.years.len())),
        ]);
    }
    table.add_row(vec![
        Cell::new("Observed in 2024 (ATP)"),
        Cell::new(format!(
            "{} scorelines / {} matches",
            stats.observed_atp_2024, stats.matches_atp_2024
        )),
    ]);
    table.add_row(vec![
        Cell::new("Observed in 2024 (WTA)"),
        Cell::new(format!(
            "{} scorelines / {} matches",
            stats.observed_wta_2024, stats.matches_wta_2024
        )),
    ]);
    table.add_row(vec![
        Cell::new("Observed in 2024 (combined)"),
        Cell::new(format!(
            "{} scorelines / {} matches ({:.1}% of all possible)",
            stats.observed_2024, stats.matches_2024, stats.coverage_2024_pct
        )),
    ]);
    table.add_row(vec![
        Cell::new("Observed since 1968"),
        Cell::new(stats.observed_all_time),
    ]);
    table.add_row(vec![Cell::new("Never seen"), Cell::new(stats.never_seen)]);
    table.add_row(vec![
        Cell::new("Rarest in 2024"),
        Cell::new(stats.rarest_2024.as_deref().unwrap_or("N/A")),
    ]);
    table.add_row(vec![
        Cell::new("Rarest all-time"),
        Cell::new(stats.rarest_all_time.as_deref().unwrap_or("N/A")),
    ]);
    table.add_row(vec![
        Cell::new("Most popular in 2024"),
        Cell::new(top(&stats.popular_2024)),
    ]);
    table.add_row(vec![
        Cell::new("Most popular all-time"),
        Cell::new(top(&stats.popular_all_time)),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
}

pub fn details(details: &ScorelineDetails) {
    let record = &details.record;

    println!("\nScore: {}", record.scoreline);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Period").add_attribute(Attribute::Bold),
        Cell::new("ATP"),
        Cell::new("WTA"),
        Cell::new("Total"),
    ]);
    table.add_row(vec![
        Cell::new("2024"),
        Cell::new(record.count_atp_2024),
        Cell::new(record.count_wta_2024),
        Cell::new(record.count_2024),
    ]);
    table.add_row(vec![
        Cell::new("All-Time"),
        Cell::new(record.count_atp_all_time),
        Cell::new(record.count_wta_all_time),
        Cell::new(record.count_all_time),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");

    if details.examples.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Match"),
        Cell::new("Tournament"),
        Cell::new("Surface"),
    ]);
    for m in &details.examples {
        table.add_row(vec![
            Cell::new(m.year),
            Cell::new(format!("{} def. {}", m.winner_name, m.loser_name)),
            Cell::new(&m.tourney_name),
            Cell::new(&m.surface),
        ]);
    }
    println!("{table}");
}
