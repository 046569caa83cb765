use scorigami::classify::CountBasis;
use scorigami::filter::{parse_selection, ExplorerFilter, FilterView, Selection};
use scorigami::loader::Dataset;
use scorigami::model::{MatchRecord, ScorelineRecord, Tour};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scoreline(name: &str, all_time: (u64, u64), season: (u64, u64)) -> ScorelineRecord {
    let (atp_all, wta_all) = all_time;
    let (atp_2024, wta_2024) = season;
    ScorelineRecord {
        scoreline: name.to_string(),
        first_set: name.split(',').next().unwrap_or("").trim().to_string(),
        set2_score: String::new(),
        set3_score: None,
        is_straight_sets: true,
        num_sets: 2,
        count_all_time: atp_all + wta_all,
        count_atp_all_time: atp_all,
        count_wta_all_time: wta_all,
        count_2024: atp_2024 + wta_2024,
        count_atp_2024: atp_2024,
        count_wta_2024: wta_2024,
        observed_all_time: atp_all + wta_all > 0,
        observed_2024: atp_2024 + wta_2024 > 0,
    }
}

fn m(year: u16, tour: Tour, name: &str) -> MatchRecord {
    MatchRecord {
        year,
        tour,
        scoreline: name.to_string(),
        winner_name: String::new(),
        loser_name: String::new(),
        tourney_name: String::new(),
        surface: String::new(),
    }
}

fn dataset() -> Dataset {
    Dataset {
        scorelines: vec![
            scoreline("6-4, 6-2", (900, 600), (70, 50)),
            scoreline("7-6, 3-6, 7-5", (10, 0), (0, 0)),
            scoreline("6-0, 6-0", (0, 0), (0, 0)),
        ],
        matches: vec![
            m(2015, Tour::Atp, "6-4, 6-2"),
            m(2015, Tour::Atp, "6-4, 6-2"),
            m(2015, Tour::Wta, "6-4, 6-2"),
            m(2016, Tour::Wta, "6-4, 6-2"),
            m(2015, Tour::Wta, "7-6, 3-6, 7-5"),
            m(2024, Tour::Atp, "6-4, 6-2"),
        ],
        year_counts: Vec::new(),
        counts_2024: Vec::new(),
        counts_all_time: Vec::new(),
    }
}

#[test]
fn test_all_absorbs_explicit_values() {
    let sel: Selection<u16> = parse_selection(&strings(&["all", "2015"])).unwrap();
    assert!(sel.is_all());
    let sel: Selection<u16> = parse_selection(&strings(&["2015", "ALL"])).unwrap();
    assert!(sel.is_all());
}

#[test]
fn test_empty_selection_means_all() {
    let sel: Selection<Tour> = parse_selection(&[]).unwrap();
    assert!(sel.is_all());
    let sel: Selection<Tour> = parse_selection(&strings(&["", "  "])).unwrap();
    assert!(sel.is_all());
}

#[test]
fn test_invalid_selection_value_is_an_error() {
    let err = parse_selection::<u16>(&strings(&["20x5"])).unwrap_err();
    assert!(err.to_string().contains("20x5"));
}

#[test]
fn test_tour_selection_is_case_insensitive() {
    let sel: Selection<Tour> = parse_selection(&strings(&["atp"])).unwrap();
    assert!(sel.contains(&Tour::Atp));
    assert!(!sel.contains(&Tour::Wta));
}

#[test]
fn test_both_tours_is_no_effective_tour() {
    let filter = ExplorerFilter::parse(&strings(&["atp", "wta"]), &strings(&["all"])).unwrap();
    assert_eq!(filter.effective_tour(), None);

    let filter = ExplorerFilter::parse(&strings(&["wta"]), &strings(&["all"])).unwrap();
    assert_eq!(filter.effective_tour(), Some(Tour::Wta));
}

#[test]
fn test_all_years_uses_all_time_counters() {
    let data = dataset();
    let view = FilterView::derive(&data, &ExplorerFilter::default());

    assert_eq!(view.basis, CountBasis::AllTime);
    assert_eq!(view.overlays[0].filtered_count, 1500);
    assert!(view.overlays[0].filtered_observed);
    assert_eq!(view.overlays[2].filtered_count, 0);
    assert!(!view.overlays[2].filtered_observed);
}

#[test]
fn test_all_years_with_tour_uses_per_tour_counters() {
    let data = dataset();
    let filter = ExplorerFilter::parse(&strings(&["wta"]), &strings(&["all"])).unwrap();
    let view = FilterView::derive(&data, &filter);

    assert_eq!(view.basis, CountBasis::AllTime);
    assert_eq!(view.overlays[0].filtered_count, 600);
    // ATP-only scoreline disappears under the WTA filter.
    assert_eq!(view.overlays[1].filtered_count, 0);
    assert!(!view.overlays[1].filtered_observed);
}

#[test]
fn test_season_only_uses_precomputed_2024_counters() {
    let data = dataset();

    let combined = ExplorerFilter::parse(&strings(&["all"]), &strings(&["2024"])).unwrap();
    let view = FilterView::derive(&data, &combined);
    assert_eq!(view.basis, CountBasis::Combined2024);
    assert_eq!(view.overlays[0].filtered_count, 120);

    let atp_only = ExplorerFilter::parse(&strings(&["atp"]), &strings(&["2024"])).unwrap();
    let view = FilterView::derive(&data, &atp_only);
    assert_eq!(view.basis, CountBasis::Atp2024);
    assert_eq!(view.overlays[0].filtered_count, 70);
}

#[test]
fn test_other_years_count_from_match_list() {
    let data = dataset();
    let filter = ExplorerFilter::parse(&strings(&["all"]), &strings(&["2015"])).unwrap();
    let view = FilterView::derive(&data, &filter);

    assert_eq!(view.basis, CountBasis::SingleYear);
    assert_eq!(view.overlays[0].filtered_count, 3);
    assert_eq!(view.overlays[1].filtered_count, 1);
    assert_eq!(view.overlays[2].filtered_count, 0);
}

#[test]
fn test_multi_year_selection_sums_match_counts() {
    let data = dataset();
    let filter = ExplorerFilter::parse(&strings(&["all"]), &strings(&["2015", "2016"])).unwrap();
    let view = FilterView::derive(&data, &filter);

    assert_eq!(view.basis, CountBasis::SingleYear);
    assert_eq!(view.overlays[0].filtered_count, 4);
}

#[test]
fn test_match_list_path_respects_tour_filter() {
    let data = dataset();
    let filter = ExplorerFilter::parse(&strings(&["atp"]), &strings(&["2015"])).unwrap();
    let view = FilterView::derive(&data, &filter);

    assert_eq!(view.overlays[0].filtered_count, 2);
    assert_eq!(view.overlays[1].filtered_count, 0);
}

#[test]
fn test_match_list_path_agrees_with_precomputed_2024_counters() {
    // A dataset whose 2024 counters are consistent with its match list.
    let mut data = dataset();
    data.scorelines[0].count_2024 = 1;
    data.scorelines[0].count_atp_2024 = 1;
    data.scorelines[0].count_wta_2024 = 0;
    data.scorelines[1].count_2024 = 0;
    data.scorelines[1].count_atp_2024 = 0;
    data.scorelines[1].count_wta_2024 = 0;

    let season = ExplorerFilter::parse(&strings(&["all"]), &strings(&["2024"])).unwrap();
    let precomputed = FilterView::derive(&data, &season);

    // Adding a year with no matches forces the match-list path without
    // changing which matches qualify.
    let forced = ExplorerFilter::parse(&strings(&["all"]), &strings(&["2024", "1999"])).unwrap();
    let scanned = FilterView::derive(&data, &forced);

    assert_eq!(precomputed.basis, CountBasis::Combined2024);
    assert_eq!(scanned.basis, CountBasis::SingleYear);
    for (a, b) in precomputed.overlays.iter().zip(&scanned.overlays) {
        assert_eq!(a.filtered_count, b.filtered_count);
        assert_eq!(a.filtered_observed, b.filtered_observed);
    }
}

#[test]
fn test_2024_alongside_other_years_falls_back_to_match_list() {
    let data = dataset();
    let filter =
        ExplorerFilter::parse(&strings(&["all"]), &strings(&["2024", "2015"])).unwrap();
    let view = FilterView::derive(&data, &filter);

    // Not season-only, so the precomputed 2024 aggregate no longer applies.
    assert_eq!(view.basis, CountBasis::SingleYear);
    assert_eq!(view.overlays[0].filtered_count, 4);
}
