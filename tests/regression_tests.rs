use scorigami::classify::ColorBucket;
use scorigami::config::ThresholdSet;
use scorigami::error::{ScorigamiError, SgResult};
use scorigami::filter::ExplorerFilter;
use scorigami::loader::Dataset;
use scorigami::model::{AggregateCount, MatchRecord, ScorelineRecord, Tour, YearCount};
use scorigami::narrative::Step;
use scorigami::stats::Statistics;
use scorigami::view::{Controller, RenderFrame, Renderer};

fn rec(first: &str, set2: &str, set3: Option<&str>) -> ScorelineRecord {
    let is_straight_sets = set3.is_none();
    let scoreline = match set3 {
        Some(s3) => format!("{first}, {set2}, {s3}"),
        None => format!("{first}, {set2}"),
    };
    ScorelineRecord {
        scoreline,
        first_set: first.to_string(),
        set2_score: set2.to_string(),
        set3_score: set3.map(str::to_string),
        is_straight_sets,
        num_sets: if is_straight_sets { 2 } else { 3 },
        count_all_time: 0,
        count_atp_all_time: 0,
        count_wta_all_time: 0,
        count_2024: 0,
        count_atp_2024: 0,
        count_wta_2024: 0,
        observed_all_time: false,
        observed_2024: false,
    }
}

fn dataset() -> Dataset {
    let mut double_bagel = rec("6-0", "6-0", None);
    double_bagel.count_2024 = 200;
    double_bagel.count_all_time = 900;
    double_bagel.observed_2024 = true;
    double_bagel.observed_all_time = true;

    let comeback = rec("6-7", "7-6", Some("7-5"));

    let mut once = rec("7-5", "0-6", Some("7-6"));
    once.count_2024 = 1;
    once.count_all_time = 1;
    once.observed_2024 = true;
    once.observed_all_time = true;

    Dataset {
        scorelines: vec![double_bagel, comeback, once],
        matches: vec![MatchRecord {
            year: 2024,
            tour: Tour::Wta,
            scoreline: "6-0, 6-0".to_string(),
            winner_name: "Iga Swiatek".to_string(),
            loser_name: "Anna Karolina".to_string(),
            tourney_name: "Madrid".to_string(),
            surface: "Clay".to_string(),
        }],
        year_counts: vec![
            YearCount {
                year: 2015,
                atp: 2700,
                wta: 2400,
                total: 5100,
            },
            YearCount {
                year: 2024,
                atp: 2600,
                wta: 2500,
                total: 5100,
            },
        ],
        counts_2024: vec![
            AggregateCount {
                scoreline: "6-0, 6-0".to_string(),
                total_count: 200,
                atp_count: 90,
                wta_count: 110,
            },
            AggregateCount {
                scoreline: "7-5, 0-6, 7-6".to_string(),
                total_count: 1,
                atp_count: 1,
                wta_count: 0,
            },
        ],
        counts_all_time: vec![AggregateCount {
            scoreline: "6-0, 6-0".to_string(),
            total_count: 900,
            atp_count: 500,
            wta_count: 400,
        }],
    }
}

/// Records every call instead of drawing anything.
#[derive(Default)]
struct CapturingRenderer {
    frames: Vec<(String, Vec<(usize, usize, ColorBucket)>)>,
    placeholders: Vec<String>,
}

impl Renderer for CapturingRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> SgResult<()> {
        let cells = frame
            .cells
            .iter()
            .map(|c| (c.row, c.col, c.bucket))
            .collect();
        self.frames.push((frame.mode.to_string(), cells));
        Ok(())
    }

    fn placeholder(&mut self, message: &str) -> SgResult<()> {
        self.placeholders.push(message.to_string());
        Ok(())
    }
}

/// Fails on frames so the placeholder fallback path runs.
struct BrokenRenderer {
    placeholders: usize,
}

impl Renderer for BrokenRenderer {
    fn render(&mut self, _frame: &RenderFrame<'_>) -> SgResult<()> {
        Err(ScorigamiError::Render("no display".to_string()))
    }

    fn placeholder(&mut self, _message: &str) -> SgResult<()> {
        self.placeholders += 1;
        Ok(())
    }
}

#[test]
fn test_combined_2024_step_end_to_end() {
    let controller = Controller::new(dataset(), ThresholdSet::default());
    let mut renderer = CapturingRenderer::default();

    controller.render_step(Step::Combined2024, &mut renderer);

    assert_eq!(renderer.frames.len(), 1);
    let (mode, cells) = &renderer.frames[0];
    assert_eq!(mode, "combined-2024");

    // A 6-0 opener lands on row 6, a 6-7 opener on row 7.
    assert!(cells.contains(&(6, 0, ColorBucket::VeryCommon)));
    assert!(cells.contains(&(7, 0, ColorBucket::Blank)));
    assert!(cells.contains(&(1, 0, ColorBucket::Rare)));
}

#[test]
fn test_explorer_intro_renders_placeholder() {
    let controller = Controller::new(dataset(), ThresholdSet::default());
    let mut renderer = CapturingRenderer::default();

    controller.render_step(Step::ExplorerIntro, &mut renderer);

    assert!(renderer.frames.is_empty());
    assert_eq!(renderer.placeholders.len(), 1);
}

#[test]
fn test_render_failure_is_contained() {
    let controller = Controller::new(dataset(), ThresholdSet::default());
    let mut renderer = BrokenRenderer { placeholders: 0 };

    controller.render_step(Step::Since1968, &mut renderer);
    assert_eq!(renderer.placeholders, 1);
}

#[test]
fn test_rarest_step_highlights_single_occurrence() {
    let controller = Controller::new(dataset(), ThresholdSet::default());
    let mut renderer = CapturingRenderer::default();

    controller.render_step(Step::Rarest2024, &mut renderer);

    let (_, cells) = &renderer.frames[0];
    assert!(cells.contains(&(1, 0, ColorBucket::Season)));
    assert!(cells.contains(&(6, 0, ColorBucket::Blank)));
}

#[test]
fn test_rare_flags_are_independent_per_period() {
    let mut season_once = rec("6-3", "6-2", None);
    season_once.count_2024 = 1;
    season_once.count_all_time = 4000;
    season_once.observed_2024 = true;
    season_once.observed_all_time = true;

    let mut historic_once = rec("6-2", "6-3", None);
    historic_once.count_2024 = 0;
    historic_once.count_all_time = 1;
    historic_once.observed_all_time = true;

    let data = Dataset {
        scorelines: vec![season_once, historic_once],
        matches: Vec::new(),
        year_counts: Vec::new(),
        counts_2024: Vec::new(),
        counts_all_time: Vec::new(),
    };
    let controller = Controller::new(data, ThresholdSet::default());

    // A single 2024 occurrence is rare for the season no matter how common
    // the scoreline is historically.
    let mut renderer = CapturingRenderer::default();
    controller.render_step(Step::Rarest2024, &mut renderer);
    let (_, cells) = &renderer.frames[0];
    assert!(cells.contains(&(3, 0, ColorBucket::Season)));
    assert!(cells.contains(&(4, 0, ColorBucket::Blank)));

    let mut renderer = CapturingRenderer::default();
    controller.render_step(Step::RarestAllTime, &mut renderer);
    let (_, cells) = &renderer.frames[0];
    assert!(cells.contains(&(3, 0, ColorBucket::Blank)));
    assert!(cells.contains(&(4, 0, ColorBucket::Historic)));
}

#[test]
fn test_explorer_frame_default_filter() {
    let controller = Controller::new(dataset(), ThresholdSet::default());
    let frame = controller.explorer_frame(&ExplorerFilter::default());

    let observed = frame
        .cells
        .iter()
        .filter(|c| c.bucket.is_highlighted())
        .count();
    assert_eq!(observed, 2);
    assert_eq!(frame.cells.len(), 3);
}

#[test]
fn test_explorer_2024_grades_each_count_family_on_its_own_table() {
    let mut mid = rec("6-4", "6-2", None);
    mid.count_2024 = 150;
    mid.count_atp_2024 = 100;
    mid.count_wta_2024 = 50;
    mid.observed_2024 = true;

    let mut heavy = rec("6-3", "6-2", None);
    heavy.count_2024 = 181;
    heavy.count_atp_2024 = 121;
    heavy.count_wta_2024 = 60;
    heavy.observed_2024 = true;

    let data = Dataset {
        scorelines: vec![mid, heavy],
        matches: Vec::new(),
        year_counts: Vec::new(),
        counts_2024: Vec::new(),
        counts_all_time: Vec::new(),
    };
    let controller = Controller::new(data, ThresholdSet::default());

    let bucket_of = |frame: &scorigami::view::RenderFrame<'_>, scoreline: &str| {
        frame
            .cells
            .iter()
            .find(|c| c.scoreline == scoreline)
            .unwrap()
            .bucket
    };

    // All tours: combined counts grade on the combined 2024 table
    // (50/100/180), matching the combined-2024 narrative step.
    let all_tours = ExplorerFilter::parse(&[], &["2024".to_string()]).unwrap();
    let frame = controller.explorer_frame(&all_tours);
    assert_eq!(bucket_of(&frame, "6-4, 6-2"), ColorBucket::Common);
    assert_eq!(bucket_of(&frame, "6-3, 6-2"), ColorBucket::VeryCommon);

    // Single tour: the per-tour counter grades on that tour's table.
    let atp = ExplorerFilter::parse(&["atp".to_string()], &["2024".to_string()]).unwrap();
    let frame = controller.explorer_frame(&atp);
    assert_eq!(bucket_of(&frame, "6-4, 6-2"), ColorBucket::Common);
    assert_eq!(bucket_of(&frame, "6-3, 6-2"), ColorBucket::VeryCommon);

    let wta = ExplorerFilter::parse(&["wta".to_string()], &["2024".to_string()]).unwrap();
    let frame = controller.explorer_frame(&wta);
    assert_eq!(bucket_of(&frame, "6-4, 6-2"), ColorBucket::Common);
    assert_eq!(bucket_of(&frame, "6-3, 6-2"), ColorBucket::Common);
}

#[test]
fn test_score_details_lookup() {
    let controller = Controller::new(dataset(), ThresholdSet::default());

    let details = controller.score_details("6-0, 6-0").unwrap();
    assert_eq!(details.record.count_2024, 200);
    assert_eq!(details.examples.len(), 1);
    assert_eq!(details.examples[0].winner_name, "Iga Swiatek");

    assert!(controller.score_details("9-9, 9-9").is_none());
}

#[test]
fn test_statistics_on_synthetic_data() {
    let stats = Statistics::compute(&dataset());

    assert_eq!(stats.universe, 3);
    assert_eq!(stats.years, vec![2024, 2015]);
    assert_eq!(stats.observed_2024, 2);
    assert_eq!(stats.observed_all_time, 2);
    assert_eq!(stats.never_seen, 1);
    assert_eq!(stats.matches_2024, 0);
    assert!((stats.coverage_2024_pct - 66.666).abs() < 0.1);
    assert_eq!(stats.rarest_2024.as_deref(), Some("7-5, 0-6, 7-6"));
    assert_eq!(stats.rarest_all_time, None);
    let popular = stats.popular_2024.unwrap();
    assert_eq!(popular.scoreline, "6-0, 6-0");
    assert_eq!(popular.count, 200);
}
