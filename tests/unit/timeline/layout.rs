use super::*;

fn exp(id: &str, start: &str, end: &str) -> Experience {
    Experience {
        id: id.to_string(),
        title: id.to_uppercase(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        ..Experience::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
}

#[test]
fn parses_supported_date_shapes() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    assert_eq!(parse_date("2021"), d(2021, 1, 1));
    assert_eq!(parse_date("2021-03"), d(2021, 3, 1));
    assert_eq!(parse_date("2021-03-15"), d(2021, 3, 15));
    assert_eq!(parse_date(" Jan 2020 "), d(2020, 1, 1));
    assert_eq!(parse_date("Present"), None);
    assert_eq!(parse_date("soon"), None);
}

#[test]
fn ongoing_labels() {
    assert!(is_ongoing("Present"));
    assert!(is_ongoing(" present "));
    assert!(is_ongoing(""));
    assert!(!is_ongoing("2020"));
}

#[test]
fn overlapping_ranges_get_distinct_lanes() {
    let entries = vec![
        exp("a", "2020-01", "2021-12"),
        exp("b", "2021-06", "2022-06"),
        exp("c", "2022-01", "2022-12"),
    ];
    let out = layout(&entries, 360.0, today());

    assert_eq!(out.lanes, 2);
    let lane = |id: &str| out.bars.iter().find(|b| b.id == id).unwrap().lane;
    assert_eq!(lane("a"), 0);
    assert_eq!(lane("b"), 1);
    assert_eq!(lane("c"), 0);
}

#[test]
fn bars_are_proportional_to_month_span() {
    // 36 months on a 360px axis: 10px per month.
    let entries = vec![exp("a", "2020-01", "2020-12"), exp("b", "2021-01", "2022-12")];
    let out = layout(&entries, 360.0, today());

    assert_eq!(out.lanes, 1);
    assert_eq!(out.bars[0].x, 0.0);
    assert_eq!(out.bars[0].width, 120.0);
    assert_eq!(out.bars[1].x, 120.0);
    assert_eq!(out.bars[1].width, 240.0);

    let last = &out.bars[1];
    assert!((last.x + last.width - out.width).abs() < 1e-9);
}

#[test]
fn present_resolves_to_today() {
    let out = layout(&[exp("now", "2024-01", "Present")], 100.0, today());
    let bar = &out.bars[0];
    assert!(bar.ongoing);
    assert_eq!(bar.end, today());
    assert_eq!(bar.x, 0.0);
    assert_eq!(bar.width, 100.0);
}

#[test]
fn unparseable_start_is_skipped_and_bad_end_collapses() {
    let entries = vec![exp("bad", "someday", "2020"), exp("ok", "2020-05", "whenever")];
    let out = layout(&entries, 100.0, today());
    assert_eq!(out.bars.len(), 1);
    assert_eq!(out.bars[0].id, "ok");
    assert_eq!(out.bars[0].start, out.bars[0].end);
}

#[test]
fn empty_input_yields_empty_layout() {
    let out = layout(&[], 200.0, today());
    assert!(out.bars.is_empty());
    assert_eq!(out.lanes, 0);
    assert!(out.year_ticks().is_empty());
}

#[test]
fn unusable_axis_width_collapses_to_zero() {
    let entries = vec![exp("a", "2020-01", "2021-12"), exp("b", "2021-06", "Present")];
    for width in [f64::NAN, f64::INFINITY, -300.0] {
        let out = layout(&entries, width, today());
        assert_eq!(out.width, 0.0);
        assert_eq!(out.bars.len(), 2);
        for bar in &out.bars {
            assert_eq!(bar.x, 0.0);
            assert_eq!(bar.width, 0.0);
        }
        assert!(out.year_ticks().iter().all(|&(_, x)| x == 0.0));
    }
}

#[test]
fn year_ticks_mark_januaries() {
    let out = layout(&[exp("a", "2019-07", "2021-06")], 240.0, today());
    let ticks = out.year_ticks();
    assert_eq!(ticks, vec![(2020, 60.0), (2021, 180.0)]);
}
